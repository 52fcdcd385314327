use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    search_signal: Signal<String>,
    placeholder: &'static str,
    // set once the input mounts, so that a hotkey can focus it
    #[props(default)]
    input_handle: Option<Signal<Option<MountedEvent>>>,
    #[props(default)]
    status: String,
    #[props(default)]
    action_button: Option<Element>,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut search_signal = props.search_signal;
    let input_handle = props.input_handle;
    let placeholder = props.placeholder;
    let status = props.status.clone();

    rsx! {
        div { class: "search-bar",
            div { class: "search-input",
                input {
                    class: "form-input",
                    style: "width: 100%;",
                    r#type: "search",
                    placeholder: "{placeholder}",
                    value: "{search_signal()}",
                    // every keystroke re-queries
                    oninput: move |evt: FormEvent| search_signal.set(evt.value()),
                    onmounted: move |element: MountedEvent| {
                        if let Some(mut handle) = input_handle {
                            handle.set(Some(element));
                        }
                    },
                }
            }

            if let Some(action_button) = props.action_button {
                div { class: "search-actions", {action_button} }
            }

            if !status.is_empty() {
                span { class: "search-status", "{status}" }
            }
        }
    }
}
