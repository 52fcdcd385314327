use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            // clicking the overlay or pressing escape anywhere inside closes the modal
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    on_close.call(());
                }
            },
            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
