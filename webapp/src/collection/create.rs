use dioxus::prelude::*;

use crate::{
    collection::orchestrator::{CreateOutcome, CreationMachine, Effect},
    components::modal::ModernModal,
};
use api::collection::{AddCollectionReq, add_collection};

// carry out an effect handed back by the orchestrator
//
// refresh is a counter that the list query subscribes to
pub fn perform(mut machine: Signal<CreationMachine>, mut refresh: Signal<u64>, effect: Effect) {
    match effect {
        Effect::RefreshList => *refresh.write() += 1,
        Effect::Submit { ticket, name } => {
            spawn(async move {
                let result = add_collection(&AddCollectionReq { name: name.clone() }).await;

                let outcome = CreateOutcome::from_result(&name, result);

                let effects = machine.write().resolve(ticket, outcome);

                for effect in effects {
                    perform(machine, refresh, effect);
                }
            });
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CreateCollectionModalProps {
    machine: Signal<CreationMachine>,
    refresh: Signal<u64>,
}

#[component]
pub fn CreateCollectionModal(props: CreateCollectionModalProps) -> Element {
    let mut machine = props.machine;
    let refresh = props.refresh;

    if !machine.read().modal_open() {
        return rsx! {};
    }

    let form = machine.read().form().clone();
    let submitting = machine.read().submitting();

    let mut confirm = move || {
        let effect = machine.write().confirm();

        if let Some(effect) = effect {
            perform(machine, refresh, effect);
        }
    };

    let footer = rsx! {
        div { class: "modal-buttons",
            if let Some(form_error) = &form.form_error {
                span { class: "form-error", "{form_error}" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| machine.write().cancel(),
                "Cancel"
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                form: "create-collection-form",
                disabled: submitting,
                if submitting {
                    "Creating..."
                } else {
                    "Create"
                }
            }
        }
    };

    rsx! {
        ModernModal {
            title: "Create Collection",
            on_close: move |_| machine.write().cancel(),
            footer,
            form {
                id: "create-collection-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    confirm();
                },
                div { class: "form-group",
                    label { class: "form-label", r#for: "collection-name", "Name" }
                    input {
                        class: if form.name_error.is_some() { "form-input invalid" } else { "form-input" },
                        id: "collection-name",
                        r#type: "text",
                        autocomplete: "off",
                        placeholder: "My new collection",
                        disabled: submitting,
                        value: "{form.name}",
                        onmounted: move |element: MountedEvent| async move {
                            // the modal only mounts when it opens
                            let _ = element.set_focus(true).await;
                        },
                        oninput: move |evt: FormEvent| machine.write().edit_name(evt.value()),
                    }
                    if let Some(name_error) = &form.name_error {
                        p { class: "form-error", "{name_error}" }
                    }
                }
            }
        }
    }
}
