use dioxus::prelude::*;
use tracing::debug;

use crate::{
    collection::{
        create::CreateCollectionModal,
        grid::CollectionGrid,
        orchestrator::{CreationConfig, CreationMachine},
        query::{ListQuery, ListState, ListView},
    },
    components::search::SearchBar,
    hotkeys::{HotkeyAction, use_hotkeys},
};
use api::collection::*;

#[component]
pub fn CollectionSearch() -> Element {
    // the filter lives only as long as the page; it is not persisted
    let filter_signal = use_signal(String::new);

    // bumped whenever the list must be re-queried with the same filter
    let refresh_signal = use_signal(|| 0u64);

    let mut query_signal = use_signal(ListQuery::<Vec<Collection>>::default);

    let mut machine_signal = use_signal(|| CreationMachine::new(CreationConfig::default()));

    let search_input = use_signal(|| None::<MountedEvent>);

    use_effect(move || {
        let filter = filter_signal();
        let generation = refresh_signal();

        let ticket = query_signal.write().issue();

        debug!({ ticket = ticket, generation = generation }, "searching collections");

        spawn(async move {
            let result = search_collections(&SearchCollectionsReq { filter })
                .await
                .map(|resp| resp.collections)
                .map_err(|err| err.to_string());

            query_signal.write().resolve(ticket, result);
        });
    });

    use_hotkeys(
        move |()| machine_signal.peek().modal_open(),
        move |action| match action {
            HotkeyAction::OpenCreateCollection => machine_signal.write().open(),
            HotkeyAction::FocusSearch => {
                if let Some(input) = search_input.peek().clone() {
                    spawn(async move {
                        let _ = input.set_focus(true).await;
                    });
                }
            }
        },
    );

    let action_button = rsx! {
        button {
            class: "btn btn-primary",
            title: "Create Collection ('O')",
            onclick: move |_| machine_signal.write().open(),
            "Create Collection"
        }
    };

    let (status, view) = {
        let query = query_signal.read();

        let status = match query.state() {
            ListState::Loading => String::from("Loading..."),
            ListState::Refreshing(_) => String::from("Searching..."),
            ListState::Ready(collections) => format!("Found {} collections", collections.len()),
            ListState::Failed(_) => String::from("Error searching collections"),
        };

        (status, query.view().cloned())
    };

    rsx! {
        div { class: "container with-sticky",
            CreateCollectionModal { machine: machine_signal, refresh: refresh_signal }

            div { class: "sticky-header",
                div { class: "page-header",
                    h1 { "My Collections" }
                }

                SearchBar {
                    search_signal: filter_signal,
                    placeholder: "Search collections by name ('/')",
                    input_handle: search_input,
                    status,
                    action_button,
                }
            }

            div { class: "scrollable-content",
                match view {
                    ListView::Data(collections) => rsx! {
                        CollectionGrid { collections }
                    },
                    ListView::Error(error) => rsx! {
                        div { class: "error-state", "Error: {error}" }
                    },
                    ListView::Loading => rsx! {
                        div { class: "loading-state",
                            div { class: "loader" }
                        }
                    },
                }
            }
        }
    }
}
