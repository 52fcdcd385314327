use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, common::local_time};
use api::collection::*;

#[derive(Clone, PartialEq, Props)]
pub struct CollectionDetailProps {
    // This is a String because we get it from the Router
    collection_uuid: String,
}

#[component]
pub fn CollectionDetail(props: CollectionDetailProps) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |error: ErrorContext| {
                rsx! {
                    if let Some(error_ui) = error.show() {
                        {error_ui}
                    } else {
                        div { "CollectionDetail encountered an error.  Check the logs or reach out the the administrators." }
                    }
                }
            },
            CollectionInner { collection_uuid: props.collection_uuid }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CollectionErrorProps {
    message: String,
}

#[component]
fn CollectionError(props: CollectionErrorProps) -> Element {
    rsx! {
        div { class: "container error-state",
            h1 { "Error Loading Collection" }
            p { "{props.message}" }
            Link { to: Route::CollectionSearch {}, class: "btn btn-primary", "Return to Collections" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CollectionInnerProps {
    collection_uuid: String,
}

#[component]
fn CollectionInner(props: CollectionInnerProps) -> Element {
    let collection_uuid = props.collection_uuid.parse::<CollectionUuid>().show(|_| {
        let message = "The collection_uuid could not be parsed".to_string();
        rsx! {
            CollectionError { message }
        }
    })?;

    // the router reuses this component when only the uuid changes
    let collection_uuid = use_memo(use_reactive(&collection_uuid, |collection_uuid| {
        collection_uuid
    }));

    let collection_future = use_resource(move || async move {
        let collection_uuid = collection_uuid();
        get_collection(&GetCollectionReq { collection_uuid })
            .await
            .map_err(|err| err.to_string())
    });

    let collection_data = match &*collection_future.read() {
        Some(Ok(resp)) => resp.clone(),
        Some(Err(error)) => {
            return rsx! {
                CollectionError { message: format!("There was an error fetching the collection: {error}") }
            };
        }
        None => {
            return rsx! {
                div { class: "loading-state",
                    div { class: "loader" }
                }
            };
        }
    };

    let collection = collection_data.collection;

    let created = local_time(collection.mtime);

    rsx! {
        div { class: "container",
            div { class: "breadcrumb",
                Link { to: Route::CollectionSearch {}, "Collections" }
                span { " / " }
                span { "{collection.name}" }
            }

            div { class: "collection-detail-header",
                h1 { "{collection.name}" }
                div { class: "collection-metadata",
                    span { "Owner: {collection.uid}" }
                    span { "Created: {created}" }
                }
            }
        }
    }
}
