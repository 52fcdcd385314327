use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, common::local_time};
use api::collection::Collection;

#[derive(Clone, PartialEq, Props)]
pub struct CollectionCardProps {
    collection: Collection,
    route: Route,
}

#[component]
pub fn CollectionCard(props: CollectionCardProps) -> Element {
    let collection = props.collection;
    let created = local_time(collection.mtime);

    rsx! {
        Link {
            class: "collection-card",
            to: props.route,
            div { class: "collection-thumbnail", "📁" }
            div { class: "collection-info",
                h3 { class: "collection-title", "{collection.name}" }
                span { class: "collection-metadata", "Created {created}" }
            }
        }
    }
}
