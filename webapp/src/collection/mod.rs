use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, session::SessionGate};

pub mod card;
pub mod create;
pub mod grid;
pub mod orchestrator;
pub mod query;

mod detail;
pub use detail::CollectionDetail;

mod search;
pub use search::CollectionSearch;

#[component]
pub fn Collections() -> Element {
    rsx! {
        SessionGate {
            Outlet::<Route> {}
        }
    }
}
