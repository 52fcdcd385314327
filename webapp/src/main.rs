#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod collection;
use collection::{CollectionDetail, CollectionSearch, Collections};

mod hotkeys;
mod session;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[redirect("/", || Route::CollectionSearch {})]
        #[nest("/collections")]
            #[layout(Collections)]
                #[route("/")]
                CollectionSearch {},
                #[route("/:collection_uuid")]
                CollectionDetail { collection_uuid: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
