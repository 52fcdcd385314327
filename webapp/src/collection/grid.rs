use dioxus::prelude::*;

use crate::{Route, collection::card::CollectionCard, common::viewport::use_viewport_width};
use api::collection::Collection;

pub const EMPTY_MESSAGE: &str = "You don't have any collections yet.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub wide_columns: usize,
    pub narrow_columns: usize,
    // viewports at least this wide get the wide layout
    pub breakpoint_px: f64,
    pub gap: &'static str,
}

impl Default for GridStyle {
    fn default() -> Self {
        GridStyle {
            wide_columns: 3,
            narrow_columns: 1,
            breakpoint_px: 900.0,
            gap: "var(--space-4)",
        }
    }
}

impl GridStyle {
    pub fn columns(&self, viewport_width: f64) -> usize {
        if viewport_width >= self.breakpoint_px {
            self.wide_columns
        } else {
            self.narrow_columns
        }
    }

    pub fn css(&self, viewport_width: f64) -> String {
        format!(
            "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {}; margin-top: var(--space-4);",
            self.columns(viewport_width),
            self.gap
        )
    }
}

#[derive(Clone, PartialEq)]
pub struct GridEntry {
    pub collection: Collection,
    pub route: Route,
}

#[derive(Clone, PartialEq)]
pub enum GridView {
    Empty(&'static str),
    Grid {
        columns: usize,
        entries: Vec<GridEntry>,
    },
}

pub fn grid_view(collections: &[Collection], style: &GridStyle, viewport_width: f64) -> GridView {
    if collections.is_empty() {
        return GridView::Empty(EMPTY_MESSAGE);
    }

    let entries = collections
        .iter()
        .map(|collection| GridEntry {
            collection: collection.clone(),
            route: Route::CollectionDetail {
                collection_uuid: collection.collection_uuid.to_string(),
            },
        })
        .collect();

    GridView::Grid {
        columns: style.columns(viewport_width),
        entries,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CollectionGridProps {
    collections: Vec<Collection>,
    #[props(default)]
    style: GridStyle,
}

#[component]
pub fn CollectionGrid(props: CollectionGridProps) -> Element {
    let viewport_width = use_viewport_width();
    let width = viewport_width();

    match grid_view(&props.collections, &props.style, width) {
        GridView::Empty(message) => rsx! {
            div { class: "empty-state",
                p { "{message}" }
            }
        },
        GridView::Grid { entries, .. } => {
            let css = props.style.css(width);

            rsx! {
                div { class: "collections-grid", style: "{css}",
                    for entry in entries {
                        CollectionCard {
                            key: "{entry.collection.collection_uuid}",
                            collection: entry.collection,
                            route: entry.route,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_columns_at_the_breakpoint() {
        let style = GridStyle::default();

        assert_eq!(style.columns(1280.0), 3);
        assert_eq!(style.columns(900.0), 3);
        assert_eq!(style.columns(899.5), 1);
        assert_eq!(style.columns(320.0), 1);

        // the initial width is 0 if the window could not be read
        assert_eq!(style.columns(0.0), 1);
    }

    #[test]
    fn css_uses_the_column_count() {
        let style = GridStyle {
            gap: "8px",
            ..Default::default()
        };

        let css = style.css(1024.0);
        assert!(css.contains("repeat(3, minmax(0, 1fr))"));
        assert!(css.contains("gap: 8px"));

        assert!(style.css(600.0).contains("repeat(1, minmax(0, 1fr))"));
    }

    fn collection(collection_uuid: i64, name: &str) -> Collection {
        Collection {
            collection_uuid,
            uid: String::from("alice"),
            name: name.to_owned(),
            mtime: 0,
        }
    }

    #[test]
    fn no_collections_shows_the_empty_message() {
        let view = grid_view(&[], &GridStyle::default(), 1280.0);

        assert!(matches!(
            view,
            GridView::Empty("You don't have any collections yet.")
        ));
    }

    #[test]
    fn every_collection_links_to_its_detail_page() {
        let collections = vec![collection(1, "Work"), collection(2, "Personal")];

        for (width, expected_columns) in [(1280.0, 3), (600.0, 1)] {
            let GridView::Grid { columns, entries } =
                grid_view(&collections, &GridStyle::default(), width)
            else {
                panic!("expected a grid for two collections");
            };

            assert_eq!(columns, expected_columns);

            let shown = entries
                .iter()
                .map(|entry| (entry.collection.name.as_str(), entry.route.to_string()))
                .collect::<Vec<_>>();

            assert_eq!(
                shown,
                vec![
                    ("Work", String::from("/collections/1")),
                    ("Personal", String::from("/collections/2")),
                ]
            );
        }
    }
}
