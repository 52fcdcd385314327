use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, warn};

// page-level keyboard shortcuts
//
// the listener is attached to the document rather than to an element, so the
// shortcuts work no matter what has focus, and the browser tells us whether
// the key went to something editable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    OpenCreateCollection,
    FocusSearch,
}

pub const HOTKEYS: &[(&str, HotkeyAction)] = &[
    ("o", HotkeyAction::OpenCreateCollection),
    ("/", HotkeyAction::FocusSearch),
];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct KeyPress {
    pub key: String,
    // focus is in an input, textarea, or contenteditable
    pub editing: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub repeat: bool,
}

pub fn dispatch(press: &KeyPress, modal_open: bool) -> Option<HotkeyAction> {
    if press.editing || press.ctrl || press.meta || press.alt || press.repeat {
        return None;
    }

    let action = HOTKEYS
        .iter()
        .find(|(key, _)| *key == press.key)
        .map(|(_, action)| *action)?;

    // the search box is behind the modal
    if modal_open && action == HotkeyAction::FocusSearch {
        return None;
    }

    Some(action)
}

// mirrors dispatch() so that the browser only loses default handling for keys
// that we actually use
const LISTENER: &str = r#"
    if (window.__hintboxHotkeys) {
        document.removeEventListener("keydown", window.__hintboxHotkeys);
    }

    window.__hintboxHotkeys = (event) => {
        const target = event.target;
        const editing = !!target && (
            target.isContentEditable ||
            ["INPUT", "TEXTAREA", "SELECT"].includes(target.tagName)
        );

        const press = {
            key: event.key,
            editing: editing,
            ctrl: event.ctrlKey,
            meta: event.metaKey,
            alt: event.altKey,
            repeat: event.repeat,
        };

        if (editing || press.ctrl || press.meta || press.alt || press.repeat) {
            return;
        }

        if (press.key === "o" || press.key === "/") {
            event.preventDefault();
            dioxus.send(press);
        }
    };

    document.addEventListener("keydown", window.__hintboxHotkeys);
"#;

const REMOVE_LISTENER: &str = r#"
    if (window.__hintboxHotkeys) {
        document.removeEventListener("keydown", window.__hintboxHotkeys);
        window.__hintboxHotkeys = undefined;
    }
"#;

pub fn use_hotkeys(
    modal_open: impl FnMut(()) -> bool + 'static,
    handler: impl FnMut(HotkeyAction) + 'static,
) {
    let modal_open = use_callback(modal_open);
    let handler = use_callback(handler);

    use_future(move || async move {
        let mut listener = document::eval(LISTENER);

        loop {
            let press = match listener.recv::<KeyPress>().await {
                Ok(press) => press,
                Err(err) => {
                    warn!({ error = ?err }, "hotkey listener stopped");
                    break;
                }
            };

            if let Some(action) = dispatch(&press, modal_open.call(())) {
                debug!({ key = %press.key, action = ?action }, "hotkey");
                handler.call(action);
            }
        }
    });

    use_drop(|| {
        document::eval(REMOVE_LISTENER);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_closed(press: &KeyPress) -> Option<HotkeyAction> {
        dispatch(press, false)
    }

    fn press(key: &str) -> KeyPress {
        KeyPress {
            key: key.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn maps_the_two_shortcuts() {
        assert_eq!(
            dispatch_closed(&press("o")),
            Some(HotkeyAction::OpenCreateCollection)
        );
        assert_eq!(dispatch_closed(&press("/")), Some(HotkeyAction::FocusSearch));
        assert_eq!(dispatch_closed(&press("p")), None);

        // literal keys only
        assert_eq!(dispatch_closed(&press("O")), None);
    }

    #[test]
    fn ignored_while_editing() {
        let mut p = press("o");
        p.editing = true;
        assert_eq!(dispatch_closed(&p), None);

        let mut p = press("/");
        p.editing = true;
        assert_eq!(dispatch_closed(&p), None);
    }

    #[test]
    fn ignored_with_modifiers_or_repeat() {
        let modifiers: [fn(&mut KeyPress); 4] = [
            |p| p.ctrl = true,
            |p| p.meta = true,
            |p| p.alt = true,
            |p| p.repeat = true,
        ];

        for modify in modifiers {
            let mut p = press("o");
            modify(&mut p);
            assert_eq!(dispatch_closed(&p), None);
        }
    }

    #[test]
    fn search_focus_is_ignored_while_the_modal_is_open() {
        assert_eq!(dispatch(&press("/"), true), None);

        // a second open keeps the typed name
        assert_eq!(
            dispatch(&press("o"), true),
            Some(HotkeyAction::OpenCreateCollection)
        );
    }

    #[test]
    fn listener_handles_every_hotkey() {
        for (key, _) in HOTKEYS {
            assert!(LISTENER.contains(&format!("press.key === \"{key}\"")));
        }
    }
}
