use dioxus::prelude::*;
use tracing::warn;

const RESIZE_LISTENER: &str = r#"
    if (window.__hintboxResize) {
        window.removeEventListener("resize", window.__hintboxResize);
    }

    window.__hintboxResize = () => dioxus.send(window.innerWidth);
    window.addEventListener("resize", window.__hintboxResize);
"#;

const REMOVE_RESIZE_LISTENER: &str = r#"
    if (window.__hintboxResize) {
        window.removeEventListener("resize", window.__hintboxResize);
        window.__hintboxResize = undefined;
    }
"#;

fn inner_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

// the window width in css pixels, kept current as the window is resized
pub fn use_viewport_width() -> Signal<f64> {
    let mut width = use_signal(inner_width);

    use_future(move || async move {
        let mut listener = document::eval(RESIZE_LISTENER);

        loop {
            match listener.recv::<f64>().await {
                Ok(w) => width.set(w),
                Err(err) => {
                    warn!({ error = ?err }, "resize listener stopped");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        document::eval(REMOVE_RESIZE_LISTENER);
    });

    width
}
