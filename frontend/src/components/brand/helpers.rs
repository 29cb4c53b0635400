//! Utility functions for the brand page.
//!
//! - **User Feedback**: temporary toast notifications for save and delete
//!   results. List failures never reach the user; they are only logged.
//! - **Input Extraction**: reading values and files out of DOM events.

use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlElement, HtmlInputElement, InputEvent};
use yew::TargetCast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

impl Notice {
    fn background(self) -> &'static str {
        match self {
            Notice::Success => "rgba(56, 142, 60, 0.9)",
            Notice::Error => "rgba(211, 47, 47, 0.9)",
        }
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// A styled `div` is appended to `body` and removes itself after three
/// seconds. The message is set as text, never as HTML.
pub fn show_toast(message: &str, notice: Notice) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", notice.background()).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("font-family", "Arial, sans-serif").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// First file of an `<input type="file">` change, if the user picked one.
pub fn selected_file(e: Event) -> Option<File> {
    e.target_dyn_into::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
