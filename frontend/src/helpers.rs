//! Browser glue shared by the components.
//!
//! - **User Feedback**: temporary toast notifications for every outcome the user
//!   should hear about (extraction results, rejected files, download attempts).
//! - **Files**: reading the declared name/type of a `web_sys::File` and
//!   creating/releasing the object URLs used for custom backgrounds.
//! - **Downloads**: handing exported bytes to the browser as a file.

use common::extract::FileMeta;
use common::notification::{Notification, Variant};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` that removes itself after a
/// few seconds. Destructive notifications are shown in red.
pub fn show_toast(note: &Notification) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_inner_text(&format!("{}: {}", note.title, note.description));
    let background = match note.variant {
        Variant::Info => "rgba(15, 23, 42, 0.9)",
        Variant::Destructive => "rgba(185, 28, 28, 0.95)",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "90vw").ok();
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

/// Name and declared MIME type of a browser file.
pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.type_())
}

/// Creates a session-scoped URL for `file`. Release it with [`revoke_object_url`].
pub fn create_object_url(file: &web_sys::File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    if Url::revoke_object_url(url).is_err() {
        gloo_console::error!("could not release", url.to_string());
    }
}

/// Offers `bytes` to the user as a file download.
pub fn offer_download(bytes: &[u8], file_name: &str, mime: &str) {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let Ok(blob) = Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        gloo_console::error!("could not build download blob");
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };

    let anchor = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("a").ok())
        .and_then(|e| e.dyn_into::<HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
    }
    revoke_object_url(&url);
}
