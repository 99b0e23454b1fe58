// src/ui/browser.rs: clipboard, downloads, viewport

use gloo::console::{error, log};
use wasm_bindgen::JsCast;
use web_sys::{window, Blob, BlobPropertyBag, Url};
use yew::UseStateHandle;

use super::Status;

/// Below this width the sidebar starts closed and closes on navigation.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    let cb = w.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| "Failed to copy to clipboard".to_string())?;
    Ok(())
}

/// Copies `text` in the background and reports the outcome on `status`.
/// Empty text is a no-op.
pub fn spawn_copy(text: String, status: UseStateHandle<Status>) {
    if text.is_empty() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        match copy_to_clipboard(text).await {
            Ok(()) => status.set(Status::ok("Copied to clipboard!")),
            Err(e) => {
                error!(e.clone());
                status.set(Status::Error(e));
            }
        }
    });
}

pub fn download_text_file(filename: &str, content: &str, mime: &str) -> Result<(), String> {
    let bag = BlobPropertyBag::new();
    bag.set_type(mime);

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)
        .map_err(|_| "Could not create Blob".to_string())?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not create object URL".to_string())?;

    let window = window().ok_or("No window".to_string())?;
    let document = window.document().ok_or("No document".to_string())?;
    let a = document
        .create_element("a")
        .map_err(|_| "Could not create <a> element".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Could not cast to HtmlAnchorElement".to_string())?;

    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();

    let body = document.body().ok_or("No body".to_string())?;
    body.append_child(&a)
        .map_err(|_| "Could not append link".to_string())?;
    a.click();
    body.remove_child(&a).ok();

    Url::revoke_object_url(&url).ok();
    log!(format!("Downloaded file: {filename}"));
    Ok(())
}

/// Downloads and reports on `status`. Empty content is a no-op.
pub fn download_with_status(filename: &str, content: &str, mime: &str, status: &UseStateHandle<Status>) {
    if content.is_empty() {
        return;
    }
    match download_text_file(filename, content, mime) {
        Ok(()) => status.set(Status::ok("Output downloaded!")),
        Err(e) => {
            error!(format!("download of {filename} failed: {e}"));
            status.set(Status::Error(e));
        }
    }
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DESKTOP_MIN_WIDTH)
}

/// Fragment of the page URL without the leading `#`, if any.
pub fn location_hash() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let slug = hash.trim_start_matches('#');
    (!slug.is_empty()).then(|| slug.to_string())
}

pub fn set_location_hash(fragment: &str) {
    if let Some(w) = window() {
        if w.location().set_hash(fragment).is_err() {
            error!(format!("Failed to set location hash to {fragment}"));
        }
    }
}

/// Milliseconds since the epoch, for unique download names.
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
