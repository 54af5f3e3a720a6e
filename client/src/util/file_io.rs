//! Browser file transfer: profile download, file upload, and blocking alerts.

use canvas::profile::profile_file_name;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub const JSON_MIME: &str = "application/json";
pub const SVG_MIME: &str = "image/svg+xml";

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Ask the user for a profile name and return the download file name.
///
/// Cancelling or leaving the prompt blank yields `profile_<now>.json`.
pub fn prompt_profile_file_name() -> String {
    let now = now_ms();
    let default_stem = format!("profile_{now}");
    let input = web_sys::window().and_then(|w| {
        match w.prompt_with_message_and_default("Enter filename for profile (without extension):", &default_stem) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("filename prompt unavailable: {err:?}");
                None
            }
        }
    });
    profile_file_name(input.as_deref(), now)
}

/// Offer `content` to the user as a file download.
///
/// # Errors
///
/// Returns the DOM exception when the blob, object URL, or anchor cannot be created.
pub fn download_text(file_name: &str, content: &str, mime: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?.dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    log::info!("downloaded {file_name} ({} bytes)", content.len());
    Ok(())
}

/// First file selected in a file input, if any.
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

/// Read a file as UTF-8 text.
///
/// # Errors
///
/// Returns a printable message when the browser fails to read the file.
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let value = JsFuture::from(file.text()).await.map_err(|err| format!("{err:?}"))?;
    value.as_string().ok_or_else(|| "file is not text".to_owned())
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("{message}");
        return;
    };
    if window.alert_with_message(message).is_err() {
        log::error!("{message}");
    }
}
