//! Client-side file download of generated PDFs.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use canvas::grid::Layer;

pub const PDF_MIME: &str = "application/pdf";

/// File name for a current-layer (`Some`) or all-layers (`None`) export.
pub fn export_file_name(layer: Option<Layer>) -> String {
    match layer {
        Some(layer) => format!("blueprint-layer-{layer}.pdf"),
        None => "blueprint-all-layers.pdf".to_owned(),
    }
}

/// Hand `bytes` to the browser as a file download.
///
/// # Errors
///
/// Returns the DOM error when the blob, object URL, or anchor cannot be created.
#[cfg(feature = "csr")]
pub fn download_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?.dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

/// Navigate the page to a URL (the server PDF export streams a download).
///
/// # Errors
///
/// Returns the DOM error when navigation is refused.
#[cfg(feature = "csr")]
pub fn navigate(url: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    window.location().set_href(url)
}
