//! Browser download trigger.
//!
//! Fire-and-forget: a hidden `<a download>` is clicked and removed, and the
//! browser owns the transfer from there. Failures are logged, never raised.

use viewer::download::DownloadRequest;

/// Ask the browser to download `request.href` as `request.filename`.
pub fn trigger(request: &DownloadRequest) {
    #[cfg(feature = "hydrate")]
    {
        match click_anchor(request) {
            Ok(()) => log::debug!("viewer: download {} as {}", request.href, request.filename),
            Err(err) => log::warn!("viewer: download of {} failed: {err:?}", request.href),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
    }
}

#[cfg(feature = "hydrate")]
fn click_anchor(request: &DownloadRequest) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&request.href);
    anchor.set_download(&request.filename);
    anchor.set_attribute("style", "display:none")?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}
