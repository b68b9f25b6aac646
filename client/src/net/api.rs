//! REST helpers for loading gallery image lists.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed template or
//! result listing degrades the host grid without touching the viewer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use viewer::ImageDescriptor;

/// Listings arrive either as a bare array or wrapped in `{ "images": [...] }`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
#[serde(untagged)]
enum GalleryResponse {
    List(Vec<ImageDescriptor>),
    Wrapped { images: Vec<ImageDescriptor> },
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_gallery(raw: &str) -> Result<Vec<ImageDescriptor>, String> {
    let response: GalleryResponse = serde_json::from_str(raw).map_err(|e| format!("invalid gallery listing: {e}"))?;
    Ok(match response {
        GalleryResponse::List(images) | GalleryResponse::Wrapped { images } => images,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn gallery_request_failed_message(status: u16) -> String {
    format!("gallery request failed: {status}")
}

/// Fetch the image list served at `endpoint`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or a body
/// that is not an image listing.
pub async fn fetch_gallery(endpoint: &str) -> Result<Vec<ImageDescriptor>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(gallery_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        let images = parse_gallery(&body)?;
        log::debug!("gallery: {} images from {endpoint}", images.len());
        Ok(images)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err("not available on server".to_owned())
    }
}
