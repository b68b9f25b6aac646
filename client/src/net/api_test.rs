use super::*;

#[test]
fn gallery_request_failed_message_formats_status() {
    assert_eq!(gallery_request_failed_message(404), "gallery request failed: 404");
}

#[test]
fn parse_gallery_accepts_bare_array() {
    let images = parse_gallery(r#"[{"url":"/r/1.jpg"},{"url":"/r/2.jpg","label":"Two"}]"#).unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[1].label.as_deref(), Some("Two"));
}

#[test]
fn parse_gallery_accepts_wrapped_listing() {
    let images = parse_gallery(r#"{"images":[{"url":"/t/1.jpg","downloadUrl":"/t/1-full.jpg"}]}"#).unwrap();
    assert_eq!(images[0].href(), "/t/1-full.jpg");
}

#[test]
fn parse_gallery_rejects_other_shapes() {
    let err = parse_gallery(r#"{"results":[]}"#).unwrap_err();
    assert!(err.starts_with("invalid gallery listing"));
}

#[test]
fn fetch_gallery_is_unavailable_off_the_browser() {
    let result = block_on(fetch_gallery("/api/results"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Minimal executor: the non-hydrate future never awaits.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("fetch_gallery stub should be ready immediately"),
    }
}
