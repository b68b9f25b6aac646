use super::*;

const FALLBACK: &str = "image";

#[test]
fn filename_is_last_path_segment() {
    let image = ImageDescriptor::new("/uploads/results/swap_0042.jpg");
    assert_eq!(filename_for(&image, FALLBACK), "swap_0042.jpg");
}

#[test]
fn filename_of_bare_name_is_itself() {
    assert_eq!(filename_for(&ImageDescriptor::new("x1.jpg"), FALLBACK), "x1.jpg");
}

#[test]
fn label_wins_over_url() {
    let image = ImageDescriptor::new("/uploads/a.jpg").with_label("haldi-ceremony.jpg");
    assert_eq!(filename_for(&image, FALLBACK), "haldi-ceremony.jpg");
}

#[test]
fn blank_label_is_ignored() {
    let image = ImageDescriptor::new("/uploads/a.jpg").with_label("");
    assert_eq!(filename_for(&image, FALLBACK), "a.jpg");
}

#[test]
fn filename_uses_download_url_segment() {
    let image = ImageDescriptor::new("/thumbs/a_small.jpg").with_download_url("/full/a.png");
    assert_eq!(filename_for(&image, FALLBACK), "a.png");
}

#[test]
fn query_and_fragment_are_stripped() {
    let image = ImageDescriptor::new("https://cdn.example.com/r/out.webp?v=3#top");
    assert_eq!(filename_for(&image, FALLBACK), "out.webp");
}

#[test]
fn trailing_slash_uses_fallback() {
    assert_eq!(filename_for(&ImageDescriptor::new("/results/"), FALLBACK), "image");
    assert_eq!(filename_for(&ImageDescriptor::new(""), FALLBACK), "image");
}

#[test]
fn request_carries_href_and_name() {
    let image = ImageDescriptor::new("/t/a.jpg").with_download_url("/d/a-full.jpg");
    let request = DownloadRequest::for_image(&image, FALLBACK);
    assert_eq!(request, DownloadRequest { href: "/d/a-full.jpg".into(), filename: "a-full.jpg".into() });
}
