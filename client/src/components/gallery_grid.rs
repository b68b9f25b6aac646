//! Thumbnail grid that opens the shared viewer on click.

use leptos::prelude::*;

use crate::state::viewer::{ViewerHandle, alt_text};
use crate::util::gallery_group::{GalleryItem, collect_group};

/// Thumbnails for every item in `group`; clicking one opens the viewer on it
/// with the rest of the group as the gallery.
#[component]
pub fn GalleryGrid(items: Vec<GalleryItem>, #[prop(into)] group: String) -> impl IntoView {
    let handle = expect_context::<ViewerHandle>();
    let gallery = StoredValue::new(collect_group(&items, &group));

    let thumbs = gallery.with_value(|images| {
        images
            .iter()
            .map(|image| {
                let url = image.url.clone();
                let alt = alt_text(Some(image));
                let on_click = {
                    let url = url.clone();
                    move |_| {
                        if let Err(err) = handle.open(gallery.get_value(), url.clone()) {
                            log::warn!("viewer: could not open {url}: {err}");
                        }
                    }
                };
                view! {
                    <button class="gallery-grid__thumb" on:click=on_click>
                        <img src=url alt=alt loading="lazy" />
                    </button>
                }
            })
            .collect_view()
    });

    view! { <div class="gallery-grid" data-group=group>{thumbs}</div> }
}
