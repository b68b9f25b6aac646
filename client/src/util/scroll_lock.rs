//! Body scroll lock while the viewer overlay is showing.
//!
//! The lock is a class on `<body>` (styled `overflow: hidden`), so the host
//! page's own body classes are left alone. SSR and test builds track the
//! classes in a per-thread list instead of touching a document.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

#[cfg(not(feature = "hydrate"))]
use std::cell::RefCell;

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static BODY_CLASSES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Add `class` to `<body>`.
pub fn lock(class: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = body() else {
            return;
        };
        if let Err(err) = body.class_list().add_1(class) {
            log::warn!("viewer: failed to lock scroll: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    BODY_CLASSES.with_borrow_mut(|classes| {
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    });
}

/// Remove `class` from `<body>`.
pub fn unlock(class: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = body() else {
            return;
        };
        if let Err(err) = body.class_list().remove_1(class) {
            log::warn!("viewer: failed to unlock scroll: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    BODY_CLASSES.with_borrow_mut(|classes| classes.retain(|c| c != class));
}

/// Whether `<body>` currently carries `class`.
pub fn is_locked(class: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        body().is_some_and(|b| b.class_list().contains(class))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        BODY_CLASSES.with_borrow(|classes| classes.iter().any(|c| c == class))
    }
}

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
}
