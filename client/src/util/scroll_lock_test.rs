#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn lock_then_unlock_toggles_the_class() {
    lock("image-viewer-open");
    assert!(is_locked("image-viewer-open"));
    unlock("image-viewer-open");
    assert!(!is_locked("image-viewer-open"));
}

#[test]
fn lock_twice_needs_one_unlock() {
    lock("image-viewer-open");
    lock("image-viewer-open");
    unlock("image-viewer-open");
    assert!(!is_locked("image-viewer-open"));
}

#[test]
fn unlock_leaves_other_classes() {
    lock("host-modal-open");
    lock("image-viewer-open");
    unlock("image-viewer-open");
    assert!(is_locked("host-modal-open"));
    unlock("host-modal-open");
}

#[test]
fn unlock_without_lock_is_harmless() {
    unlock("image-viewer-open");
    assert!(!is_locked("image-viewer-open"));
}
