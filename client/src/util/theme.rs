//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.dark-mode` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates the class.

const STORAGE_KEY: &str = "zenith_dark";

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
#[must_use]
pub fn read_preference() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    // Stored preference wins over the system one.
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
            return val == "true";
        }
    }

    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = el.class_list();
    let result = if enabled {
        class_list.add_1("dark-mode")
    } else {
        class_list.remove_1("dark-mode")
    };
    if let Err(err) = result {
        log::debug!("failed to update dark-mode class: {err:?}");
    }
}

/// Flip the preference, persist it, and apply it. Returns the new value.
pub fn toggle() -> bool {
    let enabled = !read_preference();
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" }) {
                log::debug!("failed to persist dark-mode preference: {err:?}");
            }
        }
    }
    apply(enabled);
    enabled
}
