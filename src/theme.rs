//! Theme Controller
//!
//! Environment preference and the document-level theme marker.

use crate::config::{LIGHT_ROOT_CLASS, LIGHT_SCHEME_QUERY};
use crate::models::ThemeMode;

/// Theme requested by the environment; dark when it cannot be read
pub fn preferred_theme() -> ThemeMode {
    let prefers_light = web_sys::window()
        .and_then(|win| win.match_media(LIGHT_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_light {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Set or clear the light class on the document root
pub fn apply_to_document(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(LIGHT_ROOT_CLASS, mode == ThemeMode::Light)
    {
        log::warn!("[THEME] Could not update root class: {:?}", e);
    }
}
