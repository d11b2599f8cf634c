//! Widget Configuration
//!
//! Storage keys, interaction timings and logging level.

use log::LevelFilter;

/// Local storage key for the serialized item list
pub const TODOS_KEY: &str = "todos";
/// Local storage key for the active filter
pub const FILTER_KEY: &str = "filter";
/// Local storage key for the active theme
pub const THEME_KEY: &str = "theme";

/// How long the input stays flagged after an empty submit
pub const INVALID_FLASH_MS: u32 = 320;
/// Exit animation length before a deleted row is dropped from the view
pub const DELETE_SETTLE_MS: u32 = 320;
/// Micro-transition length after a toggle
pub const TOGGLE_SETTLE_MS: u32 = 80;

/// Media query for the environment theme hint
pub const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";
/// Class set on the document root while the light theme is active
pub const LIGHT_ROOT_CLASS: &str = "light";

/// Maximum card tilt in degrees
pub const MAX_TILT_DEG: f64 = leptos_tilt::DEFAULT_MAX_TILT_DEG;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
