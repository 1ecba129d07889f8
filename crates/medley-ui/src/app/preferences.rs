//! Environment helpers for the app shell.

use crate::core::logic::danger_from_query;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// Storage key overriding the API base URL for local development.
pub(crate) const API_BASE_KEY: &str = "medley.api_base";

/// Base URL for the library API: storage override, else the page origin.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_KEY)
        && !value.trim().is_empty()
    {
        return value;
    }
    window().location().origin().unwrap_or_default()
}

/// Whether the page URL opted into dangerous controls.
pub(crate) fn danger_enabled() -> bool {
    let query = window().location().search().unwrap_or_default();
    danger_from_query(&query)
}
