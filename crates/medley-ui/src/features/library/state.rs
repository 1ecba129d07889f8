//! Shared media models and pure state transformations for testing outside
//! wasm.
//!
//! List reconciliation is by `id` alone: the list keeps service order,
//! updates replace in place, and the selection always refers to a live
//! item (every mutator re-syncs it).

use crate::core::logic::format_size;
use medley_api_models::{MediaItem, MediaKind};

/// UI-friendly media snapshot used across list/state helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaRow {
    /// Stable media identifier.
    pub id: String,
    /// Display name for the item.
    pub name: String,
    /// Coarse media category.
    pub kind: MediaKind,
    /// Canonical asset URL.
    pub url: String,
    /// Preview URL; falls back to the asset itself when the service has
    /// not generated a thumbnail.
    pub thumbnail: String,
    /// Stored size in bytes.
    pub size_bytes: u64,
    /// Upload date label when the service recorded one.
    pub uploaded: Option<String>,
}

impl MediaRow {
    /// Human-friendly size in binary units.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_size(self.size_bytes)
    }
}

impl From<MediaItem> for MediaRow {
    fn from(value: MediaItem) -> Self {
        let thumbnail = value
            .thumbnail_url
            .unwrap_or_else(|| value.url.clone());
        Self {
            id: value.media_id,
            name: value.name,
            kind: value.kind,
            url: value.url,
            thumbnail,
            size_bytes: value.size_bytes,
            uploaded: value
                .uploaded_at
                .map(|ts| ts.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Current library slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LibraryState {
    /// Media rows in service order.
    pub items: Vec<MediaRow>,
    /// Currently selected media id; always resolves to a row in `items`.
    pub selected_id: Option<String>,
    /// Upload quota in bytes as reported by the service.
    pub size_limit: u64,
}

/// Replace the list with a fresh snapshot, then re-sync the selection.
pub fn set_items(state: &mut LibraryState, items: Vec<MediaRow>) {
    state.items = items;
    sync_selection(state);
}

/// Replace an item in place by id, preserving position; append when new.
pub fn update_item(state: &mut LibraryState, item: MediaRow) {
    if let Some(existing) = state.items.iter_mut().find(|other| other.id == item.id) {
        *existing = item;
    } else {
        state.items.push(item);
    }
}

/// Remove an item by id, clearing the selection when it pointed at the
/// removed item. Absent ids are a no-op.
pub fn remove_item(state: &mut LibraryState, id: &str) {
    state.items.retain(|item| item.id != id);
    sync_selection(state);
}

/// Select a media id, or clear with `None`. Ids not in the list clear.
pub fn set_selected(state: &mut LibraryState, id: Option<String>) {
    state.selected_id = id;
    sync_selection(state);
}

/// Drop the selection when its id no longer resolves to a live item.
pub fn sync_selection(state: &mut LibraryState) {
    let dead = state
        .selected_id
        .as_ref()
        .is_some_and(|id| !state.items.iter().any(|item| &item.id == id));
    if dead {
        state.selected_id = None;
    }
}

/// Record the upload quota reported by the service.
pub const fn set_size_limit(state: &mut LibraryState, limit: u64) {
    state.size_limit = limit;
}

/// Read the rows in list order.
#[must_use]
pub fn select_items(state: &LibraryState) -> Vec<MediaRow> {
    state.items.clone()
}

/// Read the currently selected row, when any.
#[must_use]
pub fn select_selected(state: &LibraryState) -> Option<MediaRow> {
    let id = state.selected_id.as_deref()?;
    state.items.iter().find(|item| item.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn base_row(id: &str) -> MediaRow {
        MediaRow {
            id: id.to_string(),
            name: "alpha".into(),
            kind: MediaKind::Image,
            url: format!("https://cdn.example/{id}"),
            thumbnail: format!("https://cdn.example/{id}/thumb"),
            size_bytes: 2048,
            uploaded: None,
        }
    }

    fn state_with(ids: &[&str]) -> LibraryState {
        LibraryState {
            items: ids.iter().map(|id| base_row(id)).collect(),
            selected_id: None,
            size_limit: 0,
        }
    }

    #[test]
    fn updating_existing_id_replaces_in_place() {
        let mut state = state_with(&["1", "2", "3"]);
        let mut replacement = base_row("2");
        replacement.name = "beta".into();
        update_item(&mut state, replacement);

        let ids: Vec<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(state.items[1].name, "beta");
        assert_eq!(state.items[0].name, "alpha");
        assert_eq!(state.items[2].name, "alpha");
    }

    #[test]
    fn updating_new_id_appends() {
        let mut state = state_with(&["1"]);
        update_item(&mut state, base_row("2"));
        let ids: Vec<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn removing_selected_item_clears_selection() {
        let mut state = state_with(&["1"]);
        set_selected(&mut state, Some("1".to_string()));
        remove_item(&mut state, "1");
        assert!(state.items.is_empty());
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn removing_other_item_keeps_selection() {
        let mut state = state_with(&["1", "2"]);
        set_selected(&mut state, Some("2".to_string()));
        remove_item(&mut state, "1");
        assert_eq!(state.selected_id.as_deref(), Some("2"));
    }

    #[test]
    fn removing_absent_id_is_a_noop() {
        let mut state = state_with(&["1", "2"]);
        set_selected(&mut state, Some("1".to_string()));
        remove_item(&mut state, "9");
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.selected_id.as_deref(), Some("1"));
    }

    #[test]
    fn selection_must_reference_a_live_item() {
        let mut state = state_with(&["1"]);
        set_selected(&mut state, Some("9".to_string()));
        assert!(state.selected_id.is_none());

        set_selected(&mut state, Some("1".to_string()));
        set_items(&mut state, vec![base_row("2")]);
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn selected_row_resolves_by_id() {
        let mut state = state_with(&["1", "2"]);
        set_selected(&mut state, Some("2".to_string()));
        assert_eq!(
            select_selected(&state).map(|item| item.id),
            Some("2".to_string())
        );
        assert_eq!(select_items(&state).len(), 2);
    }

    #[test]
    fn conversion_fills_thumbnail_and_date() {
        let item = MediaItem {
            media_id: "m-1".to_string(),
            name: "sunset".to_string(),
            kind: MediaKind::Image,
            url: "https://cdn.example/m-1".to_string(),
            thumbnail_url: None,
            size_bytes: 3 * 1024 * 1024,
            uploaded_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        };
        let row = MediaRow::from(item);
        assert_eq!(row.thumbnail, "https://cdn.example/m-1");
        assert_eq!(row.uploaded.as_deref(), Some("2024-06-01"));
        assert_eq!(row.size_label(), "3.0 MiB");
    }
}
