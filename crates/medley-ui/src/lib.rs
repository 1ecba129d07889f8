#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Medley web UI: a single-page Yew front-end for a remote media library.
//!
//! Browse the library, unlock upload/edit with the library password, upload
//! new media, rename or delete items. Pure state logic lives in [`core`] and
//! [`features`] so it runs under plain `cargo test`; DOM and network glue is
//! compiled for wasm32 only.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::auth::AuthState;
    use crate::core::store::AppStore;
    use crate::features::library::state::{MediaRow, remove_item, set_selected, update_item};
    use medley_api_models::MediaKind;

    fn row(id: &str) -> MediaRow {
        MediaRow {
            id: id.to_string(),
            name: "clip".into(),
            kind: MediaKind::Video,
            url: format!("https://cdn.example/{id}"),
            thumbnail: format!("https://cdn.example/{id}/thumb"),
            size_bytes: 1024,
            uploaded: None,
        }
    }

    #[test]
    fn fresh_store_is_anonymous_and_empty() {
        let store = AppStore::default();
        assert!(!store.auth.authorized());
        assert!(store.library.items.is_empty());
        assert!(store.library.selected_id.is_none());
        assert_eq!(store.library.size_limit, 0);
    }

    #[test]
    fn upload_select_delete_round_trips_through_the_store() {
        let mut store = AppStore::default();
        store.auth.state = AuthState::Password("secret".to_string());
        assert!(store.auth.authorized());

        update_item(&mut store.library, row("m-1"));
        set_selected(&mut store.library, Some("m-1".to_string()));
        assert_eq!(store.library.selected_id.as_deref(), Some("m-1"));

        remove_item(&mut store.library, "m-1");
        assert!(store.library.items.is_empty());
        assert!(store.library.selected_id.is_none());
    }
}
