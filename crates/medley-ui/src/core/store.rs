//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Mutations funnel through the pure helpers in
//!   [`crate::features::library::state`] so the selection invariant holds
//!   at every call site.

use crate::core::auth::AuthState;
use crate::features::library::state::LibraryState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authorization state for gated features.
    pub auth: AuthSlice,
    /// Library list, selection, and quota state.
    pub library: LibraryState,
}

/// Shared authorization state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSlice {
    /// Current session authorization.
    pub state: AuthState,
}

impl AuthSlice {
    /// Whether gated features (upload, edit) should be enabled.
    #[must_use]
    pub fn authorized(&self) -> bool {
        self.state.has_credentials()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppStore, AuthSlice};
    use crate::core::auth::AuthState;

    #[test]
    fn default_slice_is_not_authorized() {
        assert!(!AuthSlice::default().authorized());
    }

    #[test]
    fn accepted_password_authorizes_the_session() {
        let mut store = AppStore::default();
        store.auth.state = AuthState::Password("hunter2".to_string());
        assert!(store.auth.authorized());
    }
}
