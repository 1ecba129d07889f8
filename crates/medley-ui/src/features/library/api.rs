//! API helpers for media item actions.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared client for auth headers and error mapping.

use crate::features::library::actions::MediaAction;
use crate::features::library::state::MediaRow;
use crate::services::api::{ApiClient, ApiError};
use medley_api_models::MediaUpdate;

/// Perform a media action against the service.
///
/// Returns the refreshed row for edits and `None` for deletions.
pub(crate) async fn perform_action(
    client: &ApiClient,
    id: &str,
    action: MediaAction,
) -> Result<Option<MediaRow>, ApiError> {
    match action {
        MediaAction::Rename(name) => client
            .update_media(id, &MediaUpdate { name: Some(name) })
            .await
            .map(Some),
        MediaAction::Delete => client.delete_media(id).await.map(|()| None),
    }
}
