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
//! Shared HTTP DTOs for the Medley library API.
//!
//! These types mirror the wire contract of the remote library service so the
//! UI has a single source of truth for request/response encoding. The
//! service speaks camelCase JSON; every DTO pins that via serde attributes
//! rather than relying on call-site renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

/// Coarse media categories surfaced by the library service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still images (photos, artwork, screenshots).
    Image,
    /// Video clips.
    Video,
    /// Audio tracks.
    Audio,
    /// Anything the service cannot classify; also absorbs kinds introduced
    /// by newer service versions.
    #[serde(other)]
    Other,
}

impl MediaKind {
    /// Short lowercase label for badges and filters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Other => "other",
        }
    }
}

/// A single media record in the library.
///
/// Identity is `media_id` alone; all other fields are display payload and
/// may change between fetches of the same record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Opaque unique identifier assigned by the service.
    pub media_id: String,
    /// Display name for the item.
    pub name: String,
    /// Coarse media category.
    pub kind: MediaKind,
    /// Canonical URL for the full asset.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Preview image URL when the service has generated one.
    pub thumbnail_url: Option<String>,
    /// Stored size of the asset in bytes.
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Upload timestamp when the service records one.
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Request body for the library authorization check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthCheckRequest {
    /// Candidate library password.
    pub password: String,
}

/// Response for the library authorization check.
///
/// A rejected password is `authorized: false`, not an HTTP error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthCheckResponse {
    /// Whether the supplied password unlocks the library.
    pub authorized: bool,
}

/// Response carrying the upload size quota.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeLimitResponse {
    /// Maximum accepted upload size in bytes.
    pub limit: u64,
}

/// Partial update for a media item; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Replacement display name.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_serializes_camel_case() {
        let item = MediaItem {
            media_id: "m-1".to_string(),
            name: "sunset".to_string(),
            kind: MediaKind::Image,
            url: "https://cdn.example/m-1".to_string(),
            thumbnail_url: None,
            size_bytes: 4096,
            uploaded_at: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["mediaId"], "m-1");
        assert_eq!(json["sizeBytes"], 4096);
        assert_eq!(json["kind"], "image");
        assert!(json.get("thumbnailUrl").is_none());
        assert!(json.get("uploadedAt").is_none());
    }

    #[test]
    fn unknown_kind_falls_back_to_other() {
        let item: MediaItem = serde_json::from_str(
            r#"{"mediaId":"m-2","name":"clip","kind":"hologram","url":"u","sizeBytes":1}"#,
        )
        .unwrap();
        assert_eq!(item.kind, MediaKind::Other);
        assert_eq!(item.kind.label(), "other");
    }

    #[test]
    fn auth_check_is_plain_data() {
        let denied: AuthCheckResponse = serde_json::from_str(r#"{"authorized":false}"#).unwrap();
        assert!(!denied.authorized);
        let body = serde_json::to_string(&AuthCheckRequest {
            password: "hunter2".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"password":"hunter2"}"#);
    }

    #[test]
    fn media_update_omits_unset_fields() {
        let update = MediaUpdate { name: None };
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
        let renamed = MediaUpdate {
            name: Some("dawn".to_string()),
        };
        assert_eq!(serde_json::to_string(&renamed).unwrap(), r#"{"name":"dawn"}"#);
    }

    #[test]
    fn problem_details_reads_type_alias() {
        let problem: ProblemDetails = serde_json::from_str(
            r#"{"type":"about:blank","title":"Payload Too Large","status":413,"detail":"limit is 8 MiB"}"#,
        )
        .unwrap();
        assert_eq!(problem.kind, "about:blank");
        assert_eq!(problem.status, 413);
        assert_eq!(problem.detail.as_deref(), Some("limit is 8 MiB"));
    }
}
