//! Pure UI helpers extracted from components for non-wasm testing.

/// Possible upload validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadInputError {
    /// No file was picked.
    Missing,
    /// The picked file exceeds the service quota.
    TooLarge {
        /// Quota in bytes the file would exceed.
        limit: u64,
    },
}

impl UploadInputError {
    /// Human-readable message for inline display.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Missing => "choose a file first".to_string(),
            Self::TooLarge { limit } => {
                format!("file exceeds the {} upload limit", format_size(*limit))
            }
        }
    }
}

/// Build the library items path from an optional search query.
#[must_use]
pub fn build_items_path(search: &Option<String>) -> String {
    search
        .as_ref()
        .filter(|query| !query.trim().is_empty())
        .map_or_else(
            || "/v1/library/items".to_string(),
            |query| {
                format!(
                    "/v1/library/items?search={}",
                    urlencoding::encode(query.trim())
                )
            },
        )
}

/// Whether the page query string enables dangerous controls.
///
/// Matches key presence regardless of value, like `URLSearchParams::has`.
#[must_use]
pub fn danger_from_query(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .any(|pair| pair.split('=').next() == Some("danger"))
}

/// Validate a pending upload against the service quota.
///
/// A zero `limit` means the service did not report a quota; only presence
/// is checked in that case.
///
/// # Errors
/// Returns [`UploadInputError::Missing`] when no file was picked, or
/// [`UploadInputError::TooLarge`] when the file exceeds a non-zero quota.
pub fn validate_upload(size_bytes: Option<u64>, limit: u64) -> Result<(), UploadInputError> {
    let size = size_bytes.ok_or(UploadInputError::Missing)?;
    if limit > 0 && size > limit {
        return Err(UploadInputError::TooLarge { limit });
    }
    Ok(())
}

/// Human-friendly size formatter using binary units.
#[must_use]
pub fn format_size(value: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * 1024 * 1024;
    if value >= GIB {
        let whole = value / GIB;
        let tenths = (value % GIB) * 10 / GIB;
        format!("{whole}.{tenths} GiB")
    } else if value >= MIB {
        let whole = value / MIB;
        let tenths = (value % MIB) * 10 / MIB;
        format!("{whole}.{tenths} MiB")
    } else if value >= KIB {
        let whole = value / KIB;
        let tenths = (value % KIB) * 10 / KIB;
        format!("{whole}.{tenths} KiB")
    } else {
        format!("{value} B")
    }
}
