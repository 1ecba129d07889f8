//! Shared app context: singleton API client plus page-level flags.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Update auth state via interior mutability to avoid rebuilding clients.
//! - The danger flag is fixed for the page load, like the URL it came from.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Context value shared with every component under the app root.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub(crate) client: Rc<ApiClient>,
    /// Whether dangerous controls (delete) are enabled for this page load.
    pub(crate) danger: bool,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>, danger: bool) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
            danger,
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && self.danger == other.danger
    }
}
