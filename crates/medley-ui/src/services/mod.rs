//! HTTP client helpers for the remote library service.

pub(crate) mod api;
