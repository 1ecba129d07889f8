//! HTTP client for the remote media-library service.
//!
//! # Design
//! - One client per app boot; auth updates via interior mutability.
//! - Non-2xx responses become [`ApiError`] carrying the HTTP status and
//!   the problem-document detail when the body has one.
//! - A rejected password is data (`authorized: false`), never an error.

use crate::core::auth::AuthState;
use crate::core::logic::build_items_path;
use crate::features::library::state::MediaRow;
use gloo_net::http::{Request, Response};
use medley_api_models::{
    AuthCheckRequest, AuthCheckResponse, MediaItem, MediaUpdate, ProblemDetails,
    SizeLimitResponse,
};
use std::cell::RefCell;
use std::fmt;

/// Password header accepted by the library service.
const PASSWORD_HEADER: &str = "x-medley-password";

/// Error surfaced by the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiError {
    /// HTTP status code, or 0 when the request never reached the service.
    pub(crate) status: u16,
    /// Human-readable failure description.
    pub(crate) message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (http {})", self.message, self.status)
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: value.to_string(),
        }
    }
}

/// Shared HTTP client for the library API.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    auth: RefCell<AuthState>,
}

impl ApiClient {
    /// Create a client rooted at `base_url`, browsing anonymously.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: RefCell::new(AuthState::Anonymous),
        }
    }

    /// Swap the auth state used for subsequent requests.
    pub(crate) fn set_auth(&self, auth: AuthState) {
        *self.auth.borrow_mut() = auth;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn password(&self) -> Option<String> {
        self.auth.borrow().password().map(str::to_string)
    }

    fn authorize(&self, req: Request) -> Request {
        match self.password() {
            Some(password) => req.header(PASSWORD_HEADER, &password),
            None => req,
        }
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let fallback = resp.status_text();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProblemDetails>(&body)
            .map_or(fallback, |problem| problem.detail.unwrap_or(problem.title));
        Err(ApiError { status, message })
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let req = self.authorize(Request::get(&self.url(path)));
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json::<T>().await?)
    }

    /// Check a candidate password against the library.
    pub(crate) async fn check_auth(&self, password: &str) -> Result<AuthCheckResponse, ApiError> {
        let req = Request::post(&self.url("/v1/library/auth")).json(&AuthCheckRequest {
            password: password.to_string(),
        })?;
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json::<AuthCheckResponse>().await?)
    }

    /// Fetch the library items, optionally filtered server-side.
    pub(crate) async fn search_library(
        &self,
        search: Option<String>,
    ) -> Result<Vec<MediaRow>, ApiError> {
        let data: Vec<MediaItem> = self.get_json(&build_items_path(&search)).await?;
        Ok(data.into_iter().map(MediaRow::from).collect())
    }

    /// Fetch the upload size quota.
    pub(crate) async fn fetch_size_limit(&self) -> Result<u64, ApiError> {
        let data: SizeLimitResponse = self.get_json("/v1/library/limit").await?;
        Ok(data.limit)
    }

    /// Upload a media file, returning the stored item.
    pub(crate) async fn upload_media(
        &self,
        file: web_sys::File,
        name: Option<String>,
    ) -> Result<MediaRow, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError {
            status: 0,
            message: "form-data unavailable".to_string(),
        })?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| ApiError {
                status: 0,
                message: "could not attach file".to_string(),
            })?;
        if let Some(name) = name {
            let _ = form.append_with_str("name", &name);
        }
        let req = self.authorize(Request::post(&self.url("/v1/library/items")).body(form));
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json::<MediaItem>().await?.into())
    }

    /// Apply a partial update to a media item.
    pub(crate) async fn update_media(
        &self,
        id: &str,
        update: &MediaUpdate,
    ) -> Result<MediaRow, ApiError> {
        let req = self
            .authorize(Request::patch(&self.url(&format!("/v1/library/items/{id}"))))
            .json(update)?;
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json::<MediaItem>().await?.into())
    }

    /// Delete a media item from the library.
    pub(crate) async fn delete_media(&self, id: &str) -> Result<(), ApiError> {
        let req = self.authorize(Request::delete(&self.url(&format!("/v1/library/items/{id}"))));
        Self::check(req.send().await?).await?;
        Ok(())
    }
}
