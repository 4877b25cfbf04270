//! HTTP client for preprint records and review actions.
//!
//! # Design
//! - One client per app boot, shared through the moderation context.
//! - Session cookies carry authentication; the client never stores tokens.
//! - Failures are typed as [`ApiError`] and narrowed to `PersistenceError` at
//!   the record-store seam.

use crate::features::preprint_detail::state::{ReviewActionStore, SaveFuture};
use gloo_net::http::{Request, Response};
use preprints_models::{
    PersistenceError, Preprint, ReviewAction, ReviewActionFields, ReviewState,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::RequestCredentials;

/// Failure talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        detail: String,
    },
    /// The response body did not match the expected record.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<ApiError> for PersistenceError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::Request(err) => Self::Transport(err.to_string()),
            ApiError::Status { status, detail } => Self::Rejected { status, detail },
            ApiError::Decode(detail) => Self::Decode(detail),
        }
    }
}

/// REST client rooted at the API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    /// API base URL without a trailing slash.
    pub base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)?
            .send()
            .await?;
        decode(response).await
    }

    /// Load a preprint with its provider, files, and node.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request fails or the record is malformed.
    pub async fn fetch_preprint(&self, id: &str) -> Result<Preprint, ApiError> {
        self.get_json(&format!("/preprints/{}", urlencoding::encode(id)))
            .await
    }

    /// Persist a review action that moves its preprint to `target_state`.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the request fails or the server refuses it.
    pub async fn save_review_action(
        &self,
        action: &ReviewAction,
        target_state: ReviewState,
    ) -> Result<ReviewAction, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(flatten)]
            action: &'a ReviewAction,
            target_state: ReviewState,
        }
        self.post_json(
            "/actions/reviews",
            &Body {
                action,
                target_state,
            },
        )
        .await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            detail,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

impl ReviewActionStore for ApiClient {
    fn create_review_action(&self, fields: ReviewActionFields) -> ReviewAction {
        ReviewAction::from(fields)
    }

    fn save_action(&self, action: ReviewAction, target_state: ReviewState) -> SaveFuture {
        let client = self.clone();
        Box::pin(async move {
            client
                .save_review_action(&action, target_state)
                .await
                .map_err(PersistenceError::from)
        })
    }
}
