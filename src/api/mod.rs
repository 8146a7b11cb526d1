//! Blocking client for the skiff.app platform API.
//!
//! All resources share one request path: bearer-authenticated request out,
//! status + body in, classified by [`interpret`] into a typed record or a
//! structured error. Calls are never retried automatically; a failure is
//! surfaced to the caller, who decides whether to rerun the invocation.

pub mod apps;
pub mod db;
pub mod deploy;
pub mod secrets;
pub mod types;

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{SkiffError, SkiffResult};
use types::ErrorResponse;

/// Client for the platform API. One instance per invocation; it owns its
/// HTTP connection pool and shares nothing across invocations.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> SkiffResult<Self> {
        Ok(Self {
            http: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and interprets the response as `T`.
    ///
    /// The timeout is per operation: deployment uploads span a full remote
    /// build cycle, list calls do not.
    fn send<T: DeserializeOwned>(&self, req: RequestBuilder, timeout: Duration) -> SkiffResult<T> {
        let response = req
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        interpret(status, &body)
    }
}

/// Classifies an HTTP exchange into a typed success record or an error.
///
/// Statuses in the success family parse as `T`; anything else parses as the
/// platform's structured error body. A body that is not that shape is
/// surfaced verbatim with its status code; the client never fabricates a
/// reason the server did not send.
pub fn interpret<T: DeserializeOwned>(status: StatusCode, body: &str) -> SkiffResult<T> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }
    Err(parse_api_error(status, body))
}

/// Parses a non-success body into [`SkiffError::Api`], falling back to the
/// raw status and body when the structured shape does not fit.
pub fn parse_api_error(status: StatusCode, body: &str) -> SkiffError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) => SkiffError::Api(resp.error),
        Err(_) => SkiffError::UnexpectedResponse {
            status: status.as_u16(),
            body: body.to_string(),
        },
    }
}
