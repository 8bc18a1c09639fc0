/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod jobs;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body returned by the Jobby API. When the session is no longer valid
/// the server answers with this sentinel instead of a regular message.
pub const SESSION_EXPIRED_SENTINEL: &str = "NAVIGATE TO LOGIN";

const GENERIC_FAILURE: &str = "Failed to fetch data";

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, ...).
    Transport(String),
    /// The server rejected the session token; the caller must clear the
    /// stored token and send the user back to login.
    SessionExpired,
    /// Any other server-reported failure, message surfaced verbatim.
    Server(String),
    /// A guarded endpoint was called without a token.
    MissingToken,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::SessionExpired => write!(f, "Session expired"),
            ApiError::Server(msg) => write!(f, "{}", msg),
            ApiError::MissingToken => {
                write!(f, "Token not set. Use `jobby login` to log in.")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize, Deserialize, Debug)]
struct ErrorResponse {
    // The API spells this both ways depending on the endpoint.
    #[serde(rename = "errorMessage", alias = "ErrorMessage")]
    error_message: Option<String>,
}

fn get_client(config: &RequestConfig, endpoint: &str) -> reqwest::RequestBuilder {
    // Every Jobby endpoint is POST with a JSON body, the token included in
    // the body rather than a header.
    reqwest::Client::new()
        .post(format!("{}/{}", config.server_url, endpoint))
        .header("Content-Type", "application/json")
}

fn require_token(config: &RequestConfig) -> Result<String, ApiError> {
    config.token.clone().ok_or(ApiError::MissingToken)
}

async fn send<T: Serialize>(
    config: &RequestConfig,
    endpoint: &str,
    req: &T,
) -> Result<(bool, Vec<u8>), ApiError> {
    let res = get_client(config, endpoint)
        .json(req)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let ok = res.status().is_success();
    let bytes = res
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok((ok, bytes.to_vec()))
}

/// Core response contract: a successful status carries the typed body, any
/// other outcome carries `{errorMessage}`. The session-expired sentinel is
/// mapped to its own variant so callers can clear the stored token. The API
/// also reports "No Data found" bodies under a 2xx status, so the error shape
/// is tried whenever the typed parse fails.
pub fn parse_body<T: DeserializeOwned>(ok: bool, bytes: &[u8]) -> Result<T, ApiError> {
    if ok {
        if let Ok(parsed) = serde_json::from_slice::<T>(bytes) {
            return Ok(parsed);
        }
    }

    match serde_json::from_slice::<ErrorResponse>(bytes) {
        Ok(ErrorResponse {
            error_message: Some(msg),
        }) => {
            if msg == SESSION_EXPIRED_SENTINEL {
                Err(ApiError::SessionExpired)
            } else {
                Err(ApiError::Server(msg))
            }
        }
        _ => Err(ApiError::Server(GENERIC_FAILURE.to_string())),
    }
}
