/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidateUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidateUserResponse {
    pub validuser: bool,
    pub token: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct UserDataRequest {
    token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: String,
    /// Short bio shown under the name.
    pub position: String,
}

/// `POST login/validate-user`. Bad credentials come back as
/// `{"validuser": false}` under a 4xx status, so the login body is tried
/// before the generic error shape. The session-expired sentinel is not
/// honored here: login failures are always credential failures.
pub async fn post_validate_user(
    config: RequestConfig,
    username: String,
    password: String,
) -> Result<ValidateUserResponse, ApiError> {
    let req = ValidateUserRequest { username, password };

    let (_, bytes) = send(&config, "login/validate-user", &req).await?;

    if let Ok(parsed) = serde_json::from_slice::<ValidateUserResponse>(&bytes) {
        return Ok(parsed);
    }

    match serde_json::from_slice::<ErrorResponse>(&bytes) {
        Ok(ErrorResponse {
            error_message: Some(msg),
        }) => Err(ApiError::Server(msg)),
        _ => Err(ApiError::Server("Login failed".to_string())),
    }
}

/// `POST login/get_user_data`. Guarded; the sentinel applies.
pub async fn post_get_user_data(config: RequestConfig) -> Result<UserProfile, ApiError> {
    let req = UserDataRequest {
        token: require_token(&config)?,
    };

    let (ok, bytes) = send(&config, "login/get_user_data", &req).await?;

    parse_body(ok, &bytes)
}
