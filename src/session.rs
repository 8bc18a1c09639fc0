/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::{ConfigKey, set_get_value, unset_value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Tokens are honored for 30 days from issue; the issue time is stored next
/// to the token and enforced on read.
pub const TOKEN_LIFETIME_SECS: u64 = 30 * 24 * 60 * 60;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn is_expired(issued_at: u64, now: u64) -> bool {
    now >= issued_at.saturating_add(TOKEN_LIFETIME_SECS)
}

/// Stores the opaque session token. No validation of its contents.
pub fn set_token(token: &str) {
    set_get_value(ConfigKey::AuthToken, Some(token.to_string()), true);
    set_get_value(
        ConfigKey::AuthTokenIssuedAt,
        Some(now_secs().to_string()),
        true,
    );
}

/// Returns the stored token, or `None` when there is none or it has outlived
/// its 30-day lifetime. An expired entry is removed on the way out.
pub fn get_token() -> Option<String> {
    let token = set_get_value(ConfigKey::AuthToken, None, true)?;

    if token.is_empty() {
        return None;
    }

    if let Some(issued_at) = set_get_value(ConfigKey::AuthTokenIssuedAt, None, true)
        && let Ok(issued_at) = issued_at.parse::<u64>()
        && is_expired(issued_at, now_secs())
    {
        remove_token();
        return None;
    }

    Some(token)
}

pub fn remove_token() {
    unset_value(ConfigKey::AuthToken);
    unset_value(ConfigKey::AuthTokenIssuedAt);
}
