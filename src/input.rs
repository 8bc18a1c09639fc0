/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::*;
use crate::session;
use connector::RequestConfig;
use rpassword::read_password;
use std::collections::HashMap;
use std::io;
use std::io::Write;
use std::process::exit;

pub fn ask_for_input(prompt: &str) -> String {
    print!("{}: ", prompt);
    std::io::stdout().flush().unwrap();
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .expect(format!("Failed to read {}.", prompt).as_str());
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", prompt);
        exit(1);
    }

    inp
}

pub fn ask_for_password() -> String {
    print!("Password: ");
    std::io::stdout().flush().unwrap();
    let inp = read_password().unwrap();

    if inp.is_empty() {
        eprintln!("Password cannot be empty.");
        exit(1);
    }

    inp
}

/// Session context passed to every connector call. The token comes from the
/// session store and may be absent; guarded commands check it themselves.
pub fn get_request_config(
    config: HashMap<ConfigKey, Option<String>>,
) -> Result<RequestConfig, String> {
    let server_url: String =
        if let Some(server_url) = config.get(&ConfigKey::Server).unwrap().clone() {
            server_url
        } else {
            return Err(
                "Server URL not set. Use `jobby config server <url>` to set it.".to_string(),
            );
        };

    let token = session::get_token();

    Ok(RequestConfig { server_url, token })
}
