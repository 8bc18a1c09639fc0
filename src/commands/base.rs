/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::jobs;
use crate::config::*;
use crate::input::*;
use crate::session;
use clap::{CommandFactory, Parser, Subcommand, arg};
use clap_complete::{Shell, generate};
use connector::{ApiError, RequestConfig, auth};
use std::io;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(name = "Jobby", display_name = "Jobby", bin_name = "jobby", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    Logout,
    Whoami,
    Jobs {
        #[command(subcommand)]
        cmd: jobs::Commands,
    },
}

pub fn request_config() -> RequestConfig {
    get_request_config(load_config())
        .map_err(|e| {
            eprintln!("{}", e);
            exit(1);
        })
        .unwrap()
}

/// Auth gate for guarded commands: without a live session token the command
/// refuses and points at login.
pub fn guarded_request_config() -> RequestConfig {
    let config = request_config();

    if config.token.is_none() {
        eprintln!("Not logged in. Use `jobby login` to log in.");
        exit(1);
    }

    config
}

/// Terminal failure path for connector errors. The session-expired sentinel
/// clears the stored token before bailing out; no other message is shown for
/// it.
pub fn fail(err: ApiError) -> ! {
    if err == ApiError::SessionExpired {
        session::remove_token();
        eprintln!("Session expired. Please log in again.");
    } else {
        eprintln!("{}", err);
    }

    exit(1)
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match cmd {
        MainCommands::Config { key, value } => {
            set_get_value_from_string(key, value, false)
                .map_err(|_| {
                    exit(1);
                })
                .unwrap();
        }

        MainCommands::Status => {
            let server_url = set_get_value(ConfigKey::Server, None, true);

            if server_url.is_none() {
                eprintln!("Server URL is not set. Use `jobby config server <url>` to set it.");
                exit(1);
            }

            println!("Server URL: {}", server_url.unwrap());

            if session::get_token().is_none() {
                eprintln!("Not logged in. Use `jobby login` to log in.");
                exit(1);
            }

            println!("Logged in.");
        }

        MainCommands::Login { username } => {
            // An authenticated user has no business on the login view.
            if session::get_token().is_some() {
                println!("Already logged in. Use `jobby logout` to switch accounts.");
                return Ok(());
            }

            let server_url = set_get_value(ConfigKey::Server, None, true);

            if server_url.is_none() {
                set_get_value(ConfigKey::Server, Some(ask_for_input("Server URL")), true);
            }

            let username = if let Some(username) = username {
                username
            } else {
                ask_for_input("Username")
            };

            let password = ask_for_password();

            let res = auth::post_validate_user(request_config(), username, password)
                .await
                .map_err(|e| {
                    eprintln!("Login failed: {}", e);
                    exit(1);
                })
                .unwrap();

            if !res.validuser || res.token.is_none() {
                eprintln!(
                    "{}",
                    res.error_message
                        .unwrap_or("Invalid username or password".to_string())
                );
                exit(1);
            }

            session::set_token(&res.token.unwrap());
            println!("Login successful.");
        }

        MainCommands::Logout => {
            session::remove_token();
            println!("Logged out.");
        }

        MainCommands::Whoami => {
            let res = auth::post_get_user_data(guarded_request_config())
                .await
                .unwrap_or_else(|e| fail(e));

            println!("Name: {}", res.name);
            println!("Position: {}", res.position);
            println!("Avatar: {}", res.avatar_url);
        }

        MainCommands::Jobs { cmd } => {
            jobs::handle(cmd).await;
        }
    }

    Ok(())
}
