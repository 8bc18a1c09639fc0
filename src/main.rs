/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod commands;
mod config;
mod filters;
mod input;
mod pagination;
mod session;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    commands::base::run_cli().await
}
