// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Web front end of Superlists: routes, views and the HTML they render.

mod cli;
mod config;
mod error;
mod server;
mod templates;
mod views;

use std::error::Error;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub use crate::cli::{Cli, CmdMigrate, CmdServe, Commands};
pub use crate::config::{Config, parse_config};
pub use crate::error::WebError;
pub use crate::server::{ServerConfig, router, serve};
pub use crate::templates::{Context, EMPTY_ITEM_ERROR, Page, Template};
pub use crate::views::ItemForm;

/// Run the Superlists command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}
