// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, net::SocketAddr, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use superlists_core::{APP_NAME, Superlists};

use crate::config::parse_config;
use crate::server::serve;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A minimal to-do list web application.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to serve
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $SUPERLISTS_CONFIG, then \
$XDG_CONFIG_HOME/superlists/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/superlists/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdServe::command())
            .subcommand(CmdMigrate::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some((CmdServe::NAME, matches)) => Commands::Serve(CmdServe::from(matches)),
            Some((CmdMigrate::NAME, matches)) => Commands::Migrate(CmdMigrate::from(matches)),
            None => Commands::Serve(CmdServe::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Serve the web application
    Serve(CmdServe),

    /// Apply database migrations and exit
    Migrate(CmdMigrate),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut config = parse_config(config).await?;
        let app = Superlists::new(config.core.clone()).await?;

        match self {
            Commands::Serve(cmd) => {
                if let Some(bind) = cmd.bind {
                    config.server.bind = bind;
                }
                serve(config.server, app).await
            }
            Commands::Migrate(_) => {
                tracing::info!("database is up to date");
                app.close().await?;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdServe {
    /// Overrides `server.bind` from the configuration.
    pub bind: Option<SocketAddr>,
}

impl CmdServe {
    pub const NAME: &str = "serve";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Serve the web application (default)")
            .arg(
                arg!(-b --bind <ADDR> "Address to listen on, e.g. 127.0.0.1:8000")
                    .required(false)
                    .value_parser(value_parser!(SocketAddr)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            bind: matches.get_one("bind").copied(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdMigrate;

impl CmdMigrate {
    pub const NAME: &str = "migrate";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Create or upgrade the database schema, then exit")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdMigrate
    }
}
