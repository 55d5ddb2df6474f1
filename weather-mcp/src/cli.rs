use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode};
use weather_core::{Config, CwaClient, Dispatcher, catalog};

use crate::{http, server::WeatherMcp, stdio};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "mcp-tw-weather", version, about = "Taiwan Weather MCP Server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Transport mode.
    #[arg(long, value_enum, default_value_t = Mode::Stdio)]
    pub mode: Mode,

    /// HTTP bind address (only for http mode).
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port (only for http mode).
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// HTTP endpoint path (only for http mode).
    #[arg(long, default_value = "/mcp")]
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Stdio,
    Http,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the CWA API key in the config file.
    Configure,

    /// Print the tool catalog as JSON and exit.
    Tools,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Tools) => {
                println!("{}", serde_json::to_string_pretty(&catalog())?);
                Ok(())
            }
            None => self.serve().await,
        }
    }

    async fn serve(self) -> anyhow::Result<()> {
        let config = Config::load()?.with_env_overrides()?;
        let client = CwaClient::new(config.client_settings())?;

        if !client.has_credential() {
            tracing::warn!("CWA_API_KEY is not set. API calls will fail.");
        }

        let server = WeatherMcp::new(Dispatcher::new(Arc::new(client)));

        match self.mode {
            Mode::Stdio => stdio::serve(server).await,
            Mode::Http => {
                let addr = format!("{}:{}", self.host, self.port);
                http::serve(server, &addr, &self.path).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let api_key = Password::new("CWA API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://opendata.cwa.gov.tw/")
        .prompt()
        .context("Failed to read API key")?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved CWA API key to {}", Config::config_file_path()?.display());
    Ok(())
}
