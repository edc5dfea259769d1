#![forbid(unsafe_code)]

//! clubadmin CLI
//!
//! Creates and edits clubs and leagues against a running backend, going
//! through the same controllers an interactive front end would.

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use clubadmin_client::{ClientConfig, ClubAdminClient};
use std::path::PathBuf;

mod commands;

/// clubadmin - club and league editor
#[derive(Parser, Debug)]
#[command(name = "clubadmin")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file
    #[arg(long, env = "CLUBADMIN_SERVER_URL")]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Club operations
    Club {
        #[command(subcommand)]
        action: ClubAction,
    },
    /// League operations
    League {
        #[command(subcommand)]
        action: LeagueAction,
    },
}

#[derive(Subcommand, Debug)]
enum ClubAction {
    /// Create a club
    New(ClubFieldArgs),
    /// Edit an existing club
    Edit {
        /// Club id
        id: String,
        #[command(flatten)]
        fields: ClubFieldArgs,
    },
}

#[derive(Subcommand, Debug)]
enum LeagueAction {
    /// Rename a league or change its team
    Edit {
        /// League id
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// Team id to link
        #[arg(long)]
        team: Option<i64>,
    },
}

/// Club values to set; omitted flags keep the current value.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ClubFieldArgs {
    /// Club name (3 to 255 characters)
    #[arg(long)]
    pub name: Option<String>,
    /// Postal address
    #[arg(long)]
    pub address: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Registration date, YYYY-MM-DD
    #[arg(long)]
    pub registration_date: Option<String>,
    /// Image reference; pass an empty value to clear it
    #[arg(long)]
    pub image: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clubadmin=debug".into()),
        )
        .init();

    let mut config = ClientConfig::load(args.config.as_deref())?;
    if let Some(url) = args.server_url {
        config = config.with_server_url(url);
    }
    let client = ClubAdminClient::new(config)?;
    tracing::debug!(command = ?args.command, "Running command");

    let route = match args.command {
        Command::Club {
            action: ClubAction::New(fields),
        } => commands::club_new(&client, &fields).await?,
        Command::Club {
            action: ClubAction::Edit { id, fields },
        } => commands::club_edit(&client, &id, &fields).await?,
        Command::League {
            action: LeagueAction::Edit { id, name, team },
        } => commands::league_edit(&client, &id, name, team).await?,
    };

    println!("{route}");
    Ok(())
}
