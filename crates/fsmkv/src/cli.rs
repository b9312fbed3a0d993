//! Command line interface
//!
//! One storage operation per invocation against the configured backend.
//! State names are printed as-is, data entries as JSON.

use clap::{Args, Parser, Subcommand};
use fsmkv_domain::error::Result;
use fsmkv_domain::ports::FsmStorage;
use fsmkv_domain::value_objects::{State, StorageKey};
use fsmkv_infrastructure::config::ConfigLoader;
use fsmkv_infrastructure::error_ext::ErrorContext;
use fsmkv_infrastructure::factory::StorageFactory;
use fsmkv_infrastructure::logging::init_logging;
use fsmkv_providers::storage::KeyedStateStore;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Command line interface for fsmkv
#[derive(Parser, Debug)]
#[command(name = "fsmkv")]
#[command(about = "Inspect and edit FSM state and data kept in Redis")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Identity the operation applies to
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityArgs {
    /// Bot id
    #[arg(long, allow_negative_numbers = true)]
    pub bot: i64,

    /// Chat id
    #[arg(long, allow_negative_numbers = true)]
    pub chat: i64,

    /// User id
    #[arg(long, allow_negative_numbers = true)]
    pub user: i64,

    /// Forum topic id, 0 for none
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub thread: i64,
}

impl From<IdentityArgs> for StorageKey {
    fn from(args: IdentityArgs) -> Self {
        StorageKey::new(args.bot, args.chat, args.user).with_thread(args.thread)
    }
}

/// Storage operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the current state
    GetState {
        #[command(flatten)]
        identity: IdentityArgs,
    },
    /// Replace the current state
    SetState {
        #[command(flatten)]
        identity: IdentityArgs,
        /// New state name
        state: String,
    },
    /// Delete the current state
    Reset {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Also delete every data entry of the identity
        #[arg(long)]
        with_data: bool,
    },
    /// Print a data entry as JSON
    GetData {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Entry name
        name: String,
    },
    /// Store a data entry
    SetData {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Entry name
        name: String,
        /// JSON value
        #[arg(value_parser = parse_json, allow_negative_numbers = true)]
        value: Value,
    },
    /// Delete a data entry
    DeleteData {
        #[command(flatten)]
        identity: IdentityArgs,
        /// Entry name
        name: String,
    },
}

impl Command {
    /// Identity the command addresses
    pub fn key(&self) -> StorageKey {
        match self {
            Self::GetState { identity }
            | Self::SetState { identity, .. }
            | Self::Reset { identity, .. }
            | Self::GetData { identity, .. }
            | Self::SetData { identity, .. }
            | Self::DeleteData { identity, .. } => (*identity).into(),
        }
    }
}

fn parse_json(raw: &str) -> std::result::Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON value: {e}"))
}

/// Run one command against `storage`, writing its output to `out`
pub async fn execute<W: Write>(
    storage: &KeyedStateStore,
    ctx: &CancellationToken,
    command: Command,
    out: &mut W,
) -> Result<()> {
    let key = command.key();

    match command {
        Command::GetState { .. } => {
            let state = storage.state(ctx, key).await?;
            writeln!(out, "{state}").context("Failed to write output")?;
        }
        Command::SetState { state, .. } => {
            storage.set_state(ctx, key, State::new(state)).await?;
        }
        Command::Reset { with_data, .. } => {
            storage.reset_state(ctx, key, with_data).await?;
        }
        Command::GetData { name, .. } => {
            let value: Value = storage.data(ctx, key, &name).await?;
            writeln!(out, "{value}").context("Failed to write output")?;
        }
        Command::SetData { name, value, .. } => {
            storage.set_data(ctx, key, &name, Some(&value)).await?;
        }
        Command::DeleteData { name, .. } => {
            storage.delete_data(ctx, key, &name).await?;
        }
    }

    Ok(())
}

/// Load configuration, connect and run the parsed command
///
/// Ctrl-C cancels the command in flight. The storage is closed on every path.
pub async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let storage = StorageFactory::create(&config.storage).await?;
    let ctx = CancellationToken::new();

    let canceller = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            canceller.cancel();
        }
    });

    info!(identity = %cli.command.key(), "Running command");
    let mut stdout = std::io::stdout();
    let result = execute(&storage, &ctx, cli.command, &mut stdout).await;
    let closed = storage.close().await;

    result.and(closed)
}
