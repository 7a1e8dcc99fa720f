// crates/palisade-cli/src/main.rs
//
// CLI entrypoint for the Palisade Protocol developer tools.
//
// Provides subcommands for submitting content, voting, finalizing
// moderation, staking, granting reputation, and inspecting node state.
// Every command talks to a running palisade-node over JSON-RPC.

mod commands;
mod output;
mod rpc_client;

use clap::{Parser, Subcommand};
use commands::chain::ChainCmd;
use commands::content::ContentCmd;
use commands::reputation::ReputationCmd;
use commands::stake::StakeCmd;
use output::OutputFormat;

/// Palisade Protocol CLI for decentralized content moderation.
#[derive(Parser, Debug)]
#[command(
    name = "palisade",
    version = "0.1.0",
    about = "Palisade Protocol CLI for decentralized content moderation"
)]
struct Cli {
    /// RPC endpoint for the palisade-node.
    #[arg(long, global = true, default_value = "http://localhost:7144/rpc")]
    rpc: String,

    /// Hex-encoded principal used as the sender of mutating commands.
    #[arg(long, global = true)]
    sender: Option<String>,

    /// Print raw JSON results instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Content management: submit, get, list.
    #[command(subcommand)]
    Content(ContentCmd),

    /// Cast a moderation vote on a content record.
    Vote {
        /// Id of the content record to vote on.
        content_id: u64,
        /// Vote direction: for or against.
        #[arg(long)]
        direction: String,
    },

    /// Finalize moderation for a content record whose window has closed.
    Finalize {
        /// Id of the content record to finalize.
        content_id: u64,
    },

    /// Staking management: add, remove, info.
    #[command(subcommand)]
    Stake(StakeCmd),

    /// Reputation management: get, grant.
    #[command(subcommand)]
    Reputation(ReputationCmd),

    /// Chain height management: height, advance.
    #[command(subcommand)]
    Chain(ChainCmd),

    /// Display node status and version info.
    Status,
}

/// Shared context passed to every command runner.
pub struct CliContext {
    /// RPC endpoint URL.
    pub rpc: String,
    /// Hex-encoded sender principal, if provided.
    pub sender: Option<String>,
    /// Selected output format.
    pub format: OutputFormat,
}

impl CliContext {
    /// Sender principal for mutating commands.
    ///
    /// # Errors
    ///
    /// Returns an error when `--sender` was not provided.
    pub fn sender(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.sender
            .clone()
            .ok_or_else(|| "this command requires --sender <hex principal>".into())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let ctx = CliContext {
        rpc: cli.rpc.clone(),
        sender: cli.sender.clone(),
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        },
    };

    match &cli.command {
        Commands::Content(cmd) => commands::content::run(&ctx, cmd).await?,
        Commands::Vote {
            content_id,
            direction,
        } => commands::vote::run(&ctx, *content_id, direction).await?,
        Commands::Finalize { content_id } => commands::finalize::run(&ctx, *content_id).await?,
        Commands::Stake(cmd) => commands::stake::run(&ctx, cmd).await?,
        Commands::Reputation(cmd) => commands::reputation::run(&ctx, cmd).await?,
        Commands::Chain(cmd) => commands::chain::run(&ctx, cmd).await?,
        Commands::Status => commands::status::run(&ctx).await?,
    }

    Ok(())
}
