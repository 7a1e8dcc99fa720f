// crates/palisade-cli/src/commands/content.rs
//
// `palisade content {submit, get, list}` - content management commands.

use clap::Subcommand;
use tabled::Tabled;

use palisade_core::{ContentHash, ContentRecord, ContentStatus};
use palisade_rpc::handlers::content::{
    GetContentRequest, GetContentResponse, ListContentRequest, ListContentResponse,
    SubmitContentRequest, SubmitContentResponse,
};

use crate::output::{format_json, format_table, short_principal, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Content management subcommands.
#[derive(Debug, Subcommand)]
pub enum ContentCmd {
    /// Submit a content hash for moderation.
    Submit {
        /// Hex-encoded 32-byte SHA-256 hash of the content.
        #[arg(long)]
        hash: Option<String>,
        /// Raw text to hash client-side and submit.
        #[arg(long)]
        text: Option<String>,
    },
    /// Get a content record by id.
    Get {
        /// Id of the content record.
        content_id: u64,
    },
    /// List content records, optionally filtered by status.
    List {
        /// Filter by status: pending, approved, rejected.
        #[arg(long)]
        status: Option<String>,
    },
}

/// Table row for content listings.
#[derive(Tabled)]
struct ContentRow {
    id: u64,
    author: String,
    status: String,
    votes_for: u64,
    votes_against: u64,
    voting_ends_at: u64,
}

impl ContentRow {
    fn from_record(record: &ContentRecord) -> Self {
        Self {
            id: record.id,
            author: short_principal(&record.author.to_hex()),
            status: record.status.to_string(),
            votes_for: record.votes_for,
            votes_against: record.votes_against,
            voting_ends_at: record.voting_ends_at,
        }
    }
}

/// Run the content subcommand.
pub async fn run(ctx: &CliContext, cmd: &ContentCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ContentCmd::Submit { hash, text } => {
            let content_hash = match (hash, text) {
                (Some(h), None) => ContentHash::from_hex(h)?.to_hex(),
                (None, Some(t)) => ContentHash::digest(t.as_bytes()).to_hex(),
                _ => return Err("provide exactly one of --hash or --text".into()),
            };

            let request = SubmitContentRequest {
                sender: ctx.sender()?,
                content_hash,
            };
            let result = rpc_result(&ctx.rpc, "content/submit", serde_json::to_value(&request)?)
                .await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: SubmitContentResponse = serde_json::from_value(result)?;
                println!("Submitted content {}", response.content_id);
                println!("  Voting ends at block {}", response.voting_ends_at);
            }
        }
        ContentCmd::Get { content_id } => {
            let request = GetContentRequest {
                content_id: *content_id,
            };
            let result =
                rpc_result(&ctx.rpc, "content/get", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: GetContentResponse = serde_json::from_value(result)?;
                match response.content {
                    Some(record) => {
                        println!("{}", format_table(&[ContentRow::from_record(&record)]));
                        println!("  Hash: {}", record.content_hash);
                    }
                    None => println!("Content {} not found", content_id),
                }
            }
        }
        ContentCmd::List { status } => {
            let request = ListContentRequest {
                status: status.as_deref().map(parse_status).transpose()?,
            };
            let result =
                rpc_result(&ctx.rpc, "content/list", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: ListContentResponse = serde_json::from_value(result)?;
                if response.contents.is_empty() {
                    println!("No content records found");
                } else {
                    let rows: Vec<ContentRow> =
                        response.contents.iter().map(ContentRow::from_record).collect();
                    println!("{}", format_table(&rows));
                }
            }
        }
    }

    Ok(())
}

/// Parse a status filter string.
fn parse_status(s: &str) -> Result<ContentStatus, Box<dyn std::error::Error>> {
    match s {
        "pending" => Ok(ContentStatus::Pending),
        "approved" => Ok(ContentStatus::Approved),
        "rejected" => Ok(ContentStatus::Rejected),
        other => Err(format!(
            "invalid status filter: {} (expected pending, approved, or rejected)",
            other
        )
        .into()),
    }
}
