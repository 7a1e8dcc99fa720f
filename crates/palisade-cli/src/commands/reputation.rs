// crates/palisade-cli/src/commands/reputation.rs
//
// `palisade reputation {get, grant}` - reputation management commands.

use clap::Subcommand;

use palisade_rpc::handlers::reputation::{
    GetReputationRequest, GetReputationResponse, GrantReputationRequest, GrantReputationResponse,
};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Reputation subcommands.
#[derive(Debug, Subcommand)]
pub enum ReputationCmd {
    /// Show the reputation score of a principal (defaults to --sender).
    Get {
        /// Hex-encoded principal to inspect.
        principal: Option<String>,
    },
    /// Set the reputation score of a principal (devnet admin).
    Grant {
        /// Hex-encoded principal to adjust.
        principal: String,
        /// New reputation score.
        score: u64,
    },
}

/// Run the reputation subcommand.
pub async fn run(ctx: &CliContext, cmd: &ReputationCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ReputationCmd::Get { principal } => {
            let principal = match principal {
                Some(p) => p.clone(),
                None => ctx.sender()?,
            };
            let request = GetReputationRequest { principal };
            let result =
                rpc_result(&ctx.rpc, "reputation/get", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: GetReputationResponse = serde_json::from_value(result)?;
                println!("Reputation of {}: {}", response.principal, response.score);
            }
        }
        ReputationCmd::Grant { principal, score } => {
            let request = GrantReputationRequest {
                principal: principal.clone(),
                score: *score,
            };
            let result = rpc_result(
                &ctx.rpc,
                "admin/grant_reputation",
                serde_json::to_value(&request)?,
            )
            .await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: GrantReputationResponse = serde_json::from_value(result)?;
                println!(
                    "Reputation of {} set to {}",
                    response.principal, response.score
                );
            }
        }
    }

    Ok(())
}
