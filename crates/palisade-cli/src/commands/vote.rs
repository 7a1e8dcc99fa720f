// crates/palisade-cli/src/commands/vote.rs
//
// `palisade vote <id> --direction <for|against>` - cast a moderation vote.

use palisade_core::VoteDirection;
use palisade_rpc::handlers::moderation::{VoteRequest, VoteResponse};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Run the vote command.
pub async fn run(
    ctx: &CliContext,
    content_id: u64,
    direction: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let direction = match direction {
        "for" => VoteDirection::For,
        "against" => VoteDirection::Against,
        other => {
            return Err(format!(
                "invalid direction: {} (expected for or against)",
                other
            )
            .into())
        }
    };

    let request = VoteRequest {
        sender: ctx.sender()?,
        content_id,
        direction,
    };
    let result = rpc_result(&ctx.rpc, "moderation/vote", serde_json::to_value(&request)?).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&result));
    } else {
        let response: VoteResponse = serde_json::from_value(result)?;
        println!("Voted {} on content {}", direction, response.content_id);
        println!(
            "  Tally: {} for / {} against",
            response.votes_for, response.votes_against
        );
    }

    Ok(())
}
