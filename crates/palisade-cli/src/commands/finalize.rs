// crates/palisade-cli/src/commands/finalize.rs
//
// `palisade finalize <id>` - finalize moderation for a content record.

use palisade_rpc::handlers::moderation::{FinalizeRequest, FinalizeResponse};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Run the finalize command.
pub async fn run(ctx: &CliContext, content_id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let request = FinalizeRequest {
        sender: ctx.sender()?,
        content_id,
    };
    let result = rpc_result(
        &ctx.rpc,
        "moderation/finalize",
        serde_json::to_value(&request)?,
    )
    .await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&result));
    } else {
        let response: FinalizeResponse = serde_json::from_value(result)?;
        println!("Content {} finalized: {}", response.content_id, response.status);
        println!(
            "  Tally: {} for / {} against",
            response.votes_for, response.votes_against
        );
    }

    Ok(())
}
