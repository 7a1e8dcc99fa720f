// crates/palisade-cli/src/commands/chain.rs
//
// `palisade chain {height, advance}` - devnet chain height commands.

use clap::Subcommand;

use palisade_rpc::handlers::chain::{AdvanceRequest, AdvanceResponse, HeightResponse};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Chain height subcommands.
#[derive(Debug, Subcommand)]
pub enum ChainCmd {
    /// Show the current block height.
    Height,
    /// Advance the block height (devnet only).
    Advance {
        /// Number of blocks to advance.
        #[arg(long, default_value_t = 1)]
        blocks: u64,
    },
}

/// Run the chain subcommand.
pub async fn run(ctx: &CliContext, cmd: &ChainCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ChainCmd::Height => {
            let result = rpc_result(&ctx.rpc, "chain/height", serde_json::Value::Null).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: HeightResponse = serde_json::from_value(result)?;
                println!("Block height: {}", response.height);
            }
        }
        ChainCmd::Advance { blocks } => {
            let request = AdvanceRequest { blocks: *blocks };
            let result =
                rpc_result(&ctx.rpc, "chain/advance", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: AdvanceResponse = serde_json::from_value(result)?;
                println!("Advanced {} block(s) to height {}", blocks, response.height);
            }
        }
    }

    Ok(())
}
