// crates/palisade-cli/src/commands/status.rs
//
// `palisade status` - display node status and version info.

use palisade_rpc::handlers::node::InfoResponse;

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Run the status command.
pub async fn run(ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    let result = rpc_result(&ctx.rpc, "node/info", serde_json::Value::Null).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&result));
        return Ok(());
    }

    let info: InfoResponse = serde_json::from_value(result)?;
    println!("Palisade Protocol v{}", info.version);
    println!();
    println!("Node Status");
    println!("-----------");
    println!("  RPC endpoint: {}", ctx.rpc);
    println!("  Block height: {}", info.height);
    println!("  Content:      {} records", info.content_count);
    println!("  Total staked: {} PALE", info.total_staked);

    Ok(())
}
