// crates/palisade-cli/src/commands/stake.rs
//
// `palisade stake {add, remove, info}` - staking management commands.

use clap::Subcommand;

use palisade_rpc::handlers::staking::{
    StakeInfoRequest, StakeInfoResponse, StakeRequest, StakeResponse, UnstakeRequest,
    UnstakeResponse,
};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::rpc_result;
use crate::CliContext;

/// Staking subcommands.
#[derive(Debug, Subcommand)]
pub enum StakeCmd {
    /// Stake $PALE tokens to join the moderator set.
    Add {
        /// Amount of $PALE to stake.
        #[arg(long)]
        amount: u64,
    },
    /// Withdraw the active stake once the lockup period has passed.
    Remove,
    /// Show staking information for a principal (defaults to --sender).
    Info {
        /// Hex-encoded principal to inspect.
        principal: Option<String>,
    },
}

/// Run the stake subcommand.
pub async fn run(ctx: &CliContext, cmd: &StakeCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        StakeCmd::Add { amount } => {
            let request = StakeRequest {
                sender: ctx.sender()?,
                amount: *amount,
            };
            let result =
                rpc_result(&ctx.rpc, "staking/stake", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: StakeResponse = serde_json::from_value(result)?;
                println!("Staked {} PALE", response.amount);
                println!("  Unlocks at block {}", response.unlocks_at);
            }
        }
        StakeCmd::Remove => {
            let request = UnstakeRequest {
                sender: ctx.sender()?,
            };
            let result =
                rpc_result(&ctx.rpc, "staking/unstake", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: UnstakeResponse = serde_json::from_value(result)?;
                println!("Unstaked {} PALE", response.amount_returned);
            }
        }
        StakeCmd::Info { principal } => {
            let principal = match principal {
                Some(p) => p.clone(),
                None => ctx.sender()?,
            };
            let request = StakeInfoRequest { principal };
            let result =
                rpc_result(&ctx.rpc, "staking/info", serde_json::to_value(&request)?).await?;

            if ctx.format == OutputFormat::Json {
                println!("{}", format_json(&result));
            } else {
                let response: StakeInfoResponse = serde_json::from_value(result)?;
                println!("Staking Information");
                println!("-------------------");
                match response.stake {
                    Some(stake) => {
                        println!("  Staked:     {} PALE (since block {})", stake.amount, stake.staked_at);
                        println!("  Unlocks at: block {}", stake.unlocks_at());
                    }
                    None => println!("  Staked:     none"),
                }
                println!("  Balance:    {} PALE", response.balance);
            }
        }
    }

    Ok(())
}
