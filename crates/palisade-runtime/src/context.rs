// crates/palisade-runtime/src/context.rs

use palisade_core::Principal;

/// Per-call execution context supplied by the host.
///
/// The host authenticates the caller and samples the chain height before
/// invoking an operation; the runtime trusts both values and never looks
/// further.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    /// Authenticated caller.
    pub sender: Principal,
    /// Chain height at the time of the call.
    pub block_height: u64,
}

impl CallContext {
    pub fn new(sender: Principal, block_height: u64) -> Self {
        Self {
            sender,
            block_height,
        }
    }
}
