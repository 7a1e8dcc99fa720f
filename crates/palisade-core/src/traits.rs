// crates/palisade-core/src/traits.rs
//
// Trait interface between the staking ledger and the token system.

use crate::error::PalisadeError;
use crate::identity::Principal;

/// Token custody collaborator.
///
/// The staking ledger never holds balances itself; it moves tokens in
/// and out of protocol custody through this seam. Calls are synchronous
/// and must apply fully or not at all: a failed transfer leaves every
/// balance unchanged.
pub trait TokenTransfer: Send + Sync {
    /// Move `amount` from `from`'s spendable balance into protocol
    /// custody. Fails with `InsufficientFunds` when the balance is
    /// short.
    fn bond(&mut self, from: &Principal, amount: u64) -> Result<(), PalisadeError>;

    /// Release `amount` from protocol custody back to `to`. Only
    /// previously bonded amounts are ever released.
    fn release(&mut self, to: &Principal, amount: u64) -> Result<(), PalisadeError>;

    /// Spendable balance currently held by `who`. Unknown principals
    /// hold 0.
    fn balance_of(&self, who: &Principal) -> u64;
}
