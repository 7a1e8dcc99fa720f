// crates/palisade-economics/src/token.rs
//
// $PALE token custody.
//
// All accounting is in whole base units of $PALE; the protocol defines
// no sub-denomination. The vault tracks spendable balances per principal
// plus a single custody bucket holding everything currently bonded by
// the staking ledger.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use palisade_core::{PalisadeError, Principal, TokenTransfer};

/// A $PALE amount, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pale(pub u64);

impl From<u64> for Pale {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Pale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} PALE", self.0)
    }
}

/// In-memory token vault implementing the custody seam.
///
/// Balances enter the vault through genesis credits; `bond` and
/// `release` move tokens between a principal's spendable balance and
/// protocol custody without ever minting or burning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenVault {
    /// Spendable balances per principal.
    balances: HashMap<Principal, u64>,
    /// Total currently held in protocol custody.
    custody: u64,
}

impl TokenVault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            custody: 0,
        }
    }

    /// Credit `amount` to `who`'s spendable balance. Used by genesis
    /// seeding; the moderation operations never mint.
    pub fn credit(&mut self, who: Principal, amount: u64) {
        let balance = self.balances.entry(who).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Total currently held in protocol custody.
    pub fn custody_balance(&self) -> u64 {
        self.custody
    }
}

impl Default for TokenVault {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTransfer for TokenVault {
    fn bond(&mut self, from: &Principal, amount: u64) -> Result<(), PalisadeError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(PalisadeError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        self.balances.insert(*from, available - amount);
        self.custody = self.custody.saturating_add(amount);
        Ok(())
    }

    fn release(&mut self, to: &Principal, amount: u64) -> Result<(), PalisadeError> {
        if self.custody < amount {
            return Err(PalisadeError::InsufficientFunds {
                required: amount,
                available: self.custody,
            });
        }
        self.custody -= amount;
        let balance = self.balances.entry(*to).or_insert(0);
        *balance = balance.saturating_add(amount);
        Ok(())
    }

    fn balance_of(&self, who: &Principal) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }
}
