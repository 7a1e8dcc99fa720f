// crates/palisade-economics/src/staking.rs
//
// Staking ledger: stake/unstake with a minimum amount and a lockup
// period.
//
// Each principal holds at most one active stake. Staking bonds tokens
// into protocol custody; unstaking is refused until the lockup elapses,
// then releases custody and deletes the record, after which the
// principal may stake again with a fresh lockup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use palisade_core::{PalisadeError, Principal, TokenTransfer};

/// Minimum stake amount: 1,000 $PALE base units.
pub const MIN_STAKE_AMOUNT: u64 = 1_000;

/// Lockup period after staking: 720 blocks. Unstaking succeeds at
/// exactly `staked_at + STAKE_LOCKUP_PERIOD` and any height after.
pub const STAKE_LOCKUP_PERIOD: u64 = 720;

/// A principal's active stake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeRecord {
    /// Owner of the staked tokens.
    pub staker: Principal,
    /// Amount bonded into custody.
    pub amount: u64,
    /// Block height at which the stake was created.
    pub staked_at: u64,
}

impl StakeRecord {
    /// First height at which this stake can be withdrawn.
    pub fn unlocks_at(&self) -> u64 {
        self.staked_at + STAKE_LOCKUP_PERIOD
    }

    /// Whether the stake is still locked at `height`.
    pub fn locked(&self, height: u64) -> bool {
        height < self.unlocks_at()
    }
}

/// Ledger of active stakes, keyed by staker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeLedger {
    stakes: HashMap<Principal, StakeRecord>,
}

impl StakeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            stakes: HashMap::new(),
        }
    }

    /// Stake `amount` on behalf of `staker` at `height`.
    ///
    /// Checks, in order: the amount meets the minimum (`InvalidStake`),
    /// the staker has no active stake (`AlreadyStaked`). The bond into
    /// custody happens after both checks; if the vault refuses
    /// (`InsufficientFunds`), no record is written.
    ///
    /// # Errors
    /// `InvalidStake`, `AlreadyStaked`, or the vault's transfer error.
    pub fn stake(
        &mut self,
        vault: &mut dyn TokenTransfer,
        staker: Principal,
        amount: u64,
        height: u64,
    ) -> Result<(), PalisadeError> {
        if amount < MIN_STAKE_AMOUNT {
            return Err(PalisadeError::InvalidStake {
                amount,
                minimum: MIN_STAKE_AMOUNT,
            });
        }
        if self.stakes.contains_key(&staker) {
            return Err(PalisadeError::AlreadyStaked);
        }
        vault.bond(&staker, amount)?;
        self.stakes.insert(
            staker,
            StakeRecord {
                staker,
                amount,
                staked_at: height,
            },
        );
        Ok(())
    }

    /// Withdraw `staker`'s active stake at `height` and return the
    /// released amount.
    ///
    /// Refused with `NotAuthorized` while the lockup is still running.
    /// On success the record is deleted; the staker may stake again.
    ///
    /// # Errors
    /// `NoStakeFound` or `NotAuthorized`.
    pub fn unstake(
        &mut self,
        vault: &mut dyn TokenTransfer,
        staker: &Principal,
        height: u64,
    ) -> Result<u64, PalisadeError> {
        let record = self.stakes.get(staker).ok_or(PalisadeError::NoStakeFound)?;
        if record.locked(height) {
            return Err(PalisadeError::NotAuthorized);
        }
        let amount = record.amount;
        vault.release(staker, amount)?;
        self.stakes.remove(staker);
        Ok(amount)
    }

    /// The active stake of `staker`, if any.
    pub fn get(&self, staker: &Principal) -> Option<&StakeRecord> {
        self.stakes.get(staker)
    }

    /// Sum of all active stake amounts.
    pub fn total_staked(&self) -> u64 {
        self.stakes.values().map(|s| s.amount).sum()
    }

    /// Number of active stakes.
    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }
}

impl Default for StakeLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenVault;

    fn staker() -> Principal {
        Principal::from_bytes([1u8; 32])
    }

    /// Vault holding 10,000 $PALE for the test staker.
    fn funded_vault() -> TokenVault {
        let mut vault = TokenVault::new();
        vault.credit(staker(), 10_000);
        vault
    }

    #[test]
    fn test_stake_below_minimum() {
        let mut vault = funded_vault();
        let mut ledger = StakeLedger::new();
        let err = ledger
            .stake(&mut vault, staker(), MIN_STAKE_AMOUNT - 1, 100)
            .unwrap_err();
        assert!(matches!(
            err,
            PalisadeError::InvalidStake { amount: 999, minimum: 1_000 }
        ));
        assert!(ledger.get(&staker()).is_none());
        assert_eq!(vault.balance_of(&staker()), 10_000);
    }

    #[test]
    fn test_stake_at_minimum_bonds_funds() {
        let mut vault = funded_vault();
        let mut ledger = StakeLedger::new();
        ledger
            .stake(&mut vault, staker(), MIN_STAKE_AMOUNT, 100)
            .unwrap();
        let record = ledger.get(&staker()).unwrap();
        assert_eq!(record.amount, MIN_STAKE_AMOUNT);
        assert_eq!(record.staked_at, 100);
        assert_eq!(record.unlocks_at(), 100 + STAKE_LOCKUP_PERIOD);
        assert_eq!(vault.balance_of(&staker()), 9_000);
        assert_eq!(vault.custody_balance(), 1_000);
    }

    #[test]
    fn test_second_stake_refused_regardless_of_amount() {
        let mut vault = funded_vault();
        let mut ledger = StakeLedger::new();
        ledger.stake(&mut vault, staker(), 1_000, 100).unwrap();

        for amount in [1_000, 5_000] {
            let err = ledger.stake(&mut vault, staker(), amount, 200).unwrap_err();
            assert!(matches!(err, PalisadeError::AlreadyStaked));
        }
        // A sub-minimum second attempt hits the amount check first.
        let err = ledger.stake(&mut vault, staker(), 999, 200).unwrap_err();
        assert!(matches!(err, PalisadeError::InvalidStake { .. }));
    }

    #[test]
    fn test_underfunded_stake_leaves_no_record() {
        let mut vault = TokenVault::new();
        vault.credit(staker(), 500);
        let mut ledger = StakeLedger::new();
        let err = ledger.stake(&mut vault, staker(), 1_000, 100).unwrap_err();
        assert!(matches!(
            err,
            PalisadeError::InsufficientFunds { required: 1_000, available: 500 }
        ));
        assert!(ledger.get(&staker()).is_none());
        assert_eq!(vault.balance_of(&staker()), 500);
    }

    #[test]
    fn test_unstake_without_stake() {
        let mut vault = funded_vault();
        let mut ledger = StakeLedger::new();
        let err = ledger.unstake(&mut vault, &staker(), 10_000).unwrap_err();
        assert!(matches!(err, PalisadeError::NoStakeFound));
    }

    #[test]
    fn test_unstake_lockup_boundary() {
        let mut vault = funded_vault();
        let mut ledger = StakeLedger::new();
        ledger.stake(&mut vault, staker(), 2_000, 100).unwrap();

        // One block before the lockup elapses.
        let err = ledger
            .unstake(&mut vault, &staker(), 100 + STAKE_LOCKUP_PERIOD - 1)
            .unwrap_err();
        assert!(matches!(err, PalisadeError::NotAuthorized));
        assert!(ledger.get(&staker()).is_some());

        // Exactly at the lockup end.
        let released = ledger
            .unstake(&mut vault, &staker(), 100 + STAKE_LOCKUP_PERIOD)
            .unwrap();
        assert_eq!(released, 2_000);
        assert!(ledger.get(&staker()).is_none());
        assert_eq!(vault.balance_of(&staker()), 10_000);
        assert_eq!(vault.custody_balance(), 0);
    }

    #[test]
    fn test_restake_after_unstake() {
        let mut vault = funded_vault();
        let mut ledger = StakeLedger::new();
        ledger.stake(&mut vault, staker(), 1_000, 100).unwrap();
        ledger
            .unstake(&mut vault, &staker(), 100 + STAKE_LOCKUP_PERIOD)
            .unwrap();

        // Fresh stake gets a fresh lockup.
        let restake_height = 100 + STAKE_LOCKUP_PERIOD + 5;
        ledger
            .stake(&mut vault, staker(), 1_500, restake_height)
            .unwrap();
        let record = ledger.get(&staker()).unwrap();
        assert_eq!(record.staked_at, restake_height);
        assert_eq!(record.unlocks_at(), restake_height + STAKE_LOCKUP_PERIOD);
    }

    #[test]
    fn test_total_staked() {
        let mut vault = funded_vault();
        let other = Principal::from_bytes([2u8; 32]);
        vault.credit(other, 3_000);

        let mut ledger = StakeLedger::new();
        assert_eq!(ledger.total_staked(), 0);
        ledger.stake(&mut vault, staker(), 2_000, 100).unwrap();
        ledger.stake(&mut vault, other, 3_000, 100).unwrap();
        assert_eq!(ledger.total_staked(), 5_000);
        assert_eq!(ledger.len(), 2);
    }
}
