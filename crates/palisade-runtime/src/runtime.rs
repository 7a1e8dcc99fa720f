// crates/palisade-runtime/src/runtime.rs
//
// The runtime facade: four ledgers plus the token custody collaborator,
// behind the public operation surface.
//
// Every mutating operation validates fully before writing anything, so
// each call either applies completely or leaves all ledgers untouched.
// The facade takes `&mut self` for mutations; hosts that share it across
// tasks wrap it in a lock and hold the guard for the whole call.

use palisade_core::{
    ContentHash, ContentId, ContentRecord, ContentStatus, PalisadeError, Principal, TokenTransfer,
    VoteDirection,
};
use palisade_economics::{StakeLedger, StakeRecord};
use palisade_moderation::{finalize_content, ContentRegistry, ReputationLedger, VoteLedger};

use crate::context::CallContext;

/// The Palisade moderation state machine.
pub struct PalisadeRuntime {
    registry: ContentRegistry,
    votes: VoteLedger,
    reputation: ReputationLedger,
    stakes: StakeLedger,
    vault: Box<dyn TokenTransfer>,
}

impl PalisadeRuntime {
    /// Create a runtime over the given token custody collaborator.
    /// All ledgers start empty.
    pub fn new(vault: Box<dyn TokenTransfer>) -> Self {
        Self {
            registry: ContentRegistry::new(),
            votes: VoteLedger::new(),
            reputation: ReputationLedger::new(),
            stakes: StakeLedger::new(),
            vault,
        }
    }

    /// Submit content for moderation and return its assigned id.
    ///
    /// Never fails: any sender may submit, duplicate hashes included.
    /// The record starts pending with zero tallies and a voting window
    /// stamped from the call's block height.
    pub fn submit_content(&mut self, ctx: &CallContext, content_hash: ContentHash) -> ContentId {
        self.registry
            .submit(ctx.sender, content_hash, ctx.block_height)
    }

    /// Cast a vote on a pending content record.
    pub fn vote(
        &mut self,
        ctx: &CallContext,
        content_id: ContentId,
        direction: VoteDirection,
    ) -> Result<(), PalisadeError> {
        self.votes.cast(
            &mut self.registry,
            &self.reputation,
            ctx.sender,
            content_id,
            direction,
            ctx.block_height,
        )
    }

    /// Finalize a record whose voting window has closed and return the
    /// final status. Any sender may finalize; the outcome depends only
    /// on the tallies.
    pub fn finalize_moderation(
        &mut self,
        ctx: &CallContext,
        content_id: ContentId,
    ) -> Result<ContentStatus, PalisadeError> {
        finalize_content(&mut self.registry, content_id, ctx.block_height)
    }

    /// Stake tokens on behalf of the sender.
    pub fn stake_tokens(&mut self, ctx: &CallContext, amount: u64) -> Result<(), PalisadeError> {
        self.stakes
            .stake(self.vault.as_mut(), ctx.sender, amount, ctx.block_height)
    }

    /// Withdraw the sender's stake after its lockup and return the
    /// released amount.
    pub fn unstake_tokens(&mut self, ctx: &CallContext) -> Result<u64, PalisadeError> {
        self.stakes
            .unstake(self.vault.as_mut(), &ctx.sender, ctx.block_height)
    }

    /// Look up a content record.
    pub fn get_content(&self, content_id: ContentId) -> Option<&ContentRecord> {
        self.registry.get(content_id)
    }

    /// Reputation score of a principal. Unknown principals score 0.
    pub fn get_user_reputation(&self, who: &Principal) -> u64 {
        self.reputation.score_of(who)
    }

    /// Whether a principal has voted on a content record.
    pub fn has_voted(&self, content_id: ContentId, who: &Principal) -> bool {
        self.votes.has_voted(content_id, who)
    }

    /// Snapshot of content records, optionally filtered by status,
    /// ordered by id.
    pub fn list_content(&self, status: Option<ContentStatus>) -> Vec<ContentRecord> {
        self.registry.list(status)
    }

    /// The active stake of a principal, if any.
    pub fn stake_of(&self, who: &Principal) -> Option<&StakeRecord> {
        self.stakes.get(who)
    }

    /// Spendable token balance of a principal.
    pub fn token_balance(&self, who: &Principal) -> u64 {
        self.vault.balance_of(who)
    }

    /// Number of content records ever submitted.
    pub fn content_count(&self) -> usize {
        self.registry.len()
    }

    /// Sum of all active stakes.
    pub fn total_staked(&self) -> u64 {
        self.stakes.total_staked()
    }

    /// Set a principal's reputation score.
    ///
    /// Host-facing extension point: none of the public operations ever
    /// adjusts a score. Used by genesis seeding and devnet grants.
    pub fn grant_reputation(&mut self, who: Principal, score: u64) {
        self.reputation.set_score(who, score);
    }
}
