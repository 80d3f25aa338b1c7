//! Pooled-funds ledger with O(1) proportional reward accounting.
//!
//! [`PoolLedger`] tracks each depositor's principal and distributes
//! injected rewards pro rata over the principal present at injection
//! time. It provides:
//! - O(1) deposit, reward injection, and withdrawal
//! - A cumulative reward-per-deposit index with per-account checkpoints
//! - All-or-nothing withdrawal through a pluggable [`PaymentGateway`]
//! - An append-only event log for downstream consumers
//!
//! Reward injection is gated by a pluggable [`RewardAuthorizer`].
//! Every mutating operation validates fully before touching state, so a
//! failed call leaves the ledger exactly as it was.
//!
//! Not thread-safe — callers should wrap in a `Mutex` or `RwLock` if
//! concurrent access is needed.

use std::collections::HashMap;
use std::sync::Arc;

use crate::accrual;
use crate::error::LedgerError;
use crate::events::PoolEvent;
use crate::traits::{PaymentGateway, RewardAuthorizer};
use crate::types::{AccountId, DepositorAccount};

/// Pooled-funds ledger.
///
/// Owns the depositor map, the three aggregate counters, and the event
/// log. Reward math lives in [`crate::accrual`]; this type sequences the
/// state transitions around it.
pub struct PoolLedger {
    /// Depositor records, keyed by account. Records are retained with
    /// zeroed balances after withdrawal.
    accounts: HashMap<AccountId, DepositorAccount>,
    /// Sum of all current principals.
    total_deposited: u64,
    /// Running total of every reward injection. Never decreases.
    total_rewards_deposited: u64,
    /// Cumulative reward per deposited unit, scaled by
    /// [`REWARD_SCALE`](crate::constants::REWARD_SCALE).
    reward_per_deposit: u64,
    /// Events recorded by mutating operations, in order.
    events: Vec<PoolEvent>,
    /// Policy deciding who may inject rewards.
    authorizer: Arc<dyn RewardAuthorizer>,
    /// Payment backend for withdrawals.
    payments: Arc<dyn PaymentGateway>,
}

impl PoolLedger {
    /// Create an empty ledger with the given collaborators.
    pub fn new(authorizer: Arc<dyn RewardAuthorizer>, payments: Arc<dyn PaymentGateway>) -> Self {
        Self {
            accounts: HashMap::new(),
            total_deposited: 0,
            total_rewards_deposited: 0,
            reward_per_deposit: 0,
            events: Vec::new(),
            authorizer,
            payments,
        }
    }

    /// Record a deposit of `amount` for `caller`.
    ///
    /// Any account may deposit, any number of times. A repeat deposit
    /// first settles the rewards accrued on the existing principal, then
    /// re-checkpoints the account at the current index, so prior
    /// accruals are preserved exactly. A zero-amount deposit is legal:
    /// it is recorded in the event log but leaves balances and the
    /// checkpoint untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AmountOverflow`] if the account principal
    /// or the pool total would exceed `u64::MAX`. The ledger is
    /// unchanged on error.
    pub fn deposit(&mut self, caller: AccountId, amount: u64) -> Result<(), LedgerError> {
        if amount == 0 {
            // A zero deposit records the event and nothing else;
            // settling here would truncate the pending-reward fraction
            // on every call.
            self.accounts.entry(caller).or_default();
            self.events.push(PoolEvent::Deposited {
                account: caller,
                amount: 0,
            });
            return Ok(());
        }

        let account = self.accounts.get(&caller).copied().unwrap_or_default();

        // Settle accrued rewards before the principal (and with it the
        // account's share weight) changes.
        let pending = accrual::pending_reward(
            account.principal,
            self.reward_per_deposit,
            account.reward_debt,
        )?;
        let settled = account
            .settled_rewards
            .checked_add(pending)
            .ok_or(LedgerError::AmountOverflow)?;
        let principal = account
            .principal
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        let total = self
            .total_deposited
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;

        self.accounts.insert(
            caller,
            DepositorAccount {
                principal,
                reward_debt: self.reward_per_deposit,
                settled_rewards: settled,
            },
        );
        self.total_deposited = total;
        self.events.push(PoolEvent::Deposited {
            account: caller,
            amount,
        });
        Ok(())
    }

    /// Inject `amount` of reward, distributed pro rata over current
    /// principals.
    ///
    /// Only callers accepted by the [`RewardAuthorizer`] may inject.
    /// The injection advances the reward-per-deposit index by
    /// `amount * REWARD_SCALE / total_deposited`, truncated; the
    /// truncation remainder stays in the pool as undistributed dust.
    /// No event is emitted.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Unauthorized`] if `caller` is not accepted by
    ///   the authorizer.
    /// - [`LedgerError::NoDepositors`] if nothing is deposited; a
    ///   reward with no one to receive it is rejected outright.
    /// - [`LedgerError::AmountOverflow`] if the index or the reward
    ///   running total would exceed `u64::MAX`.
    ///
    /// The ledger is unchanged on error.
    pub fn deposit_reward(&mut self, caller: &AccountId, amount: u64) -> Result<(), LedgerError> {
        if !self.authorizer.can_deposit_rewards(caller) {
            return Err(LedgerError::Unauthorized);
        }
        if self.total_deposited == 0 {
            return Err(LedgerError::NoDepositors);
        }

        let increment = accrual::index_increment(amount, self.total_deposited)?;
        let index = self
            .reward_per_deposit
            .checked_add(increment)
            .ok_or(LedgerError::AmountOverflow)?;
        let total_rewards = self
            .total_rewards_deposited
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;

        self.reward_per_deposit = index;
        self.total_rewards_deposited = total_rewards;
        Ok(())
    }

    /// Withdraw `caller`'s full balance: principal plus all settled and
    /// pending rewards. Partial withdrawal is not supported.
    ///
    /// The payment is issued before any state changes; a failed payment
    /// leaves the ledger untouched. On success the account is zeroed
    /// but its record is retained, and the payout amount is returned.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `caller` has no active
    ///   principal.
    /// - [`LedgerError::AmountOverflow`] if the payout computation
    ///   would exceed `u64::MAX`.
    /// - [`LedgerError::Payment`] if the gateway rejects the payment.
    ///
    /// The ledger is unchanged on error.
    pub fn withdraw(&mut self, caller: &AccountId) -> Result<u64, LedgerError> {
        let account = self.accounts.get(caller).copied().unwrap_or_default();
        if !account.is_active() {
            return Err(LedgerError::InsufficientBalance);
        }

        let pending = accrual::pending_reward(
            account.principal,
            self.reward_per_deposit,
            account.reward_debt,
        )?;
        let payout = account
            .principal
            .checked_add(account.settled_rewards)
            .and_then(|sum| sum.checked_add(pending))
            .ok_or(LedgerError::AmountOverflow)?;

        // Pay first; a failed payment leaves the ledger unchanged.
        self.payments.pay(caller, payout)?;

        // Retain the record with zeroed balances for idempotent
        // re-deposit later.
        self.accounts.insert(*caller, DepositorAccount::default());
        self.total_deposited -= account.principal;
        self.events.push(PoolEvent::Withdrawn {
            account: *caller,
            amount: payout,
        });
        Ok(payout)
    }

    /// Current principal of `account` (0 if unknown or withdrawn).
    pub fn deposit_of(&self, account: &AccountId) -> u64 {
        self.accounts
            .get(account)
            .map(|a| a.principal)
            .unwrap_or(0)
    }

    /// Rewards settled to `account` by repeat deposits but not yet
    /// withdrawn. Zero for accounts that never re-deposited.
    pub fn rewards_of(&self, account: &AccountId) -> u64 {
        self.accounts
            .get(account)
            .map(|a| a.settled_rewards)
            .unwrap_or(0)
    }

    /// Live view of everything `account` would receive on top of its
    /// principal if it withdrew now: settled rewards plus rewards
    /// accrued since the last checkpoint. Saturates instead of failing.
    pub fn accrued_reward_of(&self, account: &AccountId) -> u64 {
        let Some(account) = self.accounts.get(account) else {
            return 0;
        };
        let pending =
            accrual::pending_reward(account.principal, self.reward_per_deposit, account.reward_debt)
                .unwrap_or(u64::MAX);
        account.settled_rewards.saturating_add(pending)
    }

    /// Sum of all current principals.
    pub fn total_deposited(&self) -> u64 {
        self.total_deposited
    }

    /// Running total of every reward injection.
    pub fn total_rewards_deposited(&self) -> u64 {
        self.total_rewards_deposited
    }

    /// Current cumulative reward-per-deposit index (scaled).
    pub fn reward_per_deposit(&self) -> u64 {
        self.reward_per_deposit
    }

    /// Number of accounts with a ledger record, including withdrawn
    /// accounts whose balances are zero.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drain the event log, returning the recorded events oldest first.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }
}

impl std::fmt::Debug for PoolLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolLedger")
            .field("accounts", &self.accounts.len())
            .field("total_deposited", &self.total_deposited)
            .field("total_rewards_deposited", &self.total_rewards_deposited)
            .field("reward_per_deposit", &self.reward_per_deposit)
            .finish_non_exhaustive()
    }
}
