//! Thread-safe pool service.
//!
//! [`PoolService`] wraps a [`PoolLedger`] in a `RwLock` so that the
//! three mutating operations run strictly serialized while reads share
//! the lock, and republishes ledger events on a tokio broadcast channel
//! for downstream subscribers. Ownership of the reward-injection
//! privilege is held by an [`OwnerAuthorizer`] and can be transferred
//! at runtime.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use prorata_core::auth::OwnerAuthorizer;
use prorata_core::error::LedgerError;
use prorata_core::events::PoolEvent;
use prorata_core::ledger::PoolLedger;
use prorata_core::traits::PaymentGateway;
use prorata_core::types::AccountId;

use crate::config::PoolConfig;

/// The pool service, composing the ledger, the ownership policy, and
/// the event broadcast channel.
pub struct PoolService {
    /// Ledger behind a read-write lock. Mutating operations take the
    /// write lock for their full duration, including the payment call
    /// inside `withdraw` and the event publication that follows a
    /// successful commit.
    ledger: RwLock<PoolLedger>,
    /// Broadcast side of the event channel. Send errors mean no
    /// subscriber is currently listening and are ignored.
    events: broadcast::Sender<PoolEvent>,
    /// Ownership policy shared with the ledger.
    authorizer: Arc<OwnerAuthorizer>,
    /// Service configuration.
    config: PoolConfig,
}

impl PoolService {
    /// Create a new service with the given configuration and payment
    /// backend. The account in `config.owner` starts as the reward
    /// injector.
    pub fn new(config: PoolConfig, payments: Arc<dyn PaymentGateway>) -> Self {
        let authorizer = Arc::new(OwnerAuthorizer::new(config.owner));
        let ledger = PoolLedger::new(authorizer.clone(), payments);
        let (events, _) = broadcast::channel(config.channel_capacity());

        Self {
            ledger: RwLock::new(ledger),
            events,
            authorizer,
            config,
        }
    }

    /// Record a deposit of `amount` for `caller` and broadcast the
    /// resulting event.
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerError::AmountOverflow`] from the ledger.
    pub fn deposit(&self, caller: AccountId, amount: u64) -> Result<(), LedgerError> {
        {
            let mut ledger = self.ledger.write();
            ledger.deposit(caller, amount)?;
            self.publish(ledger.take_events());
        }
        debug!(account = %caller, amount, "deposit recorded");
        Ok(())
    }

    /// Inject `amount` of reward on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerError::Unauthorized`],
    /// [`LedgerError::NoDepositors`], and
    /// [`LedgerError::AmountOverflow`] from the ledger.
    pub fn deposit_reward(&self, caller: &AccountId, amount: u64) -> Result<(), LedgerError> {
        {
            let mut ledger = self.ledger.write();
            ledger.deposit_reward(caller, amount)?;
        }
        info!(account = %caller, amount, "reward injected");
        Ok(())
    }

    /// Withdraw `caller`'s full balance, returning the payout amount
    /// and broadcasting the resulting event.
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerError::InsufficientBalance`],
    /// [`LedgerError::AmountOverflow`], and [`LedgerError::Payment`]
    /// from the ledger.
    pub fn withdraw(&self, caller: &AccountId) -> Result<u64, LedgerError> {
        let payout = {
            let mut ledger = self.ledger.write();
            match ledger.withdraw(caller) {
                Ok(payout) => {
                    self.publish(ledger.take_events());
                    payout
                }
                Err(e) => {
                    if matches!(e, LedgerError::Payment(_)) {
                        warn!(account = %caller, "withdrawal payment failed: {e}");
                    }
                    return Err(e);
                }
            }
        };
        info!(account = %caller, amount = payout, "withdrawal paid");
        Ok(payout)
    }

    /// Transfer the reward-injection privilege from `caller` to
    /// `new_owner`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] when `caller` is not the
    /// current owner.
    pub fn transfer_ownership(
        &self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), LedgerError> {
        self.authorizer.transfer(caller, new_owner)?;
        info!(owner = %new_owner, "ownership transferred");
        Ok(())
    }

    /// Subscribe to pool events. Each subscriber receives every event
    /// broadcast after the subscription, in operation order.
    pub fn subscribe(&self) -> broadcast::Receiver<PoolEvent> {
        self.events.subscribe()
    }

    /// Account currently authorized to inject rewards.
    pub fn owner(&self) -> AccountId {
        self.authorizer.owner()
    }

    /// Current principal of `account`.
    pub fn deposit_of(&self, account: &AccountId) -> u64 {
        self.ledger.read().deposit_of(account)
    }

    /// Rewards settled to `account` by repeat deposits.
    pub fn rewards_of(&self, account: &AccountId) -> u64 {
        self.ledger.read().rewards_of(account)
    }

    /// Everything `account` would receive on top of its principal if it
    /// withdrew now.
    pub fn accrued_reward_of(&self, account: &AccountId) -> u64 {
        self.ledger.read().accrued_reward_of(account)
    }

    /// Sum of all current principals.
    pub fn total_deposited(&self) -> u64 {
        self.ledger.read().total_deposited()
    }

    /// Running total of every reward injection.
    pub fn total_rewards_deposited(&self) -> u64 {
        self.ledger.read().total_rewards_deposited()
    }

    /// Current cumulative reward-per-deposit index (scaled).
    pub fn reward_per_deposit(&self) -> u64 {
        self.ledger.read().reward_per_deposit()
    }

    /// Number of accounts with a ledger record.
    pub fn account_count(&self) -> usize {
        self.ledger.read().account_count()
    }

    /// Service configuration reference.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Broadcast drained ledger events (best-effort).
    ///
    /// Called with the ledger write lock held so events reach the
    /// channel in commit order; `send` never blocks.
    fn publish(&self, events: Vec<PoolEvent>) {
        for event in events {
            let _ = self.events.send(event);
        }
    }
}

impl std::fmt::Debug for PoolService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolService")
            .field("owner", &self.authorizer.owner().to_string())
            .field("subscribers", &self.events.receiver_count())
            .finish_non_exhaustive()
    }
}
