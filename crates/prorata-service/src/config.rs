//! Service configuration.
//!
//! Provides [`PoolConfig`] with defaults for the owner account and the
//! event broadcast channel. The configuration is set programmatically
//! by the embedding application.

use prorata_core::types::AccountId;

/// Default capacity of the event broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Configuration for a pool service instance.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Account initially authorized to inject rewards.
    pub owner: AccountId,
    /// Capacity of the event broadcast channel. Slow subscribers that
    /// fall more than this many events behind start missing events.
    pub event_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            owner: AccountId::ZERO,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl PoolConfig {
    /// Broadcast channel capacity, clamped to at least 1.
    pub fn channel_capacity(&self) -> usize {
        self.event_capacity.max(1)
    }
}
