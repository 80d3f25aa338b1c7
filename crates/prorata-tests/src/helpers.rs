//! Shared test helpers for E2E and integration tests.

use std::sync::Arc;

use prorata_core::auth::OwnerAuthorizer;
use prorata_core::ledger::PoolLedger;
use prorata_core::payment::MemoryGateway;
use prorata_core::types::AccountId;
use prorata_service::{PoolConfig, PoolService};

/// Account id from a seed byte.
pub fn acct(seed: u8) -> AccountId {
    AccountId([seed; 32])
}

/// The privileged reward injector used by the builders below.
pub fn owner() -> AccountId {
    acct(0xEE)
}

/// Service owned by [`owner`], paying into a fresh in-memory gateway.
pub fn test_service() -> (PoolService, Arc<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::new());
    let config = PoolConfig {
        owner: owner(),
        ..PoolConfig::default()
    };
    (PoolService::new(config, gateway.clone()), gateway)
}

/// Service owned by [`owner`] whose gateway rejects every payment.
pub fn rejecting_service(reason: &str) -> PoolService {
    let config = PoolConfig {
        owner: owner(),
        ..PoolConfig::default()
    };
    PoolService::new(config, Arc::new(MemoryGateway::rejecting(reason)))
}

/// Bare ledger owned by [`owner`], paying into a fresh in-memory gateway.
pub fn test_ledger() -> (PoolLedger, Arc<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::new());
    let ledger = PoolLedger::new(
        Arc::new(OwnerAuthorizer::new(owner())),
        gateway.clone(),
    );
    (ledger, gateway)
}
