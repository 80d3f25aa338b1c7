//! # prorata-service — thread-safe pool service.
//!
//! Wraps the [`prorata_core`] ledger in a lock so deposits, reward
//! injections, and withdrawals from concurrent callers run strictly
//! serialized, and broadcasts pool events on a tokio channel.
//!
//! The main entry point is [`PoolService::new`], which takes a
//! [`PoolConfig`] and a payment backend and returns a service handle
//! that is cheap to share behind an `Arc`.

pub mod config;
pub mod service;

pub use config::{DEFAULT_EVENT_CAPACITY, PoolConfig};
pub use service::PoolService;
