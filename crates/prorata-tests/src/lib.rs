//! Integration and adversarial test suite for Prorata.
//!
//! This crate contains end-to-end tests that exercise the pool through
//! its public surface and property-based tests that attempt to break
//! the accounting invariants under randomized operation sequences.

pub mod helpers;
