//! Module for core business logic services.
//!
//! This module holds the development peer that stands in for the blockchain host:
//! it owns the ledger, orders state-changing calls and hands queries a read-only
//! view of the state.

pub mod peer;

pub use peer::Peer;
