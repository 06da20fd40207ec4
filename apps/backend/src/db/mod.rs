//! Per-request transaction handling.

pub mod txn;
