//! Dashboard aggregation over the transaction ledger.
//!
//! Everything here is a pure function over an immutable snapshot: callers
//! load the current transactions and recompute from scratch on every pass.
//! No state is carried between invocations.

pub mod aggregate;
pub mod date;
pub mod query;
pub mod types;
