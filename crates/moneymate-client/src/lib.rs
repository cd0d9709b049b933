pub mod commands;
pub mod contracts;
pub mod dashboard;
pub mod error;
mod ledger;
pub mod migrations;
pub mod setup;
pub mod state;

pub use contracts::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
