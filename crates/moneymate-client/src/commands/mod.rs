pub(crate) mod common;
pub mod dashboard;
pub mod transaction;
