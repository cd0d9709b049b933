pub(crate) mod persist;
pub(crate) mod query;
