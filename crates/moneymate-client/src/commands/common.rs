use std::path::Path;

use crate::ClientResult;
use crate::contracts::types::{DataRange, DataRangeHint};
use crate::setup::{SetupContext, ensure_initialized, ensure_initialized_at};

pub(crate) fn load_setup(home_override: Option<&Path>) -> ClientResult<SetupContext> {
    if let Some(home) = home_override {
        return ensure_initialized_at(home);
    }
    ensure_initialized()
}

pub(crate) fn data_range_hint(range: &DataRange) -> DataRangeHint {
    DataRangeHint {
        earliest: range.earliest.clone(),
        latest: range.latest.clone(),
    }
}
