//! Decoder test suite

mod remarks_tests;

use chrono::FixedOffset;

use super::{DecodeContext, Decoder};
use crate::app::models::Report;

/// Fixed decode context so tests are independent of the wall clock
pub(crate) fn test_context() -> DecodeContext {
    DecodeContext::new(1, 2020, FixedOffset::east_opt(0).unwrap())
        .expect("test context must be valid")
}

/// Decode a raw report against the fixed test context
pub(crate) fn decode(raw: &str) -> Report {
    Decoder::new()
        .expect("decoder must construct")
        .decode(raw, &test_context())
        .expect("report must decode")
}
