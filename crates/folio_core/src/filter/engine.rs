//! Query engine over the catalog.
//!
//! # Invariants
//! - Output is a subsequence of the input in the same relative order.
//! - Identical `(records, state)` inputs yield identical outputs.

use crate::filter::predicate::build_predicate;
use crate::filter::state::FilterState;
use crate::model::project::ProjectRecord;

/// Applies `predicate` in a single linear pass, keeping catalog order.
pub fn apply_filter<'a, P>(records: &'a [ProjectRecord], predicate: P) -> Vec<&'a ProjectRecord>
where
    P: Fn(&ProjectRecord) -> bool,
{
    records.iter().filter(|record| predicate(record)).collect()
}

/// Filters `records` by a full filter state.
pub fn query<'a>(records: &'a [ProjectRecord], state: &FilterState) -> Vec<&'a ProjectRecord> {
    apply_filter(records, build_predicate(state))
}
