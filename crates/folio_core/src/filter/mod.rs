//! Catalog filtering.
//!
//! # Responsibility
//! - Model the user's filter selection as an explicit value (`FilterState`).
//! - Translate it into a record predicate and apply it to the catalog.
//!
//! # Invariants
//! - Filtering is pure and never fails.
//! - Criteria only narrow: the composed predicate is a logical AND.
//! - Output preserves catalog order.

pub mod engine;
pub mod predicate;
pub mod state;
