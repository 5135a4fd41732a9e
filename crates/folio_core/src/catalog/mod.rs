//! Project catalog storage and facet derivation.
//!
//! # Responsibility
//! - Load and hold the immutable, ordered project list.
//! - Derive the distinct filter options (facets) from it.
//!
//! # Invariants
//! - Catalog order is insertion order and never changes after load.
//! - Facet lists follow first-seen catalog order, deduplicated.

pub mod facets;
pub mod store;
