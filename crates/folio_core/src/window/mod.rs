//! "Load more" pagination over filtered results.
//!
//! # Invariants
//! - The visible window is always a prefix of the filtered sequence.
//! - A filter change resets the window to its initial size.

pub mod pagination;
