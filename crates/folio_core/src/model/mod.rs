//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical project record consumed by catalog, filter and
//!   browse layers.
//!
//! # Invariants
//! - Every record is identified by a stable slug `id`.
//! - Records are validated once at load time and never mutated afterwards.

pub mod project;
