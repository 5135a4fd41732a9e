//! Browse use-case services.
//!
//! # Responsibility
//! - Own the mutable filter/window slot on behalf of the presentation layer.
//! - Keep UI callers decoupled from filter and pagination details.

pub mod browser;
