//! Core catalog logic for the Folio portfolio site.
//! This crate owns project data validation, filtering and pagination; the
//! presentation layer only renders what it returns.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod service;
pub mod window;

pub use catalog::facets::{
    distinct_categories, distinct_technologies, facet_counts, FacetCount, FacetCounts,
};
pub use catalog::store::{CatalogError, CatalogResult, CatalogStore};
pub use config::{BrowseConfig, ConfigError};
pub use filter::engine::{apply_filter, query};
pub use filter::predicate::{build_predicate, ProjectPredicate};
pub use filter::state::{FacetFilter, FilterState, ALL_SENTINEL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{ProjectId, ProjectRecord, ProjectValidationError};
pub use service::browser::{BrowseError, BrowseView, ProjectBrowser};
pub use window::pagination::{has_more, visible_window, PaginationWindow, WindowStatus};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
