//! Project browse session.
//!
//! # Responsibility
//! - Hold the current `FilterState` and pagination window for one visitor.
//! - Recompute the filtered view whenever the filter changes.
//!
//! # Invariants
//! - Every filter change recomputes from the full catalog; the previous result
//!   is never patched.
//! - Every filter change resets the window, even when the state is unchanged.
//! - Facet selections must name a value present in the catalog.

use crate::catalog::facets::{distinct_categories, distinct_technologies};
use crate::catalog::store::CatalogStore;
use crate::config::BrowseConfig;
use crate::filter::engine::query;
use crate::filter::state::{FacetFilter, FilterState};
use crate::model::project::ProjectRecord;
use crate::window::pagination::{PaginationWindow, WindowStatus};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Browse session error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    UnknownCategory(String),
    UnknownTechnology(String),
}

impl Display for BrowseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(value) => write!(f, "category not in catalog: {value}"),
            Self::UnknownTechnology(value) => write!(f, "technology not in catalog: {value}"),
        }
    }
}

impl Error for BrowseError {}

/// Snapshot returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView<'a> {
    /// Visible prefix of the filtered result.
    pub items: Vec<&'a ProjectRecord>,
    /// Size of the full filtered result.
    pub total_matches: usize,
    pub has_more: bool,
    pub status: WindowStatus,
}

/// Stateful browse session over an immutable catalog.
#[derive(Debug, Clone)]
pub struct ProjectBrowser<'a> {
    catalog: &'a CatalogStore,
    categories: Vec<String>,
    technologies: Vec<String>,
    state: FilterState,
    filtered: Vec<&'a ProjectRecord>,
    window: PaginationWindow,
}

impl<'a> ProjectBrowser<'a> {
    /// Starts a session with neutral filters.
    pub fn new(catalog: &'a CatalogStore, config: BrowseConfig) -> Self {
        let records = catalog.get_all();
        let state = FilterState::new();
        Self {
            catalog,
            categories: distinct_categories(records),
            technologies: distinct_technologies(records),
            filtered: query(records, &state),
            state,
            window: PaginationWindow::new(&config),
        }
    }

    /// Replaces the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) -> BrowseView<'a> {
        let next = self.state.clone().with_query(query);
        self.refilter(next)
    }

    /// Selects a category; `all` clears the constraint.
    pub fn select_category(&mut self, category: &str) -> Result<BrowseView<'a>, BrowseError> {
        let filter = FacetFilter::parse(category);
        self.check_category(&filter)?;
        let next = self.state.clone().with_category(filter);
        Ok(self.refilter(next))
    }

    /// Selects a technology; `all` clears the constraint.
    pub fn select_technology(&mut self, technology: &str) -> Result<BrowseView<'a>, BrowseError> {
        let filter = FacetFilter::parse(technology);
        self.check_technology(&filter)?;
        let next = self.state.clone().with_technology(filter);
        Ok(self.refilter(next))
    }

    /// Replaces the whole filter state after checking its facet values.
    pub fn apply_state(&mut self, state: FilterState) -> Result<BrowseView<'a>, BrowseError> {
        self.check_category(&state.category)?;
        self.check_technology(&state.technology)?;
        Ok(self.refilter(state))
    }

    /// Returns to neutral filters.
    pub fn clear_filters(&mut self) -> BrowseView<'a> {
        self.refilter(FilterState::new())
    }

    /// Grows the window by one step and returns the resulting status.
    pub fn load_more(&mut self) -> WindowStatus {
        self.window.load_more();
        let status = self.window.status(&self.filtered);
        debug!(
            "event=browse_load_more module=service status=ok page_size={} matches={}",
            self.window.page_size(),
            self.filtered.len()
        );
        status
    }

    pub fn view(&self) -> BrowseView<'a> {
        let status = self.window.status(&self.filtered);
        BrowseView {
            items: self.window.visible(&self.filtered).to_vec(),
            total_matches: self.filtered.len(),
            has_more: status == WindowStatus::Partial,
            status,
        }
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    /// Category options for the filter UI, in catalog order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Technology options for the filter UI, in catalog order.
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    fn check_category(&self, filter: &FacetFilter) -> Result<(), BrowseError> {
        match filter.value() {
            Some(value) if !self.categories.iter().any(|known| known == value) => {
                Err(BrowseError::UnknownCategory(value.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn check_technology(&self, filter: &FacetFilter) -> Result<(), BrowseError> {
        match filter.value() {
            Some(value) if !self.technologies.iter().any(|known| known == value) => {
                Err(BrowseError::UnknownTechnology(value.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn refilter(&mut self, state: FilterState) -> BrowseView<'a> {
        self.filtered = query(self.catalog.get_all(), &state);
        self.state = state;
        self.window.reset();
        // Query text stays out of logs; only its length is recorded.
        debug!(
            "event=browse_filter module=service status=ok query_len={} category={} technology={} matches={}",
            self.state.query.chars().count(),
            self.state.category.value().unwrap_or("all"),
            self.state.technology.value().unwrap_or("all"),
            self.filtered.len()
        );
        self.view()
    }
}
