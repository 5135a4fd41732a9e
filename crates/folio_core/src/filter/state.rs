//! Filter selection state.
//!
//! # Invariants
//! - Missing or null fields decode to neutral values (empty query, `all`).
//! - The `all` sentinel means "no constraint", never a literal match.

use serde::{Deserialize, Deserializer, Serialize};

/// Wire/display token for [`FacetFilter::All`].
pub const ALL_SENTINEL: &str = "all";

/// Constraint on one facet (category or technology).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum FacetFilter {
    /// No constraint.
    #[default]
    All,
    /// Exact, case-sensitive match.
    Only(String),
}

impl FacetFilter {
    /// Builds a filter from a UI option value.
    ///
    /// Exactly `all` and the empty string map to [`FacetFilter::All`]; any
    /// other value is kept verbatim as an exact constraint.
    pub fn parse(value: &str) -> Self {
        Self::only(value)
    }

    /// Exact constraint on `value`, except for the sentinel and the empty
    /// string, which mean no constraint.
    pub fn only(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() || value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(value)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the constrained value, or `None` for `All`.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value.as_str()),
        }
    }
}

impl From<Option<String>> for FacetFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, Self::only)
    }
}

impl From<FacetFilter> for String {
    fn from(value: FacetFilter) -> Self {
        match value {
            FacetFilter::All => ALL_SENTINEL.to_string(),
            FacetFilter::Only(raw) => raw,
        }
    }
}

/// User filter selection, owned by the presentation layer.
///
/// Reconstructed per interaction; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text query. Empty matches everything.
    #[serde(deserialize_with = "null_as_empty")]
    pub query: String,
    pub category: FacetFilter,
    pub technology: FacetFilter,
}

impl FilterState {
    /// Neutral state: matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: FacetFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_technology(mut self, technology: FacetFilter) -> Self {
        self.technology = technology;
        self
    }

    /// Returns whether no criterion constrains the result.
    pub fn is_neutral(&self) -> bool {
        self.query.is_empty() && self.category.is_all() && self.technology.is_all()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
