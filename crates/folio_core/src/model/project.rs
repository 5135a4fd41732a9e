//! Project record domain model.
//!
//! # Responsibility
//! - Define the record shown on the projects page and used by filtering.
//! - Validate record shape exactly once, at construction/deserialization.
//!
//! # Invariants
//! - `id` is a lowercase slug and stays stable across catalog reloads.
//! - `category` is a single non-blank value.
//! - `technologies` is non-empty and holds no blank or duplicated tags.
//! - External links are absolute http(s) URLs; internal links start with `/`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EXTERNAL_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("valid external link regex"));

/// Stable identifier of one project record.
pub type ProjectId = String;

/// Canonical catalog record for one portfolio project.
///
/// Serialized with camelCase keys to match the site's static data files.
/// Deserialization runs [`ProjectRecord::validate`], so a decoded record is
/// always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawProjectRecord")]
pub struct ProjectRecord {
    /// Stable slug, e.g. `shop-app`.
    pub id: ProjectId,
    pub title: String,
    /// Short summary shown on cards; searched by the free-text query.
    pub description: String,
    /// Detail page copy. May be empty.
    pub long_description: String,
    /// Exactly one category per record.
    pub category: String,
    /// Ordered technology tags. Order is display order.
    pub technologies: Vec<String>,
    /// Selects the record for the highlight subset.
    pub featured: bool,
    /// Navigation target for the card.
    pub link: String,
    /// Whether `link` leaves the site.
    pub external: bool,
}

impl ProjectRecord {
    /// Creates a record with the required fields and validates it.
    ///
    /// Optional display fields start empty/false; use the `with_*` builders to
    /// fill them. The link defaults to `/projects/<id>`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        technologies: Vec<String>,
    ) -> Result<Self, ProjectValidationError> {
        let id = id.into();
        let link = format!("/projects/{id}");
        let record = Self {
            id,
            title: title.into(),
            description: description.into(),
            long_description: String::new(),
            category: category.into(),
            technologies,
            featured: false,
            link,
            external: false,
        };
        record.validate()?;
        Ok(record)
    }

    /// Sets the detail page copy.
    pub fn with_long_description(mut self, value: impl Into<String>) -> Self {
        self.long_description = value.into();
        self
    }

    /// Marks the record as part of the highlight subset.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Replaces the navigation target and revalidates the link.
    pub fn with_link(
        mut self,
        link: impl Into<String>,
        external: bool,
    ) -> Result<Self, ProjectValidationError> {
        self.link = link.into();
        self.external = external;
        validate_link(&self.link, self.external)?;
        Ok(self)
    }

    /// Validates load-time record invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if !is_valid_project_id(&self.id) {
            return Err(ProjectValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::EmptyField("description"));
        }
        if self.category.trim().is_empty() {
            return Err(ProjectValidationError::EmptyField("category"));
        }

        if self.technologies.is_empty() {
            return Err(ProjectValidationError::MissingTechnologies);
        }
        let mut seen = BTreeSet::<&str>::new();
        for technology in &self.technologies {
            if technology.trim().is_empty() {
                return Err(ProjectValidationError::EmptyTechnology);
            }
            if !seen.insert(technology.as_str()) {
                return Err(ProjectValidationError::DuplicateTechnology(
                    technology.clone(),
                ));
            }
        }

        validate_link(&self.link, self.external)
    }

    /// Returns whether the record carries the given technology tag.
    pub fn uses_technology(&self, technology: &str) -> bool {
        self.technologies.iter().any(|value| value == technology)
    }
}

/// Wire shape used before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProjectRecord {
    id: String,
    title: String,
    description: String,
    #[serde(default)]
    long_description: String,
    category: String,
    technologies: Vec<String>,
    #[serde(default)]
    featured: bool,
    link: Option<String>,
    #[serde(default)]
    external: bool,
}

impl TryFrom<RawProjectRecord> for ProjectRecord {
    type Error = ProjectValidationError;

    fn try_from(raw: RawProjectRecord) -> Result<Self, Self::Error> {
        let link = raw.link.unwrap_or_else(|| format!("/projects/{}", raw.id));
        let record = Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            long_description: raw.long_description,
            category: raw.category,
            technologies: raw.technologies,
            featured: raw.featured,
            link,
            external: raw.external,
        };
        record.validate()?;
        Ok(record)
    }
}

fn validate_link(link: &str, external: bool) -> Result<(), ProjectValidationError> {
    if link.trim().is_empty() {
        return Err(ProjectValidationError::EmptyField("link"));
    }
    let valid = if external {
        EXTERNAL_LINK_RE.is_match(link)
    } else {
        link.starts_with('/') && !link.starts_with("//")
    };
    if !valid {
        return Err(ProjectValidationError::InvalidLink {
            link: link.to_string(),
            external,
        });
    }
    Ok(())
}

fn is_valid_project_id(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
            continue;
        }
        if c == '-' || c == '_' || c == '.' {
            if prev_separator {
                return false;
            }
            prev_separator = true;
            continue;
        }
        return false;
    }
    !prev_separator
}

/// Load-time record validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    InvalidId(String),
    /// A required display field is blank.
    EmptyField(&'static str),
    MissingTechnologies,
    EmptyTechnology,
    DuplicateTechnology(String),
    InvalidLink { link: String, external: bool },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id must not be empty"),
            Self::InvalidId(value) => write!(
                f,
                "project id is invalid: {value} (expected lowercase slug)"
            ),
            Self::EmptyField(name) => write!(f, "project {name} must not be empty"),
            Self::MissingTechnologies => write!(f, "project technologies must not be empty"),
            Self::EmptyTechnology => write!(f, "project contains empty technology value"),
            Self::DuplicateTechnology(value) => {
                write!(f, "project technology is duplicated: {value}")
            }
            Self::InvalidLink { link, external } => {
                if *external {
                    write!(f, "external project link must be an http(s) URL: {link}")
                } else {
                    write!(f, "internal project link must start with `/`: {link}")
                }
            }
        }
    }
}

impl Error for ProjectValidationError {}
