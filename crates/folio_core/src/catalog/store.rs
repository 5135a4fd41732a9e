//! In-memory catalog store.
//!
//! # Responsibility
//! - Validate project records once at load and keep them in insertion order.
//! - Provide read-only access for filter/browse layers.
//! - Own the bundled site catalog.
//!
//! # Invariants
//! - Record ids are unique within one store.
//! - A constructed store is never mutated.

use crate::model::project::{ProjectRecord, ProjectValidationError, RawProjectRecord};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/projects.json");

static BUILTIN_CATALOG: OnceCell<CatalogStore> = OnceCell::new();

/// Result type for catalog loading APIs.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load error.
#[derive(Debug)]
pub enum CatalogError {
    /// Record at `index` failed validation.
    InvalidRecord {
        index: usize,
        source: ProjectValidationError,
    },
    DuplicateId(String),
    /// Static data could not be decoded.
    Parse(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecord { index, source } => {
                write!(f, "invalid project record at index {index}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate project id: {id}"),
            Self::Parse(err) => write!(f, "failed to parse project catalog: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Immutable ordered project catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    records: Vec<ProjectRecord>,
}

impl CatalogStore {
    /// Builds a catalog from already-constructed records.
    ///
    /// Every record is revalidated and ids must be unique. Insertion order is
    /// preserved.
    pub fn from_records(records: Vec<ProjectRecord>) -> CatalogResult<Self> {
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord { index, source })?;
        }
        Self::from_validated(records)
    }

    /// Loads a catalog from a JSON array of project records.
    ///
    /// Malformed JSON is a [`CatalogError::Parse`]; a well-formed record that
    /// breaks a record invariant is a [`CatalogError::InvalidRecord`] carrying
    /// its array index.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let raw_records: Vec<RawProjectRecord> = serde_json::from_str(json).map_err(|err| {
            error!(
                "event=catalog_load module=catalog status=error line={} column={}",
                err.line(),
                err.column()
            );
            CatalogError::Parse(err)
        })?;

        let records = raw_records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                ProjectRecord::try_from(raw).map_err(|source| {
                    error!(
                        "event=catalog_load module=catalog status=error index={index} reason=invalid_record"
                    );
                    CatalogError::InvalidRecord { index, source }
                })
            })
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_validated(records)
    }

    /// Returns the catalog bundled with the crate, loading it on first use.
    pub fn try_builtin() -> CatalogResult<&'static CatalogStore> {
        BUILTIN_CATALOG.get_or_try_init(|| Self::from_json_str(BUILTIN_CATALOG_JSON))
    }

    /// Returns the full catalog in insertion order.
    pub fn get_all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Looks up one record by stable id.
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the highlight subset in catalog order.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.records.iter().filter(|record| record.featured).collect()
    }

    fn from_validated(records: Vec<ProjectRecord>) -> CatalogResult<Self> {
        let mut ids = BTreeSet::<&str>::new();
        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        info!(
            "event=catalog_load module=catalog status=ok records={}",
            records.len()
        );
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
