//! Facet extraction for filter options.
//!
//! # Invariants
//! - Output follows first-seen catalog order and contains no duplicates.
//! - Pure functions of the input slice; recomputed on demand.

use crate::model::project::ProjectRecord;
use std::collections::HashMap;

/// One facet value with the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Category and technology facets with record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub categories: Vec<FacetCount>,
    pub technologies: Vec<FacetCount>,
}

/// Returns distinct categories in first-seen order.
pub fn distinct_categories(records: &[ProjectRecord]) -> Vec<String> {
    first_seen(records.iter().map(|record| record.category.as_str()))
}

/// Returns distinct technology tags across all records, in first-seen order.
pub fn distinct_technologies(records: &[ProjectRecord]) -> Vec<String> {
    first_seen(
        records
            .iter()
            .flat_map(|record| record.technologies.iter().map(String::as_str)),
    )
}

/// Counts records per category and per technology.
pub fn facet_counts(records: &[ProjectRecord]) -> FacetCounts {
    FacetCounts {
        categories: count_first_seen(records.iter().map(|record| record.category.as_str())),
        technologies: count_first_seen(
            records
                .iter()
                .flat_map(|record| record.technologies.iter().map(String::as_str)),
        ),
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    count_first_seen(values)
        .into_iter()
        .map(|facet| facet.value)
        .collect()
}

fn count_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetCount> {
    let mut positions = HashMap::<&str, usize>::new();
    let mut facets = Vec::<FacetCount>::new();
    for value in values {
        match positions.get(value).copied() {
            Some(position) => facets[position].count += 1,
            None => {
                positions.insert(value, facets.len());
                facets.push(FacetCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::{distinct_categories, distinct_technologies, facet_counts, FacetCount};
    use crate::model::project::ProjectRecord;

    fn record(id: &str, category: &str, technologies: &[&str]) -> ProjectRecord {
        ProjectRecord::new(
            id,
            id,
            "description",
            category,
            technologies.iter().map(|value| value.to_string()).collect(),
        )
        .expect("valid record")
    }

    fn fixture() -> Vec<ProjectRecord> {
        vec![
            record("a", "Web Development", &["React", "Node"]),
            record("b", "Cybersecurity", &["Python"]),
            record("c", "Web Development", &["Node", "PostgreSQL"]),
        ]
    }

    #[test]
    fn categories_follow_first_seen_order() {
        assert_eq!(
            distinct_categories(&fixture()),
            vec!["Web Development".to_string(), "Cybersecurity".to_string()]
        );
    }

    #[test]
    fn technologies_are_flattened_and_deduplicated() {
        assert_eq!(
            distinct_technologies(&fixture()),
            vec![
                "React".to_string(),
                "Node".to_string(),
                "Python".to_string(),
                "PostgreSQL".to_string(),
            ]
        );
    }

    #[test]
    fn counts_records_per_facet() {
        let counts = facet_counts(&fixture());
        assert_eq!(
            counts.categories,
            vec![
                FacetCount {
                    value: "Web Development".to_string(),
                    count: 2,
                },
                FacetCount {
                    value: "Cybersecurity".to_string(),
                    count: 1,
                },
            ]
        );
        let node = counts
            .technologies
            .iter()
            .find(|facet| facet.value == "Node")
            .expect("node facet");
        assert_eq!(node.count, 2);
    }

    #[test]
    fn empty_catalog_has_no_facets() {
        assert!(distinct_categories(&[]).is_empty());
        assert!(distinct_technologies(&[]).is_empty());
        assert_eq!(facet_counts(&[]), Default::default());
    }
}
