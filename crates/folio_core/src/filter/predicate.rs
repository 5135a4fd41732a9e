//! Predicate construction from filter state.

use crate::filter::state::{FacetFilter, FilterState};
use crate::model::project::ProjectRecord;

/// Compiled form of a [`FilterState`].
///
/// The query is case-folded once at build time and otherwise matched as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPredicate {
    folded_query: String,
    category: FacetFilter,
    technology: FacetFilter,
}

impl ProjectPredicate {
    pub fn new(state: &FilterState) -> Self {
        Self {
            folded_query: state.query.to_lowercase(),
            category: state.category.clone(),
            technology: state.technology.clone(),
        }
    }

    /// Logical AND of the text, category and technology criteria.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.matches_text(record) && self.matches_category(record) && self.matches_technology(record)
    }

    fn matches_text(&self, record: &ProjectRecord) -> bool {
        if self.folded_query.is_empty() {
            return true;
        }
        record.title.to_lowercase().contains(&self.folded_query)
            || record.description.to_lowercase().contains(&self.folded_query)
    }

    fn matches_category(&self, record: &ProjectRecord) -> bool {
        match &self.category {
            FacetFilter::All => true,
            FacetFilter::Only(category) => record.category == *category,
        }
    }

    fn matches_technology(&self, record: &ProjectRecord) -> bool {
        match &self.technology {
            FacetFilter::All => true,
            FacetFilter::Only(technology) => record.uses_technology(technology),
        }
    }
}

/// Builds the record predicate for one filter state.
pub fn build_predicate(state: &FilterState) -> impl Fn(&ProjectRecord) -> bool {
    let predicate = ProjectPredicate::new(state);
    move |record: &ProjectRecord| predicate.matches(record)
}

#[cfg(test)]
mod tests {
    use super::build_predicate;
    use crate::filter::state::{FacetFilter, FilterState};
    use crate::model::project::ProjectRecord;

    fn shop_app() -> ProjectRecord {
        ProjectRecord::new(
            "shop-app",
            "Shop App",
            "Online storefront for a bakery",
            "Web Development",
            vec!["React".to_string(), "Node".to_string()],
        )
        .expect("valid record")
    }

    #[test]
    fn text_match_is_case_insensitive_on_title_and_description() {
        let record = shop_app();
        assert!(build_predicate(&FilterState::new().with_query("SHOP"))(&record));
        assert!(build_predicate(&FilterState::new().with_query("Bakery"))(&record));
        assert!(!build_predicate(&FilterState::new().with_query("pentest"))(&record));
    }

    #[test]
    fn text_match_ignores_long_description_and_category() {
        let record = shop_app().with_long_description("kubernetes migration");
        assert!(!build_predicate(&FilterState::new().with_query("kubernetes"))(&record));
        assert!(!build_predicate(&FilterState::new().with_query("web development"))(&record));
    }

    #[test]
    fn query_whitespace_is_matched_literally() {
        let record = shop_app();
        assert!(!build_predicate(&FilterState::new().with_query("app "))(&record));
        assert!(!build_predicate(&FilterState::new().with_query("   "))(&record));
        assert!(build_predicate(&FilterState::new().with_query("shop app"))(&record));
        assert!(build_predicate(&FilterState::new().with_query(""))(&record));
    }

    #[test]
    fn category_is_exact_match() {
        let record = shop_app();
        let exact = FilterState::new().with_category(FacetFilter::only("Web Development"));
        let folded = FilterState::new().with_category(FacetFilter::only("web development"));
        assert!(build_predicate(&exact)(&record));
        assert!(!build_predicate(&folded)(&record));
    }

    #[test]
    fn literal_all_value_is_a_sentinel_not_a_category() {
        let record = shop_app();
        let state = FilterState::new().with_category(FacetFilter::parse("all"));
        assert!(build_predicate(&state)(&record));
    }

    #[test]
    fn technology_matches_any_position() {
        let record = shop_app();
        let state = FilterState::new().with_technology(FacetFilter::only("Node"));
        assert!(build_predicate(&state)(&record));
        let state = FilterState::new().with_technology(FacetFilter::only("Python"));
        assert!(!build_predicate(&state)(&record));
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let record = shop_app();
        let state = FilterState::new()
            .with_query("shop")
            .with_category(FacetFilter::only("Cybersecurity"));
        assert!(!build_predicate(&state)(&record));
    }
}
