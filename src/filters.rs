//! List Filters
//!
//! Free-text and status filtering for list pages.

/// Something a list page can filter
pub trait Filterable {
    /// Text matched against the query (code, names, ...)
    fn search_text(&self) -> String;

    /// Status value matched against the status filter
    fn status(&self) -> Option<&str> {
        None
    }
}

/// Current filter bar values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub query: String,
    pub status: Option<String>,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.status.is_none()
    }

    /// Every query term must appear (case-insensitive) and the status
    /// must match when one is selected.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if let Some(status) = &self.status {
            if item.status() != Some(status.as_str()) {
                return false;
            }
        }
        let haystack = item.search_text().to_lowercase();
        self.query
            .split_whitespace()
            .all(|term| haystack.contains(&term.to_lowercase()))
    }

    /// Matching items, in their original order
    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        if self.is_empty() {
            return items.to_vec();
        }
        items.iter().filter(|item| self.matches(*item)).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sample, SampleState};

    fn make_sample(id: u32, code: &str, patient: Option<&str>, state: SampleState) -> Sample {
        Sample {
            id,
            code: code.to_string(),
            patient_name: patient.map(str::to_string),
            center_name: None,
            state,
        }
    }

    fn samples() -> Vec<Sample> {
        vec![
            make_sample(1, "S-001", Some("Ada Byron"), SampleState::Pending),
            make_sample(2, "S-002", Some("Alan Turing"), SampleState::Completed),
            make_sample(3, "S-003", None, SampleState::Pending),
            make_sample(4, "X-004", Some("Grace Hopper"), SampleState::Rejected),
        ]
    }

    fn ids(items: &[Sample]) -> Vec<u32> {
        items.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let filters = ListFilters::default();
        assert!(filters.is_empty());
        assert_eq!(ids(&filters.apply(&samples())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_terms_all_match_case_insensitive() {
        let filters = ListFilters { query: "s-00 ALAN".to_string(), status: None };
        assert_eq!(ids(&filters.apply(&samples())), vec![2]);
    }

    #[test]
    fn test_status_filter_preserves_order() {
        let filters = ListFilters { query: String::new(), status: Some("pending".to_string()) };
        assert_eq!(ids(&filters.apply(&samples())), vec![1, 3]);
    }

    #[test]
    fn test_status_and_query_combined() {
        let mut filters = ListFilters { query: "hopper".to_string(), status: Some("pending".to_string()) };
        assert!(filters.apply(&samples()).is_empty());

        filters.clear();
        assert!(filters.is_empty());
    }
}
