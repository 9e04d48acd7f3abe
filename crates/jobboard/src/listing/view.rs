use super::criteria::FilterCriteria;
use super::filters::FilterPipeline;
use super::normalize::normalize_all;
use super::sort::{sort_records, SortKey};
use crate::model::CompanyRecord;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Normalize, filter and sort in one pass.
pub fn transform(raw: &[Value], criteria: &FilterCriteria, sort: SortKey) -> Vec<CompanyRecord> {
    filter_and_sort(normalize_all(raw), criteria, sort)
}

fn filter_and_sort(
    records: Vec<CompanyRecord>,
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<CompanyRecord> {
    let filtered = FilterPipeline::from_criteria(criteria).apply(records);
    sort_records(&filtered, sort)
}

struct Normalized {
    source: Arc<Vec<Value>>,
    records: Vec<CompanyRecord>,
}

struct Visible {
    source: Arc<Vec<Value>>,
    criteria: FilterCriteria,
    sort: SortKey,
    records: Arc<Vec<CompanyRecord>>,
}

/// Memoized [`transform`].
///
/// Inputs are compared by identity for the raw list (the `Arc` the companies slice
/// published) and by value for criteria and sort key. A new list is normalized once;
/// changing only the criteria or the sort re-runs filtering and sorting on the cached
/// normalized records.
#[derive(Default)]
pub struct CompanyListView {
    normalized: Option<Normalized>,
    visible: Option<Visible>,
    computations: u64,
}

impl CompanyListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible list for these inputs.
    pub fn get(
        &mut self,
        raw: &Arc<Vec<Value>>,
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> Arc<Vec<CompanyRecord>> {
        if let Some(visible) = &self.visible {
            if Arc::ptr_eq(&visible.source, raw) && visible.criteria == *criteria && visible.sort == sort {
                return visible.records.clone();
            }
        }

        let fresh = !matches!(&self.normalized, Some(n) if Arc::ptr_eq(&n.source, raw));
        if fresh {
            self.normalized = Some(Normalized {
                source: raw.clone(),
                records: normalize_all(raw),
            });
        }
        let normalized = self
            .normalized
            .as_ref()
            .map(|n| n.records.clone())
            .unwrap_or_default();

        let records = Arc::new(filter_and_sort(normalized, criteria, sort));
        self.computations += 1;
        debug!(
            renormalized = fresh,
            %sort,
            visible = records.len(),
            "Company list recomputed"
        );

        self.visible = Some(Visible {
            source: raw.clone(),
            criteria: criteria.clone(),
            sort,
            records: records.clone(),
        });
        records
    }

    /// How many times the visible list has been recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw() -> Arc<Vec<Value>> {
        Arc::new(vec![
            json!({"id": 1, "name": "Zeta", "jobCount": 1}),
            json!({"id": 2, "name": "alpha", "jobCount": 9}),
        ])
    }

    #[test]
    fn test_same_inputs_hit_the_cache() {
        let mut view = CompanyListView::new();
        let list = raw();
        let criteria = FilterCriteria::default();

        let first = view.get(&list, &criteria, SortKey::Name);
        let second = view.get(&list, &criteria, SortKey::Name);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(view.computations(), 1);
        assert_eq!(first[0].name, "alpha");
    }

    #[test]
    fn test_changed_inputs_recompute() {
        let mut view = CompanyListView::new();
        let list = raw();
        let criteria = FilterCriteria::default();

        view.get(&list, &criteria, SortKey::Name);
        let by_jobs = view.get(&list, &criteria, SortKey::JobCount);
        assert_eq!(by_jobs[0].id, "2");

        let filtered = view.get(&list, &criteria.clone().keyword("zeta"), SortKey::JobCount);
        assert_eq!(filtered.len(), 1);

        // Equal contents in a new allocation count as a new list.
        view.get(&raw(), &criteria, SortKey::JobCount);
        assert_eq!(view.computations(), 4);
    }

    #[test]
    fn test_view_matches_transform() {
        let mut view = CompanyListView::new();
        let list = raw();
        let criteria = FilterCriteria::new().keyword("a");
        assert_eq!(
            *view.get(&list, &criteria, SortKey::Featured),
            transform(&list, &criteria, SortKey::Featured)
        );
    }
}
