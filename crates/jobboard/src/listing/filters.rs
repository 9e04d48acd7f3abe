//! The filters of the company list and the pipeline that chains them.

use super::criteria::{selections, FilterCriteria};
use crate::model::{CompanyRecord, NOT_SPECIFIED};
use tracing::debug;

/// One predicate over normalized companies.
pub trait CompanyFilter: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    fn matches(&self, company: &CompanyRecord) -> bool;
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// The field's value, or `None` when normalization left the placeholder in it.
fn specified(value: &str) -> Option<&str> {
    (value != NOT_SPECIFIED).then_some(value)
}

/// Free-text search over name and description.
pub struct KeywordFilter {
    needle: String,
}

impl KeywordFilter {
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: keyword.trim().to_lowercase(),
        }
    }
}

impl CompanyFilter for KeywordFilter {
    fn name(&self) -> &str {
        "keyword"
    }

    fn matches(&self, company: &CompanyRecord) -> bool {
        contains(&company.name, &self.needle) || contains(&company.description, &self.needle)
    }
}

/// Matches when any selected industry occurs in the company's industry or tags.
pub struct IndustryFilter {
    selected: Vec<String>,
}

impl IndustryFilter {
    pub fn new(selected: &[String]) -> Self {
        Self {
            selected: selections(selected),
        }
    }
}

impl CompanyFilter for IndustryFilter {
    fn name(&self) -> &str {
        "industry"
    }

    fn matches(&self, company: &CompanyRecord) -> bool {
        self.selected.iter().any(|wanted| {
            specified(&company.industry).is_some_and(|industry| contains(industry, wanted))
                || company.tags.iter().any(|t| contains(t, wanted))
        })
    }
}

/// Matches when the company's size bucket equals one of the selected buckets.
pub struct SizeFilter {
    selected: Vec<String>,
}

impl SizeFilter {
    pub fn new(selected: &[String]) -> Self {
        Self {
            selected: selections(selected),
        }
    }
}

impl CompanyFilter for SizeFilter {
    fn name(&self) -> &str {
        "size"
    }

    fn matches(&self, company: &CompanyRecord) -> bool {
        let Some(size) = specified(&company.size) else {
            return false;
        };
        let size = size.to_lowercase();
        self.selected.iter().any(|wanted| *wanted == size)
    }
}

/// Matches when any selected location occurs in the company's location.
pub struct LocationFilter {
    selected: Vec<String>,
}

impl LocationFilter {
    pub fn new(selected: &[String]) -> Self {
        Self {
            selected: selections(selected),
        }
    }
}

impl CompanyFilter for LocationFilter {
    fn name(&self) -> &str {
        "location"
    }

    fn matches(&self, company: &CompanyRecord) -> bool {
        let Some(location) = specified(&company.location) else {
            return false;
        };
        self.selected.iter().any(|wanted| contains(location, wanted))
    }
}

/// Chains filters; a company is kept only if every filter matches it.
///
/// ```
/// use jobboard::listing::{FilterPipeline, KeywordFilter, SizeFilter};
///
/// let pipeline = FilterPipeline::new()
///     .add_filter(KeywordFilter::new("cloud"))
///     .add_filter(SizeFilter::new(&["51-200".to_string()]));
/// assert_eq!(pipeline.len(), 2);
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn CompanyFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Installs one filter per non-empty category of `criteria`.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();
        if !criteria.keyword.trim().is_empty() {
            pipeline = pipeline.add_filter(KeywordFilter::new(&criteria.keyword));
        }
        if !selections(&criteria.industries).is_empty() {
            pipeline = pipeline.add_filter(IndustryFilter::new(&criteria.industries));
        }
        if !selections(&criteria.sizes).is_empty() {
            pipeline = pipeline.add_filter(SizeFilter::new(&criteria.sizes));
        }
        if !selections(&criteria.locations).is_empty() {
            pipeline = pipeline.add_filter(LocationFilter::new(&criteria.locations));
        }
        pipeline
    }

    pub fn add_filter(mut self, filter: impl CompanyFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Applies every filter in order. Relative order of the survivors is preserved.
    pub fn apply(&self, companies: Vec<CompanyRecord>) -> Vec<CompanyRecord> {
        let mut current = companies;
        for filter in &self.filters {
            let before = current.len();
            current.retain(|c| filter.matches(c));
            debug!(filter = filter.name(), before, after = current.len(), "Filter applied");
        }
        current
    }
}
