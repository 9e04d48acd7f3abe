use serde::{Deserialize, Serialize};

/// The filter selections on the companies page.
///
/// Blank entries (empty or whitespace) are ignored, so a category holding only blanks
/// is treated as empty and passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub keyword: String,
    pub industries: Vec<String>,
    pub sizes: Vec<String>,
    pub locations: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industries.push(industry.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.sizes.push(size.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// True when no filter would be installed.
    pub fn is_empty(&self) -> bool {
        self.keyword.trim().is_empty()
            && selections(&self.industries).is_empty()
            && selections(&self.sizes).is_empty()
            && selections(&self.locations).is_empty()
    }
}

/// Trimmed, lowercased, non-blank entries of a selection list.
pub(crate) fn selections(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_selections_do_not_count() {
        let criteria = FilterCriteria::new().keyword("  ").industry("").size(" ");
        assert!(criteria.is_empty());
        assert!(!FilterCriteria::new().location("Remote").is_empty());
    }
}
