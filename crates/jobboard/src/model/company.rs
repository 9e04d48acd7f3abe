use serde::Serialize;

pub const UNNAMED_COMPANY: &str = "Unnamed Company";
pub const NOT_SPECIFIED: &str = "Not specified";

/// A company as the listing page shows it.
///
/// Built from a raw API record by [`crate::listing::normalize`]; every field has a
/// value, so filters and sorts never deal with missing data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    /// Headcount bucket such as `"51-200"`.
    pub size: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub job_count: u64,
    pub hiring: bool,
    pub verified: bool,
}

impl CompanyRecord {
    /// A record with every field at its default.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: UNNAMED_COMPANY.to_string(),
            logo: None,
            website: None,
            size: NOT_SPECIFIED.to_string(),
            industry: NOT_SPECIFIED.to_string(),
            location: NOT_SPECIFIED.to_string(),
            description: String::new(),
            tags: Vec::new(),
            job_count: 0,
            hiring: false,
            verified: false,
        }
    }
}
