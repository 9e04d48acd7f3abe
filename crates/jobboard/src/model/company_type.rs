use super::flexible_id;
use serde::{Deserialize, Serialize};

/// A category companies can be filed under (e.g. "Startup", "MNC").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyType {
    #[serde(alias = "_id", deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
}

impl CompanyType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
