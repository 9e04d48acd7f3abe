#[derive(Debug, Clone, PartialEq)]
pub enum CompanyOperation {
    /// `GET /companies`
    List {
        page: Option<u64>,
        limit: Option<u64>,
    },
}
