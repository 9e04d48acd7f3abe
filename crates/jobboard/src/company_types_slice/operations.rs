#[derive(Debug, Clone, PartialEq)]
pub enum CompanyTypeOperation {
    /// `GET /company-types`
    List,
    /// `POST /company-types`
    Create { name: String },
    /// `PUT /company-types/{id}`
    Rename { id: String, name: String },
    /// `DELETE /company-types/{id}`
    Delete { id: String },
}
