#[derive(Debug, Clone, PartialEq)]
pub enum AdminOperation {
    /// `GET /admin/dashboard`
    Dashboard,
    /// `PUT /admin/users/{id}/status` with `{ "isActive": active }`.
    SetUserActive { id: String, active: bool },
}
