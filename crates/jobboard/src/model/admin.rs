use super::flexible_id;
use serde::{Deserialize, Serialize};

/// Aggregate counters shown at the top of the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_students: u64,
    pub total_companies: u64,
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(alias = "_id", deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(alias = "_id", deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub status: String,
    /// Free-text salary as entered by the employer.
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
}

/// Everything the admin dashboard renders, fetched in one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDashboard {
    pub stats: DashboardStats,
    pub recent_users: Vec<AdminUser>,
    pub recent_jobs: Vec<JobSummary>,
}

impl AdminDashboard {
    /// Sets the activation flag of a listed user. Returns whether the user was listed.
    pub fn set_user_active(&mut self, id: &str, active: bool) -> bool {
        match self.recent_users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_active = active;
                true
            }
            None => false,
        }
    }
}
