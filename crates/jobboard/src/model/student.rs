use super::flexible_id;
use serde::{Deserialize, Serialize};

/// A student account as listed by the admin tools and edited on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "_id", deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<u16>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial update for a student profile. Absent fields are left unchanged and are
/// not serialized, so the server only sees what was edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            university: None,
            degree: None,
            graduation_year: None,
            skills: Vec::new(),
            resume_url: None,
            is_active: true,
        }
    }

    /// Returns a copy with the patch applied, the way the server would apply it.
    pub fn apply(&self, patch: &StudentPatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(phone) = &patch.phone {
            next.phone = Some(phone.clone());
        }
        if let Some(university) = &patch.university {
            next.university = Some(university.clone());
        }
        if let Some(degree) = &patch.degree {
            next.degree = Some(degree.clone());
        }
        if let Some(year) = patch.graduation_year {
            next.graduation_year = Some(year);
        }
        if let Some(skills) = &patch.skills {
            next.skills = skills.clone();
        }
        if let Some(url) = &patch.resume_url {
            next.resume_url = Some(url.clone());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_decodes_mongo_shape() {
        let student: Student = serde_json::from_value(json!({
            "_id": "s1",
            "name": "Asha",
            "email": "asha@example.com",
            "graduationYear": 2025,
            "skills": ["rust", "sql"]
        }))
        .unwrap();
        assert_eq!(student.id, "s1");
        assert_eq!(student.graduation_year, Some(2025));
        assert!(student.is_active);
    }

    #[test]
    fn test_apply_only_touches_patched_fields() {
        let student = Student::new("s1", "Asha", "asha@example.com");
        let patch = StudentPatch {
            university: Some("IIT Delhi".into()),
            ..Default::default()
        };
        let next = student.apply(&patch);
        assert_eq!(next.university.as_deref(), Some("IIT Delhi"));
        assert_eq!(next.name, "Asha");
        assert_eq!(next.email, student.email);
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = StudentPatch {
            name: Some("Asha K".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": "Asha K"}));
        assert!(StudentPatch::default().is_empty());
        assert!(!patch.is_empty());
    }
}
