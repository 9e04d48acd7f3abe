//! Raw company record → [`CompanyRecord`].

use crate::model::{CompanyRecord, NOT_SPECIFIED};
use serde_json::{Map, Value};

/// Headcount buckets, smallest first.
pub const SIZE_BUCKETS: [&str; 6] = ["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

/// Bucket label for a headcount. A headcount of zero is treated as unknown.
pub fn size_bucket(employees: u64) -> &'static str {
    match employees {
        0 => NOT_SPECIFIED,
        1..=10 => SIZE_BUCKETS[0],
        11..=50 => SIZE_BUCKETS[1],
        51..=200 => SIZE_BUCKETS[2],
        201..=500 => SIZE_BUCKETS[3],
        501..=1000 => SIZE_BUCKETS[4],
        _ => SIZE_BUCKETS[5],
    }
}

/// Normalizes one raw record. `index` is its position in the list and only seeds the
/// id of records that carry none.
///
/// Returns `None` for values that are not JSON objects; every object yields a record.
pub fn normalize(raw: &Value, index: usize) -> Option<CompanyRecord> {
    let obj = raw.as_object()?;
    let mut record = CompanyRecord::placeholder(
        id(obj).unwrap_or_else(|| format!("company-{index}")),
    );

    if let Some(name) = text(obj, &["name", "companyName"]) {
        record.name = name;
    }
    if let Some(size) = size(obj) {
        record.size = size;
    }
    if let Some(industry) = text(obj, &["industry", "sector"]) {
        record.industry = industry;
    }
    if let Some(location) = location(obj) {
        record.location = location;
    }
    record.description = text(obj, &["description", "about"]).unwrap_or_default();
    record.tags = tags(obj);
    record.logo = text(obj, &["logo", "logoUrl"]);
    record.website = text(obj, &["website", "url"]);
    record.job_count = job_count(obj);
    record.hiring = flag(obj, &["isHiring", "hiring", "activelyHiring"])
        .unwrap_or(record.job_count > 0);
    record.verified = flag(obj, &["verified", "isVerified"]).unwrap_or(false);
    Some(record)
}

/// Normalizes a list, skipping entries that are not objects.
pub fn normalize_all(raw: &[Value]) -> Vec<CompanyRecord> {
    raw.iter()
        .enumerate()
        .filter_map(|(i, value)| normalize(value, i))
        .collect()
}

fn id(obj: &Map<String, Value>) -> Option<String> {
    ["id", "_id"].iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First non-blank string under any of `keys`. Arrays of strings are joined.
fn text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let parts = strings(items);
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    })
}

fn number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag(obj: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| obj.get(*key)?.as_bool())
}

fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn size(obj: &Map<String, Value>) -> Option<String> {
    ["size", "companySize", "employees", "employeeCount"]
        .iter()
        .find_map(|key| {
            let value = obj.get(*key)?;
            if let Some(count) = number(value) {
                return Some(size_bucket(count).to_string());
            }
            value
                .as_str()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
}

fn location(obj: &Map<String, Value>) -> Option<String> {
    for key in ["location", "headquarters"] {
        match obj.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Object(parts)) => {
                if let Some(joined) = join_place(parts) {
                    return Some(joined);
                }
            }
            _ => {}
        }
    }
    join_place(obj)
}

fn join_place(obj: &Map<String, Value>) -> Option<String> {
    let parts: Vec<&str> = ["city", "state", "country"]
        .iter()
        .filter_map(|key| obj.get(*key)?.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

fn tags(obj: &Map<String, Value>) -> Vec<String> {
    ["tags", "industries"]
        .iter()
        .find_map(|key| match obj.get(*key)? {
            Value::Array(items) => Some(strings(items)),
            Value::String(s) => Some(
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        })
        .unwrap_or_default()
}

fn job_count(obj: &Map<String, Value>) -> u64 {
    ["jobCount", "jobsCount", "openPositions", "openJobs"]
        .iter()
        .find_map(|key| number(obj.get(*key)?))
        .or_else(|| obj.get("jobs")?.as_array().map(|jobs| jobs.len() as u64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_gets_every_default() {
        let record = normalize(&json!({}), 3).unwrap();
        assert_eq!(record.id, "company-3");
        assert_eq!(record.name, "Unnamed Company");
        assert_eq!(record.size, "Not specified");
        assert_eq!(record.industry, "Not specified");
        assert_eq!(record.location, "Not specified");
        assert_eq!(record.description, "");
        assert!(record.tags.is_empty());
        assert_eq!(record.job_count, 0);
        assert!(!record.hiring);
    }

    #[test]
    fn test_non_objects_are_rejected() {
        assert!(normalize(&json!("Acme"), 0).is_none());
        assert!(normalize(&json!(null), 0).is_none());
        assert_eq!(normalize_all(&[json!(1), json!({"name": "Acme"})]).len(), 1);
    }

    #[test]
    fn test_aliases_are_reconciled() {
        let record = normalize(
            &json!({
                "_id": "c9",
                "companyName": " Globex ",
                "employees": 120,
                "sector": "Energy",
                "location": {"city": "Pune", "country": "India"},
                "industries": "energy, utilities ,",
                "jobs": [{}, {}, {}],
                "isVerified": true
            }),
            0,
        )
        .unwrap();
        assert_eq!(record.id, "c9");
        assert_eq!(record.name, "Globex");
        assert_eq!(record.size, "51-200");
        assert_eq!(record.industry, "Energy");
        assert_eq!(record.location, "Pune, India");
        assert_eq!(record.tags, vec!["energy", "utilities"]);
        assert_eq!(record.job_count, 3);
        assert!(record.hiring);
        assert!(record.verified);
    }

    #[test]
    fn test_explicit_hiring_flag_wins() {
        let record = normalize(&json!({"openPositions": "4", "hiring": false}), 0).unwrap();
        assert_eq!(record.job_count, 4);
        assert!(!record.hiring);
    }

    #[test]
    fn test_size_buckets_and_labels() {
        assert_eq!(size_bucket(0), "Not specified");
        assert_eq!(size_bucket(1), "1-10");
        assert_eq!(size_bucket(50), "11-50");
        assert_eq!(size_bucket(1000), "501-1000");
        assert_eq!(size_bucket(5000), "1000+");
        let record = normalize(&json!({"size": "201-500"}), 0).unwrap();
        assert_eq!(record.size, "201-500");
        let record = normalize(&json!({"companySize": "35"}), 0).unwrap();
        assert_eq!(record.size, "11-50");
    }

    #[test]
    fn test_zero_employees_is_not_specified() {
        let record = normalize(&json!({"employees": 0}), 0).unwrap();
        assert_eq!(record.size, "Not specified");
    }

    #[test]
    fn test_top_level_city_is_used_as_location() {
        let record = normalize(&json!({"city": "Austin", "country": "USA"}), 0).unwrap();
        assert_eq!(record.location, "Austin, USA");
    }
}
