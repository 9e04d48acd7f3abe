use crate::model::CompanyRecord;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Orderings offered on the companies page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Hiring companies first, otherwise in list order.
    #[default]
    Featured,
    /// Most open jobs first.
    JobCount,
    /// Alphabetical, case-insensitive.
    Name,
    /// Keep the filtered order.
    Unsorted,
}

impl FromStr for SortKey {
    type Err = Infallible;

    /// Unrecognised keys parse as [`SortKey::Unsorted`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_lowercase().as_str() {
            "featured" => SortKey::Featured,
            "jobs" | "jobcount" | "job_count" | "most-jobs" => SortKey::JobCount,
            "name" | "alphabetical" | "a-z" => SortKey::Name,
            _ => SortKey::Unsorted,
        };
        Ok(key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Featured => "featured",
            SortKey::JobCount => "jobs",
            SortKey::Name => "name",
            SortKey::Unsorted => "unsorted",
        };
        f.write_str(name)
    }
}

/// Returns a sorted copy. All orderings are stable.
pub fn sort_records(records: &[CompanyRecord], key: SortKey) -> Vec<CompanyRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Featured => sorted.sort_by_key(|c| !c.hiring),
        SortKey::JobCount => sorted.sort_by(|a, b| b.job_count.cmp(&a.job_count)),
        SortKey::Name => sorted.sort_by_cached_key(|c| c.name.to_lowercase()),
        SortKey::Unsorted => {}
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, jobs: u64, hiring: bool) -> CompanyRecord {
        let mut record = CompanyRecord::placeholder(name);
        record.name = name.to_string();
        record.job_count = jobs;
        record.hiring = hiring;
        record
    }

    fn names(records: &[CompanyRecord]) -> Vec<&str> {
        records.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_parse_sort_keys() {
        assert_eq!("featured".parse::<SortKey>().unwrap(), SortKey::Featured);
        assert_eq!("Jobs".parse::<SortKey>().unwrap(), SortKey::JobCount);
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::Unsorted);
    }

    #[test]
    fn test_orderings_are_stable() {
        let input = vec![
            company("beta", 2, false),
            company("Alpha", 5, true),
            company("gamma", 2, true),
            company("delta", 0, false),
        ];
        assert_eq!(
            names(&sort_records(&input, SortKey::Featured)),
            vec!["Alpha", "gamma", "beta", "delta"]
        );
        assert_eq!(
            names(&sort_records(&input, SortKey::JobCount)),
            vec!["Alpha", "beta", "gamma", "delta"]
        );
        assert_eq!(
            names(&sort_records(&input, SortKey::Name)),
            vec!["Alpha", "beta", "delta", "gamma"]
        );
        assert_eq!(names(&sort_records(&input, SortKey::Unsorted)), names(&input));
    }
}
