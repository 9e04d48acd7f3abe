//! # Display Formatting
//!
//! Turns the loosely formatted strings the API returns (ISO dates, free-text salary
//! fields such as `"$50k - $70k"` or `"₹6 LPA"`) into the text the pages show.
//! Every function is total: input that cannot be understood is echoed back rather
//! than rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

pub const NO_DATE: &str = "N/A";
pub const SALARY_NOT_DISCLOSED: &str = "Salary not disclosed";

/// Parses the date formats the API uses: RFC 3339, naive date-times and plain dates.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `"2024-01-05T10:00:00Z"` → `"Jan 5, 2024"`. Empty input gives `"N/A"`; anything
/// unparseable is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return NO_DATE.to_string();
    }
    match parse_datetime(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Relative age of a timestamp, e.g. `"3 days ago"`. Timestamps in the future read
/// as `"just now"`; unparseable input falls back to [`format_date`].
pub fn time_ago(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_datetime(raw) else {
        return format_date(raw);
    };
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (count, unit) = match seconds {
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 86_400 * 30 => (s / 86_400, "day"),
        s if s < 86_400 * 365 => (s / (86_400 * 30), "month"),
        s => (s / (86_400 * 365), "year"),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

// =============================================================================
// SALARY
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalaryPeriod {
    #[default]
    Year,
    Month,
    Hour,
}

impl SalaryPeriod {
    fn suffix(self) -> &'static str {
        match self {
            SalaryPeriod::Year => "/yr",
            SalaryPeriod::Month => "/mo",
            SalaryPeriod::Hour => "/hr",
        }
    }
}

/// A salary as understood from free text. Amounts are in whole currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Currency symbol, when the text named one.
    pub currency: Option<&'static str>,
    pub period: SalaryPeriod,
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_salary(self))
    }
}

/// Parses salary text such as `"$50k - $70k"`, `"50000-70000 USD"`, `"₹6 LPA"`,
/// `"Up to 90k"` or `"$25/hour"`. Returns `None` when the text holds no amount.
pub fn parse_salary(text: &str) -> Option<SalaryRange> {
    let lower = text.to_lowercase();
    let mut amounts = scan_amounts(&lower);
    if amounts.is_empty() {
        return None;
    }

    // "50-70k": the second amount's multiplier applies to the first.
    if amounts.len() >= 2 && amounts[0].multiplier.is_none() {
        if let Some(m) = amounts[1].multiplier {
            if amounts[0].value <= amounts[1].value && amounts[0].value < 1_000.0 {
                amounts[0].multiplier = Some(m);
            }
        }
    }
    let values: Vec<f64> = amounts.iter().map(Amount::total).collect();

    let upper_only = ["up to", "upto", "max", "maximum"]
        .iter()
        .any(|w| lower.contains(w));
    let lower_only = ["from", "starting", "min", "+"]
        .iter()
        .any(|w| lower.contains(w));

    let (min, max) = match values.as_slice() {
        [single] if upper_only => (None, Some(*single)),
        [single] if lower_only => (Some(*single), None),
        [single] => (Some(*single), Some(*single)),
        [a, b, ..] => (Some(a.min(*b)), Some(a.max(*b))),
        [] => return None,
    };

    Some(SalaryRange {
        min,
        max,
        currency: detect_currency(&lower),
        period: detect_period(&lower),
    })
}

/// Renders a range compactly: `"$50k - $70k/yr"`, `"Up to ₹9L/yr"`.
pub fn format_salary(range: &SalaryRange) -> String {
    let symbol = range.currency.unwrap_or("");
    let amount = |v: f64| format!("{symbol}{}", compact_amount(v, range.currency));
    let body = match (range.min, range.max) {
        (Some(a), Some(b)) if (a - b).abs() < f64::EPSILON => amount(a),
        (Some(a), Some(b)) => format!("{} - {}", amount(a), amount(b)),
        (Some(a), None) => format!("From {}", amount(a)),
        (None, Some(b)) => format!("Up to {}", amount(b)),
        (None, None) => return SALARY_NOT_DISCLOSED.to_string(),
    };
    format!("{body}{}", range.period.suffix())
}

/// What a job card shows for a salary field.
pub fn salary_display(text: Option<&str>) -> String {
    let text = text.map(str::trim).unwrap_or("");
    if text.is_empty() {
        return SALARY_NOT_DISCLOSED.to_string();
    }
    match parse_salary(text) {
        Some(range) => format_salary(&range),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
struct Amount {
    value: f64,
    multiplier: Option<f64>,
}

impl Amount {
    fn total(&self) -> f64 {
        self.value * self.multiplier.unwrap_or(1.0)
    }
}

fn multiplier(word: &str) -> Option<f64> {
    match word {
        "k" => Some(1_000.0),
        "m" | "mn" | "million" => Some(1_000_000.0),
        "l" | "lac" | "lacs" | "lakh" | "lakhs" | "lpa" => Some(100_000.0),
        "cr" | "crore" | "crores" => Some(10_000_000.0),
        _ => None,
    }
}

/// Finds every number in `text` together with a magnitude suffix following it.
fn scan_amounts(text: &str) -> Vec<Amount> {
    let chars: Vec<char> = text.chars().collect();
    let mut amounts = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let mut digits = String::new();
        while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == ',' || chars[i] == '.') {
            if chars[i] != ',' {
                digits.push(chars[i]);
            }
            i += 1;
        }

        let mut j = i;
        if j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        let word: String = chars[j..]
            .iter()
            .take_while(|c| c.is_alphabetic())
            .collect();
        let factor = multiplier(&word);
        if factor.is_some() {
            i = j + word.chars().count();
        }

        if let Ok(value) = digits.trim_end_matches('.').parse::<f64>() {
            amounts.push(Amount {
                value,
                multiplier: factor,
            });
        }
    }
    amounts
}

fn detect_currency(lower: &str) -> Option<&'static str> {
    if lower.contains('$') || lower.contains("usd") {
        Some("$")
    } else if lower.contains('₹')
        || lower.contains("inr")
        || lower.contains("lpa")
        || lower.contains("lakh")
    {
        Some("₹")
    } else if lower.contains('€') || lower.contains("eur") {
        Some("€")
    } else if lower.contains('£') || lower.contains("gbp") {
        Some("£")
    } else {
        None
    }
}

fn detect_period(lower: &str) -> SalaryPeriod {
    if ["/hour", "/hr", "per hour", "hourly", "an hour"]
        .iter()
        .any(|w| lower.contains(w))
    {
        SalaryPeriod::Hour
    } else if ["/month", "/mo", "per month", "monthly"]
        .iter()
        .any(|w| lower.contains(w))
    {
        SalaryPeriod::Month
    } else {
        SalaryPeriod::Year
    }
}

fn compact_amount(value: f64, currency: Option<&str>) -> String {
    let (scaled, suffix) = match currency {
        Some("₹") if value >= 10_000_000.0 => (value / 10_000_000.0, "Cr"),
        Some("₹") if value >= 100_000.0 => (value / 100_000.0, "L"),
        _ if value >= 1_000_000.0 => (value / 1_000_000.0, "M"),
        _ if value >= 1_000.0 => (value / 1_000.0, "k"),
        _ => (value, ""),
    };
    let rounded = (scaled * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{suffix}", rounded as i64)
    } else {
        format!("{rounded:.1}{suffix}")
    }
}
