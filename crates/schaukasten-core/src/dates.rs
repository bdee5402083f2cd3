use std::cell::RefCell;
use std::cmp::Ordering;

use chrono::NaiveDate;
use regex::Regex;
use rustc_hash::FxHashMap;

fn iso_prefix_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("valid regex"))
}

fn german_date_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{2,4})$").expect("valid regex"))
}

/// Tolerant parser for the heterogeneous date strings found in the reports.
///
/// Results are memoized by the trimmed, comma-stripped input, so a parser
/// instance behaves as a pure function from raw string to a stable result.
/// The cache only ever grows; the dataset vocabulary is small.
///
/// Single-threaded by design (the whole pipeline is frame-driven); the cache
/// uses interior mutability so lookups work through a shared reference.
#[derive(Debug, Default)]
pub struct DateParser {
    cache: RefCell<FxHashMap<String, Option<NaiveDate>>>,
}

impl DateParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw date string. `None` for empty input and for anything
    /// that survives no parse attempt or names an invalid calendar date.
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let normalized: String = raw.trim().replace(',', "");
        if normalized.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.borrow().get(&normalized) {
            return *cached;
        }

        let parsed = parse_uncached(&normalized);
        self.cache.borrow_mut().insert(normalized, parsed);
        parsed
    }

    /// Parses an incident's primary date (extracted over raw).
    pub fn incident_date(&self, incident: &crate::Incident) -> Option<NaiveDate> {
        incident.primary_date().and_then(|raw| self.parse(raw))
    }
}

fn parse_uncached(input: &str) -> Option<NaiveDate> {
    // ISO `YYYY-MM-DD` prefix (tolerates a trailing time component).
    if let Some(caps) = iso_prefix_regex().captures(input) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    // German `D.M.YY` / `D.M.YYYY`.
    if let Some(caps) = german_date_regex().captures(input) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year_digits = &caps[3];
        let year: i32 = match year_digits.len() {
            2 => {
                // Two-digit years pivot at 70: the dataset reaches back into
                // the 1900s but never before 1970.
                let yy: i32 = year_digits.parse().ok()?;
                if yy >= 70 { 1900 + yy } else { 2000 + yy }
            }
            4 => year_digits.parse().ok()?,
            _ => return None,
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    // Free-form fallback: RFC 3339 timestamps and the long forms the source
    // pages occasionally use ("5. August 2024", "August 5 2024" once commas
    // are stripped).
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    for format in ["%e. %B %Y", "%B %e %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    None
}

/// Ordering used everywhere a "most recent first" sequence is needed:
/// dated incidents sort strictly before undated ones, dated pairs sort by
/// descending date, undated pairs rank equal (a stable sort keeps their
/// input order).
pub fn compare_recency(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
