use crate::dates::{DateParser, compare_recency};
use crate::incident::Incident;

/// How many of the most recent reports the UI works over. Facet availability
/// and filtering operate inside this window only, which keeps derivation cost
/// flat as the scraped dataset grows.
pub const DEFAULT_WINDOW_SIZE: usize = 300;

/// The most-recent-`window_size` incidents, most recent first.
///
/// Undated incidents rank last; ties keep their input order (stable sort).
pub fn windowed<'a>(
    collection: &'a [Incident],
    window_size: usize,
    dates: &DateParser,
) -> Vec<&'a Incident> {
    let mut out: Vec<&Incident> = collection.iter().collect();
    out.sort_by(|a, b| compare_recency(dates.incident_date(a), dates.incident_date(b)));
    out.truncate(window_size);
    out
}
