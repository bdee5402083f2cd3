use crate::cluster::{GenderCluster, TimeCluster};
use crate::collate::compare_de;
use crate::dates::{DateParser, compare_recency};
use crate::incident::Incident;
use crate::keywords;

/// One independently selectable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    District,
    Keyword,
    Gender,
    TimeCluster,
    Text,
}

/// Filter selections as the UI owns them. An empty field means "no
/// constraint on this facet". The engine reads this by reference and never
/// retains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub district: String,
    /// Canonical keyword id (see [`crate::keywords`]).
    pub keyword: String,
    /// A [`GenderCluster`] label.
    pub gender: String,
    /// A [`TimeCluster`] label.
    pub time_cluster: String,
    /// Case-insensitive substring match against the report body.
    pub text: String,
    /// Collapse the filtered result to its single most recent incident.
    pub show_only_latest: bool,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.district.is_empty()
            && self.keyword.is_empty()
            && self.gender.is_empty()
            && self.time_cluster.is_empty()
            && self.text.is_empty()
            && !self.show_only_latest
    }
}

fn matches_district(incident: &Incident, district: &str) -> bool {
    incident.district.as_deref() == Some(district)
}

fn matches_keyword(incident: &Incident, canonical: &str) -> bool {
    incident
        .keywords
        .iter()
        .any(|raw| keywords::matches_canonical(raw, canonical))
}

fn matches_text(incident: &Incident, query: &str) -> bool {
    incident.body.to_lowercase().contains(&query.to_lowercase())
}

fn matches_gender(incident: &Incident, label: &str) -> bool {
    let Some(cluster) = GenderCluster::from_label(label) else {
        return false;
    };
    incident
        .genders
        .iter()
        .any(|raw| GenderCluster::from_token(raw) == cluster)
}

fn matches_time_cluster(incident: &Incident, label: &str) -> bool {
    let Some(cluster) = TimeCluster::from_label(label) else {
        return false;
    };
    incident
        .times
        .iter()
        .any(|raw| TimeCluster::from_time(raw) == cluster)
}

/// True when `incident` satisfies every non-empty predicate in `state`,
/// ignoring the facet named by `exclude`.
///
/// The `exclude` hole is what keeps facet availability mutually-exclusive
/// aware: the options for a facet are computed against every *other*
/// selection, so a facet's own current choice can never disappear from its
/// own option list.
fn matches(incident: &Incident, state: &FilterState, exclude: Option<Facet>) -> bool {
    if exclude != Some(Facet::District)
        && !state.district.is_empty()
        && !matches_district(incident, &state.district)
    {
        return false;
    }
    if exclude != Some(Facet::Keyword)
        && !state.keyword.is_empty()
        && !matches_keyword(incident, &state.keyword)
    {
        return false;
    }
    if exclude != Some(Facet::Gender)
        && !state.gender.is_empty()
        && !matches_gender(incident, &state.gender)
    {
        return false;
    }
    if exclude != Some(Facet::TimeCluster)
        && !state.time_cluster.is_empty()
        && !matches_time_cluster(incident, &state.time_cluster)
    {
        return false;
    }
    if exclude != Some(Facet::Text)
        && !state.text.is_empty()
        && !matches_text(incident, &state.text)
    {
        return false;
    }
    true
}

/// Applies every non-empty predicate in `state` to `collection`, preserving
/// input order. With `show_only_latest`, the already-filtered list collapses
/// to its single highest-ranked incident by recency — not the first of the
/// unfiltered collection.
pub fn apply_filters<'a>(
    collection: &[&'a Incident],
    state: &FilterState,
    dates: &DateParser,
) -> Vec<&'a Incident> {
    let mut out: Vec<&Incident> = collection
        .iter()
        .copied()
        .filter(|incident| matches(incident, state, None))
        .collect();

    if state.show_only_latest {
        // First-wins on equal dates, so the collapse is stable.
        let mut latest: Option<&Incident> = None;
        for incident in out.iter().copied() {
            let replace = match latest {
                None => true,
                Some(current) => {
                    compare_recency(dates.incident_date(incident), dates.incident_date(current))
                        == std::cmp::Ordering::Less
                }
            };
            if replace {
                latest = Some(incident);
            }
        }
        out = latest.into_iter().collect();
    }

    tracing::trace!(selected = out.len(), total = collection.len(), "applied filters");
    out
}

/// The facet values still selectable under `state`: every filter except the
/// one being populated is applied, then the distinct derived values of the
/// remaining incidents are collected.
///
/// Keywords sort in German collation order; districts and cluster labels
/// sort lexically.
pub fn available_values(
    collection: &[&Incident],
    state: &FilterState,
    facet: Facet,
) -> Vec<String> {
    let remaining = collection
        .iter()
        .copied()
        .filter(|incident| matches(incident, state, Some(facet)));

    let mut values: Vec<String> = Vec::new();
    let mut push_unique = |values: &mut Vec<String>, value: String| {
        if !value.is_empty() && !values.contains(&value) {
            values.push(value);
        }
    };

    match facet {
        Facet::District => {
            for incident in remaining {
                if let Some(district) = &incident.district {
                    push_unique(&mut values, district.clone());
                }
            }
            values.sort();
        }
        Facet::Keyword => {
            for incident in remaining {
                for raw in &incident.keywords {
                    push_unique(&mut values, keywords::canonicalize(raw));
                }
            }
            values.sort_by(|a, b| compare_de(a, b));
        }
        Facet::Gender => {
            for incident in remaining {
                for raw in &incident.genders {
                    push_unique(&mut values, GenderCluster::from_token(raw).label().to_string());
                }
            }
            values.sort();
        }
        Facet::TimeCluster => {
            for incident in remaining {
                for raw in &incident.times {
                    push_unique(&mut values, TimeCluster::from_time(raw).label().to_string());
                }
            }
            values.sort();
        }
        // Free text has no enumerable value set.
        Facet::Text => {}
    }

    values
}
