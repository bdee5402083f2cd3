use crate::collate::compare_de;

/// Raw keyword spelling → canonical keyword id.
///
/// The table is data lifted from the editorial pipeline: one row per raw
/// spelling seen in the reports, lowercased. A canonical id may appear as its
/// own no-op variant so that filtering by it matches reports that use the
/// canonical spelling directly.
const KEYWORD_GROUPS: &[(&str, &str)] = &[
    ("antisemitisch", "antisemitismus"),
    ("antisemitismus", "antisemitismus"),
    ("nationalsozialismus", "nationalsozialismus"),
    ("nationalsozialistisch", "nationalsozialismus"),
    ("nationalsozialistische", "nationalsozialismus"),
    ("rechtsextremisch", "rechtsextremismus"),
    ("rechtsextremistisch", "rechtsextremismus"),
    ("rassistisch", "rassismus"),
    ("rassismus", "rassismus"),
    ("fremdenfeindlich", "fremdenfeindlich"),
    ("hakenkreuz", "hakenkreuz"),
    ("hitlergruß", "hitlergruß"),
    ("homophobie", "homophobie"),
    ("mit politischem hintergrund", "mit politischem hintergrund"),
    ("nazi", "nazi"),
    ("queerfeindlichkeit", "queerfeindlichkeit"),
    ("sieg heil", "sieg heil"),
    ("transphobie", "transphobie"),
    ("verfassungswidrig", "verfassungswidrig"),
    ("volksverhetzung", "volksverhetzung"),
];

/// Maps a raw keyword token to its canonical keyword id.
///
/// Lookup is case-insensitive. Unknown tokens are their own canonical form:
/// an unrecognized keyword never drops out of the facet, it just forms a
/// singleton group.
pub fn canonicalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    for (variant, canonical) in KEYWORD_GROUPS {
        if *variant == lower {
            return (*canonical).to_string();
        }
    }
    lower
}

/// All raw spellings that map to `canonical`, plus `canonical` itself.
///
/// Used to build the matching predicate for keyword filtering: an incident
/// matches the canonical keyword when its raw keyword list contains any
/// variant, compared case-insensitively.
pub fn variants_of(canonical: &str) -> Vec<String> {
    let lower = canonical.to_lowercase();
    let mut out: Vec<String> = KEYWORD_GROUPS
        .iter()
        .filter(|(_, mapped)| *mapped == lower)
        .map(|(variant, _)| (*variant).to_string())
        .collect();
    if !out.iter().any(|v| *v == lower) {
        out.push(lower);
    }
    out
}

/// The distinct canonical keyword ids, in German collation order.
pub fn canonical_keywords() -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (_, canonical) in KEYWORD_GROUPS {
        if !out.iter().any(|c| c == canonical) {
            out.push((*canonical).to_string());
        }
    }
    out.sort_by(|a, b| compare_de(a, b));
    out
}

/// True when `raw` (any case) is a variant of `canonical`.
pub fn matches_canonical(raw: &str, canonical: &str) -> bool {
    canonicalize(raw) == canonical.to_lowercase()
}
