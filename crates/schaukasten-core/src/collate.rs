use std::cmp::Ordering;

/// DIN 5007-1 sort key: lowercase, umlauts fold onto their base vowel and
/// `ß` onto `ss`, so "ä" sorts next to "a" the way `localeCompare("de")`
/// orders option lists.
pub fn sort_key_de(input: &str) -> String {
    let mut key = String::with_capacity(input.len());
    for ch in input.chars().flat_map(|c| c.to_lowercase()) {
        match ch {
            'ä' => key.push('a'),
            'ö' => key.push('o'),
            'ü' => key.push('u'),
            'ß' => key.push_str("ss"),
            other => key.push(other),
        }
    }
    key
}

/// Compares two strings in German collation order.
///
/// Ties on the folded key fall back to the raw strings so the ordering is
/// total and deterministic ("apfel" vs "äpfel" never flips between runs).
pub fn compare_de(a: &str, b: &str) -> Ordering {
    sort_key_de(a)
        .cmp(&sort_key_de(b))
        .then_with(|| a.cmp(b))
}
