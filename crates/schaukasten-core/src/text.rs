use std::fmt::Write as _;

use regex::Regex;

const ELLIPSIS: char = '…';

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Cuts `text` to at most `max_len` bytes, preferring the last space before
/// the limit, and appends an ellipsis when anything was dropped.
pub fn shorten(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.len() <= max_len {
        return text.to_string();
    }
    let limit = floor_char_boundary(text, max_len);
    let cut = text[..limit].rfind(' ').unwrap_or(limit);
    format!("{}{ELLIPSIS}", &text[..cut])
}

/// Cuts a window of roughly `max_len` bytes centered on the first
/// case-insensitive occurrence of `keyword`, snapping both edges to word
/// boundaries and marking trimmed edges with ellipses.
///
/// Falls back to [`shorten`] when the keyword is empty or absent.
pub fn shorten_around_keyword(text: &str, keyword: &str, max_len: usize) -> String {
    if text.is_empty() || keyword.is_empty() {
        return shorten(text, max_len);
    }
    let haystack = text.to_lowercase();
    let needle = keyword.to_lowercase();
    let Some(hit) = haystack.find(&needle) else {
        return shorten(text, max_len);
    };
    // Byte offsets into the lowercased text can drift from the original for
    // a handful of characters (ß, İ); clamp back onto a boundary instead of
    // assuming the two strings line up.
    let hit = floor_char_boundary(text, hit.min(text.len()));

    let half = max_len.saturating_sub(keyword.len()) / 2;
    let mut start = floor_char_boundary(text, hit.saturating_sub(half));
    let mut end = floor_char_boundary(text, start + max_len);
    if end >= text.len() {
        end = text.len();
        start = floor_char_boundary(text, end.saturating_sub(max_len));
    }

    if start > 0 {
        if let Some(space) = text[..start].rfind(' ') {
            start = space + 1;
        }
    }
    if end < text.len() {
        if let Some(space) = text[end..].find(' ') {
            end = end + space;
        }
    }

    let mut out = String::with_capacity(end - start + 8);
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.push_str(&text[start..end]);
    if end < text.len() {
        out.push(ELLIPSIS);
    }
    out
}

/// Wraps every case-insensitive occurrence of any of `terms` in
/// `<span class="highlight">…</span>`.
///
/// Longer terms take precedence in the alternation so that a variant like
/// "rechtsextremistisch" wins over its prefix "rechtsextrem".
pub fn highlight_terms(text: &str, terms: &[String]) -> String {
    let mut terms: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    if text.is_empty() || terms.is_empty() {
        return text.to_string();
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()));

    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(re) = Regex::new(&format!("(?i){pattern}")) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let _ = write!(out, "<span class=\"highlight\">{}</span>", m.as_str());
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
