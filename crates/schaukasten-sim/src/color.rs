/// Stable hue for a canonical keyword.
///
/// The hash is FNV-1a over the keyword bytes, so a keyword keeps its color
/// across sessions, datasets and machines — the original sketch kept an
/// equivalent per-keyword color map in HSB mode.
pub fn keyword_hue(keyword: &str) -> u16 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in keyword.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    (hash % 360) as u16
}

/// CSS color for a keyword's strands. Saturation and lightness are fixed;
/// only the hue varies.
pub fn keyword_color(keyword: &str) -> String {
    format!("hsl({}, 65%, 45%)", keyword_hue(keyword))
}

/// Neutral color used for strands without a keyword.
pub const DEFAULT_COLOR: &str = "hsl(0, 0%, 25%)";
