use std::fmt::Write as _;

use crate::branch::CharNode;
use crate::color::DEFAULT_COLOR;
use crate::viewport::Viewport;

#[derive(Debug, Clone)]
pub struct SvgFrameOptions {
    /// Extra space around the computed viewBox.
    pub viewbox_padding: f64,
    pub font_size: f64,
    pub font_family: String,
    /// Optional page background rectangle.
    pub background: Option<String>,
}

impl Default for SvgFrameOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            font_size: 9.75,
            font_family: "courier".to_string(),
            background: None,
        }
    }
}

fn push_escaped(out: &mut String, glyph: char) {
    match glyph {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        other => out.push(other),
    }
}

/// Renders the current frame as an SVG document: one `<text>` element per
/// placed character, positioned in screen space through `viewport`.
///
/// `incident_colors` is indexed by a node's incident; nodes outside the
/// slice fall back to the neutral color. An empty frame still yields a valid
/// document with the viewport's own extent as its viewBox.
pub fn render_frame_svg(
    nodes: &[CharNode],
    viewport: &Viewport,
    incident_colors: &[String],
    options: &SvgFrameOptions,
) -> String {
    let pad = options.viewbox_padding.max(0.0);

    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    let mut placed: Vec<(f64, f64, &CharNode)> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let screen = viewport.world_to_screen(node.position.x, node.position.y);
        min_x = min_x.min(screen.x);
        min_y = min_y.min(screen.y);
        max_x = max_x.max(screen.x);
        max_y = max_y.max(screen.y);
        placed.push((screen.x, screen.y, node));
    }
    if placed.is_empty() {
        min_x = 0.0;
        min_y = 0.0;
        max_x = viewport.width;
        max_y = viewport.height;
    }

    let vb_min_x = min_x - pad;
    let vb_min_y = min_y - pad;
    let vb_w = (max_x - min_x) + pad * 2.0;
    let vb_h = (max_y - min_y) + pad * 2.0;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{vb_min_x} {vb_min_y} {vb_w} {vb_h}\" \
         font-family=\"{}\" font-size=\"{}\" text-anchor=\"middle\">",
        options.font_family, options.font_size
    );
    if let Some(background) = &options.background {
        let _ = write!(
            svg,
            "<rect x=\"{vb_min_x}\" y=\"{vb_min_y}\" width=\"{vb_w}\" height=\"{vb_h}\" fill=\"{background}\"/>"
        );
    }

    for (x, y, node) in placed {
        let color = incident_colors
            .get(node.incident)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR);
        let _ = write!(svg, "<text x=\"{x}\" y=\"{y}\" fill=\"{color}\">");
        push_escaped(&mut svg, node.glyph);
        svg.push_str("</text>");
    }

    svg.push_str("</svg>");
    svg
}
