#![forbid(unsafe_code)]

//! Headless engine for the Showcases incident visualization.
//!
//! Re-exports the member crates and owns [`Scene`], the session object that
//! wires one incident snapshot through the recency window, the facet filter
//! engine, the branch-growth simulation and the viewport. All derivation is
//! eager and full: any filter or dataset change rebuilds the downstream
//! state in one synchronous pass, and a rebuild discards every branch, node
//! and bucket of the previous session before the new one exists.

pub use schaukasten_core::*;
pub use schaukasten_sim as sim;

pub use schaukasten_sim::{
    GrowthEngine, GrowthParams, Presets, Seed, Viewport, WorldConfig, default_presets,
};

use schaukasten_core::keywords;
use schaukasten_core::text::shorten_around_keyword;
use schaukasten_sim::color::{DEFAULT_COLOR, keyword_color};
use schaukasten_sim::geom::Point;
use schaukasten_sim::resolve_mode;
use schaukasten_sim::svg::{SvgFrameOptions, render_frame_svg};

/// Vertical offset between a hovered glyph and its tooltip, screen pixels.
const TOOLTIP_LIFT: f64 = 22.0;
/// Length of the body snippet shown in tooltips.
const SNIPPET_LEN: usize = 200;

/// Everything the UI needs to show a tooltip for a hovered glyph. A `None`
/// from [`Scene::hover_at`] means "clear the tooltip".
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Body snippet shortened around the first matched keyword.
    pub text: String,
    pub url: Option<String>,
    /// Screen position, already lifted above the glyph.
    pub x: f64,
    pub y: f64,
    /// Canonical ids of the incident's matched keywords.
    pub keywords: Vec<String>,
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub window_size: usize,
    pub mode: String,
    pub session_seed: u64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub world: WorldConfig,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            mode: "fungal".to_string(),
            session_seed: 0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            world: WorldConfig::default(),
        }
    }
}

/// One visualization session over one incident snapshot.
pub struct Scene {
    incidents: Vec<Incident>,
    dates: DateParser,
    presets: Presets,
    options: SceneOptions,
    filter: FilterState,
    /// Filtered incidents in window order; the engine's seed indices point
    /// into this.
    visible: Vec<Incident>,
    colors: Vec<String>,
    engine: GrowthEngine,
    viewport: Viewport,
}

impl Scene {
    pub fn new(incidents: Vec<Incident>, options: SceneOptions) -> Self {
        let mut scene = Self {
            incidents,
            dates: DateParser::new(),
            presets: default_presets(),
            viewport: Viewport::new(
                options.viewport_width,
                options.viewport_height,
                options.world.center(),
            ),
            engine: GrowthEngine::new(
                &[],
                GrowthParams::default(),
                options.world.clone(),
                options.session_seed,
            ),
            options,
            filter: FilterState::default(),
            visible: Vec::new(),
            colors: Vec::new(),
        };
        scene.rebuild();
        scene
    }

    /// Replaces the whole incident snapshot. The previous session's
    /// geometry is gone before this returns; nothing stale can be hit.
    pub fn reload(&mut self, incidents: Vec<Incident>) {
        self.incidents = incidents;
        self.rebuild();
    }

    /// Replaces the filter selections and re-derives everything downstream.
    pub fn set_filter(&mut self, filter: FilterState) {
        if self.filter != filter {
            self.filter = filter;
            self.rebuild();
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Switches the growth personality; takes effect via a full rebuild so
    /// mid-session geometry never mixes presets.
    pub fn set_mode(&mut self, mode: &str) {
        if self.options.mode != mode {
            self.options.mode = mode.to_string();
            self.rebuild();
        }
    }

    /// The incidents the current filter selects, in window order.
    pub fn visible_incidents(&self) -> &[Incident] {
        &self.visible
    }

    /// Option values still selectable for `facet` under the current filter.
    pub fn facet_options(&self, facet: Facet) -> Vec<String> {
        let window = windowed(&self.incidents, self.options.window_size, &self.dates);
        available_values(&window, &self.filter, facet)
    }

    pub fn engine(&self) -> &GrowthEngine {
        &self.engine
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// One simulation tick, called once per rendered frame.
    pub fn step(&mut self) {
        self.engine.step();
    }

    /// Runs the simulation until it settles or `max_ticks` pass.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        self.engine.run(max_ticks)
    }

    /// The tooltip payload for a pointer position, or `None` to clear.
    pub fn hover_at(&self, sx: f64, sy: f64) -> Option<Tooltip> {
        let world: Point = self.viewport.screen_to_world(sx, sy);
        let node_id = self.engine.hit_test(world)?;
        let node = &self.engine.nodes()[node_id];
        let incident = self.visible.get(node.incident)?;

        let matched: Vec<String> = matched_keywords(incident);
        let anchor = matched.first().map(String::as_str).unwrap_or("");
        let screen = self
            .viewport
            .world_to_screen(node.position.x, node.position.y);

        Some(Tooltip {
            text: shorten_around_keyword(&incident.body, anchor, SNIPPET_LEN),
            url: incident.url.clone(),
            x: screen.x,
            y: screen.y - TOOLTIP_LIFT,
            keywords: matched,
            date: self.dates.incident_date(incident),
        })
    }

    /// Placed glyphs with their screen-space positions, for hosts that draw
    /// the frame themselves instead of taking the SVG.
    pub fn screen_nodes(&self) -> impl Iterator<Item = (Point, &sim::CharNode)> + '_ {
        self.engine.nodes().iter().map(|node| {
            (
                self.viewport.world_to_screen(node.position.x, node.position.y),
                node,
            )
        })
    }

    /// Renders the current frame as an SVG document.
    pub fn frame_svg(&self, options: &SvgFrameOptions) -> String {
        render_frame_svg(self.engine.nodes(), &self.viewport, &self.colors, options)
    }

    fn rebuild(&mut self) {
        let window = windowed(&self.incidents, self.options.window_size, &self.dates);
        let filtered = apply_filters(&window, &self.filter, &self.dates);
        self.visible = filtered.into_iter().cloned().collect();

        self.colors = self
            .visible
            .iter()
            .map(|incident| {
                matched_keywords(incident)
                    .first()
                    .map(|k| keyword_color(k))
                    .unwrap_or_else(|| DEFAULT_COLOR.to_string())
            })
            .collect();

        let seeds: Vec<Seed> = self
            .visible
            .iter()
            .enumerate()
            .map(|(index, incident)| Seed {
                incident: index,
                text: seed_text(incident),
            })
            .collect();

        let params = resolve_mode(&self.presets, &self.options.mode);
        self.engine = GrowthEngine::new(
            &seeds,
            params,
            self.options.world.clone(),
            self.options.session_seed,
        );

        tracing::debug!(
            total = self.incidents.len(),
            visible = self.visible.len(),
            mode = %self.options.mode,
            "scene rebuilt"
        );
    }
}

/// Canonical ids of an incident's keywords, first occurrence order, no
/// duplicates.
fn matched_keywords(incident: &Incident) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for raw in &incident.keywords {
        let canonical = keywords::canonicalize(raw);
        if !out.contains(&canonical) {
            out.push(canonical);
        }
    }
    out
}

/// The text a strand spells out: the body shortened around the incident's
/// first keyword so the recognizable part grows first.
fn seed_text(incident: &Incident) -> String {
    let anchor = incident
        .keywords
        .first()
        .map(String::as_str)
        .unwrap_or("");
    shorten_around_keyword(&incident.body, anchor, SNIPPET_LEN)
}
