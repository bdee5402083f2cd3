use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::branch::{Branch, BranchState, CharNode, NodeId};
use crate::buckets::SpatialIndex;
use crate::geom::{Point, Rect, point, rotate, vector};
use crate::noise_field::DirectionField;
use crate::params::GrowthParams;

/// Fixed geometry of one visualization session. All lengths are pre-scale;
/// the `scale` factor is applied uniformly, matching the original sketch's
/// global render scale.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub scale: f64,
    /// Side length of the square world buffer.
    pub extent: f64,
    /// Distance the tip advances per placed character.
    pub segment_length: f64,
    /// Neighborhood radius for the repulsion query.
    pub repulsion_radius: f64,
    /// Cell size of the spatial bucket index.
    pub bucket_width: f64,
    /// Hit radius of a placed character.
    pub char_radius: f64,
    /// Spiral spacing between consecutive seeds.
    pub seed_spacing: f64,
    /// Neighbors tolerated inside the repulsion radius before a candidate
    /// position must move.
    pub density_limit: usize,
    /// Nudge attempts before a crowded branch goes terminal.
    pub repulsion_retries: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            scale: 0.75,
            extent: 4200.0,
            segment_length: 8.0,
            repulsion_radius: 12.0,
            bucket_width: 100.0,
            char_radius: 8.0,
            seed_spacing: 80.0,
            density_limit: 3,
            repulsion_retries: 3,
        }
    }
}

impl WorldConfig {
    pub fn world_side(&self) -> f64 {
        self.extent * self.scale
    }

    pub fn center(&self) -> Point {
        point(self.world_side() / 2.0, self.world_side() / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(point(0.0, 0.0), euclid::size2(self.world_side(), self.world_side()))
    }

    fn scaled_segment(&self) -> f64 {
        self.segment_length * self.scale
    }

    fn scaled_repulsion(&self) -> f64 {
        self.repulsion_radius * self.scale
    }

    fn scaled_char_radius(&self) -> f64 {
        self.char_radius * self.scale
    }
}

/// One incident's contribution to the simulation: the text its strand spells
/// out, in recency order (index 0 is the most recent incident).
#[derive(Debug, Clone)]
pub struct Seed {
    pub incident: usize,
    pub text: String,
}

/// The branch-growth simulation for one visualization session.
///
/// Owns every branch, the arena of placed character nodes and the spatial
/// bucket index. Reloading the incident set means dropping the engine and
/// constructing a new one; nothing survives a reload, so stale geometry can
/// never be hit-tested against a new dataset.
#[derive(Debug)]
pub struct GrowthEngine {
    world: WorldConfig,
    params: GrowthParams,
    field: DirectionField,
    rng: StdRng,
    branches: Vec<Branch>,
    nodes: Vec<CharNode>,
    index: SpatialIndex,
    branch_count: FxHashMap<usize, usize>,
    tick: u64,
}

/// Angle between consecutive seeds on the placement spiral.
const GOLDEN_ANGLE: f64 = 2.399963229728653;

impl GrowthEngine {
    /// Builds a session from filtered incidents. An empty seed list yields a
    /// valid empty simulation: zero branches, zero nodes, every hit test
    /// misses and [`GrowthEngine::step`] is a no-op.
    pub fn new(seeds: &[Seed], params: GrowthParams, world: WorldConfig, session_seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(session_seed);
        let field = DirectionField::new(session_seed as u32);
        let center = world.center();

        let mut branches = Vec::with_capacity(seeds.len());
        let mut branch_count: FxHashMap<usize, usize> = FxHashMap::default();
        for (order, seed) in seeds.iter().enumerate() {
            if seed.text.is_empty() {
                continue;
            }
            // Golden-angle spiral, most recent seed nearest the center so
            // older strands grow around and below the fresh material.
            let radius = world.seed_spacing * world.scale * (order as f64).sqrt();
            let angle = order as f64 * GOLDEN_ANGLE;
            let tip = point(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            // Outward base direction with a little per-branch wobble.
            let wobble: f64 = rng.gen_range(-0.5..0.5);
            let dir0 = rotate(vector(angle.cos(), angle.sin()), wobble);
            branches.push(Branch::new(seed.incident, tip, dir0, &seed.text));
            *branch_count.entry(seed.incident).or_insert(0) += 1;
        }

        tracing::debug!(
            seeds = seeds.len(),
            branches = branches.len(),
            "growth session seeded"
        );

        Self {
            index: SpatialIndex::new(world.bucket_width * world.scale),
            world,
            params,
            field,
            rng,
            branches,
            nodes: Vec::new(),
            branch_count,
            tick: 0,
        }
    }

    /// Placed character nodes in document insertion order.
    pub fn nodes(&self) -> &[CharNode] {
        &self.nodes
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn world(&self) -> &WorldConfig {
        &self.world
    }

    pub fn branch_states(&self) -> impl Iterator<Item = BranchState> + '_ {
        self.branches.iter().map(|b| b.state)
    }

    /// True once every branch has reached a terminal state (or spelled out
    /// all of its text). A settled engine never changes again.
    pub fn settled(&self) -> bool {
        self.branches.iter().all(|b| !b.is_live())
    }

    /// Advances the simulation by one tick: every live branch places at most
    /// one character. Called once per rendered frame by the host.
    pub fn step(&mut self) {
        if self.settled() {
            return;
        }
        self.tick += 1;

        let mut forks: Vec<Branch> = Vec::new();
        for i in 0..self.branches.len() {
            if !self.branches[i].is_live() {
                continue;
            }

            let (tip, dir0, incident) = {
                let b = &self.branches[i];
                (b.tip, b.dir0, b.incident)
            };

            // Steering: fixed base direction, sink bias, then a smooth
            // noise rotation bounded by the preset's randomness.
            let mut dir = dir0;
            dir.y += self.params.downward_bias;
            let len = dir.length();
            if len > f64::EPSILON {
                dir = dir / len;
            } else {
                dir = vector(0.0, 1.0);
            }
            let swirl =
                self.field
                    .angle_at(tip.x, tip.y, self.tick, self.params.direction_randomness);
            dir = rotate(dir, swirl);

            let Some(position) = self.clear_position(tip + dir * self.world.scaled_segment())
            else {
                self.branches[i].state = BranchState::Terminal;
                continue;
            };

            if !self.world.bounds().contains(position) {
                self.branches[i].state = BranchState::Terminal;
                continue;
            }

            let glyph = match self.branches[i].glyphs.pop_front() {
                Some(g) => g,
                None => continue,
            };
            let id: NodeId = self.nodes.len();
            self.nodes.push(CharNode {
                glyph,
                position,
                tick: self.tick,
                incident,
                radius: self.world.scaled_char_radius(),
            });
            self.index.insert(id, position);

            {
                let b = &mut self.branches[i];
                b.tip = position;
                b.placed += 1;
                b.state = if b.glyphs.is_empty() || b.placed >= self.params.max_nodes_per_branch {
                    BranchState::Terminal
                } else {
                    BranchState::Growing
                };
            }

            // Word boundaries may fork the rest of the text onto a child
            // strand, which is what turns a strand into a tree.
            if glyph == ' ' && self.branches[i].state == BranchState::Growing {
                if let Some(child) = self.try_fork(i, position) {
                    forks.push(child);
                }
            }
        }

        self.branches.extend(forks);
    }

    /// Steps until settled or `max_ticks` is exhausted; returns the number
    /// of ticks actually run.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let start = self.tick;
        while !self.settled() && self.tick - start < max_ticks {
            self.step();
        }
        self.tick - start
    }

    /// The first placed node (insertion order) whose hit radius contains
    /// `world_point`, via the bucket index.
    pub fn hit_test(&self, world_point: Point) -> Option<NodeId> {
        self.index
            .within(&self.nodes, world_point, self.world.scaled_char_radius())
            .into_iter()
            .find(|&id| {
                let node = &self.nodes[id];
                (node.position - world_point).length() < node.radius
            })
    }

    /// Finds a position near `candidate` that the local density allows, or
    /// `None` when the neighborhood stays too crowded after the configured
    /// retries.
    fn clear_position(&mut self, candidate: Point) -> Option<Point> {
        let radius = self.world.scaled_repulsion();
        let mut position = candidate;

        for _ in 0..=self.world.repulsion_retries {
            let neighbors = self.index.within(&self.nodes, position, radius);
            if neighbors.len() <= self.world.density_limit {
                return Some(position);
            }

            // Push away from the local centroid. When the centroid sits on
            // the candidate itself there is no escape direction to read off;
            // pick one at random.
            let mut centroid = vector(0.0, 0.0);
            for &id in &neighbors {
                centroid += self.nodes[id].position.to_vector();
            }
            centroid = centroid / neighbors.len() as f64;
            let away = position.to_vector() - centroid;
            let away = if away.length() > f64::EPSILON {
                away / away.length()
            } else {
                let theta: f64 = self.rng.gen_range(0.0..std::f64::consts::TAU);
                vector(theta.cos(), theta.sin())
            };
            position += away * radius;
        }

        None
    }

    fn try_fork(&mut self, parent: usize, position: Point) -> Option<Branch> {
        let incident = self.branches[parent].incident;
        let existing = self.branch_count.get(&incident).copied().unwrap_or(0);
        if existing >= self.params.max_branches_per_incident {
            return None;
        }
        if self.rng.gen_range(0.0..1.0) >= self.params.fork_chance {
            return None;
        }
        let spread = if self.rng.gen_bool(0.5) {
            self.params.fork_spread
        } else {
            -self.params.fork_spread
        };

        let b = &mut self.branches[parent];
        if b.glyphs.len() < 2 {
            return None;
        }
        // The child takes the back half of the remaining text; both strands
        // keep growing from the fork point.
        let keep = b.glyphs.len() / 2;
        let child_glyphs: std::collections::VecDeque<char> = b.glyphs.split_off(keep);
        let dir0 = rotate(b.dir0, spread);
        *self.branch_count.entry(incident).or_insert(0) += 1;

        let mut child = Branch::from_glyphs(incident, position, dir0, child_glyphs);
        child.state = BranchState::Growing;
        Some(child)
    }
}
