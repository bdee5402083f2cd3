use rustc_hash::FxHashMap;

use crate::branch::{CharNode, NodeId};
use crate::geom::Point;

/// Insert-only spatial index over placed character nodes.
///
/// World space is discretized into square cells; each cell keeps the ids of
/// the nodes inside it in insertion order. Nodes never move after placement,
/// so the index never rebalances or shrinks — a reload replaces it wholesale.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    cells: FxHashMap<(i32, i32), Vec<NodeId>>,
    cell_size: f64,
}

impl SpatialIndex {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cells: FxHashMap::default(),
            cell_size: cell_size.max(1.0),
        }
    }

    fn cell_of(&self, p: Point) -> (i32, i32) {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, id: NodeId, position: Point) {
        self.cells.entry(self.cell_of(position)).or_default().push(id);
    }

    /// Ids of all nodes within `radius` of `center`, in insertion order.
    ///
    /// Visits only the cells the query circle can touch, so cost scales with
    /// local density rather than total node count.
    pub fn within(&self, nodes: &[CharNode], center: Point, radius: f64) -> Vec<NodeId> {
        let r = radius.max(0.0);
        let (min_cx, min_cy) = self.cell_of(crate::geom::point(center.x - r, center.y - r));
        let (max_cx, max_cy) = self.cell_of(crate::geom::point(center.x + r, center.y + r));

        let mut out: Vec<NodeId> = Vec::new();
        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let Some(ids) = self.cells.get(&(cx, cy)) else {
                    continue;
                };
                for &id in ids {
                    if (nodes[id].position - center).length() <= r {
                        out.push(id);
                    }
                }
            }
        }
        out.sort_unstable();
        out
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
