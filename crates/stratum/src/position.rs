//! Grid coordinate assignment.
//!
//! Each level is spread over the columns of the widest level: the vertex at position `p` of a
//! level holding `w` vertices starts at column `floor((p + 1) * (M / w / 2))`, where `M` is the
//! widest level's size. A column already taken in the same level pushes the vertex to the next
//! free column to the right.

use crate::error::Result;
use crate::model::{GridPoint, PlacedNode, VertexIx};
use crate::partition::Partitioner;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct Placement {
    /// Indexed by [`VertexIx`].
    pub points: Vec<Option<GridPoint>>,
    pub nodes: Vec<PlacedNode>,
    pub virtual_nodes: Vec<PlacedNode>,
}

impl Placement {
    pub fn point(&self, v: VertexIx) -> Option<GridPoint> {
        self.points.get(v).copied().flatten()
    }
}

/// Preferred column for position `pos` in a level of `level_width` vertices.
pub fn column(pos: usize, level_width: usize, max_width: usize) -> usize {
    if level_width == 0 {
        return 0;
    }
    let spacing = max_width as f64 / level_width as f64 / 2.0;
    ((pos + 1) as f64 * spacing).floor() as usize
}

pub fn position(partitioner: &Partitioner) -> Result<Placement> {
    let max_width = partitioner.max_partition_width();
    let mut placement = Placement {
        points: vec![None; partitioner.vertices().len()],
        ..Default::default()
    };

    for level in 0..partitioner.vertex_partition_count() {
        let order = partitioner.vertex_partition(level)?;
        let mut occupied: FxHashSet<usize> = FxHashSet::default();

        for (pos, &v) in order.iter().enumerate() {
            let mut x = column(pos, order.len(), max_width);
            while !occupied.insert(x) {
                x += 1;
            }

            let point = GridPoint { x, y: level };
            placement.points[v] = Some(point);

            let Some(vertex) = partitioner.vertex(v) else {
                continue;
            };
            let placed = PlacedNode {
                id: vertex.id.clone(),
                x,
                y: level,
            };
            if vertex.is_virtual {
                placement.virtual_nodes.push(placed);
            } else {
                placement.nodes.push(placed);
            }
        }
    }

    Ok(placement)
}
