//! Layout records and the result value handed to renderers.
//!
//! Vertices live in an arena owned by the partitioner and are addressed by [`VertexIx`]. The
//! result types only carry string ids and grid coordinates so they can be serialized as-is.

use serde::{Deserialize, Serialize};

/// Index of a vertex in the partitioner's arena.
pub type VertexIx = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: String,
    /// Only ever increases once assigned.
    pub level: usize,
    /// Routing vertex inserted while splitting a multi-level edge.
    pub is_virtual: bool,
}

/// A directed edge from `object` (parent) to `subject` (child).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub object: VertexIx,
    pub subject: VertexIx,
    pub is_virtual: bool,
}

impl Edge {
    pub(crate) fn new(object: VertexIx, subject: VertexIx) -> Self {
        Self {
            object,
            subject,
            is_virtual: false,
        }
    }

    pub(crate) fn virtual_hop(object: VertexIx, subject: VertexIx) -> Self {
        Self {
            object,
            subject,
            is_virtual: true,
        }
    }

    /// The `subject^object` identity of the edge; at most one edge per key is kept.
    pub fn key(&self) -> (VertexIx, VertexIx) {
        (self.subject, self.object)
    }
}

/// The real and virtual vertices one input edge was routed through, `object` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalPath(pub(crate) Vec<VertexIx>);

impl LogicalPath {
    pub fn ids(&self) -> &[VertexIx] {
        &self.0
    }

    pub fn first(&self) -> Option<VertexIx> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<VertexIx> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    /// Column within the level.
    pub x: usize,
    /// Level.
    pub y: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedNode {
    pub id: String,
    pub x: usize,
    pub y: usize,
}

impl PlacedNode {
    pub fn point(&self) -> GridPoint {
        GridPoint {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPath {
    pub nodes: Vec<String>,
    pub waypoints: Vec<GridPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<PlacedNode>,
    pub virtual_nodes: Vec<PlacedNode>,
    pub paths: Vec<LayoutPath>,
    /// Size of the most populated level.
    pub height: usize,
    /// Number of populated levels.
    pub width: usize,
}

impl LayoutResult {
    /// Looks up a placed vertex by id, real nodes first.
    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes
            .iter()
            .chain(self.virtual_nodes.iter())
            .find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.virtual_nodes.is_empty()
    }
}
