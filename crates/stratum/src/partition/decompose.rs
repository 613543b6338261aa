//! Split edges spanning several levels into chains of single-level hops.
//!
//! An edge from level `r` to level `r + k` (`k > 1`) is replaced by `k` hops through `k - 1`
//! virtual vertices, one per intermediate level. Every input edge yields one logical path so the
//! renderer can draw it as a single connector.

use super::traverse::EdgeSet;
use crate::model::{Edge, LogicalPath, Vertex, VertexIx};
use rustc_hash::FxHashMap;

const VIRTUAL_PREFIX: &str = "_v";

pub(super) struct Decomposed {
    pub(super) edges: Vec<Edge>,
    pub(super) paths: Vec<LogicalPath>,
}

pub(super) fn run(
    vertices: &mut Vec<Vertex>,
    vertex_index: &mut FxHashMap<String, VertexIx>,
    edge_set: EdgeSet,
) -> Decomposed {
    let mut edges: Vec<Edge> = Vec::with_capacity(edge_set.len());
    let mut paths: Vec<LogicalPath> = Vec::with_capacity(edge_set.len());
    let mut next_virtual: usize = 0;

    for edge in edge_set.into_values() {
        let object_level = vertices[edge.object].level;
        let subject_level = vertices[edge.subject].level;

        // Hops to the next level, and cycle-closing edges that point back up, stay as they are.
        if subject_level <= object_level + 1 {
            edges.push(edge);
            paths.push(LogicalPath(vec![edge.object, edge.subject]));
            continue;
        }

        let mut path: Vec<VertexIx> = Vec::with_capacity(subject_level - object_level + 1);
        path.push(edge.object);
        let mut prev = edge.object;
        for level in object_level + 1..subject_level {
            let id = next_virtual_id(vertex_index, &mut next_virtual);
            let v = vertices.len();
            vertex_index.insert(id.clone(), v);
            vertices.push(Vertex {
                id,
                level,
                is_virtual: true,
            });
            edges.push(Edge::virtual_hop(prev, v));
            path.push(v);
            prev = v;
        }
        edges.push(Edge::virtual_hop(prev, edge.subject));
        path.push(edge.subject);
        paths.push(LogicalPath(path));
    }

    Decomposed { edges, paths }
}

fn next_virtual_id(vertex_index: &FxHashMap<String, VertexIx>, next: &mut usize) -> String {
    loop {
        let id = format!("{VIRTUAL_PREFIX}{next}");
        *next += 1;
        if !vertex_index.contains_key(id.as_str()) {
            return id;
        }
    }
}
