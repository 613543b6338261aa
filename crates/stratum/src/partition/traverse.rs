//! Level assignment by depth-first descent from the graph's roots.
//!
//! A child's level is `parent.level + 1` the first time it is reached. Reaching it again along a
//! deeper route raises its level and descends into it once more so its descendants follow. A
//! child that is already on the current ancestor path closes a cycle: its edge is recorded but it
//! is not descended into.

use crate::adapter::{GraphAdapter, NodeRef};
use crate::model::{Edge, Vertex, VertexIx};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Edges keyed by `(subject, object)`, in the order they were first recorded.
pub(super) type EdgeSet = IndexMap<(VertexIx, VertexIx), Edge, FxBuildHasher>;

#[derive(Debug, Default)]
pub(super) struct Traversal {
    pub(super) vertices: Vec<Vertex>,
    pub(super) vertex_index: FxHashMap<String, VertexIx>,
    pub(super) edges: EdgeSet,
    on_path: Vec<bool>,
}

/// One vertex on the ancestor path, with the children it has yet to visit.
struct Frame {
    vertex: VertexIx,
    /// Reversed so the next child is at the end.
    pending: Vec<String>,
}

impl Traversal {
    pub(super) fn run<A>(graph: &A) -> Self
    where
        A: GraphAdapter + ?Sized,
    {
        let mut traversal = Self::default();

        let mut starts: Vec<String> = graph
            .root_nodes()
            .iter()
            .map(|n| n.id().to_string())
            .collect();
        if starts.is_empty() {
            starts.extend(
                graph
                    .all_nodes()
                    .first()
                    .map(|n| n.id().to_string()),
            );
        }

        for id in starts {
            let start = match traversal.vertex_index.get(id.as_str()) {
                Some(&ix) => ix,
                None => traversal.insert_vertex(id, 0),
            };
            traversal.descend(graph, start);
        }

        traversal
    }

    fn insert_vertex(&mut self, id: String, level: usize) -> VertexIx {
        let ix = self.vertices.len();
        self.vertex_index.insert(id.clone(), ix);
        self.vertices.push(Vertex {
            id,
            level,
            is_virtual: false,
        });
        self.on_path.push(false);
        ix
    }

    /// Re-recording an existing `(subject, object)` pair keeps its original position.
    fn record_edge(&mut self, object: VertexIx, subject: VertexIx) {
        let edge = Edge::new(object, subject);
        self.edges.insert(edge.key(), edge);
    }

    fn enter<A>(&mut self, graph: &A, vertex: VertexIx) -> Frame
    where
        A: GraphAdapter + ?Sized,
    {
        self.on_path[vertex] = true;
        let mut pending: Vec<String> = graph
            .child_nodes(&self.vertices[vertex].id)
            .iter()
            .map(|n| n.id().to_string())
            .collect();
        pending.reverse();
        Frame { vertex, pending }
    }

    fn descend<A>(&mut self, graph: &A, start: VertexIx)
    where
        A: GraphAdapter + ?Sized,
    {
        let mut stack: Vec<Frame> = vec![self.enter(graph, start)];

        while let Some(frame) = stack.last_mut() {
            let parent = frame.vertex;
            let Some(child_id) = frame.pending.pop() else {
                self.on_path[parent] = false;
                stack.pop();
                continue;
            };
            let child_level = self.vertices[parent].level + 1;

            let child = match self.vertex_index.get(child_id.as_str()).copied() {
                Some(child) if self.on_path[child] => {
                    tracing::trace!(
                        object = %self.vertices[parent].id,
                        subject = %child_id,
                        "cycle-closing edge"
                    );
                    self.record_edge(parent, child);
                    continue;
                }
                Some(child) => {
                    self.record_edge(parent, child);
                    if child_level <= self.vertices[child].level {
                        continue;
                    }
                    tracing::trace!(
                        vertex = %child_id,
                        from = self.vertices[child].level,
                        to = child_level,
                        "deepening vertex"
                    );
                    self.vertices[child].level = child_level;
                    child
                }
                None => {
                    let child = self.insert_vertex(child_id, child_level);
                    self.record_edge(parent, child);
                    child
                }
            };

            let frame = self.enter(graph, child);
            stack.push(frame);
        }
    }
}
