//! The core [`Graph`] container.
//!
//! Nodes are addressed by string ids. Edges are simple (at most one `v -> w` edge per ordered
//! pair); setting an existing edge replaces its label. Self-loops are allowed.

mod entries;

use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Graph<N = (), E = ()>
where
    N: Default,
    E: Default,
{
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<(usize, usize), usize>,
}

impl<N, E> Default for Graph<N, E>
where
    N: Default,
    E: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E>
where
    N: Default,
    E: Default,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts `id` with `label`, or replaces the label of an existing node.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(id.as_str()) {
            self.nodes[ix].label = label;
            return self;
        }
        self.insert_node(id, label);
        self
    }

    /// Inserts `id` with a default label if it is not already present.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if !self.node_index.contains_key(id.as_str()) {
            self.insert_node(id, N::default());
        }
        self
    }

    fn insert_node(&mut self, id: String, label: N) -> usize {
        let ix = self.nodes.len();
        self.node_index.insert(id.clone(), ix);
        self.nodes.push(NodeEntry::new(id, label));
        ix
    }

    fn node_ix_or_insert(&mut self, id: String) -> usize {
        match self.node_index.get(id.as_str()) {
            Some(&ix) => ix,
            None => self.insert_node(id, N::default()),
        }
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&ix| &self.nodes[ix].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        let ix = self.node_index.get(id).copied()?;
        Some(&mut self.nodes[ix].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge keys in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_with_label(v, w, E::default())
    }

    /// Inserts `v -> w`, creating missing endpoints. An existing edge keeps its position and only
    /// has its label replaced.
    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        let v_ix = self.node_ix_or_insert(v.clone());
        let w_ix = self.node_ix_or_insert(w.clone());

        if let Some(&edge_ix) = self.edge_index.get(&(v_ix, w_ix)) {
            self.edges[edge_ix].label = label;
            return self;
        }

        let edge_ix = self.edges.len();
        self.edges.push(EdgeEntry {
            key: EdgeKey { v, w },
            v_ix,
            w_ix,
            label,
        });
        self.edge_index.insert((v_ix, w_ix), edge_ix);
        self.nodes[v_ix].out_edges.push(edge_ix);
        self.nodes[w_ix].in_edges.push(edge_ix);
        self
    }

    /// Adds an edge between each consecutive pair of `nodes`.
    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge(v, w).is_some()
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        let v_ix = *self.node_index.get(v)?;
        let w_ix = *self.node_index.get(w)?;
        let edge_ix = *self.edge_index.get(&(v_ix, w_ix))?;
        Some(&self.edges[edge_ix].label)
    }

    /// Targets of `v`'s out-edges in edge insertion order. Unknown ids yield an empty list.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.nodes[v_ix]
            .out_edges
            .iter()
            .map(|&e| self.nodes[self.edges[e].w_ix].id.as_str())
            .collect()
    }

    /// Sources of `v`'s in-edges in edge insertion order. Unknown ids yield an empty list.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.nodes[v_ix]
            .in_edges
            .iter()
            .map(|&e| self.nodes[self.edges[e].v_ix].id.as_str())
            .collect()
    }

    /// Nodes with no in-edges, in insertion order.
    ///
    /// A node whose only in-edge is a self-loop is not a source.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.in_edges.is_empty())
            .map(|n| n.id.as_str())
            .collect()
    }
}
