//! Level partitioning of an adapter's graph.
//!
//! The [`Partitioner`] runs once per layout: it assigns levels, splits multi-level edges into
//! virtual hops, and buckets vertices and edges by level. After construction the vertex and edge
//! sets are fixed; only the order of vertices within a level changes (see [`crate::bmatrix`]).

mod decompose;
mod traverse;

use crate::adapter::GraphAdapter;
use crate::bmatrix::{BMatrix, count_crossings};
use crate::error::{Error, Result};
use crate::model::{Edge, LogicalPath, Vertex, VertexIx};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Partitioner {
    vertices: Vec<Vertex>,
    vertex_index: FxHashMap<String, VertexIx>,
    edges: Vec<Edge>,
    paths: Vec<LogicalPath>,
    /// Indexed by level. An empty bucket is an unpopulated level.
    vertex_partitions: Vec<Vec<VertexIx>>,
    /// Indexed by the `object` level of each edge.
    edge_partitions: Vec<Vec<Edge>>,
    max_partition_width: usize,
}

impl Partitioner {
    pub fn new<A>(graph: &A) -> Self
    where
        A: GraphAdapter + ?Sized,
    {
        let traverse::Traversal {
            mut vertices,
            mut vertex_index,
            edges,
            ..
        } = traverse::Traversal::run(graph);

        let decompose::Decomposed { edges, paths } =
            decompose::run(&mut vertices, &mut vertex_index, edges);

        let level_count = vertices.iter().map(|v| v.level + 1).max().unwrap_or(0);
        let mut vertex_partitions: Vec<Vec<VertexIx>> = vec![Vec::new(); level_count];
        for (ix, v) in vertices.iter().enumerate() {
            vertex_partitions[v.level].push(ix);
        }

        let mut edge_partitions: Vec<Vec<Edge>> = vec![Vec::new(); level_count];
        for e in &edges {
            edge_partitions[vertices[e.object].level].push(*e);
        }

        let max_partition_width = vertex_partitions.iter().map(Vec::len).max().unwrap_or(0);

        Self {
            vertices,
            vertex_index,
            edges,
            paths,
            vertex_partitions,
            edge_partitions,
            max_partition_width,
        }
    }

    /// Number of populated levels.
    pub fn vertex_partition_count(&self) -> usize {
        self.vertex_partitions
            .iter()
            .filter(|p| !p.is_empty())
            .count()
    }

    /// Vertices at `level` in their current order.
    pub fn vertex_partition(&self, level: usize) -> Result<&[VertexIx]> {
        match self.vertex_partitions.get(level) {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(Error::MissingVertexPartition {
                level,
                count: self.vertex_partition_count(),
            }),
        }
    }

    /// Number of levels that are the `object` level of at least one edge.
    pub fn edge_partition_count(&self) -> usize {
        self.edge_partitions.iter().filter(|p| !p.is_empty()).count()
    }

    pub fn has_edge_partition(&self, level: usize) -> bool {
        self.edge_partitions
            .get(level)
            .is_some_and(|p| !p.is_empty())
    }

    /// Edges whose `object` sits at `level`.
    pub fn edge_partition(&self, level: usize) -> Result<&[Edge]> {
        match self.edge_partitions.get(level) {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(Error::MissingEdgePartition {
                level,
                count: self.edge_partition_count(),
            }),
        }
    }

    pub fn max_partition_width(&self) -> usize {
        self.max_partition_width
    }

    /// One path per input edge, in the order the edges were first reached.
    pub fn logical_paths(&self) -> &[LogicalPath] {
        &self.paths
    }

    pub fn vertex(&self, ix: VertexIx) -> Option<&Vertex> {
        self.vertices.get(ix)
    }

    pub fn vertex_by_id(&self, id: &str) -> Option<&Vertex> {
        self.vertex_index.get(id).map(|&ix| &self.vertices[ix])
    }

    pub fn vertex_ix(&self, id: &str) -> Option<VertexIx> {
        self.vertex_index.get(id).copied()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges after decomposition.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the vertices at `level` in their current order.
    pub fn level_ids(&self, level: usize) -> Result<Vec<&str>> {
        Ok(self
            .vertex_partition(level)?
            .iter()
            .map(|&v| self.vertices[v].id.as_str())
            .collect())
    }

    /// A bipartite matrix over levels `level` and `level + 1` that reorders both in place.
    pub fn bmatrix(&mut self, level: usize) -> Result<BMatrix<'_>> {
        self.vertex_partition(level)?;
        self.vertex_partition(level + 1)?;
        self.edge_partition(level)?;
        let edges = &self.edge_partitions[level];
        let (upper, lower) = self.vertex_partitions.split_at_mut(level + 1);
        Ok(BMatrix::new(&mut upper[level], &mut lower[0], edges))
    }

    /// Edge crossings between every adjacent pair of levels under the current orders.
    pub fn crossings(&self) -> usize {
        (0..self.vertex_partitions.len().saturating_sub(1))
            .map(|level| {
                count_crossings(
                    &self.vertex_partitions[level],
                    &self.vertex_partitions[level + 1],
                    &self.edge_partitions[level],
                )
            })
            .sum()
    }
}
