#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) grid layout for directed graphs.
//!
//! The layout runs in four phases:
//! - [`partition`]: assign every reachable vertex a level by depth-first descent from the roots,
//!   and split edges spanning several levels into chains through virtual vertices
//! - [`bmatrix`]: reduce crossings between each pair of adjacent levels with barycenter sorting
//! - [`position`]: spread each level over a shared column grid
//! - [`pipeline`]: tie the phases together and route one waypoint path per input edge
//!
//! The result only carries ids and integer grid coordinates; mapping them to pixels is up to the
//! renderer.
//!
//! ```
//! use stratum::graphlib::Graph;
//!
//! let mut g: Graph = Graph::new();
//! g.set_edge("a", "b");
//!
//! let result = stratum::layout(&g).unwrap();
//! assert_eq!(result.width, 2);
//! assert_eq!(result.node("b").map(|n| (n.x, n.y)), Some((0, 1)));
//! ```

pub use stratum_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapter;
pub mod bmatrix;
pub mod error;
pub mod model;
pub mod options;
pub mod partition;
pub mod pipeline;
pub mod position;

pub use adapter::{GraphAdapter, NodeRef};
pub use bmatrix::{BMatrix, Side};
pub use error::{Error, Result};
pub use model::{
    Edge, GridPoint, LayoutPath, LayoutResult, LogicalPath, PlacedNode, Vertex, VertexIx,
};
pub use options::LayoutOptions;
pub use partition::Partitioner;
pub use pipeline::layout_with_options;

/// Lays out `graph` with [`LayoutOptions::default`].
///
/// An empty graph yields an empty result, not an error.
pub fn layout<A>(graph: &A) -> Result<LayoutResult>
where
    A: GraphAdapter + ?Sized,
{
    layout_with_options(graph, &LayoutOptions::default())
}
