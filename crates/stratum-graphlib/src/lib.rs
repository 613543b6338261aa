//! Graph container APIs used by `stratum`.
//!
//! A small directed graph keyed by string ids. Nodes and edges keep their insertion order, which
//! is what makes layouts computed over this container reproducible run to run.

mod graph;

pub use graph::{EdgeKey, Graph};
