//! The read-only view of a caller-owned graph that the layout consumes.
//!
//! The layout never mutates the caller's graph. It only asks for roots, children of a node, and
//! (when there are no roots) any node to start from.

use crate::graphlib::Graph;

/// A node handed out by a [`GraphAdapter`].
pub trait NodeRef {
    fn id(&self) -> &str;
}

impl NodeRef for &str {
    fn id(&self) -> &str {
        self
    }
}

impl NodeRef for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}

/// Root/child/all-node enumeration over a directed graph.
///
/// Iteration order matters: layouts are deterministic for a fixed adapter order.
pub trait GraphAdapter {
    type Node<'a>: NodeRef
    where
        Self: 'a;

    /// Nodes with no incoming edge. May be empty (e.g. a fully cyclic graph).
    fn root_nodes(&self) -> Vec<Self::Node<'_>>;

    /// Direct successors of `id`. Unknown ids yield an empty list.
    fn child_nodes(&self, id: &str) -> Vec<Self::Node<'_>>;

    /// Every node. Only consulted when [`GraphAdapter::root_nodes`] is empty.
    fn all_nodes(&self) -> Vec<Self::Node<'_>>;
}

impl<N, E> GraphAdapter for Graph<N, E>
where
    N: Default,
    E: Default,
{
    type Node<'a>
        = &'a str
    where
        Self: 'a;

    fn root_nodes(&self) -> Vec<&str> {
        self.sources()
    }

    fn child_nodes(&self, id: &str) -> Vec<&str> {
        self.successors(id)
    }

    fn all_nodes(&self) -> Vec<&str> {
        self.nodes().collect()
    }
}
