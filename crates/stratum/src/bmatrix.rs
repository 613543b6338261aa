//! Barycenter reordering of two adjacent levels.
//!
//! A [`BMatrix`] borrows the vertex orders of an `object` level and the `subject` level directly
//! below it, together with the edges between them. Each reorder pass sorts one side by the mean
//! position of its neighbors on the other side, which tends to pull connected vertices into the
//! same columns and remove crossings. The heuristic is local: the next pair's matrix may reorder
//! the shared level again.

use crate::model::{Edge, VertexIx};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Which of the two levels a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Object,
    Subject,
}

#[derive(Debug)]
pub struct BMatrix<'a> {
    objects: &'a mut [VertexIx],
    subjects: &'a mut [VertexIx],
    /// `relation[object]` holds the subjects `object` has an edge to.
    relation: FxHashMap<VertexIx, FxHashSet<VertexIx>>,
    edges: Vec<Edge>,
}

impl<'a> BMatrix<'a> {
    /// Edges with an endpoint outside the two levels (cycle-closing edges) are ignored.
    pub fn new(objects: &'a mut [VertexIx], subjects: &'a mut [VertexIx], edges: &[Edge]) -> Self {
        let object_set: FxHashSet<VertexIx> = objects.iter().copied().collect();
        let subject_set: FxHashSet<VertexIx> = subjects.iter().copied().collect();

        let edges: Vec<Edge> = edges
            .iter()
            .filter(|e| object_set.contains(&e.object) && subject_set.contains(&e.subject))
            .copied()
            .collect();

        let mut relation: FxHashMap<VertexIx, FxHashSet<VertexIx>> = FxHashMap::default();
        for e in &edges {
            relation.entry(e.object).or_default().insert(e.subject);
        }

        Self {
            objects,
            subjects,
            relation,
            edges,
        }
    }

    pub fn objects(&self) -> &[VertexIx] {
        &*self.objects
    }

    pub fn subjects(&self) -> &[VertexIx] {
        &*self.subjects
    }

    pub fn is_related(&self, object: VertexIx, subject: VertexIx) -> bool {
        self.relation
            .get(&object)
            .is_some_and(|subjects| subjects.contains(&subject))
    }

    /// Mean 0-based position of `vertex`'s neighbors on the opposite side, or `None` when it has
    /// no neighbors there.
    ///
    /// Positions are averaged 1-based and shifted back down by one.
    pub fn barycenter(&self, vertex: VertexIx, side: Side) -> Option<f64> {
        let opposite: &[VertexIx] = match side {
            Side::Object => &*self.subjects,
            Side::Subject => &*self.objects,
        };

        let mut sum: f64 = 0.0;
        let mut count: usize = 0;
        for (pos, &other) in opposite.iter().enumerate() {
            let linked = match side {
                Side::Object => self.is_related(vertex, other),
                Side::Subject => self.is_related(other, vertex),
            };
            if linked {
                sum += (pos + 1) as f64;
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }
        Some(sum / count as f64 - 1.0)
    }

    pub fn reorder_object_side(&mut self) {
        let keyed = self.barycenters(Side::Object);
        write_sorted(&mut *self.objects, keyed);
    }

    pub fn reorder_subject_side(&mut self) {
        let keyed = self.barycenters(Side::Subject);
        write_sorted(&mut *self.subjects, keyed);
    }

    fn barycenters(&self, side: Side) -> Vec<(Option<f64>, VertexIx)> {
        let own: &[VertexIx] = match side {
            Side::Object => &*self.objects,
            Side::Subject => &*self.subjects,
        };
        own.iter()
            .map(|&v| (self.barycenter(v, side), v))
            .collect()
    }

    /// Edge crossings between the two levels under their current orders.
    pub fn crossings(&self) -> usize {
        count_crossings(&*self.objects, &*self.subjects, &self.edges)
    }
}

/// Stable ascending sort by barycenter; vertices without one keep their relative order after all
/// the others.
fn write_sorted(order: &mut [VertexIx], mut keyed: Vec<(Option<f64>, VertexIx)>) {
    keyed.sort_by(|(a, _), (b, _)| compare_barycenters(*a, *b));
    for (slot, (_, v)) in order.iter_mut().zip(keyed) {
        *slot = v;
    }
}

fn compare_barycenters(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Counts pairs of edges between `objects` and `subjects` that cross when both levels are drawn in
/// the given orders. Edges with an endpoint outside the two levels are skipped.
///
/// Uses an accumulator tree over subject positions, so the cost is `O(E log V)`.
pub fn count_crossings(objects: &[VertexIx], subjects: &[VertexIx], edges: &[Edge]) -> usize {
    if subjects.is_empty() {
        return 0;
    }

    let object_pos: FxHashMap<VertexIx, usize> =
        objects.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let subject_pos: FxHashMap<VertexIx, usize> =
        subjects.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut hops: Vec<(usize, usize)> = edges
        .iter()
        .filter_map(|e| Some((*object_pos.get(&e.object)?, *subject_pos.get(&e.subject)?)))
        .collect();
    hops.sort_unstable();

    let mut first_index: usize = 1;
    while first_index < subjects.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut crossings: usize = 0;
    for (_, subject) in hops {
        let mut index = subject + first_index;
        tree[index] += 1;
        let mut right_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                right_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        crossings += right_sum;
    }

    crossings
}
