//! The layout pipeline: partition, reorder, position, and route paths.

use crate::adapter::GraphAdapter;
use crate::error::{Error, Result};
use crate::model::{LayoutPath, LayoutResult};
use crate::options::LayoutOptions;
use crate::partition::Partitioner;
use crate::position::{self, Placement};
use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone)]
struct Timings {
    total: Duration,
    partition: Duration,
    reorder: Duration,
    position: Duration,
    paths: Duration,
}

pub fn layout_with_options<A>(graph: &A, opts: &LayoutOptions) -> Result<LayoutResult>
where
    A: GraphAdapter + ?Sized,
{
    let total_start = opts.trace.then(Instant::now);
    let mut timings = Timings::default();

    let partition_start = opts.trace.then(Instant::now);
    let mut partitioner = Partitioner::new(graph);
    if let Some(s) = partition_start {
        timings.partition = s.elapsed();
    }

    let crossings_before = opts.trace.then(|| partitioner.crossings());

    let reorder_start = opts.trace.then(Instant::now);
    reorder(&mut partitioner, opts.iterations)?;
    if let Some(s) = reorder_start {
        timings.reorder = s.elapsed();
    }

    let position_start = opts.trace.then(Instant::now);
    let placement = position::position(&partitioner)?;
    if let Some(s) = position_start {
        timings.position = s.elapsed();
    }

    let paths_start = opts.trace.then(Instant::now);
    let paths = route_paths(&partitioner, &placement)?;
    if let Some(s) = paths_start {
        timings.paths = s.elapsed();
    }

    let Placement {
        nodes,
        virtual_nodes,
        ..
    } = placement;
    let result = LayoutResult {
        nodes,
        virtual_nodes,
        paths,
        height: partitioner.max_partition_width(),
        width: partitioner.vertex_partition_count(),
    };

    if let Some(s) = total_start {
        timings.total = s.elapsed();
        for level in 0..partitioner.vertex_partition_count() {
            let order = partitioner.level_ids(level)?;
            tracing::trace!(level, ?order, "level order");
        }
        tracing::debug!(
            vertices = partitioner.vertices().len(),
            virtual_vertices = result.virtual_nodes.len(),
            edges = partitioner.edges().len(),
            levels = result.width,
            height = result.height,
            iterations = opts.iterations,
            crossings_before = crossings_before.unwrap_or_default(),
            crossings_after = partitioner.crossings(),
            total = ?timings.total,
            partition = ?timings.partition,
            reorder = ?timings.reorder,
            position = ?timings.position,
            paths = ?timings.paths,
            "layout finished"
        );
    }

    Ok(result)
}

/// Runs `iterations` barycenter rounds over each adjacent pair of levels, top to bottom.
fn reorder(partitioner: &mut Partitioner, iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Ok(());
    }

    let level_count = partitioner.vertex_partition_count();
    for level in 0..level_count.saturating_sub(1) {
        if !partitioner.has_edge_partition(level) {
            continue;
        }
        let mut matrix = partitioner.bmatrix(level)?;
        for _ in 0..iterations {
            matrix.reorder_object_side();
            matrix.reorder_subject_side();
        }
    }
    Ok(())
}

fn route_paths(partitioner: &Partitioner, placement: &Placement) -> Result<Vec<LayoutPath>> {
    partitioner
        .logical_paths()
        .iter()
        .map(|path| {
            let mut nodes: Vec<String> = Vec::with_capacity(path.len());
            let mut waypoints = Vec::with_capacity(path.len());
            for &v in path.ids() {
                let id = partitioner
                    .vertex(v)
                    .map(|vertex| vertex.id.clone())
                    .unwrap_or_default();
                let Some(point) = placement.point(v) else {
                    return Err(Error::UnknownVertex { id });
                };
                nodes.push(id);
                waypoints.push(point);
            }
            Ok(LayoutPath { nodes, waypoints })
        })
        .collect()
}
