use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stratum::graphlib::Graph;
use stratum::{LayoutOptions, layout_with_options};

/// `levels` rows of `width` nodes; each node links to two nodes in the next row and, every third
/// node, to one two rows down so long edges get split.
fn layered_graph(levels: usize, width: usize) -> Graph {
    let mut g: Graph = Graph::new();
    let id = |level: usize, i: usize| format!("n{level}_{i}");

    g.ensure_node("root");
    for i in 0..width {
        g.set_edge("root", id(0, i));
    }
    for level in 0..levels.saturating_sub(1) {
        for i in 0..width {
            g.set_edge(id(level, i), id(level + 1, (i * 7 + 3) % width));
            g.set_edge(id(level, i), id(level + 1, (i * 5 + 1) % width));
            if i % 3 == 0 && level + 2 < levels {
                g.set_edge(id(level, i), id(level + 2, (i * 11) % width));
            }
        }
    }
    g
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &(levels, width) in &[(8usize, 8usize), (16, 32), (24, 64)] {
        let g = layered_graph(levels, width);
        let opts = LayoutOptions::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{levels}x{width}")),
            &g,
            |b, g| b.iter(|| layout_with_options(black_box(g), &opts)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
