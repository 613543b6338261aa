use stratum::bmatrix::count_crossings;
use stratum::graphlib::Graph;
use stratum::{BMatrix, Edge, Partitioner, Side};

fn edge(object: usize, subject: usize) -> Edge {
    Edge {
        object,
        subject,
        is_virtual: false,
    }
}

#[test]
fn bmatrix_relation_only_holds_edges_between_the_two_levels() {
    let mut objects = vec![0, 1];
    let mut subjects = vec![2, 3];
    // 3 -> 0 closes a cycle back up and must not show up as a relation.
    let edges = [edge(0, 2), edge(1, 3), edge(3, 0)];

    let m = BMatrix::new(&mut objects, &mut subjects, &edges);
    assert!(m.is_related(0, 2));
    assert!(m.is_related(1, 3));
    assert!(!m.is_related(0, 3));
    assert!(!m.is_related(3, 0));
}

#[test]
fn bmatrix_barycenter_averages_neighbor_positions() {
    let mut objects = vec![0, 1, 2];
    let mut subjects = vec![3, 4];
    let edges = [edge(0, 3), edge(0, 4), edge(2, 4)];

    let m = BMatrix::new(&mut objects, &mut subjects, &edges);
    assert_eq!(m.barycenter(0, Side::Object), Some(0.5));
    assert_eq!(m.barycenter(1, Side::Object), None);
    assert_eq!(m.barycenter(2, Side::Object), Some(1.0));
    assert_eq!(m.barycenter(3, Side::Subject), Some(0.0));
    assert_eq!(m.barycenter(4, Side::Subject), Some(1.0));
}

#[test]
fn bmatrix_reorder_removes_a_single_crossing() {
    let mut objects = vec![0, 1];
    let mut subjects = vec![2, 3];
    let edges = [edge(0, 3), edge(1, 2)];

    {
        let mut m = BMatrix::new(&mut objects, &mut subjects, &edges);
        assert_eq!(m.crossings(), 1);
        m.reorder_object_side();
        assert_eq!(m.objects(), &[1, 0]);
        assert_eq!(m.crossings(), 0);
        m.reorder_subject_side();
        assert_eq!(m.subjects(), &[2, 3]);
        assert_eq!(m.crossings(), 0);
    }

    assert_eq!(objects, vec![1, 0]);
    assert_eq!(subjects, vec![2, 3]);
}

#[test]
fn bmatrix_reorder_keeps_ties_in_their_prior_order() {
    let mut objects = vec![5, 4, 3];
    let mut subjects = vec![6];
    let edges = [edge(5, 6), edge(4, 6), edge(3, 6)];

    let mut m = BMatrix::new(&mut objects, &mut subjects, &edges);
    m.reorder_object_side();
    assert_eq!(m.objects(), &[5, 4, 3]);
}

#[test]
fn bmatrix_reorder_moves_isolated_vertices_after_connected_ones() {
    let mut objects = vec![0, 1, 2];
    let mut subjects = vec![3, 4];
    let edges = [edge(1, 4), edge(2, 3)];

    let mut m = BMatrix::new(&mut objects, &mut subjects, &edges);
    m.reorder_object_side();
    assert_eq!(m.objects(), &[2, 1, 0]);

    // Running it again is stable.
    m.reorder_object_side();
    assert_eq!(m.objects(), &[2, 1, 0]);
}

#[test]
fn count_crossings_of_a_complete_bipartite_pair() {
    let edges = [edge(0, 2), edge(0, 3), edge(1, 2), edge(1, 3)];
    assert_eq!(count_crossings(&[0, 1], &[2, 3], &edges), 1);
}

#[test]
fn count_crossings_ignores_shared_endpoints_and_foreign_edges() {
    let edges = [edge(0, 3), edge(1, 3), edge(2, 3), edge(9, 2)];
    assert_eq!(count_crossings(&[0, 1, 2], &[3], &edges), 0);
    assert_eq!(count_crossings(&[0, 1, 2], &[], &edges), 0);
}

#[test]
fn count_crossings_of_a_reversed_matching() {
    // Every pair of the three edges crosses.
    let edges = [edge(0, 5), edge(1, 4), edge(2, 3)];
    assert_eq!(count_crossings(&[0, 1, 2], &[3, 4, 5], &edges), 3);
}

#[test]
fn partitioner_bmatrix_reorders_the_shared_level_orders() {
    let mut g: Graph = Graph::new();
    g.set_edge("p", "x");
    g.set_edge("p", "y");
    g.set_edge("q", "x");

    let mut p = Partitioner::new(&g);
    assert_eq!(p.level_ids(0).unwrap(), vec!["p", "q"]);
    assert_eq!(p.level_ids(1).unwrap(), vec!["x", "y"]);
    assert_eq!(p.crossings(), 1);

    {
        let mut m = p.bmatrix(0).unwrap();
        m.reorder_object_side();
        m.reorder_subject_side();
    }

    assert_eq!(p.level_ids(0).unwrap(), vec!["q", "p"]);
    assert_eq!(p.level_ids(1).unwrap(), vec!["x", "y"]);
    assert_eq!(p.crossings(), 0);
}

#[test]
fn partitioner_bmatrix_below_the_deepest_level_is_an_error() {
    let mut g: Graph = Graph::new();
    g.set_edge("a", "b");

    let mut p = Partitioner::new(&g);
    assert!(p.bmatrix(0).is_ok());
    assert!(p.bmatrix(1).unwrap_err().is_structural());
}
