use topolay::graph::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel};
use topolay::{Bounds, LayeredEngine, LayoutEngine};

fn graph_with(nodesep: f64, ranksep: f64) -> LayoutGraph {
    let mut g = LayoutGraph::new();
    g.set_graph(GraphLabel { nodesep, ranksep });
    g
}

fn node(g: &LayoutGraph, id: &str) -> (f64, f64) {
    let n = g.node(id).expect("node");
    (n.x.expect("x assigned"), n.y.expect("y assigned"))
}

#[test]
fn layered_stacks_a_chain_vertically() {
    let mut g = graph_with(5.0, 20.0);
    for id in ["a", "b", "c"] {
        g.set_node(id, NodeLabel::sized(10.0, 10.0));
    }
    g.set_edge("a", "b", EdgeLabel::default());
    g.set_edge("b", "c", EdgeLabel::default());

    let bounds = LayeredEngine.compute(&mut g);
    assert_eq!(bounds, Bounds {
        width: 10.0,
        height: 70.0
    });

    let (ax, ay) = node(&g, "a");
    let (bx, by) = node(&g, "b");
    let (cx, cy) = node(&g, "c");
    assert_eq!((ax, ay), (5.0, 5.0));
    assert_eq!((bx, by), (5.0, 35.0));
    assert_eq!((cx, cy), (5.0, 65.0));
}

#[test]
fn layered_spreads_siblings_within_a_rank() {
    let mut g = graph_with(5.0, 20.0);
    for id in ["a", "b", "c"] {
        g.set_node(id, NodeLabel::sized(10.0, 10.0));
    }
    g.set_edge("a", "b", EdgeLabel::default());
    g.set_edge("a", "c", EdgeLabel::default());

    let bounds = LayeredEngine.compute(&mut g);
    assert_eq!(bounds, Bounds {
        width: 25.0,
        height: 40.0
    });

    // The lone parent is centered over the widest rank.
    let (ax, ay) = node(&g, "a");
    assert_eq!((ax, ay), (12.5, 5.0));

    let (bx, by) = node(&g, "b");
    let (cx, cy) = node(&g, "c");
    assert_eq!(by, 35.0);
    assert_eq!(cy, 35.0);
    assert_eq!(bx, 5.0);
    assert_eq!(cx, 20.0);
}

#[test]
fn layered_is_deterministic() {
    let build = || {
        let mut g = graph_with(3.0, 5.0);
        for id in ["n1", "n2", "n3", "n4"] {
            g.set_node(id, NodeLabel::sized(1.0, 1.0));
        }
        g.set_edge("n1", "n2", EdgeLabel::default());
        g.set_edge("n1", "n3", EdgeLabel::default());
        g.set_edge("n3", "n4", EdgeLabel::default());
        g
    };

    let mut g1 = build();
    let mut g2 = build();
    let b1 = LayeredEngine.compute(&mut g1);
    let b2 = LayeredEngine.compute(&mut g2);
    assert_eq!(b1, b2);
    for id in ["n1", "n2", "n3", "n4"] {
        assert_eq!(node(&g1, id), node(&g2, id));
    }
}

#[test]
fn layered_handles_cycles_without_panicking() {
    let mut g = graph_with(3.0, 5.0);
    g.set_node("a", NodeLabel::sized(2.0, 2.0));
    g.set_node("b", NodeLabel::sized(2.0, 2.0));
    g.set_edge("a", "b", EdgeLabel::default());
    g.set_edge("b", "a", EdgeLabel::default());

    let bounds = LayeredEngine.compute(&mut g);
    assert!(bounds.width > 0.0);
    assert!(bounds.height > 0.0);
    let _ = node(&g, "a");
    let _ = node(&g, "b");
}

#[test]
fn layered_ignores_self_loops() {
    let mut g = graph_with(3.0, 5.0);
    g.set_node("a", NodeLabel::sized(2.0, 2.0));
    g.set_edge("a", "a", EdgeLabel::default());

    let bounds = LayeredEngine.compute(&mut g);
    assert_eq!(bounds, Bounds {
        width: 2.0,
        height: 2.0
    });
    assert_eq!(node(&g, "a"), (1.0, 1.0));
}

#[test]
fn layered_empty_graph_has_zero_bounds() {
    let mut g = LayoutGraph::new();
    let bounds = LayeredEngine.compute(&mut g);
    assert_eq!(bounds, Bounds::default());
}
