use topolay::{Point, TopologyEdge, TopologyNode};

#[test]
fn node_deserializes_with_optional_rank() {
    let node: TopologyNode = serde_json::from_str(r#"{"id": "n1"}"#).expect("deserialize");
    assert_eq!(node, TopologyNode::new("n1"));

    let node: TopologyNode =
        serde_json::from_str(r#"{"id": "n1", "rank": "db"}"#).expect("deserialize");
    assert_eq!(node, TopologyNode::with_rank("n1", "db"));
}

#[test]
fn edge_deserializes_with_optional_points() {
    let edge: TopologyEdge =
        serde_json::from_str(r#"{"id": "e1", "source": "a", "target": "b"}"#).expect("deserialize");
    assert_eq!(edge, TopologyEdge::new("e1", "a", "b"));
    assert!(edge.points.is_none());

    let edge: TopologyEdge = serde_json::from_str(
        r#"{"id": "e1", "source": "a", "target": "b", "points": [{"x": 1.0, "y": 2.0}]}"#,
    )
    .expect("deserialize");
    assert_eq!(edge.points, Some(vec![Point { x: 1.0, y: 2.0 }]));
}
