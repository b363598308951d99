//! Label types for the persistent layout graph.

use topolay_graphlib::Graph;

/// Prefix for synthetic cluster node ids, stable across calls for a topology.
pub const RANK_NODE_PREFIX: &str = "scope-rank-";

/// Layout-graph node: size hint in, engine-assigned center out.
///
/// A non-empty `members` list marks a cluster node standing in for all
/// topology nodes of one rank; `members` keeps their ids in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub members: Vec<String>,
}

impl NodeLabel {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn is_cluster(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Layout-graph edge: remembers the first topology edge projected onto it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeLabel {
    pub edge_id: String,
}

/// Graph-wide layout parameters, set fresh every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GraphLabel {
    pub nodesep: f64,
    pub ranksep: f64,
}

pub type LayoutGraph = Graph<NodeLabel, EdgeLabel, GraphLabel>;

pub fn rank_node_id(rank: &str) -> String {
    format!("{RANK_NODE_PREFIX}{rank}")
}
