//! The layout pipeline: validate, cluster, synchronize, project, invoke the
//! engine, back-project, finalize edges.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use topolay_graphlib::EdgeKey;

use crate::cache::LayoutGraphCache;
use crate::engine::{LayeredEngine, LayoutEngine};
use crate::error::{Error, Result};
use crate::graph::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, rank_node_id};
use crate::model::{LayoutOptions, Point, TopologyEdge, TopologyLayout, TopologyNode};

/// Node-count ceiling above which a layout call is skipped entirely.
pub const MAX_NODES: usize = 100;

// Abstract size units fed through the caller's scale function.
const NODE_SIZE: f64 = 1.0;
const NODE_SEP: f64 = 3.0;
const RANK_SEP: f64 = 5.0;

/// Session object owning the per-topology graph cache and the engine.
///
/// One layouter per render context; calls for the same topology id reuse the
/// cached graph, which keeps consecutive redraws visually stable.
pub struct TopologyLayouter<E: LayoutEngine = LayeredEngine> {
    cache: LayoutGraphCache,
    engine: E,
}

impl TopologyLayouter<LayeredEngine> {
    pub fn new() -> Self {
        Self::with_engine(LayeredEngine)
    }
}

impl Default for TopologyLayouter<LayeredEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LayoutEngine> TopologyLayouter<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            cache: LayoutGraphCache::new(),
            engine,
        }
    }

    pub fn cache(&self) -> &LayoutGraphCache {
        &self.cache
    }

    /// Drops the cached graph for a topology that was torn down.
    pub fn evict(&mut self, topology_id: &str) -> bool {
        self.cache.evict(topology_id)
    }

    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Computes positions for `nodes` and point paths for `edges` within a
    /// `width` x `height` viewport.
    ///
    /// Returns `Ok(None)` when the node count exceeds [`MAX_NODES`]; the call
    /// then has no effect and the caller should keep its previous positions.
    /// Returns an error if an edge references a node missing from `nodes` or
    /// if a node id repeats; either way the cached graph is untouched.
    ///
    /// `scale` converts abstract size units to pixel-equivalent units and is
    /// applied to node sizes, cluster radii and engine spacing alike.
    pub fn layout(
        &mut self,
        topology_id: &str,
        nodes: &[TopologyNode],
        edges: &[TopologyEdge],
        opts: &LayoutOptions,
        scale: &dyn Fn(f64) -> f64,
    ) -> Result<Option<TopologyLayout>> {
        if nodes.len() > MAX_NODES {
            tracing::debug!(
                count = nodes.len(),
                limit = MAX_NODES,
                topology_id,
                "too many nodes for graph layout engine, skipping"
            );
            return Ok(None);
        }

        let mut node_ids: FxHashSet<&str> = FxHashSet::default();
        for node in nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(Error::DuplicateNode {
                    node_id: node.id.clone(),
                });
            }
        }
        for edge in edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(Error::MissingEndpoint {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }

        let graph = self.cache.graph_mut(topology_id);
        *graph.graph_mut() = GraphLabel {
            nodesep: scale(NODE_SEP),
            ranksep: scale(RANK_SEP),
        };

        let membership = cluster_nodes(graph, nodes, scale);
        synchronize(graph, nodes, edges, &membership);

        let bounds = self.engine.compute(graph);

        let offset_x = if bounds.width < opts.width {
            (opts.width - bounds.width) / 2.0 + opts.margins.left
        } else {
            opts.margins.left
        };
        let offset_y = if bounds.height < opts.height {
            (opts.height - bounds.height) / 2.0 + opts.margins.top
        } else {
            opts.margins.top
        };

        let computed = back_project(graph, offset_x, offset_y, scale);

        let mut positions: IndexMap<String, Point> = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            let p = computed.get(node.id.as_str()).copied().unwrap_or_default();
            positions.insert(node.id.clone(), p);
        }

        let mut edge_points: IndexMap<String, Vec<Point>> = IndexMap::with_capacity(edges.len());
        for edge in edges {
            let points = match &edge.points {
                Some(preset) => preset.clone(),
                None => {
                    let source = positions.get(&edge.source).copied().unwrap_or_default();
                    let target = positions.get(&edge.target).copied().unwrap_or_default();
                    vec![source, target]
                }
            };
            edge_points.insert(edge.id.clone(), points);
        }

        Ok(Some(TopologyLayout {
            bounds,
            positions,
            edge_points,
        }))
    }
}

/// Groups nodes by rank and materializes them in the layout graph.
///
/// Unranked nodes get one unit-sized layout node each; every non-empty rank
/// gets one cluster node sized by the square root of its member count.
/// Existing labels are resized in place so previously assigned coordinates
/// survive as anchors, and cluster sizes track the current membership rather
/// than the one seen when the cluster was first created.
///
/// Returns the per-call membership map from node id to cluster id.
fn cluster_nodes<'a>(
    graph: &mut LayoutGraph,
    nodes: &'a [TopologyNode],
    scale: &dyn Fn(f64) -> f64,
) -> FxHashMap<&'a str, String> {
    let mut ranked: IndexMap<&str, Vec<&'a TopologyNode>> = IndexMap::new();

    let unit = scale(NODE_SIZE);
    for node in nodes {
        match node.rank.as_deref().filter(|r| !r.is_empty()) {
            Some(rank) => ranked.entry(rank).or_default().push(node),
            None => {
                if let Some(label) = graph.node_mut(&node.id) {
                    label.width = unit;
                    label.height = unit;
                    label.members.clear();
                } else {
                    graph.set_node(node.id.clone(), NodeLabel::sized(unit, unit));
                }
            }
        }
    }

    let mut membership: FxHashMap<&str, String> = FxHashMap::default();
    for (rank, members) in &ranked {
        let cluster_id = rank_node_id(rank);
        let size = scale((members.len() as f64).sqrt());
        let member_ids: Vec<String> = members.iter().map(|n| n.id.clone()).collect();

        for node in members {
            membership.insert(node.id.as_str(), cluster_id.clone());
        }

        if let Some(label) = graph.node_mut(&cluster_id) {
            label.width = size;
            label.height = size;
            label.members = member_ids;
        } else {
            graph.set_node(
                cluster_id,
                NodeLabel {
                    width: size,
                    height: size,
                    members: member_ids,
                    ..Default::default()
                },
            );
        }
    }

    membership
}

/// Projects edges onto the graph and drops cached leftovers.
///
/// The effective endpoint of an edge is its node's cluster id when the node is
/// clustered this call, else the node id itself. At most one layout edge
/// exists per projected pair; extra topology edges collapsing onto the same
/// pair merge silently. Graph nodes and edges with no counterpart in the
/// current call are removed so the cached graph cannot grow without bound or
/// let stale placeholders pull on the layout.
fn synchronize(
    graph: &mut LayoutGraph,
    nodes: &[TopologyNode],
    edges: &[TopologyEdge],
    membership: &FxHashMap<&str, String>,
) {
    // Layout ids wanted this call: each unranked node's own id plus each
    // cluster id.
    let mut wanted: FxHashSet<&str> = FxHashSet::default();
    for node in nodes {
        match membership.get(node.id.as_str()) {
            Some(cluster_id) => wanted.insert(cluster_id.as_str()),
            None => wanted.insert(node.id.as_str()),
        };
    }

    let stale: Vec<String> = graph
        .nodes()
        .filter(|id| !wanted.contains(id))
        .map(str::to_string)
        .collect();
    for id in &stale {
        graph.remove_node(id);
    }

    let mut pairs: FxHashSet<EdgeKey> = FxHashSet::default();
    for edge in edges {
        let v = membership
            .get(edge.source.as_str())
            .cloned()
            .unwrap_or_else(|| edge.source.clone());
        let w = membership
            .get(edge.target.as_str())
            .cloned()
            .unwrap_or_else(|| edge.target.clone());
        if !graph.has_edge(&v, &w) {
            graph.set_edge(
                v.clone(),
                w.clone(),
                EdgeLabel {
                    edge_id: edge.id.clone(),
                },
            );
        }
        pairs.insert(EdgeKey::new(v, w));
    }

    let stale_edges: Vec<EdgeKey> = graph
        .edges()
        .filter(|k| !pairs.contains(*k))
        .cloned()
        .collect();
    for k in &stale_edges {
        graph.remove_edge(&k.v, &k.w);
    }
}

/// Converts engine coordinates into final viewport positions per node id.
///
/// Plain nodes are shifted by the centering offset. A cluster's shifted center
/// is expanded into evenly spaced positions on a circle whose radius repeats
/// the cluster's size formula.
fn back_project(
    graph: &LayoutGraph,
    offset_x: f64,
    offset_y: f64,
    scale: &dyn Fn(f64) -> f64,
) -> FxHashMap<String, Point> {
    let mut computed: FxHashMap<String, Point> = FxHashMap::default();
    for id in graph.nodes() {
        let Some(label) = graph.node(id) else {
            continue;
        };
        let x = label.x.unwrap_or(0.0) + offset_x;
        let y = label.y.unwrap_or(0.0) + offset_y;

        if label.is_cluster() {
            let count = label.members.len() as f64;
            let radius = scale(count.sqrt());
            for (i, member) in label.members.iter().enumerate() {
                let angle = std::f64::consts::TAU * i as f64 / count;
                computed.insert(
                    member.clone(),
                    Point {
                        x: x + radius * angle.sin(),
                        y: y + radius * angle.cos(),
                    },
                );
            }
        } else {
            computed.insert(id.to_string(), Point { x, y });
        }
    }
    computed
}
