//! Per-topology layout graph cache.
//!
//! Reusing one graph per topology across calls lets the engine anchor
//! unchanged nodes near their previous positions, so a redraw with minor
//! additions or removals does not reshuffle the whole diagram.

use rustc_hash::FxHashMap;

use crate::graph::LayoutGraph;

#[derive(Default)]
pub struct LayoutGraphCache {
    graphs: FxHashMap<String, LayoutGraph>,
}

impl LayoutGraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the graph for `topology_id`, creating an empty one on first use.
    pub fn graph_mut(&mut self, topology_id: &str) -> &mut LayoutGraph {
        self.graphs
            .entry(topology_id.to_string())
            .or_insert_with(LayoutGraph::new)
    }

    pub fn graph(&self, topology_id: &str) -> Option<&LayoutGraph> {
        self.graphs.get(topology_id)
    }

    pub fn contains(&self, topology_id: &str) -> bool {
        self.graphs.contains_key(topology_id)
    }

    /// Drops the cached graph for a topology that was torn down. Returns
    /// `false` if no graph was cached.
    pub fn evict(&mut self, topology_id: &str) -> bool {
        self.graphs.remove(topology_id).is_some()
    }

    pub fn clear(&mut self) {
        self.graphs.clear();
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
