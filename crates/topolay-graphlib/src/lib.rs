//! Directed graph container used by `topolay`'s persistent layout graphs.
//!
//! The container stores one label per node and per edge, keeps insertion order
//! for deterministic iteration, and indexes both by id for O(1) lookup. It is
//! deliberately a simple graph: at most one edge per `(v, w)` pair, no
//! multi-edges, no compound nesting.

use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Identifies a directed edge from `v` to `w`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

/// A directed graph with node labels `N`, edge labels `E` and a graph-wide
/// label `G`.
///
/// Nodes and edges iterate in insertion order, which callers rely on for
/// reproducible layouts.
pub struct Graph<N, E, G>
where
    N: Default,
    G: Default,
{
    graph_label: G,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default,
    G: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    G: Default,
{
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts a node, replacing its label if the id is already present.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self
    }

    /// Inserts a node with a default label unless the id is already present.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.set_node(id, N::default())
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Removes a node together with its incident edges. Returns `false` if the
    /// id was not present.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };

        self.nodes.remove(idx);
        self.node_index.clear();
        for (i, n) in self.nodes.iter().enumerate() {
            self.node_index.insert(n.id.clone(), i);
        }

        let incident: Vec<EdgeKey> = self
            .edges
            .iter()
            .filter(|e| e.key.v == id || e.key.w == id)
            .map(|e| e.key.clone())
            .collect();
        for k in incident {
            let _ = self.remove_edge(&k.v, &k.w);
        }

        true
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains_key(&EdgeKey::new(v, w))
    }

    /// Inserts an edge, creating missing endpoints with default labels. An
    /// existing `(v, w)` edge has its label replaced.
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>, label: E) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let key = EdgeKey { v, w };
        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].label = label;
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            label,
        });
        self.edge_index.insert(key, idx);
        self
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_index
            .get(&EdgeKey::new(v, w))
            .map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        self.edge_index
            .get(&EdgeKey::new(v, w))
            .copied()
            .map(move |idx| &mut self.edges[idx].label)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    /// Removes the `(v, w)` edge. Returns `false` if it was not present.
    pub fn remove_edge(&mut self, v: &str, w: &str) -> bool {
        let Some(idx) = self.edge_index.remove(&EdgeKey::new(v, w)) else {
            return false;
        };
        self.edges.remove(idx);
        self.edge_index.clear();
        for (i, e) in self.edges.iter().enumerate() {
            self.edge_index.insert(e.key.clone(), i);
        }
        true
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.key.v == v)
            .map(|e| e.key.w.as_str())
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.key.w == v)
            .map(|e| e.key.v.as_str())
            .collect()
    }
}
