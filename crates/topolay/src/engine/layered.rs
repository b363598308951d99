//! Default hierarchical engine.
//!
//! A deliberately lightweight layered placement: rank by longest path over a
//! deterministic Kahn order, then stack ranks top-to-bottom with each rank's
//! nodes centered on the widest rank. Deterministic output for identical
//! graphs is what the orchestration layer's stability contract relies on.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::engine::LayoutEngine;
use crate::graph::LayoutGraph;
use crate::model::Bounds;

#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredEngine;

impl LayoutEngine for LayeredEngine {
    fn compute(&self, g: &mut LayoutGraph) -> Bounds {
        let node_ids: Vec<String> = g.nodes().map(str::to_string).collect();
        if node_ids.is_empty() {
            return Bounds::default();
        }

        let node_sep = g.graph().nodesep;
        let rank_sep = g.graph().ranksep;

        // Self-loops neither constrain ranks nor count towards indegree.
        let mut indegree: FxHashMap<String, usize> =
            node_ids.iter().map(|id| (id.clone(), 0)).collect();
        for e in g.edges() {
            if e.v == e.w {
                continue;
            }
            if let Some(d) = indegree.get_mut(&e.w) {
                *d += 1;
            }
        }

        // Deterministic Kahn order: initial nodes in insertion order.
        let mut queue: VecDeque<String> = node_ids
            .iter()
            .filter(|id| indegree.get(id.as_str()).copied().unwrap_or(0) == 0)
            .cloned()
            .collect();

        let mut topo: Vec<String> = Vec::new();
        while let Some(n) = queue.pop_front() {
            let succ: Vec<String> = g
                .successors(&n)
                .into_iter()
                .filter(|w| *w != n)
                .map(str::to_string)
                .collect();
            topo.push(n);
            for w in succ {
                if let Some(d) = indegree.get_mut(&w) {
                    *d = d.saturating_sub(1);
                    if *d == 0 {
                        queue.push_back(w);
                    }
                }
            }
        }

        // Cyclic graph: fall back to insertion order.
        if topo.len() != node_ids.len() {
            topo = node_ids.clone();
        }

        // Longest-path ranking.
        let mut rank: FxHashMap<String, usize> =
            node_ids.iter().map(|id| (id.clone(), 0)).collect();
        for n in &topo {
            let r = rank.get(n.as_str()).copied().unwrap_or(0);
            let succ: Vec<String> = g
                .successors(n)
                .into_iter()
                .filter(|w| *w != n.as_str())
                .map(str::to_string)
                .collect();
            for w in succ {
                let entry = rank.entry(w).or_insert(0);
                if r + 1 > *entry {
                    *entry = r + 1;
                }
            }
        }

        let max_rank = rank.values().copied().max().unwrap_or(0);
        let mut layers: Vec<Vec<String>> = vec![Vec::new(); max_rank + 1];
        for id in &node_ids {
            let r = rank.get(id.as_str()).copied().unwrap_or(0);
            layers[r].push(id.clone());
        }

        fn size_of(g: &LayoutGraph, id: &str) -> (f64, f64) {
            g.node(id).map_or((0.0, 0.0), |n| (n.width, n.height))
        }

        let mut layer_widths: Vec<f64> = Vec::with_capacity(layers.len());
        let mut layer_heights: Vec<f64> = Vec::with_capacity(layers.len());
        for ids in &layers {
            let mut w: f64 = 0.0;
            let mut h: f64 = 0.0;
            for (i, id) in ids.iter().enumerate() {
                let (nw, nh) = size_of(g, id);
                w += nw;
                if i + 1 < ids.len() {
                    w += node_sep;
                }
                h = h.max(nh);
            }
            layer_widths.push(w);
            layer_heights.push(h);
        }
        let max_layer_width = layer_widths.iter().copied().fold(0.0_f64, f64::max);

        let mut y_cursor: f64 = 0.0;
        for (layer_idx, ids) in layers.iter().enumerate() {
            let layer_h = layer_heights[layer_idx];
            let y = y_cursor + layer_h / 2.0;

            let mut x_cursor = (max_layer_width - layer_widths[layer_idx]) / 2.0;
            for id in ids {
                let (nw, _) = size_of(g, id);
                let x = x_cursor + nw / 2.0;
                if let Some(n) = g.node_mut(id) {
                    n.x = Some(x);
                    n.y = Some(y);
                }
                x_cursor += nw + node_sep;
            }

            y_cursor += layer_h;
            if layer_idx + 1 < layers.len() {
                y_cursor += rank_sep;
            }
        }

        Bounds {
            width: max_layer_width,
            height: y_cursor,
        }
    }
}
