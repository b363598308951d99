//! Caller-facing input and result types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Offsets applied from the top-left corner of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
}

/// Width and height of a computed arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// A node of the topology to lay out.
///
/// Nodes sharing a non-empty `rank` are collapsed into one cluster for the
/// layout engine and expanded back into individual positions afterwards. An
/// absent or empty rank means the node is laid out individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: String,
    #[serde(default)]
    pub rank: Option<String>,
}

impl TopologyNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank: None,
        }
    }

    pub fn with_rank(id: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank: Some(rank.into()),
        }
    }
}

/// A directed edge between two topology nodes, referenced by id.
///
/// `points` may carry a pre-routed path; the layouter never overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub points: Option<Vec<Point>>,
}

impl TopologyEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            points: None,
        }
    }
}

/// Viewport dimensions and margins for one layout call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
}

impl LayoutOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

/// The result of one layout call.
///
/// Maps iterate in input order: `positions` follows the node slice,
/// `edge_points` follows the edge slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyLayout {
    /// Bounding box reported by the layout engine, before viewport centering.
    pub bounds: Bounds,
    pub positions: IndexMap<String, Point>,
    pub edge_points: IndexMap<String, Vec<Point>>,
}
