//! Pluggable layout engines.

mod layered;

pub use layered::LayeredEngine;

use crate::graph::LayoutGraph;
use crate::model::Bounds;

/// Assigns a center `x`/`y` to every node of the graph and reports the
/// bounding box of the arrangement.
///
/// Engines see node size hints (`NodeLabel::width`/`height`) and the spacing
/// parameters in `GraphLabel`. Previously assigned coordinates are left on the
/// labels between calls; an engine may use them to anchor unchanged nodes.
pub trait LayoutEngine {
    fn compute(&self, graph: &mut LayoutGraph) -> Bounds;
}
