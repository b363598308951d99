//! Topology diagram layout orchestration.
//!
//! `topolay` turns a set of topology nodes and directed edges into 2D screen
//! coordinates for a rendering layer. The layered placement itself is
//! delegated to a [`LayoutEngine`]; this crate owns everything around it:
//! collapsing nodes that share a `rank` into synthetic cluster nodes, keeping
//! one persistent layout graph per topology so redraws stay visually stable,
//! centering the result in the viewport, expanding cluster centers into
//! per-member circle positions, and assigning straight-line edge paths.
//!
//! The entry point is [`TopologyLayouter::layout`]. Inputs are borrowed
//! immutably; the call returns a [`TopologyLayout`] mapping node ids to
//! positions and edge ids to point lists, which the caller applies to its own
//! model.

pub mod cache;
pub mod engine;
pub mod error;
pub mod graph;
pub mod layout;
pub mod model;

pub use cache::LayoutGraphCache;
pub use engine::{LayeredEngine, LayoutEngine};
pub use error::{Error, Result};
pub use layout::{MAX_NODES, TopologyLayouter};
pub use model::{
    Bounds, LayoutOptions, Margins, Point, TopologyEdge, TopologyLayout, TopologyNode,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
