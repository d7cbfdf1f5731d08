//! Tree layout for org charts
//!
//! This crate turns a snapshot of people and typed relations into a
//! deterministic position for every person. Only hierarchical relation kinds
//! shape the layout; everything else is ignored here and left to the
//! renderer.
//!
//! # Layout Engines
//!
//! - [`TreeLayout`]: parent-centered tree layout with one band per root and
//!   an overflow row for people outside the hierarchy
//!
//! # Example
//!
//! ```
//! use orgtree_layout::{
//!     Direction, LayoutEngine, LayoutOptions, Level, OrgChart, Person, Relation, RelationKind,
//!     TreeLayout,
//! };
//!
//! let chart = OrgChart::new(
//!     vec![
//!         Person::new("ceo", "Ada").with_level(Level::Executive),
//!         Person::new("cto", "Grace").with_level(Level::Manager),
//!     ],
//!     vec![Relation::new("ceo", "cto", RelationKind::ReportsTo)],
//! );
//!
//! let engine = TreeLayout::new(LayoutOptions {
//!     direction: Direction::TopToBottom,
//!     ..Default::default()
//! });
//!
//! // Use the LayoutEngine trait (simple, single-phase):
//! let positions = engine.layout(&chart);
//! assert!(positions["ceo"].y < positions["cto"].y);
//!
//! // Or run each phase for better control
//! let forest = engine.compute_forest(&chart);
//! let positions = engine.compute_positions(&chart, &forest);
//! assert_eq!(positions.len(), 2);
//! ```

mod engine;
mod geometry;
mod graph;
mod options;

pub mod tree;

pub use engine::LayoutEngine;
pub use geometry::{Bounds, Point, Vec2};
pub use graph::{Level, OrgChart, Person, Relation, RelationKind};
pub use options::{Direction, LayoutOptions, ParseDirectionError};

pub use tree::{Forest, TreeLayout};

use std::collections::BTreeMap;

/// Computed top-left corner of every person, keyed by person id
pub type Positions = BTreeMap<String, Point>;

/// Lay out `chart` with a [`TreeLayout`] configured by `options`
pub fn layout(chart: &OrgChart, options: &LayoutOptions) -> Positions {
    TreeLayout::new(options.clone()).layout(chart)
}
