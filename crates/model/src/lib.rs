//! Boundary records for stored canvases
//!
//! Canvases saved by different versions of the application use different
//! field names for the same things. Everything here maps those shapes onto
//! the canonical [`OrgChart`](orgtree_layout::OrgChart) before the layout
//! engine sees them, and writes computed positions back in the stored
//! `"x y"` form.

mod canvas;
mod position;

pub use canvas::{CanvasDocument, EdgeData, EdgeRecord, ImportError, NodeData, NodeRecord, RawId};
pub use position::{format_position, parse_position, PositionError};
