use crate::{OrgChart, Positions};

/// A layout engine that can compute positions for the people of a chart
///
/// Engines are pure: the chart is a read-only snapshot and every call starts
/// from scratch, so the same engine can be shared between threads and called
/// again after every edit.
pub trait LayoutEngine {
    /// Compute the top-left corner of every person in `chart`
    ///
    /// Malformed input (cycles, dangling relation ends, duplicate parents)
    /// degrades the layout instead of failing; every person id of the chart
    /// appears exactly once in the result.
    fn layout(&self, chart: &OrgChart) -> Positions;
}
