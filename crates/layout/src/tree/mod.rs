mod forest;
mod normalize;
mod positions;
mod sizes;

use crate::{LayoutEngine, LayoutOptions, OrgChart, Positions};
use tracing::debug;

pub use forest::Forest;

use forest::reduce_relations;
use normalize::orient;
use positions::{assign_coordinates, Spacing};
use sizes::compute_subtree_sizes;

/// Parent-centered tree layout for org charts
///
/// Every root gets its own band, children are centered under their parent
/// in sibling order, and people outside the hierarchy are collected in a row
/// below the trees.
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    pub options: LayoutOptions,
}

impl TreeLayout {
    /// Create a new tree layout with the given options
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Reduce the relations of `chart` to a forest
    ///
    /// This phase only depends on the chart and the set of hierarchical
    /// relation kinds, not on sizes, spacing or direction.
    pub fn compute_forest(&self, chart: &OrgChart) -> Forest {
        reduce_relations(chart, &self.options)
    }

    /// Compute positions from a forest previously reduced from `chart`
    pub fn compute_positions(&self, chart: &OrgChart, forest: &Forest) -> Positions {
        let options = &self.options;
        let node = options.node_extent();
        let spacing = Spacing {
            node,
            gap: options.spacing(),
            tree: options.tree_spacing,
            disconnected: options.disconnected_gap,
        };

        let subtrees = compute_subtree_sizes(forest, node, spacing.gap);
        let layout = assign_coordinates(chart, forest, &subtrees, spacing);
        let screen = orient(
            &layout,
            options.node_size(),
            options.direction,
            options.top_margin,
        );

        debug!(
            "Laid out {} people in {} trees, direction {}",
            screen.len(),
            forest.roots().len(),
            options.direction
        );

        screen
            .into_iter()
            .map(|(node, corner)| (chart.person(node).id.clone(), corner))
            .collect()
    }
}

impl LayoutEngine for TreeLayout {
    fn layout(&self, chart: &OrgChart) -> Positions {
        let forest = self.compute_forest(chart);
        self.compute_positions(chart, &forest)
    }
}
