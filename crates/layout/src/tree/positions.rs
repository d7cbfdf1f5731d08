use super::sizes::SubtreeInfo;
use super::Forest;
use crate::graph::level_order;
use crate::{Bounds, OrgChart, Point, Vec2};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Spacing constants for coordinate assignment, along (breadth, depth)
#[derive(Debug, Clone, Copy)]
pub(crate) struct Spacing {
    /// Node box
    pub node: Vec2,
    /// Sibling and level gaps
    pub gap: Vec2,
    /// Gap between root trees
    pub tree: f32,
    /// Extra gap above the disconnected row
    pub disconnected: f32,
}

/// Assign the top-left corner of every person in layout space
///
/// Layout space has the breadth axis on x and the depth axis on y. Trees are
/// placed side by side, one band per root, and whoever is left without a
/// position afterwards goes into a single row below them.
pub(crate) fn assign_coordinates(
    chart: &OrgChart,
    forest: &Forest,
    subtrees: &HashMap<usize, SubtreeInfo>,
    spacing: Spacing,
) -> HashMap<usize, Point> {
    let mut placer = Placer {
        forest,
        subtrees,
        spacing,
        positions: HashMap::with_capacity(chart.len()),
    };

    let breadth = |node: usize| placer.breadth(node);
    let mut roots = forest.roots().to_vec();
    roots.sort_by(|&a, &b| {
        level_order(chart.person(a).rank(), chart.person(b).rank())
            .then_with(|| breadth(b).total_cmp(&breadth(a)))
            .then_with(|| chart.sibling_order(a, b))
    });

    let mut cursor = 0.0;
    for root in roots {
        let width = placer.breadth(root);
        placer.place(root, cursor + width / 2.0, 0.0);
        cursor += width + spacing.tree;
    }

    let mut positions = placer.positions;
    place_disconnected(chart, &mut positions, spacing);
    positions
}

struct Placer<'a> {
    forest: &'a Forest,
    subtrees: &'a HashMap<usize, SubtreeInfo>,
    spacing: Spacing,
    positions: HashMap<usize, Point>,
}

impl Placer<'_> {
    fn breadth(&self, node: usize) -> f32 {
        self.subtrees
            .get(&node)
            .map_or(self.spacing.node.x, |info| info.size.x)
    }

    /// Place `root` centered on `center` at `depth`, then its descendants
    /// below it, walking the tree with an explicit stack
    fn place(&mut self, root: usize, center: f32, depth: f32) {
        let mut stack = vec![(root, center, depth)];

        while let Some((node, center, depth)) = stack.pop() {
            if self.positions.contains_key(&node) {
                warn!("Node {node} is its own ancestor, not placing it again");
                continue;
            }

            let corner = Point::new(center - self.spacing.node.x / 2.0, depth);
            let level = self.subtrees.get(&node).map_or(0, |info| info.depth);
            trace!("Placing node {node} on level {level} at {corner:?}");
            self.positions.insert(node, corner);

            let children: Vec<usize> = self.forest.children(node).collect();
            if children.is_empty() {
                continue;
            }

            let total = children.iter().map(|&child| self.breadth(child)).sum::<f32>()
                + (children.len() - 1) as f32 * self.spacing.gap.x;
            let child_depth = depth + self.spacing.node.y + self.spacing.gap.y;

            let mut cursor = center - total / 2.0;
            let start = stack.len();
            for child in children {
                let width = self.breadth(child);
                stack.push((child, cursor + width / 2.0, child_depth));
                cursor += width + self.spacing.gap.x;
            }
            // first sibling is placed first
            stack[start..].reverse();
        }
    }
}

/// Place every person without a position in one row below the trees
///
/// The row is spread over the breadth of the trees when they are wider than
/// the packed row, and centered under them otherwise. Without any tree the
/// row is centered on zero.
fn place_disconnected(chart: &OrgChart, positions: &mut HashMap<usize, Point>, spacing: Spacing) {
    let mut stray: Vec<usize> = (0..chart.len())
        .filter(|node| !positions.contains_key(node))
        .collect();
    if stray.is_empty() {
        return;
    }
    stray.sort_by(|&a, &b| chart.sibling_order(a, b));

    let count = stray.len() as f32;
    let node = spacing.node;
    let packed_step = node.x + spacing.gap.x;
    let row_breadth = count * node.x + (count - 1.0) * spacing.gap.x;

    let (depth, start, step) = match Bounds::of_boxes(positions.values().copied(), node) {
        Some(bounds) => {
            let lowest = bounds.max.y - node.y;
            let depth = lowest + node.y + spacing.gap.y + spacing.disconnected;
            if bounds.width() > row_breadth {
                let slot = bounds.width() / count;
                (depth, bounds.min.x + (slot - node.x) / 2.0, slot)
            } else {
                (depth, bounds.center().x - row_breadth / 2.0, packed_step)
            }
        }
        None => (0.0, -row_breadth / 2.0, packed_step),
    };

    debug!("Placing {} disconnected nodes at depth {depth}", stray.len());
    for (i, node) in stray.into_iter().enumerate() {
        positions.insert(node, Point::new(start + i as f32 * step, depth));
    }
}
