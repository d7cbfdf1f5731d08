use super::Forest;
use crate::Vec2;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Space a node and all of its descendants need
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubtreeInfo {
    /// Breadth (across siblings) and extent (along the depth axis)
    pub size: Vec2,

    /// Distance from the root of the tree, in levels
    pub depth: usize,
}

/// Size every tree of `forest`, bottom-up
///
/// `node` and `spacing` are measured along the (breadth, depth) axes of the
/// tree. The returned table has an entry for every node reachable from a
/// root.
pub(crate) fn compute_subtree_sizes(
    forest: &Forest,
    node: Vec2,
    spacing: Vec2,
) -> HashMap<usize, SubtreeInfo> {
    let mut sizer = SubtreeSizer {
        forest,
        node,
        spacing,
        seen: HashSet::new(),
        table: HashMap::with_capacity(forest.len()),
    };

    for &root in forest.roots() {
        sizer.size(root);
    }

    sizer.table
}

enum Visit {
    Enter { node: usize, depth: usize },
    Leave { node: usize, depth: usize },
}

struct SubtreeSizer<'a> {
    forest: &'a Forest,
    node: Vec2,
    spacing: Vec2,
    /// Nodes already entered
    seen: HashSet<usize>,
    table: HashMap<usize, SubtreeInfo>,
}

impl SubtreeSizer<'_> {
    /// Post-order walk with an explicit stack, so chain length is not
    /// bounded by the thread stack
    fn size(&mut self, root: usize) {
        let mut stack = vec![Visit::Enter {
            node: root,
            depth: 0,
        }];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter { node, depth } => {
                    if !self.seen.insert(node) {
                        warn!("Node {node} is its own ancestor, sizing it as a leaf");
                        continue;
                    }
                    stack.push(Visit::Leave { node, depth });
                    stack.extend(self.forest.children(node).map(|child| Visit::Enter {
                        node: child,
                        depth: depth + 1,
                    }));
                }
                Visit::Leave { node, depth } => {
                    let size = self.combine(node);
                    self.table.insert(node, SubtreeInfo { size, depth });
                }
            }
        }
    }

    /// Size of `node` from the already sized children
    fn combine(&self, node: usize) -> Vec2 {
        let mut count = 0;
        let mut breadth = 0.0;
        let mut extent: f32 = 0.0;
        for child in self.forest.children(node) {
            let child_size = self.table.get(&child).map_or(self.node, |info| info.size);
            breadth += child_size.x;
            extent = extent.max(child_size.y);
            count += 1;
        }

        if count == 0 {
            return self.node;
        }
        breadth += (count - 1) as f32 * self.spacing.x;
        Vec2::new(
            breadth.max(self.node.x),
            self.node.y + self.spacing.y + extent,
        )
    }
}
