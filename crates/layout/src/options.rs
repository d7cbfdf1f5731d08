use crate::{RelationKind, Vec2};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// Growth axis of the layout
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[display("TB")]
    #[serde(rename = "TB", alias = "tb", alias = "top-to-bottom")]
    TopToBottom,
    #[display("BT")]
    #[serde(rename = "BT", alias = "bt", alias = "bottom-to-top")]
    BottomToTop,
    #[display("LR")]
    #[serde(rename = "LR", alias = "lr", alias = "left-to-right")]
    LeftToRight,
    #[display("RL")]
    #[serde(rename = "RL", alias = "rl", alias = "right-to-left")]
    RightToLeft,
}

impl Direction {
    /// Whether the tree grows along the screen x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::RightToLeft)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown layout direction {0:?}, expected one of TB, BT, LR, RL")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tb" | "top-to-bottom" => Ok(Direction::TopToBottom),
            "bt" | "bottom-to-top" => Ok(Direction::BottomToTop),
            "lr" | "left-to-right" => Ok(Direction::LeftToRight),
            "rl" | "right-to-left" => Ok(Direction::RightToLeft),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Configuration for [`TreeLayout`](crate::TreeLayout)
///
/// Every field has a default, so a partial configuration file only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Width of every node box
    pub node_width: f32,

    /// Height of every node box
    pub node_height: f32,

    /// Gap between sibling subtrees
    pub horizontal_spacing: f32,

    /// Gap between a parent and its children
    pub vertical_spacing: f32,

    /// Gap between separate root trees
    pub tree_spacing: f32,

    pub direction: Direction,

    /// Relation kinds that define parent/child structure
    pub hierarchical: BTreeSet<RelationKind>,

    /// Extra gap above the row of people outside the hierarchy
    pub disconnected_gap: f32,

    /// Distance from y = 0 to the top of the normalized layout
    pub top_margin: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_width: 220.0,
            node_height: 100.0,
            horizontal_spacing: 60.0,
            vertical_spacing: 80.0,
            tree_spacing: 150.0,
            direction: Direction::TopToBottom,
            hierarchical: [RelationKind::ReportsTo, RelationKind::Manages]
                .into_iter()
                .collect(),
            disconnected_gap: 80.0,
            top_margin: 50.0,
        }
    }
}

impl LayoutOptions {
    /// On-screen size of a node box
    pub fn node_size(&self) -> Vec2 {
        Vec2::new(self.node_width, self.node_height)
    }

    /// Node box measured along the (breadth, depth) axes of the tree
    ///
    /// Horizontal layouts grow along screen x, so the box is transposed.
    pub(crate) fn node_extent(&self) -> Vec2 {
        if self.direction.is_horizontal() {
            self.node_size().transpose()
        } else {
            self.node_size()
        }
    }

    /// Gaps measured along the (breadth, depth) axes of the tree
    pub(crate) fn spacing(&self) -> Vec2 {
        Vec2::new(self.horizontal_spacing, self.vertical_spacing)
    }

    pub fn is_hierarchical(&self, kind: &RelationKind) -> bool {
        self.hierarchical.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_parse_short_and_long_forms() {
        assert_eq!("TB".parse(), Ok(Direction::TopToBottom));
        assert_eq!("bt".parse(), Ok(Direction::BottomToTop));
        assert_eq!("left-to-right".parse(), Ok(Direction::LeftToRight));
        assert_eq!("RL".parse(), Ok(Direction::RightToLeft));
        assert_eq!(
            "up".parse::<Direction>(),
            Err(ParseDirectionError("up".to_string()))
        );
        assert_eq!(Direction::LeftToRight.to_string(), "LR");
    }

    #[test]
    fn default_hierarchy_is_reporting_lines() {
        let options = LayoutOptions::default();
        assert!(options.is_hierarchical(&RelationKind::ReportsTo));
        assert!(options.is_hierarchical(&RelationKind::Manages));
        assert!(!options.is_hierarchical(&RelationKind::Mentors));
        assert!(!options.is_hierarchical(&RelationKind::Other("buddy".into())));
    }

    #[test]
    fn horizontal_layouts_transpose_the_node_box() {
        let options = LayoutOptions {
            direction: Direction::RightToLeft,
            ..Default::default()
        };
        assert_eq!(options.node_extent(), Vec2::new(100.0, 220.0));
        assert_eq!(LayoutOptions::default().node_extent(), Vec2::new(220.0, 100.0));
    }
}
