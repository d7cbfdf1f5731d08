use crate::{Bounds, Direction, Point, Vec2};
use std::collections::HashMap;

/// Map layout-space corners to the screen and normalize them
///
/// Horizontal directions swap the breadth and depth axes. The result is then
/// translated so its bounding box is centered on x = 0 and starts at
/// y = `top_margin`, and finally mirrored for `BT` and `RL`.
pub(crate) fn orient<N>(
    layout: &HashMap<N, Point>,
    node: Vec2,
    direction: Direction,
    top_margin: f32,
) -> HashMap<N, Point>
where
    N: Copy + Eq + std::hash::Hash,
{
    let screen: HashMap<N, Point> = layout
        .iter()
        .map(|(&id, &corner)| {
            let corner = if direction.is_horizontal() {
                corner.transpose()
            } else {
                corner
            };
            (id, corner)
        })
        .collect();

    let Some(bounds) = Bounds::of_boxes(screen.values().copied(), node) else {
        return screen;
    };

    let shift = Vec2::new(-bounds.center().x, top_margin - bounds.min.y);
    let top = top_margin;
    let bottom = top_margin + bounds.height();

    screen
        .into_iter()
        .map(|(id, corner)| {
            let mut corner = Point::new(corner.x + shift.x, corner.y + shift.y);
            match direction {
                Direction::BottomToTop => corner.y = top + bottom - corner.y - node.y,
                Direction::RightToLeft => corner.x = -corner.x - node.x,
                Direction::TopToBottom | Direction::LeftToRight => {}
            }
            (id, corner)
        })
        .collect()
}
