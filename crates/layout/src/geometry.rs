use serde::{Deserialize, Serialize};

/// 2D vector with f32 coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Swap the two components
    pub fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// 2D point with f32 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Swap the two coordinates
    pub fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// Axis-aligned bounding box of a set of equally sized boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounding box of boxes of `size` whose top-left corners are `corners`
    ///
    /// Returns `None` when there are no corners.
    pub fn of_boxes<I>(corners: I, size: Vec2) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        corners.into_iter().fold(None, |bounds, corner| {
            let far = Point::new(corner.x + size.x, corner.y + size.y);
            Some(match bounds {
                None => Bounds {
                    min: corner,
                    max: far,
                },
                Some(Bounds { min, max }) => Bounds {
                    min: Point::new(min.x.min(corner.x), min.y.min(corner.y)),
                    max: Point::new(max.x.max(far.x), max.y.max(far.y)),
                },
            })
        })
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_whole_boxes() {
        let bounds = Bounds::of_boxes(
            [Point::new(0.0, 0.0), Point::new(100.0, 50.0)],
            Vec2::new(20.0, 10.0),
        )
        .unwrap();

        assert_eq!(bounds.min, Point::new(0.0, 0.0));
        assert_eq!(bounds.max, Point::new(120.0, 60.0));
        assert_eq!(bounds.width(), 120.0);
        assert_eq!(bounds.height(), 60.0);
        assert_eq!(bounds.center(), Point::new(60.0, 30.0));
    }

    #[test]
    fn bounds_of_nothing() {
        assert_eq!(Bounds::of_boxes([], Vec2::new(1.0, 1.0)), None);
    }
}
