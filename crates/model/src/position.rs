use orgtree_layout::Point;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("expected two numbers separated by whitespace, got {0:?}")]
    Malformed(String),

    #[error("position {0:?} is not finite")]
    NonFinite(String),
}

/// Format a position the way canvases store it, `"x y"`
pub fn format_position(point: Point) -> String {
    format!("{} {}", point.x, point.y)
}

/// Parse a stored `"x y"` position
pub fn parse_position(stored: &str) -> Result<Point, PositionError> {
    let malformed = || PositionError::Malformed(stored.to_string());

    let mut parts = stored.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let x: f32 = x.parse().map_err(|_| malformed())?;
    let y: f32 = y.parse().map_err(|_| malformed())?;

    if !x.is_finite() || !y.is_finite() {
        return Err(PositionError::NonFinite(stored.to_string()));
    }
    Ok(Point::new(x, y))
}
