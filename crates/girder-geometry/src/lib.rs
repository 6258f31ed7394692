use thiserror::Error;

pub mod polyline;

pub use polyline::{Bounds2, ClosedPolyline, Segment};

pub type Point2 = cgmath::Point2<f64>;
pub type Vector2 = cgmath::Vector2<f64>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("polyline is not closed: first point {first:?} differs from last point {last:?}")]
    NotClosed { first: Point2, last: Point2 },
    #[error("degenerate polyline: {0}")]
    Degenerate(String),
    #[error("edges {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reflects `point` across the vertical line `x = axis_x`.
pub fn mirror_x(point: Point2, axis_x: f64) -> Point2 {
    Point2::new(2.0 * axis_x - point.x, point.y)
}

pub fn distance(a: Point2, b: Point2) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

pub(crate) fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_about_axis_keeps_height() {
        let p = mirror_x(Point2::new(600.0, 400.0), 350.0);
        assert_eq!(p, Point2::new(100.0, 400.0));
    }

    #[test]
    fn distance_and_midpoint() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(300.0, 400.0);
        assert_eq!(distance(a, b), 500.0);
        assert_eq!(midpoint(a, b), Point2::new(150.0, 200.0));
    }
}
