use girder_base::Tolerance;
use serde::{Deserialize, Serialize};

use crate::{Error, Point2, Result, Vector2, cross, distance};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// True when the two closed segments share at least one point.
    pub fn touches(&self, other: &Segment, tol: Tolerance) -> bool {
        let da = self.direction();
        let db = other.direction();
        let scale = self.length().max(other.length()).max(1.0);
        let offset = other.start - self.start;
        let denom = cross(da, db);

        if denom.abs() <= tol.linear * scale {
            // Parallel: only collinear segments can meet.
            if cross(da, offset).abs() > tol.linear * scale {
                return false;
            }
            return self.overlaps_collinear(other, tol);
        }

        let t = cross(offset, db) / denom;
        let u = cross(offset, da) / denom;
        let eps_t = tol.linear / self.length().max(tol.linear);
        let eps_u = tol.linear / other.length().max(tol.linear);
        (-eps_t..=1.0 + eps_t).contains(&t) && (-eps_u..=1.0 + eps_u).contains(&u)
    }

    fn overlaps_collinear(&self, other: &Segment, tol: Tolerance) -> bool {
        let axis = self.direction();
        let len2 = axis.x * axis.x + axis.y * axis.y;
        if len2 <= tol.linear * tol.linear {
            return other.distance_to(self.start) <= tol.linear;
        }
        let project = |p: Point2| ((p.x - self.start.x) * axis.x + (p.y - self.start.y) * axis.y) / len2;
        let (a, b) = (project(other.start), project(other.end));
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let eps = tol.linear / len2.sqrt();
        hi >= -eps && lo <= 1.0 + eps
    }

    pub fn distance_to(&self, p: Point2) -> f64 {
        let d = self.direction();
        let len2 = d.x * d.x + d.y * d.y;
        if len2 == 0.0 {
            return distance(self.start, p);
        }
        let t = (((p.x - self.start.x) * d.x + (p.y - self.start.y) * d.y) / len2).clamp(0.0, 1.0);
        distance(Point2::new(self.start.x + d.x * t, self.start.y + d.y * t), p)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds2 {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn include(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }
}

/// A polyline whose last point repeats the first, so every edge is an
/// explicit pair of consecutive points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClosedPolyline {
    points: Vec<Point2>,
}

impl ClosedPolyline {
    pub fn new(points: Vec<Point2>, tol: Tolerance) -> Result<Self> {
        if points.len() < 4 {
            return Err(Error::Degenerate(format!(
                "closed polyline needs at least 4 points, got {}",
                points.len()
            )));
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if distance(first, last) > tol.linear {
            return Err(Error::NotClosed { first, last });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn edge_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    pub fn bounds(&self) -> Bounds2 {
        let first = self.points[0];
        let mut bounds = Bounds2 {
            min: first,
            max: first,
        };
        for p in &self.points[1..] {
            bounds.include(*p);
        }
        bounds
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|e| e.start.x * e.end.y - e.end.x * e.start.y)
            .sum::<f64>()
            * 0.5
    }

    fn adjacent(&self, i: usize, j: usize) -> bool {
        let n = self.edge_count();
        let diff = i.abs_diff(j);
        diff == 1 || diff == n - 1
    }

    /// First pair of edges `(i, j)`, `i < j`, that meet anywhere other than
    /// at the shared vertex of two neighbouring edges.
    pub fn first_crossing(&self, tol: Tolerance) -> Option<(usize, usize)> {
        let edges: Vec<Segment> = self.edges().collect();
        for (i, a) in edges.iter().enumerate() {
            for (j, b) in edges.iter().enumerate().skip(i + 1) {
                if self.adjacent(i, j) {
                    if folds_back(a, b, i, j, tol) {
                        return Some((i, j));
                    }
                    continue;
                }
                if a.touches(b, tol) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Rejects zero-length edges, zero area and self-intersections.
    pub fn ensure_simple(&self, tol: Tolerance) -> Result<()> {
        if let Some(index) = self.edges().position(|e| e.length() <= tol.linear) {
            return Err(Error::Degenerate(format!("edge {index} has zero length")));
        }
        if tol.is_zero(self.signed_area()) {
            return Err(Error::Degenerate("enclosed area is zero".to_string()));
        }
        if let Some((first, second)) = self.first_crossing(tol) {
            return Err(Error::SelfIntersecting { first, second });
        }
        Ok(())
    }
}

// Neighbouring edges share one vertex; they only intersect further if the
// second doubles back along the first.
fn folds_back(a: &Segment, b: &Segment, i: usize, j: usize, tol: Tolerance) -> bool {
    let (first, second) = if j == i + 1 { (a, b) } else { (b, a) };
    let da = first.direction();
    let db = second.direction();
    let scale = first.length().max(second.length()).max(1.0);
    cross(da, db).abs() <= tol.linear * scale && (da.x * db.x + da.y * db.y) < 0.0
}
