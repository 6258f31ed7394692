use girder_base::Tolerance;
use girder_geometry::{ClosedPolyline, Point2, Segment};
use serde::{Deserialize, Serialize};

use crate::{GirderParameters, Result};

pub const OUTLINE_POINTS: usize = 13;

/// Named outline vertices in drawing order. `Closing` repeats `BottomLeft`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlineVertex {
    BottomLeft,
    BottomRight,
    BottomFlangeTopRight,
    WebBaseRight,
    WebTopRight,
    TopFlangeBottomRight,
    TopFlangeTopRight,
    TopFlangeTopLeft,
    TopFlangeBottomLeft,
    WebTopLeft,
    WebBaseLeft,
    BottomFlangeTopLeft,
    Closing,
}

impl OutlineVertex {
    pub const ALL: [OutlineVertex; OUTLINE_POINTS] = [
        OutlineVertex::BottomLeft,
        OutlineVertex::BottomRight,
        OutlineVertex::BottomFlangeTopRight,
        OutlineVertex::WebBaseRight,
        OutlineVertex::WebTopRight,
        OutlineVertex::TopFlangeBottomRight,
        OutlineVertex::TopFlangeTopRight,
        OutlineVertex::TopFlangeTopLeft,
        OutlineVertex::TopFlangeBottomLeft,
        OutlineVertex::WebTopLeft,
        OutlineVertex::WebBaseLeft,
        OutlineVertex::BottomFlangeTopLeft,
        OutlineVertex::Closing,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Counterpart across the vertical axis of symmetry.
    pub const fn mirror(self) -> OutlineVertex {
        use OutlineVertex::*;
        match self {
            BottomLeft | Closing => BottomRight,
            BottomRight => BottomLeft,
            BottomFlangeTopRight => BottomFlangeTopLeft,
            WebBaseRight => WebBaseLeft,
            WebTopRight => WebTopLeft,
            TopFlangeBottomRight => TopFlangeBottomLeft,
            TopFlangeTopRight => TopFlangeTopLeft,
            TopFlangeTopLeft => TopFlangeTopRight,
            TopFlangeBottomLeft => TopFlangeBottomRight,
            WebTopLeft => WebTopRight,
            WebBaseLeft => WebBaseRight,
            BottomFlangeTopLeft => BottomFlangeTopRight,
        }
    }
}

/// Closed mid-section outline; the last point closes the loop explicitly.
///
/// Only `build_mid_section_polygon` constructs one, so every instance has
/// passed validation and the simplicity check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MidSectionOutline {
    points: [Point2; OUTLINE_POINTS],
    axis_x: f64,
}

impl MidSectionOutline {
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn vertex(&self, vertex: OutlineVertex) -> Point2 {
        self.points[vertex.index()]
    }

    /// x of the vertical symmetry axis, `c / 2`.
    pub fn axis_x(&self) -> f64 {
        self.axis_x
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    pub fn polyline(&self, tol: Tolerance) -> Result<ClosedPolyline> {
        Ok(ClosedPolyline::new(self.points.to_vec(), tol)?)
    }
}

/// Builds the 13-point mid-section outline, origin at the bottom-left corner
/// of the bottom flange.
///
/// Parameters are validated first. The finished loop is checked for
/// zero-length edges and crossings before it is returned.
pub fn build_mid_section_polygon(
    params: &GirderParameters,
    tol: Tolerance,
) -> Result<MidSectionOutline> {
    params.validate(tol)?;

    let GirderParameters {
        a, c, d, e, f, g, h, i, ..
    } = *params;
    let axis_x = c / 2.0;

    let web_base = f + i;
    let web_top = web_base + h;
    let flange_soffit = web_top + g;
    let top = flange_soffit + e;

    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(c, 0.0),
        Point2::new(c, f),
        Point2::new(axis_x + d / 2.0, web_base),
        Point2::new(axis_x + d / 2.0, web_top),
        Point2::new(axis_x + a / 2.0, flange_soffit),
        Point2::new(axis_x + a / 2.0, top),
        Point2::new(axis_x - a / 2.0, top),
        Point2::new(axis_x - a / 2.0, flange_soffit),
        Point2::new(axis_x - d / 2.0, web_top),
        Point2::new(axis_x - d / 2.0, web_base),
        Point2::new(0.0, f),
        Point2::new(0.0, 0.0),
    ];

    let outline = MidSectionOutline { points, axis_x };
    outline.polyline(tol)?.ensure_simple(tol)?;
    Ok(outline)
}
