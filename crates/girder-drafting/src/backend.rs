use girder_geometry::Point2;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Continuous,
    Dot,
}

impl LineStyle {
    pub const fn linetype_name(self) -> &'static str {
        match self {
            LineStyle::Continuous => "CONTINUOUS",
            LineStyle::Dot => "DOT",
        }
    }
}

/// Drawing primitives a target document must provide.
///
/// Calls arrive as one batch followed by `commit`. Implementations that
/// write straight into a live document keep whatever was issued before a
/// failing call; buffering implementations should only publish on `commit`.
pub trait DraftingBackend {
    /// Creates `name`, or updates its color if it already exists.
    fn create_layer(&mut self, name: &str, color: u16) -> Result<()>;

    fn draw_closed_polyline(&mut self, points: &[Point2], layer: &str) -> Result<()>;

    fn draw_linear_dimension(
        &mut self,
        p1: Point2,
        p2: Point2,
        label_point: Point2,
        layer: &str,
    ) -> Result<()>;

    fn draw_line(
        &mut self,
        p1: Point2,
        p2: Point2,
        layer: &str,
        style: LineStyle,
        scale: f64,
    ) -> Result<()>;

    fn draw_text(&mut self, content: &str, point: Point2, height: f64, layer: &str) -> Result<()>;

    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}
