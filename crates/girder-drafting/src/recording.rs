use girder_geometry::Point2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{DraftingBackend, Error, LineStyle, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum DraftCall {
    CreateLayer {
        name: String,
        color: u16,
    },
    ClosedPolyline {
        points: Vec<Point2>,
        layer: String,
    },
    LinearDimension {
        p1: Point2,
        p2: Point2,
        label_point: Point2,
        layer: String,
    },
    Line {
        p1: Point2,
        p2: Point2,
        layer: String,
        style: LineStyle,
        scale: f64,
    },
    Text {
        content: String,
        point: Point2,
        height: f64,
        layer: String,
    },
    Commit,
}

/// Keeps every call in memory. Optionally fails once a number of calls
/// have been accepted, to exercise partial-failure handling.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<DraftCall>,
    layers: BTreeMap<String, u16>,
    fail_after: Option<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(accepted: usize) -> Self {
        Self {
            fail_after: Some(accepted),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[DraftCall] {
        &self.calls
    }

    pub fn layers(&self) -> &BTreeMap<String, u16> {
        &self.layers
    }

    pub fn is_committed(&self) -> bool {
        matches!(self.calls.last(), Some(DraftCall::Commit))
    }

    fn record(&mut self, call: DraftCall) -> Result<()> {
        if self.fail_after.is_some_and(|limit| self.calls.len() >= limit) {
            return Err(Error::Backend(format!(
                "recording backend refused call {}",
                self.calls.len() + 1
            )));
        }
        self.calls.push(call);
        Ok(())
    }

    fn require_layer(&self, layer: &str) -> Result<()> {
        if self.layers.contains_key(layer) {
            Ok(())
        } else {
            Err(Error::UnknownLayer(layer.to_string()))
        }
    }
}

impl DraftingBackend for RecordingBackend {
    fn create_layer(&mut self, name: &str, color: u16) -> Result<()> {
        self.record(DraftCall::CreateLayer {
            name: name.to_string(),
            color,
        })?;
        self.layers.insert(name.to_string(), color);
        Ok(())
    }

    fn draw_closed_polyline(&mut self, points: &[Point2], layer: &str) -> Result<()> {
        self.require_layer(layer)?;
        self.record(DraftCall::ClosedPolyline {
            points: points.to_vec(),
            layer: layer.to_string(),
        })
    }

    fn draw_linear_dimension(
        &mut self,
        p1: Point2,
        p2: Point2,
        label_point: Point2,
        layer: &str,
    ) -> Result<()> {
        self.require_layer(layer)?;
        self.record(DraftCall::LinearDimension {
            p1,
            p2,
            label_point,
            layer: layer.to_string(),
        })
    }

    fn draw_line(
        &mut self,
        p1: Point2,
        p2: Point2,
        layer: &str,
        style: LineStyle,
        scale: f64,
    ) -> Result<()> {
        self.require_layer(layer)?;
        self.record(DraftCall::Line {
            p1,
            p2,
            layer: layer.to_string(),
            style,
            scale,
        })
    }

    fn draw_text(&mut self, content: &str, point: Point2, height: f64, layer: &str) -> Result<()> {
        self.require_layer(layer)?;
        self.record(DraftCall::Text {
            content: content.to_string(),
            point,
            height,
            layer: layer.to_string(),
        })
    }

    fn commit(&mut self) -> Result<()> {
        self.record(DraftCall::Commit)
    }
}
