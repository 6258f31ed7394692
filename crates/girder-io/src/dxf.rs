use girder_base::Tolerance;
use girder_drafting::{DraftingBackend, Error, LineStyle, Result};
use girder_geometry::{Point2, Vector2, distance, midpoint};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_DIMENSION_TEXT_HEIGHT: f64 = 40.0;
pub const DEFAULT_TICK_SIZE: f64 = 20.0;

// Dash pattern for the DOT linetype, in drawing units.
const DOT_PATTERN: f64 = 6.35;

#[derive(Clone, Copy, Debug)]
pub struct DxfOptions {
    pub dimension_text_height: f64,
    pub tick_size: f64,
    pub tolerance: Tolerance,
}

impl Default for DxfOptions {
    fn default() -> Self {
        Self {
            dimension_text_height: DEFAULT_DIMENSION_TEXT_HEIGHT,
            tick_size: DEFAULT_TICK_SIZE,
            tolerance: Tolerance::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Entity {
    Polyline {
        points: Vec<Point2>,
        layer: String,
    },
    Line {
        start: Point2,
        end: Point2,
        layer: String,
        linetype: Option<LineStyle>,
        scale: f64,
    },
    Text {
        content: String,
        at: Point2,
        height: f64,
        rotation: f64,
        centered: bool,
        layer: String,
    },
}

/// Writes an ASCII DXF (R12) drawing. Entities are held in memory and the
/// file only appears on `commit`, so a failed batch leaves nothing behind.
///
/// Aligned dimensions are exploded into extension lines, a dimension line,
/// oblique ticks and the measured value, all on the dimension layer.
pub struct DxfBackend {
    path: PathBuf,
    options: DxfOptions,
    layers: BTreeMap<String, u16>,
    entities: Vec<Entity>,
}

impl DxfBackend {
    pub fn new(path: impl AsRef<Path>, options: DxfOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
            layers: BTreeMap::new(),
            entities: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    fn require_layer(&self, layer: &str) -> Result<()> {
        if self.layers.contains_key(layer) {
            Ok(())
        } else {
            Err(Error::UnknownLayer(layer.to_string()))
        }
    }

    /// Serializes the buffered drawing without touching the file system.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = DxfWriter { out: Vec::new() };
        out.header()?;
        out.tables(&self.layers)?;
        out.section("ENTITIES")?;
        for entity in &self.entities {
            out.entity(entity)?;
        }
        out.pair(0, "ENDSEC")?;
        out.pair(0, "EOF")?;
        Ok(out.out)
    }
}

impl DraftingBackend for DxfBackend {
    fn create_layer(&mut self, name: &str, color: u16) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Backend("layer name must not be empty".to_string()));
        }
        self.layers.insert(name.to_string(), color);
        Ok(())
    }

    fn draw_closed_polyline(&mut self, points: &[Point2], layer: &str) -> Result<()> {
        self.require_layer(layer)?;
        let mut points = points.to_vec();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return Err(Error::Backend(format!(
                "closed polyline needs 3 distinct points, got {}",
                points.len()
            )));
        }
        self.entities.push(Entity::Polyline {
            points,
            layer: layer.to_string(),
        });
        Ok(())
    }

    fn draw_linear_dimension(
        &mut self,
        p1: Point2,
        p2: Point2,
        label_point: Point2,
        layer: &str,
    ) -> Result<()> {
        self.require_layer(layer)?;
        let sketch = DimensionSketch::aligned(p1, p2, label_point, &self.options).ok_or_else(|| {
            Error::Backend(format!("dimension endpoints coincide at {p1:?}"))
        })?;

        let line = |start: Point2, end: Point2| Entity::Line {
            start,
            end,
            layer: layer.to_string(),
            linetype: None,
            scale: 1.0,
        };
        for (start, end) in sketch.extensions {
            self.entities.push(line(start, end));
        }
        self.entities.push(line(sketch.line.0, sketch.line.1));
        for (start, end) in sketch.ticks {
            self.entities.push(line(start, end));
        }
        self.entities.push(Entity::Text {
            content: format_length(sketch.value),
            at: sketch.text_at,
            height: self.options.dimension_text_height,
            rotation: sketch.rotation,
            centered: true,
            layer: layer.to_string(),
        });
        Ok(())
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
        self.entities.push(Entity::Line {
            start: p1,
            end: p2,
            layer: layer.to_string(),
            linetype: Some(style),
            scale,
        });
        Ok(())
    }

    fn draw_text(&mut self, content: &str, point: Point2, height: f64, layer: &str) -> Result<()> {
        self.require_layer(layer)?;
        self.entities.push(Entity::Text {
            content: content.to_string(),
            at: point,
            height,
            rotation: 0.0,
            centered: false,
            layer: layer.to_string(),
        });
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let bytes = self.to_bytes()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, bytes)?;
        info!(
            path = %self.path.display(),
            layers = self.layers.len(),
            entities = self.entities.len(),
            "DXF written"
        );
        Ok(())
    }
}

#[derive(Debug)]
struct DimensionSketch {
    extensions: Vec<(Point2, Point2)>,
    line: (Point2, Point2),
    ticks: [(Point2, Point2); 2],
    text_at: Point2,
    rotation: f64,
    value: f64,
}

impl DimensionSketch {
    /// Dimension line parallel to `p1 -> p2` through `label_point`.
    fn aligned(p1: Point2, p2: Point2, label_point: Point2, options: &DxfOptions) -> Option<Self> {
        let value = distance(p1, p2);
        if value <= options.tolerance.linear {
            return None;
        }
        let u = (p2 - p1) / value;
        let n = Vector2::new(-u.y, u.x);
        let rel = label_point - p1;
        let offset = rel.x * n.x + rel.y * n.y;
        let side = if offset < 0.0 { -n } else { n };

        let d1 = p1 + n * offset;
        let d2 = p2 + n * offset;

        let mut extensions = Vec::new();
        if !options.tolerance.is_zero(offset) {
            let overshoot = side * options.tick_size;
            extensions.push((p1, d1 + overshoot));
            extensions.push((p2, d2 + overshoot));
        }

        let half_tick = (u + n) * (options.tick_size * 0.5);
        let ticks = [(d1 - half_tick, d1 + half_tick), (d2 - half_tick, d2 + half_tick)];

        // Rounded so axis-aligned dimensions come out at exact angles.
        let mut rotation = (u.y.atan2(u.x).to_degrees() * 1.0e6).round() / 1.0e6;
        if rotation > 90.0 {
            rotation -= 180.0;
        } else if rotation <= -90.0 {
            rotation += 180.0;
        }
        let reading = Vector2::new(rotation.to_radians().cos(), rotation.to_radians().sin());
        let up = Vector2::new(-reading.y, reading.x);
        let gap = options.dimension_text_height * 0.3;
        let lift = if side.x * up.x + side.y * up.y >= 0.0 {
            gap
        } else {
            gap + options.dimension_text_height
        };
        let text_at = midpoint(d1, d2) + side * lift;

        Some(Self {
            extensions,
            line: (d1, d2),
            ticks,
            text_at,
            rotation,
            value,
        })
    }
}

pub fn format_length(value: f64) -> String {
    if (value - value.round()).abs() < 1.0e-6 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}

struct DxfWriter {
    out: Vec<u8>,
}

impl DxfWriter {
    fn pair(&mut self, code: u16, value: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{code:>3}")?;
        writeln!(self.out, "{value}")?;
        Ok(())
    }

    fn real(&mut self, code: u16, value: f64) -> Result<()> {
        self.pair(code, format_args!("{value:.6}"))
    }

    fn point(&mut self, code: u16, p: Point2) -> Result<()> {
        self.real(code, p.x)?;
        self.real(code + 10, p.y)?;
        self.real(code + 20, 0.0)
    }

    fn section(&mut self, name: &str) -> Result<()> {
        self.pair(0, "SECTION")?;
        self.pair(2, name)
    }

    fn header(&mut self) -> Result<()> {
        self.section("HEADER")?;
        self.pair(9, "$ACADVER")?;
        self.pair(1, "AC1009")?;
        self.pair(0, "ENDSEC")
    }

    fn tables(&mut self, layers: &BTreeMap<String, u16>) -> Result<()> {
        self.section("TABLES")?;

        self.pair(0, "TABLE")?;
        self.pair(2, "LTYPE")?;
        self.pair(70, 2)?;
        self.pair(0, "LTYPE")?;
        self.pair(2, LineStyle::Continuous.linetype_name())?;
        self.pair(70, 0)?;
        self.pair(3, "Solid line")?;
        self.pair(72, 65)?;
        self.pair(73, 0)?;
        self.real(40, 0.0)?;
        self.pair(0, "LTYPE")?;
        self.pair(2, LineStyle::Dot.linetype_name())?;
        self.pair(70, 0)?;
        self.pair(3, "Dot . . . . . . . .")?;
        self.pair(72, 65)?;
        self.pair(73, 2)?;
        self.real(40, DOT_PATTERN)?;
        self.real(49, 0.0)?;
        self.real(49, -DOT_PATTERN)?;
        self.pair(0, "ENDTAB")?;

        self.pair(0, "TABLE")?;
        self.pair(2, "LAYER")?;
        self.pair(70, layers.len())?;
        for (name, color) in layers {
            self.pair(0, "LAYER")?;
            self.pair(2, name)?;
            self.pair(70, 0)?;
            self.pair(62, color)?;
            self.pair(6, LineStyle::Continuous.linetype_name())?;
        }
        self.pair(0, "ENDTAB")?;

        self.pair(0, "ENDSEC")
    }

    fn entity(&mut self, entity: &Entity) -> Result<()> {
        match entity {
            Entity::Polyline { points, layer } => {
                self.pair(0, "POLYLINE")?;
                self.pair(8, layer)?;
                self.pair(66, 1)?;
                self.point(10, Point2::new(0.0, 0.0))?;
                self.pair(70, 1)?;
                for p in points {
                    self.pair(0, "VERTEX")?;
                    self.pair(8, layer)?;
                    self.point(10, *p)?;
                }
                self.pair(0, "SEQEND")?;
                self.pair(8, layer)
            }
            Entity::Line {
                start,
                end,
                layer,
                linetype,
                scale,
            } => {
                self.pair(0, "LINE")?;
                self.pair(8, layer)?;
                if let Some(style) = linetype {
                    self.pair(6, style.linetype_name())?;
                }
                if (scale - 1.0).abs() > f64::EPSILON {
                    self.real(48, *scale)?;
                }
                self.point(10, *start)?;
                self.point(11, *end)
            }
            Entity::Text {
                content,
                at,
                height,
                rotation,
                centered,
                layer,
            } => {
                self.pair(0, "TEXT")?;
                self.pair(8, layer)?;
                self.point(10, *at)?;
                self.real(40, *height)?;
                self.pair(1, content)?;
                if *rotation != 0.0 {
                    self.real(50, *rotation)?;
                }
                if *centered {
                    self.pair(72, 1)?;
                    self.point(11, *at)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn horizontal_dimension_below_its_points() {
        let sketch = DimensionSketch::aligned(
            p(0.0, 0.0),
            p(700.0, 0.0),
            p(0.0, -150.0),
            &DxfOptions::default(),
        )
        .expect("non-degenerate");
        assert_eq!(sketch.value, 700.0);
        assert_eq!(sketch.line, (p(0.0, -150.0), p(700.0, -150.0)));
        assert_eq!(sketch.extensions.len(), 2);
        assert_eq!(sketch.rotation, 0.0);
        // Text sits under the line, a full text height plus gap below it.
        assert!(sketch.text_at.y < -150.0 - DEFAULT_DIMENSION_TEXT_HEIGHT);
        assert_eq!(sketch.text_at.x, 350.0);
    }

    #[test]
    fn vertical_dimension_reads_upwards() {
        let sketch = DimensionSketch::aligned(
            p(700.0, 0.0),
            p(700.0, 250.0),
            p(950.0, 0.0),
            &DxfOptions::default(),
        )
        .expect("non-degenerate");
        assert_eq!(sketch.rotation, 90.0);
        assert!((sketch.line.0.x - 950.0).abs() < 1.0e-9);
        assert!((sketch.line.1.y - 250.0).abs() < 1.0e-9);
    }

    #[test]
    fn reversed_dimension_keeps_text_readable() {
        let sketch = DimensionSketch::aligned(
            p(600.0, 1275.0),
            p(100.0, 1275.0),
            p(600.0, 837.5),
            &DxfOptions::default(),
        )
        .expect("non-degenerate");
        assert_eq!(sketch.rotation, 0.0);
        assert_eq!(sketch.value, 500.0);
        assert!((sketch.line.0.y - 837.5).abs() < 1.0e-9);
    }

    #[test]
    fn coincident_points_have_no_sketch() {
        let options = DxfOptions::default();
        assert!(DimensionSketch::aligned(p(1.0, 1.0), p(1.0, 1.0), p(2.0, 2.0), &options).is_none());
    }

    #[test]
    fn lengths_drop_trailing_zeros() {
        assert_eq!(format_length(700.0), "700");
        assert_eq!(format_length(837.5), "837.5");
    }

    #[test]
    fn unknown_layer_is_rejected_before_buffering() {
        let mut backend = DxfBackend::new("unused.dxf", DxfOptions::default());
        let result = backend.draw_line(p(0.0, 0.0), p(1.0, 0.0), "CO_DOTLINE", LineStyle::Dot, 1.0);
        assert!(result.is_err());
        assert_eq!(backend.entity_count(), 0);
    }

    #[test]
    fn bytes_contain_tables_and_entities() -> Result<()> {
        let mut backend = DxfBackend::new("unused.dxf", DxfOptions::default());
        backend.create_layer("CO_DOTLINE", 8)?;
        backend.draw_line(p(0.0, 0.0), p(0.0, -150.0), "CO_DOTLINE", LineStyle::Dot, 2.0)?;
        let text = String::from_utf8(backend.to_bytes()?).expect("ascii output");
        // R12 header carries only the version.
        assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n  9\n$ACADVER\n  1\nAC1009\n  0\nENDSEC\n"));
        assert!(!text.contains("$INSUNITS"));
        assert!(text.contains("CO_DOTLINE\n 70\n0\n 62\n8\n"));
        assert!(text.contains("LINE\n  8\nCO_DOTLINE\n  6\nDOT\n 48\n2.000000\n"));
        assert!(text.ends_with("  0\nEOF\n"));
        Ok(())
    }
}
