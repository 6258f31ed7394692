use girder_geometry::{Point2, distance};
use serde::{Deserialize, Serialize};

use crate::{GirderParameters, MidSectionOutline, OutlineVertex};

// Label clearances. Dimensions stacked further out from the section use the
// larger tiers so their lines and text stay apart.
pub const BASELINE_CLEARANCE: f64 = 150.0;
pub const INNER_TIER: f64 = 250.0;
pub const TOP_FLANGE_LEADER: f64 = 300.0;
pub const OUTER_TIER: f64 = 400.0;

pub const TITLE: &str = "GIRDER MID SECTION DETAILS";
pub const TITLE_CLEARANCE: f64 = 300.0;
pub const TITLE_HEIGHT: f64 = 50.0;

pub const DOT_LINE_SCALE: f64 = 1.0;

pub const DIMENSION_COUNT: usize = 9;
pub const EXTENSION_LINE_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    BottomFlangeWidth,
    BottomFlangeThickness,
    BottomHaunchDepth,
    WebHeight,
    TopHaunchDepth,
    TopFlangeThickness,
    OverallHeight,
    TopFlangeWidth,
    WebThickness,
}

impl Measure {
    /// Girder parameter this dimension reports.
    pub const fn parameter(self) -> &'static str {
        match self {
            Measure::BottomFlangeWidth => "c",
            Measure::BottomFlangeThickness => "f",
            Measure::BottomHaunchDepth => "i",
            Measure::WebHeight => "h",
            Measure::TopHaunchDepth => "g",
            Measure::TopFlangeThickness => "e",
            Measure::OverallHeight => "b",
            Measure::TopFlangeWidth => "a",
            Measure::WebThickness => "d",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationCommand {
    LinearDimension {
        measure: Measure,
        p1: Point2,
        p2: Point2,
        label_point: Point2,
    },
    ExtensionLine {
        from: Point2,
        to: Point2,
        line_type_scale: f64,
    },
    TextLabel {
        content: String,
        position: Point2,
        height: f64,
    },
}

impl AnnotationCommand {
    /// Measured length for dimensions, `None` for everything else.
    pub fn measured_length(&self) -> Option<f64> {
        match self {
            AnnotationCommand::LinearDimension { p1, p2, .. } => Some(distance(*p1, *p2)),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Plan {
    commands: Vec<AnnotationCommand>,
}

impl Plan {
    fn dimension(&mut self, measure: Measure, p1: Point2, p2: Point2, label_point: Point2) {
        self.commands.push(AnnotationCommand::LinearDimension {
            measure,
            p1,
            p2,
            label_point,
        });
    }

    fn leader(&mut self, from: Point2, to: Point2) {
        self.commands.push(AnnotationCommand::ExtensionLine {
            from,
            to,
            line_type_scale: DOT_LINE_SCALE,
        });
    }

    fn title(&mut self, position: Point2) {
        self.commands.push(AnnotationCommand::TextLabel {
            content: TITLE.to_string(),
            position,
            height: TITLE_HEIGHT,
        });
    }
}

/// Lays out the dimensions, dotted leaders and title for an outline.
///
/// The layout is fixed: bottom-of-section rows sit below the base, height
/// and offset rows to the right of the bottom flange face, the top flange
/// width above the section and the web thickness inside the web.
pub fn plan_annotations(
    outline: &MidSectionOutline,
    params: &GirderParameters,
) -> Vec<AnnotationCommand> {
    use OutlineVertex::*;

    let p = |vertex: OutlineVertex| outline.vertex(vertex);
    let at = |x: f64, y: f64| Point2::new(x, y);

    let base = p(BottomLeft);
    let right = p(BottomRight);
    let flange_top = p(BottomFlangeTopRight);
    let web_base = p(WebBaseRight);
    let web_top = p(WebTopRight);
    let soffit = p(TopFlangeBottomRight);
    let top_right = p(TopFlangeTopRight);
    let top_left = p(TopFlangeTopLeft);
    // x of the bottom flange's right face.
    let face_x = right.x;

    let mut plan = Plan::default();

    plan.dimension(
        Measure::BottomFlangeWidth,
        base,
        right,
        at(base.x, base.y - BASELINE_CLEARANCE),
    );
    plan.leader(base, at(base.x, base.y - BASELINE_CLEARANCE));
    plan.leader(right, at(right.x, right.y - BASELINE_CLEARANCE));

    plan.dimension(
        Measure::BottomFlangeThickness,
        right,
        flange_top,
        at(right.x + INNER_TIER, base.y),
    );
    plan.leader(right, at(right.x + OUTER_TIER, right.y));

    plan.dimension(
        Measure::BottomHaunchDepth,
        flange_top,
        at(face_x, web_base.y),
        at(flange_top.x + INNER_TIER, flange_top.y),
    );
    plan.leader(flange_top, at(flange_top.x + INNER_TIER, flange_top.y));

    plan.dimension(
        Measure::WebHeight,
        web_base,
        web_top,
        at(flange_top.x + INNER_TIER, flange_top.y),
    );
    plan.leader(web_base, at(face_x + INNER_TIER, web_base.y));

    // Web top projected out to the top flange edge line.
    plan.dimension(
        Measure::TopHaunchDepth,
        at(outline.axis_x() + params.a / 2.0, web_top.y),
        soffit,
        at(soffit.x + BASELINE_CLEARANCE, soffit.y),
    );
    plan.leader(web_top, at(face_x + INNER_TIER, web_top.y));

    plan.dimension(
        Measure::TopFlangeThickness,
        soffit,
        top_right,
        at(right.x + INNER_TIER, base.y),
    );
    plan.leader(soffit, at(soffit.x + BASELINE_CLEARANCE, soffit.y));
    plan.leader(top_right, at(top_right.x + TOP_FLANGE_LEADER, top_right.y));

    plan.dimension(
        Measure::OverallHeight,
        right,
        at(face_x, top_right.y),
        at(right.x + OUTER_TIER, base.y),
    );

    plan.dimension(
        Measure::TopFlangeWidth,
        top_right,
        top_left,
        at(top_right.x, top_right.y + BASELINE_CLEARANCE),
    );
    plan.leader(at(top_right.x, top_right.y + BASELINE_CLEARANCE), top_right);
    plan.leader(top_left, at(top_left.x, top_left.y + BASELINE_CLEARANCE));

    plan.dimension(
        Measure::WebThickness,
        web_top,
        p(WebTopLeft),
        at(web_top.x, web_top.y - params.h / 2.0),
    );

    plan.title(at(base.x, base.y - TITLE_CLEARANCE));

    plan.commands
}
