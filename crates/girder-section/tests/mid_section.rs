use girder_base::Tolerance;
use girder_geometry::{Point2, mirror_x};
use girder_section::{
    AnnotationCommand, GirderParameters, OUTLINE_POINTS, OutlineVertex, Result,
    build_mid_section_polygon, plan_annotations,
};

fn sample_parameters() -> Vec<GirderParameters> {
    let mut samples = vec![GirderParameters::default()];
    for (a, c, d) in [(1200.0, 650.0, 200.0), (400.0, 900.0, 180.0), (300.0, 300.0, 600.0)] {
        for (e, f, g, h, i) in [(200.0, 300.0, 100.0, 1400.0, 200.0), (1.0, 2.0, 3.0, 4.0, 5.0)] {
            samples.push(GirderParameters {
                a,
                b: e + f + g + h + i,
                c,
                d,
                e,
                f,
                g,
                h,
                i,
            });
        }
    }
    samples
}

#[test]
fn outline_is_closed_with_thirteen_points() -> Result<()> {
    for params in sample_parameters() {
        let outline = build_mid_section_polygon(&params, Tolerance::default())?;
        assert_eq!(outline.points().len(), OUTLINE_POINTS);
        assert_eq!(outline.points()[12], outline.points()[0]);
    }
    Ok(())
}

#[test]
fn outline_is_mirror_symmetric_about_half_bottom_width() -> Result<()> {
    for params in sample_parameters() {
        let outline = build_mid_section_polygon(&params, Tolerance::default())?;
        let axis = params.c / 2.0;
        for vertex in OutlineVertex::ALL {
            let point = outline.vertex(vertex);
            let mirrored: Point2 = mirror_x(outline.vertex(vertex.mirror()), axis);
            assert!((point.x - mirrored.x).abs() < 1.0e-9, "{vertex:?}");
            assert_eq!(point.y, mirrored.y, "{vertex:?}");
        }
    }
    Ok(())
}

#[test]
fn building_is_pure() -> Result<()> {
    for params in sample_parameters() {
        let first = build_mid_section_polygon(&params, Tolerance::default())?;
        let second = build_mid_section_polygon(&params, Tolerance::default())?;
        assert_eq!(first, second);
        assert_eq!(plan_annotations(&first, &params), plan_annotations(&second, &params));
    }
    Ok(())
}

#[test]
fn every_plan_has_the_same_shape() -> Result<()> {
    for params in sample_parameters() {
        let outline = build_mid_section_polygon(&params, Tolerance::default())?;
        let commands = plan_annotations(&outline, &params);
        assert_eq!(commands.len(), 20);
        let kinds: Vec<&str> = commands
            .iter()
            .map(|command| match command {
                AnnotationCommand::LinearDimension { .. } => "dim",
                AnnotationCommand::ExtensionLine { .. } => "ext",
                AnnotationCommand::TextLabel { .. } => "text",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "dim", "ext", "ext", "dim", "ext", "dim", "ext", "dim", "ext", "dim", "ext",
                "dim", "ext", "ext", "dim", "dim", "ext", "ext", "dim", "text"
            ]
        );
    }
    Ok(())
}
