use girder_section::{AnnotationCommand, GirderSection, MidSectionOutline};
use tracing::{debug, warn};

use crate::{DraftingBackend, DraftingStyle, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub layers: usize,
    pub entities: usize,
}

/// Issues a fully planned section to `backend` and commits it.
///
/// Nothing is computed between backend calls. A failing call is returned
/// unchanged and not retried; entities issued before it stay wherever the
/// backend put them.
pub fn render_section<B: DraftingBackend + ?Sized>(
    backend: &mut B,
    section: &GirderSection,
    style: &DraftingStyle,
) -> Result<RenderSummary> {
    let mut summary = RenderSummary::default();
    let result = issue(
        backend,
        &section.outline,
        &section.annotations,
        style,
        &mut summary,
    )
    .and_then(|()| backend.commit());

    match result {
        Ok(()) => {
            debug!(
                section = %section.name,
                guid = %section.guid,
                layers = summary.layers,
                entities = summary.entities,
                "section rendered"
            );
            Ok(summary)
        }
        Err(err) => {
            warn!(
                section = %section.name,
                guid = %section.guid,
                issued = summary.entities,
                error = %err,
                "drafting backend failed; earlier entities are not rolled back"
            );
            Err(err)
        }
    }
}

fn issue<B: DraftingBackend + ?Sized>(
    backend: &mut B,
    outline: &MidSectionOutline,
    annotations: &[AnnotationCommand],
    style: &DraftingStyle,
    summary: &mut RenderSummary,
) -> Result<()> {
    for layer in style.layers() {
        backend.create_layer(&layer.name, layer.color)?;
        summary.layers += 1;
    }

    backend.draw_closed_polyline(outline.points(), &style.outline.name)?;
    summary.entities += 1;

    for command in annotations {
        match command {
            AnnotationCommand::LinearDimension {
                p1,
                p2,
                label_point,
                ..
            } => backend.draw_linear_dimension(*p1, *p2, *label_point, &style.dimension.name)?,
            AnnotationCommand::ExtensionLine {
                from,
                to,
                line_type_scale,
            } => backend.draw_line(
                *from,
                *to,
                &style.extension.name,
                style.extension_line,
                *line_type_scale,
            )?,
            AnnotationCommand::TextLabel {
                content,
                position,
                height,
            } => backend.draw_text(content, *position, *height, &style.text.name)?,
        }
        summary.entities += 1;
    }
    Ok(())
}
