use girder_base::{Guid, Tolerance};
use serde::Serialize;

use crate::{
    AnnotationCommand, GirderParameters, MidSectionOutline, Result, build_mid_section_polygon,
    plan_annotations,
};

pub const DEFAULT_SECTION_NAME: &str = "PSC-I Girder Mid Section";

/// A fully derived mid-section drawing: the outline and everything that
/// annotates it, ready to hand to a drafting backend. Sections are written
/// out for inspection; reading one back means rebuilding it from its
/// parameters.
#[derive(Clone, Debug, Serialize)]
pub struct GirderSection {
    pub guid: Guid,
    pub name: String,
    pub parameters: GirderParameters,
    pub outline: MidSectionOutline,
    pub annotations: Vec<AnnotationCommand>,
}

impl GirderSection {
    pub fn build(
        name: Option<&str>,
        parameters: GirderParameters,
        tol: Tolerance,
    ) -> Result<Self> {
        let outline = build_mid_section_polygon(&parameters, tol)?;
        let annotations = plan_annotations(&outline, &parameters);

        let name = match name {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => DEFAULT_SECTION_NAME.to_string(),
        };

        Ok(Self {
            guid: Guid::new(),
            name,
            parameters,
            outline,
            annotations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_falls_back_to_default() -> Result<()> {
        let section = GirderSection::build(Some("  "), GirderParameters::default(), Tolerance::default())?;
        assert_eq!(section.name, DEFAULT_SECTION_NAME);
        assert_eq!(section.outline.points().len(), 13);
        assert_eq!(section.annotations.len(), 20);
        Ok(())
    }

    #[test]
    fn section_serializes_to_json() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let section = GirderSection::build(Some("G1"), GirderParameters::default(), Tolerance::default())?;
        let text = serde_json::to_string(&section)?;
        assert!(text.contains("\"kind\":\"linear_dimension\""));
        assert!(text.contains("\"measure\":\"web_thickness\""));

        let record: serde_json::Value = serde_json::from_str(&text)?;
        let params: GirderParameters = serde_json::from_value(record["parameters"].clone())?;
        let rebuilt = GirderSection::build(Some("G1"), params, Tolerance::default())?;
        assert_eq!(rebuilt.outline, section.outline);
        assert_eq!(rebuilt.annotations, section.annotations);
        assert_eq!(record["outline"]["points"].as_array().map(Vec::len), Some(13));
        Ok(())
    }
}
