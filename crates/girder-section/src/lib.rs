use thiserror::Error;

pub mod annotation;
pub mod outline;
pub mod params;
pub mod section;

pub use annotation::{AnnotationCommand, Measure, plan_annotations};
pub use outline::{MidSectionOutline, OUTLINE_POINTS, OutlineVertex, build_mid_section_polygon};
pub use params::{FIELDS, FieldSpec, GirderParameters, MAX_INPUT, parse_field};
pub use section::{DEFAULT_SECTION_NAME, GirderSection};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter {field}: {reason}")]
    Validation { field: String, reason: String },
    #[error("invalid girder outline: {0}")]
    Geometry(#[from] girder_geometry::Error),
}

impl Error {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
