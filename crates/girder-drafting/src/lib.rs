use thiserror::Error;

pub mod backend;
pub mod recording;
pub mod render;
pub mod style;

pub use backend::{DraftingBackend, LineStyle};
pub use recording::{DraftCall, RecordingBackend};
pub use render::{RenderSummary, render_section};
pub use style::{DraftingStyle, LayerSpec};

#[derive(Error, Debug)]
pub enum Error {
    #[error("drawing backend failed: {0}")]
    Backend(String),
    #[error("unknown layer: {0}")]
    UnknownLayer(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
