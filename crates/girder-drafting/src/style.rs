use serde::{Deserialize, Serialize};

use crate::LineStyle;

pub const OUTLINE_LAYER: &str = "M_GIRDER";
pub const OUTLINE_COLOR: u16 = 210;
pub const DIMENSION_LAYER: &str = "CO_DIM";
pub const DIMENSION_COLOR: u16 = 4;
pub const DOT_LINE_LAYER: &str = "CO_DOTLINE";
pub const DOT_LINE_COLOR: u16 = 8;
pub const TEXT_LAYER: &str = "CO_TEXT";
pub const TEXT_COLOR: u16 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub color: u16,
}

impl LayerSpec {
    pub fn new(name: impl Into<String>, color: u16) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Layer and linetype conventions applied when a section is rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingStyle {
    pub outline: LayerSpec,
    pub dimension: LayerSpec,
    pub extension: LayerSpec,
    pub text: LayerSpec,
    pub extension_line: LineStyle,
}

impl Default for DraftingStyle {
    fn default() -> Self {
        Self {
            outline: LayerSpec::new(OUTLINE_LAYER, OUTLINE_COLOR),
            dimension: LayerSpec::new(DIMENSION_LAYER, DIMENSION_COLOR),
            extension: LayerSpec::new(DOT_LINE_LAYER, DOT_LINE_COLOR),
            text: LayerSpec::new(TEXT_LAYER, TEXT_COLOR),
            extension_line: LineStyle::Dot,
        }
    }
}

impl DraftingStyle {
    pub fn layers(&self) -> [&LayerSpec; 4] {
        [&self.outline, &self.dimension, &self.extension, &self.text]
    }
}
