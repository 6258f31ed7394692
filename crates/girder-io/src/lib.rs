pub mod dxf;
pub mod json;

pub use dxf::{DxfBackend, DxfOptions};
pub use json::{read_json, section_to_json, write_section_json};
