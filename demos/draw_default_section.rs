use anyhow::Result;
use girder_base::Tolerance;
use girder_drafting::{DraftingStyle, render_section};
use girder_io::{DxfBackend, DxfOptions};
use girder_section::{GirderParameters, GirderSection};

fn main() -> Result<()> {
    let section = GirderSection::build(None, GirderParameters::default(), Tolerance::default())?;
    let mut backend = DxfBackend::new("out/girder_mid_section.dxf", DxfOptions::default());
    render_section(&mut backend, &section, &DraftingStyle::default())?;
    Ok(())
}
