use anyhow::Result;
use girder_base::Tolerance;
use girder_drafting::{DraftingStyle, RecordingBackend, render_section};
use girder_io::{DxfBackend, DxfOptions, read_json, write_section_json};
use girder_section::{GirderParameters, GirderSection};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_nanos(),
        Err(_) => 0,
    };
    path.push(format!("girder_{stamp}_{file_name}"));
    path
}

fn default_section() -> Result<GirderSection> {
    Ok(GirderSection::build(
        None,
        GirderParameters::default(),
        Tolerance::default(),
    )?)
}

#[test]
fn dxf_backend_writes_layers_and_entities() -> Result<()> {
    let section = default_section()?;
    let path = temp_path("section.dxf");
    let mut backend = DxfBackend::new(&path, DxfOptions::default());

    let summary = render_section(&mut backend, &section, &DraftingStyle::default())?;
    assert_eq!(summary.entities, 21);

    let text = fs::read_to_string(&path)?;
    for layer in ["M_GIRDER", "CO_DIM", "CO_DOTLINE", "CO_TEXT"] {
        assert!(text.contains(layer), "missing layer {layer}");
    }
    assert!(text.contains("GIRDER MID SECTION DETAILS"));
    // 12 distinct outline vertices after dropping the closing duplicate.
    assert_eq!(text.matches("\nVERTEX\n").count(), 12);
    // Measured values of the nine dimensions.
    for value in ["\n700\n", "\n250\n", "\n875\n", "\n1500\n", "\n900\n", "\n500\n"] {
        assert!(text.contains(value), "missing dimension text {value:?}");
    }

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn dxf_backend_writes_nothing_when_batch_fails() -> Result<()> {
    let path = temp_path("never.dxf");
    let mut backend = DxfBackend::new(&path, DxfOptions::default());
    let section = default_section()?;
    let mut style = DraftingStyle::default();
    style.outline.name = String::new();

    assert!(render_section(&mut backend, &section, &style).is_err());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn dxf_and_recording_backends_see_the_same_batch() -> Result<()> {
    let section = default_section()?;
    let mut recorder = RecordingBackend::new();
    let mut dxf = DxfBackend::new(temp_path("unused.dxf"), DxfOptions::default());

    let recorded = render_section(&mut recorder, &section, &DraftingStyle::default())?;
    let buffered = {
        let bytes_before = dxf.to_bytes()?.len();
        let summary = render_section(&mut dxf, &section, &DraftingStyle::default())?;
        assert!(dxf.to_bytes()?.len() > bytes_before);
        summary
    };
    assert_eq!(recorded, buffered);

    let _ = fs::remove_file(dxf.path());
    Ok(())
}

#[test]
fn section_json_rebuilds_from_its_parameters() -> Result<()> {
    let section = default_section()?;
    let path = temp_path("section.json");

    write_section_json(&section, &path)?;
    let record: serde_json::Value = read_json(&path)?;
    let params: GirderParameters = serde_json::from_value(record["parameters"].clone())?;
    assert_eq!(params, section.parameters);
    assert_eq!(record["annotations"].as_array().map(Vec::len), Some(20));

    let rebuilt = GirderSection::build(None, params, Tolerance::default())?;
    assert_eq!(rebuilt.outline, section.outline);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn parameters_load_from_json_file() -> Result<()> {
    let path = temp_path("params.json");
    fs::write(
        &path,
        r#"{"a":1200,"b":1800,"c":800,"d":200,"e":200,"f":300,"g":100,"h":1000,"i":200}"#,
    )?;

    let params: GirderParameters = read_json(&path)?;
    params.validate(Tolerance::default())?;
    assert_eq!(params.a, 1200.0);

    let _ = fs::remove_file(&path);
    Ok(())
}
