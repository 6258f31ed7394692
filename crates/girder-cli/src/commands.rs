use anyhow::{Context, Result};
use girder_base::{Tolerance, ensure_positive};
use girder_drafting::{DraftingStyle, render_section};
use girder_io::{DxfBackend, DxfOptions, read_json, section_to_json, write_section_json};
use girder_section::{GirderParameters, GirderSection};
use tracing::info;

use crate::cli::{DrawArgs, ParamArgs, PlanArgs};

impl ParamArgs {
    pub fn resolve(&self) -> Result<GirderParameters> {
        let mut params = match &self.params {
            Some(path) => read_json::<GirderParameters>(path)?,
            None => GirderParameters::default(),
        };

        let overrides = [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("d", self.d),
            ("e", self.e),
            ("f", self.f),
            ("g", self.g),
            ("h", self.h),
            ("i", self.i),
        ];
        let mut touched = Vec::new();
        for (key, value) in overrides {
            if let Some(value) = value {
                params.set(key, value)?;
                touched.push(key.to_string());
            }
        }
        for entry in &self.entries {
            let key = params
                .apply_assignment(entry)
                .with_context(|| format!("invalid --set {entry:?}"))?;
            touched.push(key);
        }

        let overall_given = touched.iter().any(|key| key == "b");
        let height_overridden = touched
            .iter()
            .any(|key| matches!(key.as_str(), "e" | "f" | "g" | "h" | "i"));
        if !overall_given && height_overridden {
            params.b = params.stacked_height();
            info!(b = params.b, "overall height derived from flange and web depths");
        }
        Ok(params)
    }

    pub fn build_section(&self) -> Result<GirderSection> {
        let params = self.resolve()?;
        GirderSection::build(self.name.as_deref(), params, Tolerance::default())
            .context("failed to build girder section")
    }
}

pub fn draw(args: DrawArgs) -> Result<()> {
    ensure_positive("dim-text-height", args.dim_text_height)?;
    let section = args.girder.build_section()?;
    let style = match &args.style {
        Some(path) => read_json::<DraftingStyle>(path)?,
        None => DraftingStyle::default(),
    };
    let options = DxfOptions {
        dimension_text_height: args.dim_text_height,
        ..DxfOptions::default()
    };

    let mut backend = DxfBackend::new(&args.out, options);
    let summary = render_section(&mut backend, &section, &style).context("DXF rendering failed")?;
    info!(
        path = %args.out.display(),
        section = %section.name,
        entities = summary.entities,
        "drawing complete"
    );
    Ok(())
}

pub fn plan(args: PlanArgs) -> Result<()> {
    let section = args.girder.build_section()?;
    match &args.out {
        Some(path) => {
            write_section_json(&section, path)?;
            info!(path = %path.display(), "plan written");
        }
        None => println!("{}", section_to_json(&section)?),
    }
    Ok(())
}

pub fn defaults() -> Result<()> {
    println!("{}", defaults_json()?);
    Ok(())
}

fn defaults_json() -> Result<String> {
    serde_json::to_string_pretty(&GirderParameters::default()).context("serialize defaults")
}
