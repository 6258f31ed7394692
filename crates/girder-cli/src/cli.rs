use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "girder")]
#[command(about = "PSC I-girder mid-section drafting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the dimensioned mid-section to a DXF drawing.
    Draw(DrawArgs),
    /// Print the derived outline and annotation plan as JSON.
    Plan(PlanArgs),
    /// Print the default parameter record as JSON.
    Defaults,
}

/// Girder dimensions. Unset fields come from `--params` or the defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct ParamArgs {
    /// JSON file holding the nine parameters.
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Top flange width.
    #[arg(long)]
    pub a: Option<f64>,
    /// Overall height; derived from e+f+g+h+i when omitted and a height is overridden.
    #[arg(long)]
    pub b: Option<f64>,
    /// Bottom flange width.
    #[arg(long)]
    pub c: Option<f64>,
    /// Web thickness.
    #[arg(long)]
    pub d: Option<f64>,
    /// Top flange thickness.
    #[arg(long)]
    pub e: Option<f64>,
    /// Bottom flange thickness.
    #[arg(long)]
    pub f: Option<f64>,
    /// Depth of web below the top flange.
    #[arg(long)]
    pub g: Option<f64>,
    /// Web height.
    #[arg(long)]
    pub h: Option<f64>,
    /// Depth of web above the bottom flange.
    #[arg(long)]
    pub i: Option<f64>,
    /// Form entry `key=value`, e.g. `--set a=900`. Applied after the flags.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub entries: Vec<String>,
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct DrawArgs {
    #[command(flatten)]
    pub girder: ParamArgs,
    #[arg(long)]
    pub out: PathBuf,
    /// JSON file overriding layer names, colors and the leader linetype.
    #[arg(long)]
    pub style: Option<PathBuf>,
    #[arg(long, default_value_t = girder_io::dxf::DEFAULT_DIMENSION_TEXT_HEIGHT)]
    pub dim_text_height: f64,
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub girder: ParamArgs,
    /// Write to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
