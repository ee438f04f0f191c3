//! CLI for laser-cut elliptical boxes.
//!
//! Provides:
//! - `generate`: lay out a box and write it as SVG (or JSON primitives)
//! - `defaults`: print the default box parameters, as a starting config file

mod render;
mod units;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ellbox_core::{BoxParams, EllipseCache, EllipticalBox};
use log::{info, LevelFilter};

use render::{render_svg, RenderConfig};
use units::Unit;

#[derive(Parser)]
#[command(name = "ellbox")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ELLBOX_BUILD_SHA"), ")"))]
#[command(about = "Elliptical laser-cut box generator", long_about = None)]
struct Cli {
    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

/// Box parameters; each overrides the config file's value when given
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Outer width of the elliptical side
    #[arg(long)]
    width: Option<f64>,
    /// Outer height of the elliptical side
    #[arg(long)]
    height: Option<f64>,
    /// Distance between the two sides
    #[arg(long)]
    depth: Option<f64>,
    /// Material thickness
    #[arg(short, long)]
    thickness: Option<f64>,
    /// Distance between cuts along the wrap
    #[arg(long)]
    cut_spacing: Option<f64>,
    /// Number of cuts across the depth
    #[arg(long)]
    cut_count: Option<usize>,
    /// Angle spanned by the lid, in degrees
    #[arg(long)]
    lid_angle: Option<f64>,
    #[arg(long)]
    invert_lid_notches: bool,
    /// Add a central rib under the lid (needs an even cut count)
    #[arg(long)]
    central_rib_lid: bool,
    /// Add a central rib inside the body (needs an even cut count)
    #[arg(long)]
    central_rib_body: bool,
}

impl ParamArgs {
    fn apply(&self, params: BoxParams) -> BoxParams {
        BoxParams {
            width: self.width.unwrap_or(params.width),
            height: self.height.unwrap_or(params.height),
            depth: self.depth.unwrap_or(params.depth),
            thickness: self.thickness.unwrap_or(params.thickness),
            cut_spacing: self.cut_spacing.unwrap_or(params.cut_spacing),
            cut_count: self.cut_count.unwrap_or(params.cut_count),
            lid_angle: self.lid_angle.unwrap_or(params.lid_angle),
            invert_lid_notches: self.invert_lid_notches || params.invert_lid_notches,
            central_rib_lid: self.central_rib_lid || params.central_rib_lid,
            central_rib_body: self.central_rib_body || params.central_rib_body,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a box and write its drawing
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Box parameters (JSON), e.g. as printed by `ellbox defaults`
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Unit of all lengths given in the config file and flags
        #[arg(short, long, value_enum, default_value_t = Unit::Mm)]
        unit: Unit,

        #[arg(short, long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Stroke width of drawn lines, in mm
        #[arg(long, default_value = "0.1")]
        stroke_width: f64,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default box parameters (JSON)
    Defaults,
}

fn load_params(config: Option<&PathBuf>, args: &ParamArgs, unit: Unit) -> Result<BoxParams> {
    let params = match config {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => BoxParams::default(),
    };
    Ok(unit.to_mm(args.apply(params)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Generate { params, config, unit, format, stroke_width, output } => {
            let params = load_params(config.as_ref(), &params, unit)?;
            info!("generating box: {:?}", params);
            let ell_box = EllipticalBox::new(params).context("invalid box parameters")?;
            let mut cache = EllipseCache::new();
            let drawing = ell_box.generate(&mut cache).context("laying out box")?;
            let rendered = match format {
                Format::Svg => {
                    let config = RenderConfig { stroke_width, ..Default::default() };
                    render_svg(&drawing, &config, &mut cache)?
                }
                Format::Json => serde_json::to_string_pretty(&drawing)?,
            };
            match output {
                Some(path) => {
                    fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;
                    info!("wrote {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&BoxParams::default())?);
        }
    }
    Ok(())
}
