//! Render command implementation.
//!
//! Loads `poster.yaml` (when present), applies command-line overrides and
//! writes the poster as PNG.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::PosterConfig;
use crate::error::Result;
use crate::output::{display_path, plural, seed_label, Printer};
use crate::render::{render_poster, BackgroundMode};

/// Render a poster to PNG
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Config file (default: ./poster.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of stars (5-40)
    #[arg(long)]
    pub stars: Option<usize>,

    /// Background mode: gradient or solid
    #[arg(long)]
    pub background: Option<String>,

    /// Skip the title text
    #[arg(long)]
    pub no_title: bool,

    /// Replace the title text
    #[arg(long)]
    pub title: Option<String>,

    /// Replace the subtitle text
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Figure width in inches (4-10)
    #[arg(long)]
    pub width: Option<f64>,

    /// Figure height in inches (6-14)
    #[arg(long)]
    pub height: Option<f64>,

    /// Seed; blank or non-integer renders unseeded
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Output resolution
    #[arg(long)]
    pub dpi: Option<f64>,

    /// Output PNG path
    #[arg(long, short, default_value = "dreamy_star_poster.png")]
    pub output: PathBuf,

    /// Also write the sampled layout as JSON
    #[arg(long)]
    pub layout: Option<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    if let Some(name) = &args.background {
        if BackgroundMode::from_name(name).is_none() {
            printer.warning("Unknown", &format!("background '{}', using gradient", name));
        }
    }
    let config = resolve_config(&args, Path::new("."))?;

    let stars = plural(config.stars, "star", "stars");
    let seed = seed_label(config.seed_value());
    printer.status("Rendering", &format!("{} on {} ({})", stars, config.background, seed));

    let poster = render_poster(&config)?;
    poster.write_png(&args.output)?;

    if let Some(layout_path) = &args.layout {
        poster.layout().write_json(layout_path)?;
        printer.info("Layout", &display_path(layout_path));
    }

    let side = poster.canvas().width();
    let size = printer.dim(&format!("({side}x{side} @ {} dpi)", config.dpi));
    printer.success("Wrote", &format!("{} {}", display_path(&args.output), size));
    Ok(())
}

/// Load the config file (explicit, or `poster.yaml` in `dir`) and apply
/// command-line overrides on top.
pub fn resolve_config(args: &RenderArgs, dir: &Path) -> Result<PosterConfig> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => PosterConfig::find(dir),
    };
    let mut config = match path {
        Some(path) => PosterConfig::load(&path)?,
        None => PosterConfig::default(),
    };

    if let Some(stars) = args.stars {
        config.stars = stars;
    }
    if let Some(name) = &args.background {
        config.background = BackgroundMode::from_name_or_default(name);
    }
    if args.no_title {
        config.title = false;
    }
    let lines = &mut config.style.title.lines;
    for (index, text) in [&args.title, &args.subtitle].into_iter().enumerate() {
        if let (Some(text), Some(line)) = (text, lines.get_mut(index)) {
            line.text = text.clone();
        }
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = &args.seed {
        config.seed = seed.clone();
    }
    if let Some(dpi) = args.dpi {
        config.dpi = dpi;
    }

    config.validate()?;
    Ok(config)
}
