use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{parse_seed, PosterConfig};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{Palette, PaletteSpec};

/// Print a generated pastel palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Number of colours (default: from config, else 12)
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for a reproducible palette
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Config file to read the palette style from (default: ./poster.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let mut spec = load_spec(args.config.as_deref())?;
    if let Some(count) = args.count {
        spec.count = count;
    }

    let palette = generate(&spec, args.seed.as_deref().and_then(parse_seed));
    printer.status("Generated", &plural(palette.len(), "colour", "colours"));

    let mut stdout = std::io::stdout().lock();
    write_palette(&palette, &mut stdout)?;
    Ok(())
}

fn load_spec(config: Option<&std::path::Path>) -> Result<PaletteSpec> {
    let path = match config {
        Some(path) => Some(path.to_path_buf()),
        None => PosterConfig::find(std::path::Path::new(".")),
    };
    Ok(match path {
        Some(path) => PosterConfig::load(&path)?.style.palette,
        None => PaletteSpec::default(),
    })
}

fn generate(spec: &PaletteSpec, seed: Option<u64>) -> Palette {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    spec.generate(&mut rng)
}

/// Write `$colour-N: #RRGGBB` lines, numbered from 1.
fn write_palette(palette: &Palette, out: &mut impl Write) -> Result<()> {
    for (i, colour) in palette.iter().enumerate() {
        writeln!(out, "$colour-{}: {}", i + 1, colour)?;
    }
    Ok(())
}
