pub mod completions;
pub mod init;
pub mod palette;
pub mod render;

use clap::{Parser, Subcommand};

/// dreamstar - Dreamy blue star poster generator
#[derive(Parser, Debug)]
#[command(name = "dreamstar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug diagnostics (overrides DREAMSTAR_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a poster to PNG
    Render(render::RenderArgs),

    /// Write a poster.yaml with every setting spelled out
    Init(init::InitArgs),

    /// Print a generated pastel palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::parse_from([
            "dreamstar", "render", "--stars", "20", "--seed", "42", "--no-title", "-v",
        ]);
        assert!(cli.verbose);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.stars, Some(20));
        assert_eq!(args.seed.as_deref(), Some("42"));
        assert!(args.no_title);
    }

    #[test]
    fn test_negative_seed_is_a_value() {
        let cli = Cli::try_parse_from(["dreamstar", "render", "--seed", "-5"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.seed.as_deref(), Some("-5"));

        let cli = Cli::try_parse_from(["dreamstar", "palette", "--seed", "-1"]).unwrap();
        let Commands::Palette(args) = cli.command else {
            panic!("expected palette");
        };
        assert_eq!(args.seed.as_deref(), Some("-1"));
    }
}
