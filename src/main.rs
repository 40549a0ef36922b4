use clap::Parser;
use dreamstar::cli::{Cli, Commands};
use dreamstar::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();
    match cli.command {
        Commands::Render(args) => dreamstar::cli::render::run(args, &printer)?,
        Commands::Init(args) => dreamstar::cli::init::run(args, &printer)?,
        Commands::Palette(args) => dreamstar::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => dreamstar::cli::completions::run(args)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DREAMSTAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
