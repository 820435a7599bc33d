//! Point d'entrée CLI pour geofield-geocoder

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Géocodage inverse de valeurs de geofield
#[derive(Parser)]
#[command(name = "geofield-geocoder")]
#[command(author, version)]
#[command(about = "Reverse geocode geofield values and fit dumper output to field storage")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Reverse { lat, lon, config } => {
            debug!(lat, lon, config = ?config, "Reverse geocoding");
            cli::cmd_reverse(lat, lon, config.as_deref(), cli.quiet)?;
        }
        Commands::Format {
            input,
            config,
            jobs,
            report,
        } => {
            debug!(input = %input.display(), config = ?config, jobs = ?jobs, "Formatting");
            cli::cmd_format(&input, config.as_deref(), jobs, report.as_deref(), cli.quiet)?;
        }
        Commands::Address { input } => {
            cli::cmd_address(&input)?;
        }
        Commands::Reconcile {
            field_type,
            max_length,
            field_name,
            dumper,
            input,
        } => {
            cli::cmd_reconcile(&input, &field_type, max_length, &field_name, &dumper, cli.quiet)?;
        }
        Commands::Plugins => {
            cli::cmd_plugins()?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
