//! Définition et implémentation des commandes CLI
//!
//! - `reverse` : coordonnée → adresse sérialisée
//! - `format` : géométries (une par ligne) → sorties du dumper, en parallèle
//! - `address` : feature GeoJSON → valeur de champ adresse
//! - `reconcile` : sortie brute → valeur compatible avec le champ cible
//! - `plugins` : dumpers et providers disponibles

use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Subcommand;
use rayon::prelude::*;
use tracing::{debug, info};

use geocoder::{DumperManager, FieldDescriptor, FieldType, ProviderManager};
use geofield_geocoder::{Config, FormatReport, TracingNotifier};

#[derive(Subcommand)]
pub enum Commands {
    /// Reverse geocode a coordinate and print the first address
    Reverse {
        /// Latitude (WGS84)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude (WGS84)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Config preset name (default/offline) or path to a JSON config
        #[arg(long)]
        config: Option<String>,
    },

    /// Format geofield values (one WKT or GeoJSON geometry per line)
    Format {
        /// Input file, "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Config preset name (default/offline) or path to a JSON config
        #[arg(long)]
        config: Option<String>,

        /// Number of worker threads (default: number of CPUs)
        #[arg(long, alias = "threads")]
        jobs: Option<usize>,

        /// Write a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Convert a GeoJSON feature into an address field value (JSON)
    Address {
        /// Input file, "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// Fit a dumper output to a field definition (encoding + max length)
    Reconcile {
        /// Field type: string, text, string_long, text_long, ...
        #[arg(long, default_value = "string")]
        field_type: String,

        /// Field max length (characters)
        #[arg(long)]
        max_length: Option<usize>,

        /// Field label used in warnings
        #[arg(long, default_value = "field")]
        field_name: String,

        /// Dumper id used in warnings
        #[arg(long, default_value = "unknown")]
        dumper: String,

        /// Input file, "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// List the registered dumpers and providers
    Plugins,
}

/// Exécute la commande reverse
pub fn cmd_reverse(lat: f64, lon: f64, config_spec: Option<&str>, quiet: bool) -> Result<()> {
    let config = Config::resolve(config_spec)?;
    let dumpers = DumperManager::new(Arc::new(TracingNotifier::new(quiet)));
    let formatter = config.build_formatter(&dumpers, &ProviderManager::new())?;

    match formatter.format_point(lat, lon)? {
        Some(markup) => {
            let markup = match &config.field {
                Some(field) => {
                    dumpers
                        .fix_dumper_field_incompatibility(markup.as_bytes(), formatter.dumper_id(), field)
                        .value
                }
                None => markup,
            };
            println!("{}", markup);
        }
        None => info!(lat, lon, "No address found"),
    }

    Ok(())
}

/// Exécute la commande format
pub fn cmd_format(
    input: &Path,
    config_spec: Option<&str>,
    jobs: Option<usize>,
    report_path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let start = Instant::now();
    let config = Config::resolve(config_spec)?;
    let dumpers = DumperManager::new(Arc::new(TracingNotifier::new(quiet)));
    let formatter = config.build_formatter(&dumpers, &ProviderManager::new())?;

    let content = String::from_utf8(read_input(input)?)
        .context("Input geometries must be UTF-8 text")?;
    let lines: Vec<&str> = content.lines().collect();

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = jobs {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("Failed to build thread pool")?;

    info!(
        items = lines.len(),
        dumper = formatter.dumper_id(),
        threads = pool.current_num_threads(),
        "Formatting geofield values"
    );

    let results: Vec<_> = pool.install(|| {
        lines
            .par_iter()
            .enumerate()
            .map(|(delta, line)| (delta, formatter.format_item(line)))
            .collect()
    });

    let mut report = FormatReport::new(
        formatter.dumper_id(),
        formatter.provider_ids().into_iter().map(String::from).collect(),
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (delta, result) in results {
        match result {
            Ok(Some(markup)) => {
                let (markup, truncated) = match &config.field {
                    Some(field) => {
                        let reconciled = dumpers.fix_dumper_field_incompatibility(
                            markup.as_bytes(),
                            formatter.dumper_id(),
                            field,
                        );
                        let truncated = reconciled.truncated();
                        (reconciled.value, truncated)
                    }
                    None => (markup, false),
                };
                report.record_formatted(truncated);
                writeln!(out, "{}\t{}", delta, markup)?;
            }
            Ok(None) => {
                debug!(delta, "No address found");
                report.record_skipped(delta, "no result");
            }
            Err(e) => {
                debug!(delta, "Item skipped: {}", e);
                report.record_skipped(delta, e.to_string());
            }
        }
    }
    out.flush()?;

    report.set_duration(start.elapsed());
    info!("{}", report.summary());

    if let Some(path) = report_path {
        report
            .save_to_file(path)
            .context(format!("Failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "Report saved");
    }

    Ok(())
}

/// Exécute la commande address
pub fn cmd_address(input: &Path) -> Result<()> {
    let bytes = read_input(input)?;
    let geojson = String::from_utf8(bytes).context("GeoJSON input must be UTF-8 text")?;

    let dumpers = DumperManager::new(Arc::new(TracingNotifier::default()));
    let value = dumpers.set_address_field_from_geojson(&geojson)?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Exécute la commande reconcile
pub fn cmd_reconcile(
    input: &Path,
    field_type: &str,
    max_length: Option<usize>,
    field_name: &str,
    dumper: &str,
    quiet: bool,
) -> Result<()> {
    let bytes = read_input(input)?;
    let field = FieldDescriptor::new(field_name, FieldType::from(field_type), max_length);

    let dumpers = DumperManager::new(Arc::new(TracingNotifier::new(quiet)));
    let reconciled = dumpers.fix_dumper_field_incompatibility(strip_newline(&bytes), dumper, &field);

    println!("{}", reconciled.value);
    Ok(())
}

/// Exécute la commande plugins
pub fn cmd_plugins() -> Result<()> {
    let dumpers = DumperManager::new(Arc::new(TracingNotifier::default()));
    let providers = ProviderManager::new();

    println!("Dumpers:");
    for id in dumpers.ids() {
        println!("  {}", id);
    }
    println!("Providers:");
    for id in providers.ids() {
        println!("  {}", id);
    }
    Ok(())
}

/// Lit un fichier, ou stdin si le chemin est "-"
fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(input).context(format!("Failed to read input: {}", input.display()))
    }
}

/// Retire le saut de ligne final (echo, fichiers texte)
fn strip_newline(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
