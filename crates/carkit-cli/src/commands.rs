//! Command handlers

use std::path::PathBuf;

use carkit_app::{showcase_catalog, walk_through, AnyVehicle, CarCatalog, Config};
use carkit_types::{Error, OutputFormat, Result};
use tracing::{info, warn};

use crate::cli::{Cli, Commands};
use crate::logging::init_logging;
use crate::output::{output_config, output_summaries, output_summary, output_walkthroughs};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let loaded = Config::load();
    let log_filter = loaded
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| Config::default().log_filter);
    init_logging(cli.verbose, &log_filter);

    let config = config_or_default(loaded, &cli.command)?;

    let output_format = resolve_format(cli.format, &config);

    match &cli.command {
        Commands::List => cmd_list(&cli, &config, output_format),
        Commands::Show { index } => cmd_show(&cli, &config, *index, output_format),
        Commands::Walk { index } => cmd_walk(&cli, &config, *index, output_format),
        Commands::Config {
            show,
            set_format,
            set_catalog,
            clear_catalog,
        } => {
            let changes = ConfigChanges {
                set_format: *set_format,
                set_catalog: set_catalog.clone(),
                clear_catalog: *clear_catalog,
            };
            cmd_config(config, *show, changes, output_format)
        }
    }
}

/// Keep `carkit config` usable when the saved file cannot be parsed,
/// so a broken file can be overwritten
fn config_or_default(loaded: Result<Config>, command: &Commands) -> Result<Config> {
    match loaded {
        Err(Error::Config(e)) if matches!(command, Commands::Config { .. }) => {
            warn!("ignoring unreadable configuration: {}", e);
            Ok(Config::default())
        }
        other => other,
    }
}

/// CLI flag first, then config
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or(config.output_format)
}

/// CLI flag first, then config, then the built-in showcase
fn load_catalog(cli: &Cli, config: &Config) -> Result<CarCatalog> {
    match cli.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(path.display().to_string()));
            }
            info!(path = %path.display(), "loading catalog");
            CarCatalog::load_from_file(path)
        }
        None => {
            info!("using built-in showcase catalog");
            showcase_catalog()
        }
    }
}

fn take_vehicle(vehicles: Vec<AnyVehicle>, index: usize) -> Result<AnyVehicle> {
    vehicles
        .into_iter()
        .nth(index)
        .ok_or(Error::VehicleNotFound(index))
}

fn cmd_list(cli: &Cli, config: &Config, output_format: OutputFormat) -> Result<()> {
    let rows: Vec<_> = load_catalog(cli, config)?
        .build()
        .iter()
        .map(AnyVehicle::summary)
        .enumerate()
        .collect();
    output_summaries(output_format, &rows)
}

fn cmd_show(cli: &Cli, config: &Config, index: usize, output_format: OutputFormat) -> Result<()> {
    let vehicle = take_vehicle(load_catalog(cli, config)?.build(), index)?;
    output_summary(output_format, index, &vehicle.summary())
}

fn cmd_walk(
    cli: &Cli,
    config: &Config,
    index: Option<usize>,
    output_format: OutputFormat,
) -> Result<()> {
    let vehicles = load_catalog(cli, config)?.build();

    let selected: Vec<(usize, AnyVehicle)> = match index {
        Some(i) => vec![(i, take_vehicle(vehicles, i)?)],
        None => vehicles.into_iter().enumerate().collect(),
    };

    let walks: Vec<_> = selected
        .into_iter()
        .map(|(i, mut vehicle)| (i, walk_through(&mut vehicle)))
        .collect();
    info!(count = walks.len(), "walkthrough complete");

    output_walkthroughs(output_format, &walks)
}

/// Requested edits from `carkit config`
#[derive(Debug, Default)]
struct ConfigChanges {
    set_format: Option<OutputFormat>,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
}

/// Apply the edits, returning whether anything was requested
fn apply_config_changes(config: &mut Config, changes: ConfigChanges) -> bool {
    let mut changed = false;

    if let Some(format) = changes.set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(path) = changes.set_catalog {
        config.catalog_path = Some(path);
        changed = true;
    }
    if changes.clear_catalog {
        config.catalog_path = None;
        changed = true;
    }

    changed
}

fn cmd_config(
    mut config: Config,
    show: bool,
    changes: ConfigChanges,
    output_format: OutputFormat,
) -> Result<()> {
    let changed = apply_config_changes(&mut config, changes);

    if changed {
        config.save()?;
        eprintln!("Configuration saved to {}", Config::config_path()?.display());
    }

    if show || !changed {
        output_config(output_format, &config)?;
    }

    Ok(())
}
