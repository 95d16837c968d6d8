use crate::config::{Config, Simulation};
use crate::model::University;
use clap::Parser;
use eyre::Result;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

mod config;
mod display;
mod grouping;
mod loaders;
mod model;
mod stats;

const DEFAULT_CONFIG: &str = "unirank.toml";

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    /// Use FILE instead of unirank.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Ranking dataset to load
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,
    /// Year of the dataset to rank
    #[arg(short, long)]
    year: Option<i32>,
    /// Also summarize universities per country
    #[arg(long)]
    countries: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(options: &Options) -> Result<Config> {
    let mut config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG))?,
        None => Config::default(),
    };
    if let Some(data) = &options.data {
        config.data.clone_from(data);
    }
    if let Some(year) = options.year {
        config.year = year;
    }
    Ok(config)
}

/// Apply a simulated score update to the named university, if it exists.
/// When several universities share the name, the last one is used.
fn simulate(universities: &mut [University], simulation: &Simulation) {
    let Some(u) = universities
        .iter_mut()
        .rev()
        .find(|u| u.name == simulation.institution)
    else {
        debug!(institution = %simulation.institution, "university not found, skipping simulation");
        return;
    };
    println!();
    println!("--- Simulating an update for {} ---", u.name);
    let change = u.update(simulation.year, simulation.score);
    display::display_update(u, simulation.year, change);
    display::display_progress(u);
    if let Some(progress) = u.progress() {
        info!(
            university = %u,
            score_change = progress.score_change,
            rank_change = progress.rank_change,
            "simulated ranking update"
        );
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = load_config(&options)?;
    let records = loaders::load_records(&config.data)?;
    info!(
        records = records.len(),
        data = %config.data.display(),
        "loaded ranking dataset"
    );
    let groups = grouping::group_by_country(&records, config.year);
    let mut universities = grouping::create_universities(&groups);
    display::display_leaderboard(&mut universities, config.top, config.year)?;
    for simulation in &config.simulations {
        simulate(&mut universities, simulation);
    }
    if options.countries {
        display::display_countries(&stats::country_statistics(&universities));
    }
    Ok(())
}
