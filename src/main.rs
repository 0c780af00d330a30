use crate::algos::{Algo, DEFAULT_MAX_CELLS, DEFAULT_MAX_PROJECTS, Exhaustive, Knapsack};
use crate::config::{Config, get_config, get_config_or};
use crate::loaders::{DEFAULT_OUTPUT_FILE, Loader};
use clap::Parser;
use eyre::{Error, WrapErr, bail};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

mod algos;
mod checks;
mod config;
mod display;
mod loaders;
mod model;
mod stats;

const DEFAULT_CONFIG_FILE: &str = "invest-advisor.toml";

/// Select the investment projects maximizing net value within a budget
#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    /// Use FILE instead of invest-advisor.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Do not write the selected projects
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Write the selected projects to FILE instead of selectedProjects.txt
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
    /// File holding the budget on its first line, then one "<cost> <value>" project per line
    file: PathBuf,
}

fn load_config(options: &Options) -> Result<Config, Error> {
    match &options.config {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE))
        }
        None => Ok(Config::default()),
    }
}

fn algorithm(config: &Config) -> Result<Box<dyn Algo>, Error> {
    let algo: Box<dyn Algo> =
        match &get_config(config, "solver", "algorithm").unwrap_or_else(|| "knapsack".to_owned())[..] {
            "knapsack" => Box::new(Knapsack::new(get_config_or(
                config,
                "solver",
                "max_cells",
                DEFAULT_MAX_CELLS,
            )?)),
            "exhaustive" => Box::new(Exhaustive::new(get_config_or(
                config,
                "exhaustive",
                "max_projects",
                DEFAULT_MAX_PROJECTS,
            )?)),
            other => bail!("unknown algorithm: {}", other),
        };
    Ok(algo)
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = load_config(&options)?;
    let algo = algorithm(&config)?;

    let loader = Loader::new(&options.file);
    info!(path = %loader.path().display(), "loading projects");
    let (budget, projects) = loader.load()?;
    display::display_projects(budget, &projects);

    info!(algorithm = algo.name(), "selecting projects");
    let selection = algo
        .select(budget, &projects)
        .wrap_err("cannot select projects")?;
    checks::ensure_feasible(budget, &selection)?;
    checks::ensure_subset(&projects, &selection)?;
    display::display_selection(&selection);

    if options.dry_run {
        debug!("dry run, selection not saved");
    } else {
        let output = match options.output {
            Some(output) => output,
            None => loader.output_path(
                &get_config(&config, "output", "file")
                    .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_owned()),
            ),
        };
        info!(path = %output.display(), "writing selected projects");
        loader.save_selection(&selection, &output)?;
    }
    display::display_stats(budget, &projects, &selection);
    Ok(())
}
