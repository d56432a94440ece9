use alien_invasion::config::{
    GridConfig, RunConfig, DEFAULT_ALIEN_COUNT, DEFAULT_CITY_COUNT, DEFAULT_GRID_HEIGHT,
    DEFAULT_GRID_WIDTH, DEFAULT_ITERATION_LIMIT,
};
use alien_invasion::mapgen::{highlight_cities, GridMap};
use alien_invasion::map_file;
use alien_invasion::simulation::Simulation;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "alien_invasion")]
#[command(about = "Alien invasion simulation util")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a world map
    Generate {
        /// Output map file
        output: PathBuf,

        /// Grid height
        #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
        height: usize,

        /// Grid width
        #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
        width: usize,

        /// Number of cities
        #[arg(short, long, default_value_t = DEFAULT_CITY_COUNT)]
        cities: usize,

        /// Output dot file (graphviz format)
        #[arg(short, long)]
        dot: Option<PathBuf>,

        /// Seed for a reproducible map
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the simulation
    Run {
        /// Input map file
        input: PathBuf,

        /// Iterations limit
        #[arg(short, long, default_value_t = DEFAULT_ITERATION_LIMIT)]
        iterations: usize,

        /// Number of aliens
        #[arg(short, long, default_value_t = DEFAULT_ALIEN_COUNT)]
        aliens: usize,

        /// Output world map file (printed to stdout by default)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Mark cities destroyed by a simulation in red in the initial map's dot graph
    Analyze {
        /// Map the simulation started from
        initial_map: PathBuf,

        /// Map the simulation produced
        result_map: PathBuf,

        /// Dot graph of the initial map
        initial_dot: PathBuf,

        /// Output dot file
        output_dot: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Generate {
            output,
            height,
            width,
            cities,
            dot,
            seed,
        } => {
            let config = GridConfig {
                height,
                width,
                cities,
                seed,
            };
            generate(&config, &output, dot.as_deref())
        }
        Command::Run {
            input,
            iterations,
            aliens,
            output,
            seed,
        } => {
            let config = RunConfig {
                iteration_limit: iterations,
                alien_count: aliens,
                seed,
            };
            run(&config, &input, output.as_deref())
        }
        Command::Analyze {
            initial_map,
            result_map,
            initial_dot,
            output_dot,
        } => analyze(&initial_map, &result_map, &initial_dot, &output_dot),
    }
}

fn generate(config: &GridConfig, output: &Path, dot: Option<&Path>) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let grid_map = GridMap::from_config(config, &mut rng).context("error generating map")?;

    map_file::save(output, grid_map.world_map())
        .context("error writing generated map to file")?;
    info!(
        "Generated {} cities into {}",
        grid_map.world_map().len(),
        output.display()
    );

    if let Some(dot) = dot {
        map_file::write_text(dot, &grid_map.dot_graph().to_string())
            .context("error writing generated dot graph to file")?;
    }

    Ok(())
}

fn run(config: &RunConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let world_map = map_file::load(input).context("error loading world map")?;
    info!("World map has {} regions", world_map.region_count());

    let mut simulation =
        Simulation::from_config(config, &world_map).context("error initializing simulation")?;

    let result = simulation.run();
    simulation.log_summary();
    info!("World map left with {} regions", result.region_count());

    match output {
        Some(output) => {
            map_file::save(output, &result).context("error saving result world map")?;
        }
        None if result.is_empty() => println!("Whole world destroyed!"),
        None => print!("\nWorld map after invasion:\n\n{}", result),
    }

    Ok(())
}

fn analyze(
    initial_map: &Path,
    result_map: &Path,
    initial_dot: &Path,
    output_dot: &Path,
) -> Result<()> {
    let initial = map_file::load(initial_map).context("error loading initial map")?;
    let result = map_file::load(result_map).context("error loading result map")?;

    let destroyed = result.destroyed_since(&initial);
    info!("{} cities destroyed", destroyed.len());

    let graph = fs::read_to_string(initial_dot).context("error reading dot graph")?;
    let graph = highlight_cities(&graph, &destroyed);

    map_file::write_text(output_dot, &graph)
        .context("error writing generated dot graph to file")?;

    Ok(())
}
