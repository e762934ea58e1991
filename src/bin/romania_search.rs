use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use romania_paths::{
    app::{compare, run_session, validate_pair, write_outcomes},
    graphs::{road_map::RoadMap, romania::load_graph},
    search::{config::AnnealingOptions, Strategy},
    utility::init_tracing,
    SearchError,
};

/// Compares greedy best-first, A*, hill climbing and simulated annealing
/// routes between two cities. Without `--origin` and `--destination` an
/// interactive session is started.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City to start from
    #[arg(short, long, requires = "destination")]
    origin: Option<String>,
    /// City to route to
    #[arg(short, long, requires = "origin")]
    destination: Option<String>,
    /// Road map in JSON format, the built-in Romania map if omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Simulated annealing options in JSON format
    #[arg(long)]
    options: Option<PathBuf>,
    /// Seed of the simulated annealing random stream
    #[arg(long)]
    seed: Option<u64>,
    /// Step budget of simulated annealing
    #[arg(long)]
    max_steps: Option<usize>,
    /// Only run this strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,
}

fn run(args: Args) -> Result<(), SearchError> {
    let map = match &args.graph {
        Some(path) => RoadMap::from_json_file(path)?,
        None => load_graph(),
    };

    let mut options = match &args.options {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => AnnealingOptions::default(),
    };
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    if let Some(max_steps) = args.max_steps {
        options = options.with_max_steps(max_steps);
    }
    options.validate()?;

    let strategies = match args.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let (Some(origin), Some(destination)) = (&args.origin, &args.destination) {
        let request = validate_pair(&map, origin, destination)?;
        let outcomes = compare(&map, &request, &strategies, &options)?;
        write_outcomes(&map, &outcomes, &mut output)?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(&map, &strategies, &options, &mut input, &mut output)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
