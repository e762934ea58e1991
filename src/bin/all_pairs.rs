use std::{fs::File, io::BufWriter, path::PathBuf};

use ahash::{HashMap, HashMapExt};
use clap::Parser;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use romania_paths::{
    graphs::{
        graph_functions::{all_requests, has_repeated_vertex, validate_path},
        path::SearchRequest,
        road_map::RoadMap,
        romania::load_graph,
        Weight,
    },
    search::{config::AnnealingOptions, search_request, SearchOutcome, Strategy},
    utility::{get_progressbar, init_tracing},
};
use serde::Serialize;

/// Runs every strategy on every ordered pair of cities in parallel,
/// validates the returned paths and summarises how the strategies compare.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road map in JSON format, the built-in Romania map if omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Seed of the simulated annealing random stream
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Step budget of simulated annealing
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,
    /// Path where the per pair report shall be saved
    #[arg(short, long)]
    report: Option<PathBuf>,
}

#[derive(Serialize)]
struct PairReport {
    source: String,
    target: String,
    outcomes: Vec<SearchOutcome>,
}

#[derive(Default)]
struct StrategySummary {
    reached: usize,
    total_weight: u64,
    fallbacks: usize,
}

fn check(
    map: &RoadMap,
    request: &SearchRequest,
    outcomes: &[SearchOutcome],
) -> Result<(), String> {
    let mut optimal = None;
    for outcome in outcomes {
        validate_path(map, request, &outcome.path)
            .map_err(|error| format!("{}: {}", outcome.strategy, error))?;
        if outcome.strategy == Strategy::AStar && outcome.path.is_reachable() {
            optimal = Some(outcome.path.weight);
        }
        if matches!(
            outcome.strategy,
            Strategy::HillClimbing | Strategy::SimulatedAnnealing
        ) && has_repeated_vertex(&outcome.path)
        {
            return Err(format!("{} revisited a city", outcome.strategy));
        }
    }

    if let Some(optimal) = optimal {
        for outcome in outcomes {
            if outcome.path.ends_at(request.target) && outcome.path.weight < optimal {
                return Err(format!("{} beat A*", outcome.strategy));
            }
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let map = match &args.graph {
        Some(path) => RoadMap::from_json_file(path).unwrap(),
        None => load_graph(),
    };
    let options = AnnealingOptions::default()
        .with_seed(args.seed)
        .with_max_steps(args.max_steps);

    let requests = all_requests(&map);
    let bar = get_progressbar("Searching all pairs", requests.len() as u64);

    let reports: Vec<(SearchRequest, Vec<SearchOutcome>)> = requests
        .par_iter()
        .progress_with(bar)
        .map(|request| {
            let outcomes: Vec<SearchOutcome> = Strategy::ALL
                .iter()
                .map(|&strategy| search_request(&map, strategy, request, &options).unwrap())
                .collect();
            (*request, outcomes)
        })
        .collect();

    let mut summaries: HashMap<Strategy, StrategySummary> = HashMap::new();
    for (request, outcomes) in reports.iter() {
        if let Err(error) = check(&map, request, outcomes) {
            panic!(
                "{} -> {}: {}",
                map.name(request.source),
                map.name(request.target),
                error
            );
        }

        for outcome in outcomes {
            let summary = summaries.entry(outcome.strategy).or_default();
            if outcome.path.ends_at(request.target) && outcome.path.weight != Weight::MAX {
                summary.reached += 1;
                summary.total_weight += outcome.path.weight as u64;
            }
            if outcome.fallback_used {
                summary.fallbacks += 1;
            }
        }
    }

    println!("All paths valid over {} pairs", reports.len());
    for strategy in Strategy::ALL {
        let summary = summaries.remove(&strategy).unwrap_or_default();
        let average = if summary.reached > 0 {
            summary.total_weight as f64 / summary.reached as f64
        } else {
            f64::NAN
        };
        println!(
            "{:<28} reached {:>4}/{} average cost {:>8.1} fallbacks {}",
            strategy.display_name(),
            summary.reached,
            reports.len(),
            average,
            summary.fallbacks
        );
    }

    if let Some(report) = args.report {
        println!("Writing report");
        let report_entries: Vec<PairReport> = reports
            .into_iter()
            .map(|(request, outcomes)| PairReport {
                source: map.name(request.source).to_string(),
                target: map.name(request.target).to_string(),
                outcomes,
            })
            .collect();
        let writer = BufWriter::new(File::create(report).unwrap());
        serde_json::to_writer(writer, &report_entries).unwrap();
    }
}
