use std::path::PathBuf;

use clap::Parser;
use romania_paths::{
    graphs::{graph_functions::to_dot, road_map::RoadMap, romania::load_graph},
    search::{config::AnnealingOptions, search, Strategy},
    utility::init_tracing,
};

/// Prints the road map in Graphviz DOT format with the route of `strategy`
/// between `origin` and `destination` highlighted. Pipe into
/// `neato -n -Tpng` to draw it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City to start from
    #[arg(short, long, requires = "destination")]
    origin: Option<String>,
    /// City to route to
    #[arg(short, long, requires = "origin")]
    destination: Option<String>,
    /// Strategy whose route is highlighted
    #[arg(short, long, value_enum, default_value_t = Strategy::AStar)]
    strategy: Strategy,
    /// Road map in JSON format, the built-in Romania map if omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let map = match &args.graph {
        Some(path) => RoadMap::from_json_file(path).unwrap(),
        None => load_graph(),
    };

    let path = match (&args.origin, &args.destination) {
        (Some(origin), Some(destination)) => {
            let outcome = search(
                &map,
                args.strategy,
                origin,
                destination,
                &AnnealingOptions::default(),
            )
            .unwrap_or_else(|error| panic!("{}", error));
            Some(outcome.path)
        }
        _ => None,
    };

    print!("{}", to_dot(&map, path.as_ref()));
}
