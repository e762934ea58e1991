use std::fmt;

use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::SearchError,
    graphs::{
        path::{Path, SearchRequest},
        road_map::RoadMap,
    },
    heuristics::straight_line::StraightLineDistance,
};

pub mod astar;
pub mod config;
pub mod greedy;
pub mod hill_climbing;
pub mod simulated_annealing;

use config::AnnealingOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Greedy,
    #[value(name = "astar")]
    #[serde(rename = "astar")]
    AStar,
    HillClimbing,
    SimulatedAnnealing,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::HillClimbing,
        Strategy::SimulatedAnnealing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "Greedy Best-First Search",
            Strategy::AStar => "A* Search",
            Strategy::HillClimbing => "Hill Climbing Search",
            Strategy::SimulatedAnnealing => "Simulated Annealing Search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub path: Path,
    /// Set when simulated annealing handed over to greedy best-first.
    pub fallback_used: bool,
}

/// Routes between two named cities with the given strategy.
pub fn search(
    map: &RoadMap,
    strategy: Strategy,
    start: &str,
    goal: &str,
    options: &AnnealingOptions,
) -> Result<SearchOutcome, SearchError> {
    let request = SearchRequest::from_names(map, start, goal)?;
    search_request(map, strategy, &request, options)
}

pub fn search_request(
    map: &RoadMap,
    strategy: Strategy,
    request: &SearchRequest,
    options: &AnnealingOptions,
) -> Result<SearchOutcome, SearchError> {
    for vertex in [request.source, request.target] {
        if vertex >= map.number_of_vertices() {
            return Err(SearchError::UnknownNode(format!("vertex {}", vertex)));
        }
    }

    let heuristic = StraightLineDistance::new(map);
    let SearchRequest { source, target } = *request;

    let (path, fallback_used) = match strategy {
        Strategy::Greedy => (greedy::greedy_best_first(map, &heuristic, source, target), false),
        Strategy::AStar => (astar::astar(map, &heuristic, source, target), false),
        Strategy::HillClimbing => (
            hill_climbing::hill_climbing(map, &heuristic, source, target),
            false,
        ),
        Strategy::SimulatedAnnealing => {
            options.validate()?;
            let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
            let result = simulated_annealing::simulated_annealing(
                map,
                &heuristic,
                source,
                target,
                |step| options.schedule.temperature(step),
                options.max_steps,
                &mut rng,
            );
            (result.path, result.fallback_used)
        }
    };

    Ok(SearchOutcome {
        strategy,
        path,
        fallback_used,
    })
}

/// Runs every strategy in `Strategy::ALL` order.
pub fn search_all(
    map: &RoadMap,
    start: &str,
    goal: &str,
    options: &AnnealingOptions,
) -> Result<Vec<SearchOutcome>, SearchError> {
    let request = SearchRequest::from_names(map, start, goal)?;
    Strategy::ALL
        .iter()
        .map(|&strategy| search_request(map, strategy, &request, options))
        .collect()
}
