//! Heuristic route finding on a small, fixed road network.
//!
//! Four strategies share one read-only [`graphs::road_map::RoadMap`]:
//! greedy best-first, A*, hill climbing and simulated annealing. Each call
//! owns its frontier, explored set and random stream, so a map can be
//! searched from any number of threads at once.

pub mod app;
pub mod error;
pub mod graphs;
pub mod heuristics;
pub mod queue;
pub mod search;
pub mod utility;

pub use error::SearchError;
pub use graphs::romania::load_graph;
pub use search::{search, search_all, SearchOutcome, Strategy};
