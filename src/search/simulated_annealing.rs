use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::greedy::greedy_best_first;
use crate::{
    graphs::{extend_weight, path::Path, road_map::RoadMap, VertexId, Weight},
    heuristics::Heuristic,
};

/// Outcome of a simulated annealing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealingResult {
    /// The annealed path, or the greedy best-first path after a fallback.
    pub path: Path,

    /// Whether the annealing stalled and greedy best-first answered instead.
    pub fallback_used: bool,

    /// Number of proposed moves.
    pub steps: usize,

    /// Number of proposed moves that were accepted.
    pub accepted_moves: usize,

    /// Temperature at the last step taken.
    pub final_temperature: f64,
}

/// Random walk towards `target` that accepts each extension of the current
/// path with Boltzmann probability `exp(-delta / T)`.
///
/// Only unvisited neighbours are proposed, so the path never revisits a
/// city. The target is checked on the accepted path only. If the budget
/// runs out, the temperature reaches zero or the walk is boxed in, the
/// search falls back to [`greedy_best_first`].
pub fn simulated_annealing<S, R>(
    map: &RoadMap,
    heuristic: &dyn Heuristic,
    source: VertexId,
    target: VertexId,
    schedule: S,
    max_steps: usize,
    rng: &mut R,
) -> AnnealingResult
where
    S: Fn(usize) -> f64,
    R: Rng,
{
    let mut vertices = vec![source];
    let mut weight: Weight = 0;
    let mut tail = source;
    let mut steps = 0;
    let mut accepted_moves = 0;
    let mut final_temperature = schedule(0);

    for step in 0..max_steps {
        if tail == target {
            break;
        }

        let temperature = schedule(step);
        final_temperature = temperature;
        // Also stops on NaN.
        if !(temperature > 0.0) {
            break;
        }

        let candidates: Vec<(VertexId, Weight, Weight)> = map
            .neighbors(tail)
            .filter(|(head, _)| !vertices.contains(head))
            .filter_map(|(head, edge_weight)| {
                Some((head, edge_weight, extend_weight(weight, edge_weight)?))
            })
            .collect();
        let Some(&(head, edge_weight, head_weight)) = candidates.choose(rng) else {
            break;
        };
        steps += 1;

        // Extending the path raises its cost by exactly one road.
        let delta = f64::from(edge_weight);
        if delta < 0.0 || rng.gen::<f64>() < (-delta / temperature).exp() {
            vertices.push(head);
            weight = head_weight;
            tail = head;
            accepted_moves += 1;
        }
    }

    if tail == target {
        debug!(
            source = map.name(source),
            target = map.name(target),
            weight,
            steps,
            accepted_moves,
            "simulated annealing reached target"
        );
        return AnnealingResult {
            path: Path { vertices, weight },
            fallback_used: false,
            steps,
            accepted_moves,
            final_temperature,
        };
    }

    warn!(
        source = map.name(source),
        target = map.name(target),
        stopped_at = map.name(tail),
        steps,
        accepted_moves,
        "simulated annealing did not reach target, falling back to greedy best-first"
    );
    AnnealingResult {
        path: greedy_best_first(map, heuristic, source, target),
        fallback_used: true,
        steps,
        accepted_moves,
        final_temperature,
    }
}
