use ahash::{HashMap, HashMapExt};
use tracing::debug;

use crate::{
    graphs::{extend_weight, path::Path, road_map::RoadMap, VertexId, Weight},
    heuristics::Heuristic,
    queue::{heap_queue::HeapQueue, FrontierElement},
};

/// A* search ordered by `f = g + h`.
///
/// Stale frontier entries are skipped lazily: an entry is expanded only if
/// no cheaper or equal `g` has been recorded for its vertex yet. A vertex is
/// expanded again whenever a strictly cheaper path to it shows up, so an
/// admissible heuristic suffices for the first target pop to be optimal.
pub fn astar(
    map: &RoadMap,
    heuristic: &dyn Heuristic,
    source: VertexId,
    target: VertexId,
) -> Path {
    let mut frontier: HeapQueue<(Weight, Vec<VertexId>)> = HeapQueue::new();
    frontier.push(heuristic.lower_bound(source, target), (0, vec![source]));
    let mut best_weights: HashMap<VertexId, Weight> = HashMap::new();
    let mut expansions = 0usize;

    while let Some(FrontierElement {
        item: (weight, vertices),
        ..
    }) = frontier.pop()
    {
        let Some(&tail) = vertices.last() else {
            continue;
        };

        if tail == target {
            debug!(
                source = map.name(source),
                target = map.name(target),
                weight,
                expansions,
                "a* reached target"
            );
            return Path { vertices, weight };
        }

        if best_weights
            .get(&tail)
            .is_some_and(|&best_weight| best_weight <= weight)
        {
            continue;
        }
        best_weights.insert(tail, weight);
        expansions += 1;

        for (head, edge_weight) in map.neighbors(tail) {
            let Some(head_weight) = extend_weight(weight, edge_weight) else {
                continue;
            };
            let mut extended = vertices.clone();
            extended.push(head);
            frontier.push(
                head_weight as f64 + heuristic.lower_bound(head, target),
                (head_weight, extended),
            );
        }
    }

    debug!(
        source = map.name(source),
        target = map.name(target),
        expansions,
        "a* exhausted frontier"
    );
    Path::unreachable()
}
