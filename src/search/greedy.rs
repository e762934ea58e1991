use ahash::{HashSet, HashSetExt};
use tracing::debug;

use crate::{
    graphs::{extend_weight, path::Path, road_map::RoadMap, VertexId, Weight},
    heuristics::Heuristic,
    queue::{heap_queue::HeapQueue, FrontierElement},
};

/// Greedy best-first search.
///
/// The frontier is keyed by the heuristic of the newest vertex only, so the
/// returned path is not necessarily the cheapest. Returns
/// `Path::unreachable()` when the frontier runs dry.
pub fn greedy_best_first(
    map: &RoadMap,
    heuristic: &dyn Heuristic,
    source: VertexId,
    target: VertexId,
) -> Path {
    let mut frontier: HeapQueue<(Weight, Vec<VertexId>)> = HeapQueue::new();
    frontier.push(heuristic.lower_bound(source, target), (0, vec![source]));
    let mut explored = HashSet::new();

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
                expanded = explored.len(),
                "greedy best-first reached target"
            );
            return Path { vertices, weight };
        }

        if !explored.insert(tail) {
            continue;
        }

        for (head, edge_weight) in map.neighbors(tail) {
            if explored.contains(&head) {
                continue;
            }
            let Some(head_weight) = extend_weight(weight, edge_weight) else {
                continue;
            };
            let mut extended = vertices.clone();
            extended.push(head);
            frontier.push(heuristic.lower_bound(head, target), (head_weight, extended));
        }
    }

    debug!(
        source = map.name(source),
        target = map.name(target),
        expanded = explored.len(),
        "greedy best-first exhausted frontier"
    );
    Path::unreachable()
}
