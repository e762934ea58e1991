use tracing::debug;

use crate::{
    graphs::{extend_weight, path::Path, road_map::RoadMap, VertexId, Weight},
    heuristics::Heuristic,
};

/// Steepest-descent hill climbing on the heuristic.
///
/// Moves to the unvisited neighbour with the lowest estimate as long as it
/// strictly improves on the current vertex. The path built so far is
/// returned even if it stops short of `target`.
pub fn hill_climbing(
    map: &RoadMap,
    heuristic: &dyn Heuristic,
    source: VertexId,
    target: VertexId,
) -> Path {
    let mut vertices = vec![source];
    let mut weight: Weight = 0;
    let mut tail = source;

    loop {
        let current_estimate = heuristic.lower_bound(tail, target);
        let best_neighbor = map
            .neighbors(tail)
            .filter(|(head, _)| !vertices.contains(head))
            .filter_map(|(head, edge_weight)| {
                let head_weight = extend_weight(weight, edge_weight)?;
                Some((heuristic.lower_bound(head, target), head, head_weight))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        match best_neighbor {
            Some((estimate, head, head_weight)) if estimate < current_estimate => {
                vertices.push(head);
                weight = head_weight;
                tail = head;
            }
            _ => break,
        }
    }

    debug!(
        source = map.name(source),
        target = map.name(target),
        stopped_at = map.name(tail),
        weight,
        "hill climbing finished"
    );
    Path { vertices, weight }
}
