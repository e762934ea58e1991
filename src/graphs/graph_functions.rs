use ahash::{HashSet, HashSetExt};
use itertools::Itertools;

use super::{
    path::{Path, SearchRequest},
    extend_weight,
    road_map::RoadMap,
    Weight,
};

/// Check that a returned path is consistent with the map and the request.
///
/// Partial paths (a search that stopped short of the target) are accepted;
/// callers check `Path::ends_at` themselves.
pub fn validate_path(map: &RoadMap, request: &SearchRequest, path: &Path) -> Result<(), String> {
    if !path.is_reachable() {
        if !path.vertices.is_empty() || path.weight != Weight::MAX {
            return Err("malformed unreachable path".to_string());
        }
        return Ok(());
    }

    // Ensure the path starts at the source of the request.
    if path.vertices.first() != Some(&request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }

    // Check if there is an edge between consecutive path vertices.
    let mut true_cost: Weight = 0;
    for (&tail, &head) in path.vertices.iter().tuple_windows() {
        match map.weight(tail, head) {
            Some(weight) => {
                true_cost = extend_weight(true_cost, weight)
                    .ok_or_else(|| "path weight overflows".to_string())?;
            }
            None => {
                return Err(format!(
                    "no edge between {} and {} found",
                    map.name(tail),
                    map.name(head)
                ))
            }
        }
    }

    if path.weight != true_cost {
        return Err(format!(
            "wrong path weight: reported {} but edges sum to {}",
            path.weight, true_cost
        ));
    }

    Ok(())
}

pub fn has_repeated_vertex(path: &Path) -> bool {
    !path.vertices.iter().all_unique()
}

/// Every ordered pair of cities, including `source == target`.
pub fn all_requests(map: &RoadMap) -> Vec<SearchRequest> {
    map.vertices()
        .cartesian_product(map.vertices())
        .map(|(source, target)| SearchRequest::new(source, target))
        .collect()
}

/// Renders the map as an undirected Graphviz graph with `path` highlighted.
pub fn to_dot(map: &RoadMap, path: Option<&Path>) -> String {
    let mut on_path_vertices = HashSet::new();
    let mut on_path_roads = HashSet::new();
    if let Some(path) = path {
        on_path_vertices.extend(path.vertices.iter().copied());
        for (&tail, &head) in path.vertices.iter().tuple_windows() {
            on_path_roads.insert((tail.min(head), tail.max(head)));
        }
    }

    let nodes = map.vertices().map(|vertex| {
        let coordinate = map.coordinate(vertex);
        let style = if on_path_vertices.contains(&vertex) {
            ", style=filled, fillcolor=lightblue"
        } else {
            ""
        };
        format!(
            "    \"{}\" [pos=\"{},{}!\"{}];",
            map.name(vertex),
            coordinate.x,
            coordinate.y,
            style
        )
    });

    let roads = map.roads().map(|edge| {
        let style = if on_path_roads.contains(&(edge.tail, edge.head)) {
            ", color=red, penwidth=2.5"
        } else {
            ""
        };
        format!(
            "    \"{}\" -- \"{}\" [label=\"{}\"{}];",
            map.name(edge.tail),
            map.name(edge.head),
            edge.weight,
            style
        )
    });

    let header = [
        "graph road_map {".to_string(),
        "    layout=neato;".to_string(),
        "    node [shape=circle];".to_string(),
    ];
    let mut lines = header
        .into_iter()
        .chain(nodes)
        .chain(roads)
        .chain(std::iter::once("}".to_string()));
    format!("{}\n", lines.join("\n"))
}
