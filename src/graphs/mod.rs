use serde::{Deserialize, Serialize};

pub mod graph_functions;
pub mod path;
pub mod road_map;
pub mod romania;
pub mod vec_vec_graph;

pub type VertexId = u32;
pub type Weight = u32;

/// Adds a road to a path cost. `None` once the sum reaches `Weight::MAX`,
/// which is reserved for unreachable targets.
pub fn extend_weight(weight: Weight, edge_weight: Weight) -> Option<Weight> {
    weight
        .checked_add(edge_weight)
        .filter(|&sum| sum != Weight::MAX)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> Option<WeightedEdge> {
        if tail == head {
            return None;
        }

        Some(WeightedEdge { tail, head, weight })
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Position of a city used for straight-line estimates only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Coordinate {
        Coordinate { x, y }
    }

    pub fn distance(&self, other: &Coordinate) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn edges(&self, tail: VertexId)
        -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn get_weight(&self, tail: VertexId, head: VertexId) -> Option<Weight>;
}
