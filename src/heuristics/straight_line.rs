use super::Heuristic;
use crate::graphs::{road_map::RoadMap, VertexId};

/// Euclidean distance between the coordinates of two cities.
///
/// Admissible on maps where roads are never shorter than the straight line
/// between their endpoints. It is not assumed to be consistent.
pub struct StraightLineDistance<'a> {
    map: &'a RoadMap,
}

impl<'a> StraightLineDistance<'a> {
    pub fn new(map: &'a RoadMap) -> StraightLineDistance<'a> {
        StraightLineDistance { map }
    }
}

impl<'a> Heuristic for StraightLineDistance<'a> {
    fn lower_bound(&self, vertex: VertexId, goal: VertexId) -> f64 {
        if vertex == goal {
            return 0.0;
        }
        self.map
            .coordinate(vertex)
            .distance(&self.map.coordinate(goal))
    }
}
