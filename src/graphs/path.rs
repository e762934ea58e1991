use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{road_map::RoadMap, VertexId, Weight};
use crate::error::SearchError;

/// A request to route from `source` to `target`.
///
/// Unlike a shortest path query, `source == target` is allowed and answered
/// with a single vertex path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub source: VertexId,
    pub target: VertexId,
}

impl SearchRequest {
    pub fn new(source: VertexId, target: VertexId) -> SearchRequest {
        SearchRequest { source, target }
    }

    pub fn from_names(map: &RoadMap, source: &str, target: &str) -> Result<Self, SearchError> {
        Ok(SearchRequest {
            source: map.vertex(source)?,
            target: map.vertex(target)?,
        })
    }
}

/// Represents a path in a graph.
///
/// An empty path with weight `Weight::MAX` is the "unreachable" sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

impl Path {
    pub fn unreachable() -> Path {
        Path {
            vertices: Vec::new(),
            weight: Weight::MAX,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty() && self.weight != Weight::MAX
    }

    pub fn ends_at(&self, goal: VertexId) -> bool {
        self.vertices.last() == Some(&goal)
    }

    pub fn names<'a>(&self, map: &'a RoadMap) -> Vec<&'a str> {
        self.vertices.iter().map(|&vertex| map.name(vertex)).collect()
    }

    pub fn display(&self, map: &RoadMap) -> String {
        self.names(map).iter().join(" → ")
    }

    /// Converts the unreachable sentinel and stalled paths into
    /// `SearchError::NoPath`.
    pub fn into_result(self, map: &RoadMap, request: &SearchRequest) -> Result<Path, SearchError> {
        if self.is_reachable() && self.ends_at(request.target) {
            return Ok(self);
        }

        Err(SearchError::NoPath {
            start: map.name(request.source).to_string(),
            goal: map.name(request.target).to_string(),
        })
    }
}
