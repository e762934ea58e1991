use crate::graphs::VertexId;

pub mod none_heuristic;
pub mod straight_line;

pub trait Heuristic: Send + Sync {
    /// Estimated remaining cost from `vertex` to `goal`. Never negative.
    fn lower_bound(&self, vertex: VertexId, goal: VertexId) -> f64;
}
