use serde::{Deserialize, Serialize};

use super::{Graph, TaillessEdge, VertexId, Weight, WeightedEdge};

/// Adjacency lists indexed by tail, each kept sorted by head.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    pub fn with_vertices(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Inserts `edge` unless an edge at least as light already exists.
    pub fn insert_lightest(&mut self, edge: &WeightedEdge) {
        if edge.weight < self.get_weight(edge.tail, edge.head).unwrap_or(Weight::MAX) {
            self.set_weight(edge.tail, edge.head, edge.weight);
        }
    }

    pub fn set_weight(&mut self, tail: VertexId, head: VertexId, weight: Weight) {
        // Ensure the edge endpoints are within the bounds of self.edges.
        let max_edge_endpoints = std::cmp::max(tail, head) as usize;
        if max_edge_endpoints >= self.edges.len() {
            self.edges.resize(max_edge_endpoints + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[tail as usize];
        let edge_index = edges_sharing_tail.binary_search_by_key(&head, |other| other.head);

        match edge_index {
            Ok(index) => {
                edges_sharing_tail[index].weight = weight;
            }
            Err(index) => {
                edges_sharing_tail.insert(index, TaillessEdge { head, weight });
            }
        }
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges_sharing_tail = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[]);

        Box::new(EdgeIterator {
            edge_iter: edges_sharing_tail.iter(),
            tail,
        })
    }

    fn get_weight(&self, tail: VertexId, head: VertexId) -> Option<Weight> {
        let edges_sharing_tail = self.edges.get(tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&head, |tailless_edge| tailless_edge.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }
}
