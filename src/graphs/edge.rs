use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

/// Adjacency entry of a vertex. The tail is implied by the list it is stored
/// in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Weight,
}

/// An undirected edge between two vertex keys.
///
/// `tail` and `head` only name the two endpoints, the graph stores the edge in
/// both directions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    pub tail: V,
    pub head: V,
    pub weight: Weight,
}

impl<V> WeightedEdge<V> {
    pub fn new(tail: V, head: V, weight: Weight) -> WeightedEdge<V> {
        WeightedEdge { tail, head, weight }
    }
}
