use std::{fmt::Debug, hash::Hash};

use thiserror::Error;

pub mod edge;
pub mod graph_factory;
pub mod undirected_graph;

pub use undirected_graph::{Graph, Neighbors};

/// Dense index the graph assigns to every registered vertex key.
pub type Vertex = u32;
pub type Weight = i64;
pub type Distance = i64;

/// Distance of a vertex that is not reachable from the start vertex.
pub const INFINITY: Distance = Distance::MAX;

/// Everything that can be used to name a vertex.
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> VertexKey for T {}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is not part of the graph")]
    VertexNotFound { vertex: String },
    #[error("edge {tail} -- {head} has negative weight {weight}")]
    InvalidWeight {
        tail: String,
        head: String,
        weight: Weight,
    },
    #[error("weights can't be drawn from 0..={max_weight}")]
    InvalidWeightRange { max_weight: Weight },
}

impl GraphError {
    pub fn vertex_not_found<V: Debug>(vertex: &V) -> GraphError {
        GraphError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    pub fn invalid_weight<V: Debug>(tail: &V, head: &V, weight: Weight) -> GraphError {
        GraphError::InvalidWeight {
            tail: format!("{:?}", tail),
            head: format!("{:?}", head),
            weight,
        }
    }
}

/// Formats a distance for humans, `inf` for unreachable vertices.
pub fn format_distance(distance: Distance) -> String {
    if distance == INFINITY {
        return "inf".to_string();
    }
    distance.to_string()
}

/// The five vertex graph used throughout the tests.
#[cfg(test)]
pub(crate) fn reference_graph() -> Graph<String> {
    let edges = [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
    ];

    let mut graph = Graph::new();
    for vertex in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(vertex.to_string());
    }
    for (tail, head, weight) in edges {
        graph
            .add_edge(tail.to_string(), head.to_string(), weight)
            .unwrap();
    }
    graph
}
