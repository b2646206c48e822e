use crate::graphs::{Distance, Vertex, INFINITY};

/// Trait for handling tentative distances in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Retrieves the distance to a given vertex, [`INFINITY`] if none is
    /// known.
    fn get_distance(&self, vertex: Vertex) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);
}

/// Stores the distance of every vertex in a single vector.
pub struct DijkstraDataVec {
    pub distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(number_of_vertices: usize) -> Self {
        DijkstraDataVec {
            distances: vec![INFINITY; number_of_vertices],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }
}
