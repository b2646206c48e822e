use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Distance, Vertex};

/// A priority queue that manages vertices and their tentative distances.
///
/// Implementations don't need a decrease key operation. A vertex may be
/// inserted several times, the caller skips the outdated entries on pop.
pub trait VertexDistanceQueue {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<Vertex>;
}

/// Binary min-heap with an explicit tie-break.
///
/// Entries with equal distance are popped in ascending tie-break rank. Ranks
/// are indexed by vertex; with [`crate::graphs::Graph::key_ranks`] the vertex
/// with the smaller key wins.
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, u32, Vertex)>>,
    tie_break: Vec<u32>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new(tie_break: Vec<u32>) -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
            tie_break,
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        let rank = self.tie_break[vertex as usize];
        self.heap.push(Reverse((distance, rank, vertex)));
    }

    fn pop(&mut self) -> Option<Vertex> {
        let Reverse((_distance, _rank, vertex)) = self.heap.pop()?;

        Some(vertex)
    }
}
