use std::collections::BTreeMap;

use serde::Serialize;

use crate::graphs::{Distance, VertexKey, INFINITY};

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// Vertices whose distance became final.
    pub settled: usize,
    /// Successful relaxations, each one pushed a queue entry.
    pub relaxations: usize,
    /// Popped entries of vertices that were already settled.
    pub stale_entries: usize,
    /// Whether the search ran until the queue held no unsettled vertex.
    pub exhausted: bool,
}

/// Result of a single source query: the distance from the start vertex to
/// every vertex of the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable<V> {
    start: V,
    distances: BTreeMap<V, Distance>,
    settle_order: Vec<V>,
    statistics: SearchStatistics,
}

#[derive(Debug, Serialize)]
pub struct DistanceRow<'a, V> {
    pub vertex: &'a V,
    /// `None` if the vertex is unreachable.
    pub distance: Option<Distance>,
}

impl<V: VertexKey> DistanceTable<V> {
    pub(crate) fn new(
        start: V,
        distances: BTreeMap<V, Distance>,
        settle_order: Vec<V>,
        statistics: SearchStatistics,
    ) -> Self {
        DistanceTable {
            start,
            distances,
            settle_order,
            statistics,
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    /// Distance to `vertex`, [`INFINITY`] if it is unreachable and `None` if
    /// the graph doesn't know the vertex.
    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex)
            .is_some_and(|distance| distance != INFINITY)
    }

    /// All vertices with their distance, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Distance)> {
        self.distances
            .iter()
            .map(|(vertex, &distance)| (vertex, distance))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Vertices in the order their distance became final.
    pub fn settle_order(&self) -> &[V] {
        &self.settle_order
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Whether every distance is final. A search stopped by a settle budget
    /// may hold tentative distances for vertices it didn't settle.
    pub fn is_complete(&self) -> bool {
        self.statistics.exhausted
    }

    pub fn rows(&self) -> Vec<DistanceRow<'_, V>> {
        self.iter()
            .map(|(vertex, distance)| DistanceRow {
                vertex,
                distance: (distance != INFINITY).then_some(distance),
            })
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<V, Distance> {
        self.distances
    }
}
