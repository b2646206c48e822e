use std::time::Instant;

use log::debug;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::VertexExpandedDataVec,
    },
    distance_table::{DistanceTable, SearchStatistics},
};
use crate::graphs::{Distance, Graph, GraphError, Vertex, VertexKey};

/// When a search may stop before the queue runs dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLimit {
    Exhaustive,
    /// Stop once this vertex is settled.
    Target(Vertex),
    /// Settle at most this many vertices.
    MaxSettled(usize),
}

/// Dijkstra's algorithm with lazy deletion.
///
/// Every improvement pushes a new queue entry instead of decreasing the key of
/// an existing one. Entries of already settled vertices are skipped on pop.
/// The graph must not contain negative weights, which [`Graph::add_edge`]
/// guarantees.
pub fn dijkstra_single_source<V: VertexKey>(
    graph: &Graph<V>,
    data: &mut dyn DijkstraData,
    expanded: &mut VertexExpandedDataVec,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    limit: SearchLimit,
) -> SearchStatistics {
    let mut statistics = SearchStatistics::default();

    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.is_expanded(tail) {
            statistics.stale_entries += 1;
            continue;
        }

        // `tail` is unsettled, so stopping here leaves the search incomplete.
        if let SearchLimit::MaxSettled(max_settled) = limit {
            if statistics.settled >= max_settled {
                return statistics;
            }
        }

        expanded.expand(tail);
        statistics.settled += 1;

        if limit == SearchLimit::Target(tail) {
            return statistics;
        }

        let distance_tail = data.get_distance(tail);

        for edge in graph.out_edges(tail) {
            if expanded.is_expanded(edge.head) {
                continue;
            }

            let alternative_distance_head = distance_tail.saturating_add(edge.weight);
            if alternative_distance_head < data.get_distance(edge.head) {
                data.set_distance(edge.head, alternative_distance_head);
                queue.insert(edge.head, alternative_distance_head);
                statistics.relaxations += 1;
            }
        }
    }

    statistics.exhausted = true;
    statistics
}

/// Answers distance queries on a borrowed graph.
///
/// The graph can't change while an engine borrows it. Queue, visited set and
/// distances live only for the duration of one query, so a single graph can be
/// queried from many threads at once.
pub struct ShortestPathEngine<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: VertexKey> ShortestPathEngine<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        ShortestPathEngine { graph }
    }

    /// Distances from `start` to every vertex of the graph.
    pub fn shortest_paths(&self, start: &V) -> Result<DistanceTable<V>, GraphError> {
        self.search(start, SearchLimit::Exhaustive)
    }

    /// Like [`Self::shortest_paths`] but settles at most `max_settled`
    /// vertices. Check [`DistanceTable::is_complete`] before trusting the
    /// result.
    pub fn shortest_paths_with_budget(
        &self,
        start: &V,
        max_settled: usize,
    ) -> Result<DistanceTable<V>, GraphError> {
        self.search(start, SearchLimit::MaxSettled(max_settled))
    }

    /// Distance between two vertices. The search stops as soon as `target` is
    /// settled.
    pub fn shortest_path_distance(&self, source: &V, target: &V) -> Result<Distance, GraphError> {
        let source = self.index(source)?;
        let target = self.index(target)?;

        let (data, _, _) = self.run(source, SearchLimit::Target(target));
        Ok(data.get_distance(target))
    }

    fn index(&self, vertex: &V) -> Result<Vertex, GraphError> {
        self.graph
            .index_of(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    fn search(&self, start: &V, limit: SearchLimit) -> Result<DistanceTable<V>, GraphError> {
        let source = self.index(start)?;

        let begin = Instant::now();
        let (data, expanded, statistics) = self.run(source, limit);

        debug!(
            "settled {} of {} vertices from {:?} in {:?} ({} relaxations, {} stale entries)",
            statistics.settled,
            self.graph.number_of_vertices(),
            start,
            begin.elapsed(),
            statistics.relaxations,
            statistics.stale_entries
        );

        let distances = self
            .graph
            .vertices()
            .cloned()
            .zip(data.distances)
            .collect();
        let settle_order = expanded
            .order()
            .iter()
            .filter_map(|&vertex| self.graph.vertex(vertex).cloned())
            .collect();

        Ok(DistanceTable::new(
            start.clone(),
            distances,
            settle_order,
            statistics,
        ))
    }

    fn run(
        &self,
        source: Vertex,
        limit: SearchLimit,
    ) -> (DijkstraDataVec, VertexExpandedDataVec, SearchStatistics) {
        let number_of_vertices = self.graph.number_of_vertices() as usize;
        let mut data = DijkstraDataVec::new(number_of_vertices);
        let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
        let mut queue = VertexDistanceQueueBinaryHeap::new(self.graph.key_ranks());

        let statistics = dijkstra_single_source(
            self.graph,
            &mut data,
            &mut expanded,
            &mut queue,
            source,
            limit,
        );

        (data, expanded, statistics)
    }
}

/// Distances from `start` to every vertex of `graph`.
pub fn shortest_paths<V: VertexKey>(
    graph: &Graph<V>,
    start: &V,
) -> Result<DistanceTable<V>, GraphError> {
    ShortestPathEngine::new(graph).shortest_paths(start)
}

pub fn shortest_paths_with_budget<V: VertexKey>(
    graph: &Graph<V>,
    start: &V,
    max_settled: usize,
) -> Result<DistanceTable<V>, GraphError> {
    ShortestPathEngine::new(graph).shortest_paths_with_budget(start, max_settled)
}

pub fn shortest_path_distance<V: VertexKey>(
    graph: &Graph<V>,
    source: &V,
    target: &V,
) -> Result<Distance, GraphError> {
    ShortestPathEngine::new(graph).shortest_path_distance(source, target)
}

#[cfg(test)]
mod tests {
    use super::{
        dijkstra_single_source, shortest_path_distance, shortest_paths,
        shortest_paths_with_budget, SearchLimit,
    };
    use crate::{
        graphs::{reference_graph, Distance, Graph, GraphError, Vertex, INFINITY},
        search::collections::{
            dijkstra_data::{DijkstraData, DijkstraDataVec},
            vertex_distance_queue::VertexDistanceQueueBinaryHeap,
            vertex_expanded_data::VertexExpandedDataVec,
        },
    };

    fn key(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn reference_distances() {
        let graph = reference_graph();
        let table = shortest_paths(&graph, &key("A")).unwrap();

        let distances: Vec<_> = table
            .iter()
            .map(|(vertex, distance)| (vertex.as_str(), distance))
            .collect();
        assert_eq!(
            distances,
            vec![("A", 0), ("B", 3), ("C", 2), ("D", 8), ("E", 10)]
        );
        assert!(table.is_complete());
    }

    #[test]
    fn reference_search_skips_stale_entries() {
        let graph = reference_graph();
        let table = shortest_paths(&graph, &key("A")).unwrap();

        assert_eq!(table.settle_order(), ["A", "C", "B", "D", "E"]);

        let statistics = table.statistics();
        assert_eq!(statistics.settled, 5);
        assert_eq!(statistics.relaxations, 7);
        assert_eq!(statistics.stale_entries, 3);
    }

    #[test]
    fn unknown_start_vertex() {
        let graph = reference_graph();
        let error = shortest_paths(&graph, &key("Z")).unwrap_err();

        assert_eq!(
            error,
            GraphError::VertexNotFound {
                vertex: "\"Z\"".to_string()
            }
        );
    }

    #[test]
    fn single_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(42u32);

        let table = shortest_paths(&graph, &42).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.distance(&42), Some(0));
    }

    #[test]
    fn unreachable_vertices_are_infinite() {
        let mut graph = reference_graph();
        graph.add_edge(key("X"), key("Y"), 1).unwrap();
        graph.add_vertex(key("Z"));

        let table = shortest_paths(&graph, &key("A")).unwrap();
        assert_eq!(table.distance(&key("X")), Some(INFINITY));
        assert_eq!(table.distance(&key("Y")), Some(INFINITY));
        assert_eq!(table.distance(&key("Z")), Some(INFINITY));
        assert!(!table.is_reachable(&key("Z")));
        assert!(table.is_reachable(&key("E")));
        assert_eq!(table.distance(&key("unknown")), None);

        let rows = table.rows();
        let row = rows.iter().find(|row| row.vertex == "Z").unwrap();
        assert_eq!(row.distance, None);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = reference_graph();
        let first = shortest_paths(&graph, &key("D")).unwrap();
        let second = shortest_paths(&graph, &key("D")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn ties_are_settled_in_key_order() {
        let mut graph = Graph::new();
        graph.add_edge("s", "z", 1).unwrap();
        graph.add_edge("s", "b", 1).unwrap();
        graph.add_edge("s", "m", 1).unwrap();

        let table = shortest_paths(&graph, &"s").unwrap();
        assert_eq!(table.settle_order(), ["s", "b", "m", "z"]);
    }

    #[test]
    fn zero_weight_edges() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 0).unwrap();
        graph.add_edge(1, 2, 0).unwrap();
        graph.add_edge(0, 2, 5).unwrap();

        let table = shortest_paths(&graph, &0).unwrap();
        assert_eq!(table.distance(&2), Some(0));
    }

    #[test]
    fn huge_weights_saturate() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, Distance::MAX - 1).unwrap();
        graph.add_edge(1, 2, Distance::MAX - 1).unwrap();

        let table = shortest_paths(&graph, &0).unwrap();
        assert_eq!(table.distance(&1), Some(Distance::MAX - 1));
        // saturates to the sentinel, which is never an improvement
        assert_eq!(table.distance(&2), Some(INFINITY));
    }

    #[test]
    fn budget_marks_result_partial() {
        let graph = reference_graph();
        let table = shortest_paths_with_budget(&graph, &key("A"), 2).unwrap();

        assert!(!table.is_complete());
        assert_eq!(table.settle_order(), ["A", "C"]);
        // tentative, not final
        assert_eq!(table.distance(&key("D")), Some(10));
    }

    #[test]
    fn budget_covering_all_vertices_is_complete() {
        let graph = reference_graph();

        let exact = shortest_paths_with_budget(&graph, &key("A"), 5).unwrap();
        assert!(exact.is_complete());

        let generous = shortest_paths_with_budget(&graph, &key("A"), 100).unwrap();
        assert!(generous.is_complete());
        assert_eq!(
            generous.into_map(),
            shortest_paths(&graph, &key("A")).unwrap().into_map()
        );
    }

    #[test]
    fn zero_budget_is_partial() {
        let graph = reference_graph();
        let table = shortest_paths_with_budget(&graph, &key("A"), 0).unwrap();

        assert!(!table.is_complete());
        assert!(table.settle_order().is_empty());
        assert_eq!(table.distance(&key("B")), Some(INFINITY));
    }

    #[test]
    fn budget_hit_on_last_queued_vertex_is_partial() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();

        // vertex 1 is the only queue entry when the budget stops the search
        let table = shortest_paths_with_budget(&graph, &0, 1).unwrap();
        assert!(!table.is_complete());
        assert_eq!(table.settle_order(), [0]);
        assert_eq!(table.distance(&1), Some(1));
        assert_eq!(table.distance(&2), Some(INFINITY));

        let table = shortest_paths_with_budget(&graph, &0, 2).unwrap();
        assert!(!table.is_complete());
        assert_eq!(table.distance(&2), Some(2));

        let table = shortest_paths_with_budget(&graph, &0, 3).unwrap();
        assert!(table.is_complete());
    }

    #[test]
    fn single_pair_distance() {
        let graph = reference_graph();

        assert_eq!(shortest_path_distance(&graph, &key("A"), &key("E")), Ok(10));
        assert_eq!(shortest_path_distance(&graph, &key("E"), &key("A")), Ok(10));
        assert_eq!(shortest_path_distance(&graph, &key("B"), &key("B")), Ok(0));
        assert!(matches!(
            shortest_path_distance(&graph, &key("A"), &key("Q")),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    struct RecordingData {
        inner: DijkstraDataVec,
        increases: usize,
        updates: usize,
    }

    impl DijkstraData for RecordingData {
        fn get_distance(&self, vertex: Vertex) -> Distance {
            self.inner.get_distance(vertex)
        }

        fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
            if distance > self.inner.get_distance(vertex) {
                self.increases += 1;
            }
            self.updates += 1;
            self.inner.set_distance(vertex, distance);
        }
    }

    #[test]
    fn distances_never_increase() {
        let graph = reference_graph();
        let number_of_vertices = graph.number_of_vertices() as usize;

        let mut data = RecordingData {
            inner: DijkstraDataVec::new(number_of_vertices),
            increases: 0,
            updates: 0,
        };
        let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
        let mut queue = VertexDistanceQueueBinaryHeap::new(graph.key_ranks());
        let source = graph.index_of(&key("A")).unwrap();

        let statistics = dijkstra_single_source(
            &graph,
            &mut data,
            &mut expanded,
            &mut queue,
            source,
            SearchLimit::Exhaustive,
        );

        assert!(statistics.exhausted);
        assert_eq!(data.updates, 1 + statistics.relaxations);
        assert_eq!(data.increases, 0);
    }
}
