use std::collections::BTreeMap;

use crate::graphs::{Distance, Graph, GraphError, Vertex, VertexKey, INFINITY};

/// Shortest distances from `start` found by enumerating every simple path
/// that leaves it.
///
/// The running time is exponential in the number of vertices. Only meant to
/// validate other searches on small graphs.
pub fn shortest_paths_by_enumeration<V: VertexKey>(
    graph: &Graph<V>,
    start: &V,
) -> Result<BTreeMap<V, Distance>, GraphError> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut best = vec![INFINITY; number_of_vertices];
    let mut on_path = vec![false; number_of_vertices];

    on_path[source as usize] = true;
    enumerate_paths(graph, source, 0, &mut on_path, &mut best);

    Ok(graph.vertices().cloned().zip(best).collect())
}

fn enumerate_paths<V: VertexKey>(
    graph: &Graph<V>,
    vertex: Vertex,
    distance: Distance,
    on_path: &mut [bool],
    best: &mut [Distance],
) {
    best[vertex as usize] = best[vertex as usize].min(distance);

    for edge in graph.out_edges(vertex) {
        if on_path[edge.head as usize] {
            continue;
        }
        on_path[edge.head as usize] = true;
        enumerate_paths(
            graph,
            edge.head,
            distance.saturating_add(edge.weight),
            on_path,
            best,
        );
        on_path[edge.head as usize] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::shortest_paths_by_enumeration;
    use crate::graphs::{reference_graph, Graph, INFINITY};

    #[test]
    fn enumerates_reference_graph() {
        let graph = reference_graph();
        let distances = shortest_paths_by_enumeration(&graph, &"A".to_string()).unwrap();

        let distances: Vec<_> = distances.values().copied().collect();
        assert_eq!(distances, vec![0, 3, 2, 8, 10]);
    }

    #[test]
    fn disconnected_vertex() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 6).unwrap();
        graph.add_vertex(3);

        let distances = shortest_paths_by_enumeration(&graph, &2).unwrap();
        assert_eq!(distances[&1], 6);
        assert_eq!(distances[&3], INFINITY);
    }

    #[test]
    fn unknown_start() {
        let graph: Graph<u8> = Graph::new();
        assert!(shortest_paths_by_enumeration(&graph, &0).is_err());
    }
}
