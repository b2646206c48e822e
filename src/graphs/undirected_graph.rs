use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    GraphError, Vertex, VertexKey, Weight,
};

/// Weighted undirected graph over arbitrary vertex keys.
///
/// Every key is mapped to a dense [`Vertex`] index in registration order. The
/// adjacency list of every vertex is kept sorted by head index, so edge
/// lookups are a binary search. Every edge is stored in both directions with
/// the same weight and no stored weight is negative.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "GraphData<V>",
    into = "GraphData<V>",
    bound(
        serialize = "V: VertexKey + Serialize",
        deserialize = "V: VertexKey + Deserialize<'de>"
    )
)]
pub struct Graph<V> {
    vertices: Vec<V>,
    indices: HashMap<V, Vertex>,
    edges: Vec<Vec<TaillessEdge>>,
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> Graph<V> {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            indices: HashMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = WeightedEdge<V>>,
    {
        let mut graph = Graph::new();
        for edge in edges {
            graph.add_edge(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }

    /// Registers `vertex` and returns its index. Registering a known vertex
    /// returns the existing index.
    pub fn add_vertex(&mut self, vertex: V) -> Vertex {
        if let Some(&index) = self.indices.get(&vertex) {
            return index;
        }

        let index = self.vertices.len() as Vertex;
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        index
    }

    /// Connects `tail` and `head` in both directions, registering missing
    /// endpoints. An existing edge gets its weight replaced.
    ///
    /// Negative weights are rejected and leave the graph untouched.
    pub fn add_edge(&mut self, tail: V, head: V, weight: Weight) -> Result<(), GraphError> {
        if weight < 0 {
            return Err(GraphError::invalid_weight(&tail, &head, weight));
        }

        let tail = self.add_vertex(tail);
        let head = self.add_vertex(head);
        self.set_weight(tail, head, weight);
        if tail != head {
            self.set_weight(head, tail, weight);
        }

        Ok(())
    }

    fn set_weight(&mut self, tail: Vertex, head: Vertex, weight: Weight) {
        let edges_sharing_tail = &mut self.edges[tail as usize];

        match edges_sharing_tail.binary_search_by_key(&head, |edge| edge.head) {
            Ok(index) => edges_sharing_tail[index].weight = weight,
            Err(index) => edges_sharing_tail.insert(index, TaillessEdge { head, weight }),
        }
    }

    /// Neighbors of `vertex` with the weight of the connecting edge. Unknown
    /// vertices have no neighbors.
    pub fn neighbors(&self, vertex: &V) -> Neighbors<'_, V> {
        let edges = match self.indices.get(vertex) {
            Some(&index) => self.out_edges(index),
            None => &[],
        };

        Neighbors {
            vertices: &self.vertices,
            edges: edges.iter(),
        }
    }

    pub fn weight(&self, tail: &V, head: &V) -> Option<Weight> {
        let tail = self.index_of(tail)?;
        let head = self.index_of(head)?;
        let edges_sharing_tail = self.out_edges(tail);
        let index = edges_sharing_tail
            .binary_search_by_key(&head, |edge| edge.head)
            .ok()?;
        Some(edges_sharing_tail[index].weight)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    pub fn index_of(&self, vertex: &V) -> Option<Vertex> {
        self.indices.get(vertex).copied()
    }

    pub fn vertex(&self, index: Vertex) -> Option<&V> {
        self.vertices.get(index as usize)
    }

    /// Registered vertices in registration order.
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of undirected edges, self-loops included.
    pub fn number_of_edges(&self) -> u32 {
        self.edges
            .iter()
            .enumerate()
            .map(|(tail, edges)| {
                edges
                    .iter()
                    .filter(|edge| edge.head as usize >= tail)
                    .count() as u32
            })
            .sum()
    }

    /// Every undirected edge exactly once, with `tail` registered no later
    /// than `head`.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<V>> + '_ {
        self.edges.iter().enumerate().flat_map(move |(tail, edges)| {
            edges
                .iter()
                .filter(move |edge| edge.head as usize >= tail)
                .map(move |edge| {
                    WeightedEdge::new(
                        self.vertices[tail].clone(),
                        self.vertices[edge.head as usize].clone(),
                        edge.weight,
                    )
                })
        })
    }

    /// Adjacency list of an index, sorted by head.
    pub fn out_edges(&self, vertex: Vertex) -> &[TaillessEdge] {
        self.edges
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Position of every vertex when all keys are sorted by their `Ord`
    /// implementation, indexed by [`Vertex`].
    pub fn key_ranks(&self) -> Vec<u32> {
        let mut ranks = vec![0; self.vertices.len()];
        (0..self.vertices.len())
            .sorted_by_key(|&index| &self.vertices[index])
            .enumerate()
            .for_each(|(rank, index)| ranks[index] = rank as u32);
        ranks
    }
}

pub struct Neighbors<'a, V> {
    vertices: &'a [V],
    edges: std::slice::Iter<'a, TaillessEdge>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = (&'a V, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.next()?;
        Some((&self.vertices[edge.head as usize], edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for Neighbors<'a, V> {
    fn len(&self) -> usize {
        self.edges.len()
    }
}

/// Serialized form of a [`Graph`]. Deserializing goes through
/// [`Graph::add_edge`], so a file can't break symmetry or carry negative
/// weights.
#[derive(Serialize, Deserialize)]
pub struct GraphData<V> {
    vertices: Vec<V>,
    edges: Vec<WeightedEdge<V>>,
}

impl<V: VertexKey> From<Graph<V>> for GraphData<V> {
    fn from(graph: Graph<V>) -> Self {
        let edges = graph.edges().collect();
        GraphData {
            vertices: graph.vertices,
            edges,
        }
    }
}

impl<V: VertexKey> TryFrom<GraphData<V>> for Graph<V> {
    type Error = GraphError;

    fn try_from(data: GraphData<V>) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        for vertex in data.vertices {
            graph.add_vertex(vertex);
        }
        for edge in data.edges {
            graph.add_edge(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }
}
