use crate::graphs::Vertex;

/// Visited set of a search. Also remembers the order vertices were settled in.
pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
    order: Vec<Vertex>,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: usize) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices],
            order: Vec::new(),
        }
    }

    /// Marks `vertex` as expanded. Expanding a vertex twice is a no-op.
    pub fn expand(&mut self, vertex: Vertex) {
        if !self.expanded[vertex as usize] {
            self.expanded[vertex as usize] = true;
            self.order.push(vertex);
        }
    }

    pub fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded[vertex as usize]
    }

    pub fn order(&self) -> &[Vertex] {
        &self.order
    }
}
