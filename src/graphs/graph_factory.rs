use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use thiserror::Error;

use super::{Graph, GraphError, Weight};

#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid bincode: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: {source}")]
    InvalidEdge { line: usize, source: GraphError },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads and writes graphs with string vertex keys.
///
/// The format is picked by file extension: `.json` and `.bincode` hold the
/// serde form of [`Graph`], everything else is an edge list.
#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<Graph<String>, GraphFileError> {
        let reader = BufReader::new(File::open(path)?);
        let graph: Graph<String> = match extension(path) {
            Some("json") => serde_json::from_reader(reader)?,
            Some("bincode") => bincode::deserialize_from(reader)?,
            _ => Self::from_edge_list(reader)?,
        };

        info!(
            "read graph with {} vertices and {} edges from {}",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            path.display()
        );
        Ok(graph)
    }

    /// Parses an edge list.
    ///
    /// Lines starting with `#` and blank lines are skipped. Every other line
    /// is either `<tail> <head> <weight>` or a single vertex without edges.
    pub fn from_edge_list<R: BufRead>(reader: R) -> Result<Graph<String>, GraphFileError> {
        let mut graph = Graph::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let values: Vec<&str> = line.split_whitespace().collect();
            match values.as_slice() {
                [vertex] => {
                    graph.add_vertex(vertex.to_string());
                }
                [tail, head, weight] => {
                    let weight: Weight = weight.parse().map_err(|_| GraphFileError::Parse {
                        line: line_number,
                        message: format!("unable to parse weight {:?}", weight),
                    })?;
                    graph
                        .add_edge(tail.to_string(), head.to_string(), weight)
                        .map_err(|source| GraphFileError::InvalidEdge {
                            line: line_number,
                            source,
                        })?;
                }
                _ => {
                    return Err(GraphFileError::Parse {
                        line: line_number,
                        message: format!("expected `<tail> <head> <weight>`, got {:?}", line),
                    })
                }
            }
        }

        Ok(graph)
    }

    pub fn to_file(graph: &Graph<String>, path: &Path) -> Result<(), GraphFileError> {
        let mut writer = BufWriter::new(File::create(path)?);
        match extension(path) {
            Some("json") => serde_json::to_writer(&mut writer, graph)?,
            Some("bincode") => bincode::serialize_into(&mut writer, graph)?,
            _ => Self::to_edge_list(graph, &mut writer)?,
        }
        writer.flush()?;

        info!(
            "wrote graph with {} vertices and {} edges to {}",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            path.display()
        );
        Ok(())
    }

    /// Writes the edge list format read by [`Self::from_edge_list`]. Vertices
    /// without edges get a line of their own.
    pub fn to_edge_list<W: Write>(graph: &Graph<String>, writer: &mut W) -> io::Result<()> {
        for vertex in graph.vertices() {
            if graph.neighbors(vertex).len() == 0 {
                writeln!(writer, "{}", vertex)?;
            }
        }
        for edge in graph.edges() {
            writeln!(writer, "{} {} {}", edge.tail, edge.head, edge.weight)?;
        }
        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|extension| extension.to_str())
}
