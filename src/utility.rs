use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rand::{seq::SliceRandom, Rng};
use rayon::prelude::*;

use crate::{
    graphs::{Graph, GraphError, VertexKey, Weight},
    search::{shortest_paths, DistanceTable},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Random graph with vertices `0..number_of_vertices` and up to
/// `number_of_edges` edges. Weights are drawn from `0..=max_weight`; drawing
/// the same pair twice overwrites the earlier weight.
pub fn random_graph<R: Rng>(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
    rng: &mut R,
) -> Result<Graph<u32>, GraphError> {
    if max_weight < 0 {
        return Err(GraphError::InvalidWeightRange { max_weight });
    }

    let mut graph = Graph::new();
    for vertex in 0..number_of_vertices {
        graph.add_vertex(vertex);
    }
    if number_of_vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head {
            continue;
        }
        graph.add_edge(tail, head, rng.gen_range(0..=max_weight))?;
    }

    Ok(graph)
}

/// `number_of_sources` vertices drawn uniformly, with repetition.
pub fn random_sources<V: VertexKey, R: Rng>(
    graph: &Graph<V>,
    number_of_sources: usize,
    rng: &mut R,
) -> Vec<V> {
    let vertices: Vec<&V> = graph.vertices().collect();
    (0..number_of_sources)
        .filter_map(|_| vertices.choose(&mut *rng).map(|&vertex| vertex.clone()))
        .collect()
}

/// Runs one query per source, in parallel. All queries share the graph.
pub fn shortest_paths_from_sources<V>(
    graph: &Graph<V>,
    sources: &[V],
) -> Result<Vec<DistanceTable<V>>, GraphError>
where
    V: VertexKey + Send + Sync,
{
    let bar = get_progressbar("Computing distances", sources.len() as u64);
    let tables = sources
        .par_iter()
        .progress_with(bar.clone())
        .map(|source| shortest_paths(graph, source))
        .collect();
    bar.finish_and_clear();
    tables
}

/// Runs one query per source on the current thread and returns the tables with
/// the average query duration.
pub fn benchmark_shortest_paths<V: VertexKey>(
    graph: &Graph<V>,
    sources: &[V],
) -> Result<(Vec<DistanceTable<V>>, Duration), GraphError> {
    let mut durations = Vec::with_capacity(sources.len());
    let mut tables = Vec::with_capacity(sources.len());

    let bar = get_progressbar("Benchmarking", sources.len() as u64);
    for source in sources.iter().progress_with(bar.clone()) {
        let start = Instant::now();
        let table = shortest_paths(graph, source)?;
        durations.push(start.elapsed());
        tables.push(table);
    }
    bar.finish_and_clear();

    let average = durations
        .iter()
        .sum::<Duration>()
        .checked_div(durations.len() as u32)
        .unwrap_or_default();
    Ok((tables, average))
}
