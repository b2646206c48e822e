use std::{error::Error, time::Instant};

use clap::Parser;
use graph_distances::{
    graphs::Weight,
    search::brute_force::shortest_paths_by_enumeration,
    utility::{
        benchmark_shortest_paths, random_graph, random_sources, shortest_paths_from_sources,
    },
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Path enumeration explodes beyond this.
const MAX_VALIDATION_VERTICES: u32 = 12;

/// Times single source queries on a random graph and checks that parallel
/// queries agree with sequential ones.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices of the random graph
    #[arg(short, long, default_value = "10000")]
    vertices: u32,

    /// Number of random edges to draw
    #[arg(short, long, default_value = "40000")]
    edges: u32,

    /// Largest edge weight
    #[arg(short, long, default_value = "100")]
    max_weight: Weight,

    /// Number of queries
    #[arg(short, long, default_value = "100")]
    queries: usize,

    /// Seed for graph and query generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Compare every result against brute force path enumeration
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let graph = random_graph(args.vertices, args.edges, args.max_weight, &mut rng)?;
    info!(
        "generated graph with {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );
    let sources = random_sources(&graph, args.queries, &mut rng);

    let (tables, average_duration) = benchmark_shortest_paths(&graph, &sources)?;
    println!(
        "Average duration over {} sequential queries is {:?}",
        sources.len(),
        average_duration
    );

    let start = Instant::now();
    let parallel_tables = shortest_paths_from_sources(&graph, &sources)?;
    println!(
        "{} parallel queries took {:?}",
        sources.len(),
        start.elapsed()
    );
    if parallel_tables != tables {
        return Err("parallel and sequential queries disagree".into());
    }

    if args.validate {
        if graph.number_of_vertices() > MAX_VALIDATION_VERTICES {
            return Err(format!(
                "validation needs at most {} vertices",
                MAX_VALIDATION_VERTICES
            )
            .into());
        }

        for table in &tables {
            let expected = shortest_paths_by_enumeration(&graph, table.start())?;
            if table.clone().into_map() != expected {
                return Err(format!("wrong distances from {}", table.start()).into());
            }
        }
        println!("All {} queries match path enumeration", tables.len());
    }

    Ok(())
}
