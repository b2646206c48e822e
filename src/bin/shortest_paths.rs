use std::{error::Error, path::PathBuf};

use clap::Parser;
use graph_distances::{
    graphs::{format_distance, graph_factory::GraphFactory, INFINITY},
    search::ShortestPathEngine,
    utility::get_progressspinner,
};
use log::warn;

/// Prints the distance from a start vertex to every vertex of a graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as edge list, `.json` or `.bincode`
    #[arg(short, long)]
    graph: PathBuf,

    /// Vertex the distances are measured from
    #[arg(short, long)]
    start: String,

    /// Only print the distance to this vertex
    #[arg(short, long)]
    target: Option<String>,

    /// Settle at most this many vertices
    #[arg(short, long)]
    max_settled: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let spinner = get_progressspinner("Reading graph");
    let graph = GraphFactory::from_file(&args.graph)?;
    spinner.finish_and_clear();

    let engine = ShortestPathEngine::new(&graph);

    if let Some(target) = &args.target {
        let distance = engine.shortest_path_distance(&args.start, target)?;
        if args.json {
            let distance = (distance != INFINITY).then_some(distance);
            println!(
                "{}",
                serde_json::json!({ "start": args.start, "target": target, "distance": distance })
            );
        } else {
            println!("{} -> {}: {}", args.start, target, format_distance(distance));
        }
        return Ok(());
    }

    let table = match args.max_settled {
        Some(max_settled) => engine.shortest_paths_with_budget(&args.start, max_settled)?,
        None => engine.shortest_paths(&args.start)?,
    };
    if !table.is_complete() {
        warn!(
            "stopped after {} settled vertices, distances are not final",
            table.statistics().settled
        );
    }

    if args.json {
        let report = serde_json::json!({
            "start": table.start(),
            "complete": table.is_complete(),
            "statistics": table.statistics(),
            "distances": table.rows(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Shortest distances from {}:", table.start());
        for (vertex, distance) in table.iter() {
            println!("{:>12} {}", vertex, format_distance(distance));
        }
    }

    Ok(())
}
