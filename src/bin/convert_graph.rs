use std::{error::Error, path::PathBuf};

use clap::Parser;
use graph_distances::{graphs::graph_factory::GraphFactory, utility::get_progressspinner};

/// Converts a graph between edge list, `.json` and `.bincode`. Reading a
/// `.bincode` file is way faster than parsing an edge list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph to read
    #[arg(short, long)]
    input: PathBuf,

    /// Where the converted graph is written, format chosen by extension
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let spinner = get_progressspinner("Reading graph");
    let graph = GraphFactory::from_file(&args.input)?;
    spinner.finish_and_clear();

    let spinner = get_progressspinner("Writing graph");
    GraphFactory::to_file(&graph, &args.output)?;
    spinner.finish_and_clear();

    println!(
        "Converted graph with {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );
    Ok(())
}
