use anyhow::Result;
use clap::Parser;
use response_graph::application::shortest_route;
use response_graph::infrastructure::load_graph;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Shortest route between two nodes of a graph snapshot")]
struct Args {
    #[arg(short, long, help = "Graph snapshot from build-graph --output")]
    input: PathBuf,
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let graph = load_graph(&args.input)?;
    log::info!(
        "loaded graph: {} nodes, {} edges, threshold {} km",
        graph.node_count(),
        graph.edge_count(),
        graph.threshold_km
    );

    match shortest_route(&graph, &args.from, &args.to)? {
        Some(route) => {
            println!("{} hops, {:.4} km", route.node_ids.len() - 1, route.total_km);
            println!("{}", route.node_ids.join(" -> "));
        }
        None => println!("no path from {} to {}", args.from, args.to),
    }
    Ok(())
}
