use anyhow::Result;
use clap::Parser;
use response_graph::application::{build_graph, load_nodes_from_jsonl};
use response_graph::infrastructure::save_graph;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Build a proximity graph from a JSONL node set")]
struct Args {
    #[arg(short, long, help = "Node set, one GeoPoint JSON object per line")]
    input: PathBuf,
    #[arg(short, long, default_value_t = 10.0, help = "Connection threshold in km")]
    threshold_km: f64,
    #[arg(short, long, help = "Optional binary snapshot for route/visualize")]
    output: Option<PathBuf>,
    #[arg(long, help = "Print the full graph (nodes, edges, summary) as JSON")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let nodes = load_nodes_from_jsonl(&args.input)?;
    log::info!("loaded {} nodes from {:?}", nodes.len(), args.input);

    let graph = build_graph(nodes, args.threshold_km)?;
    let summary = graph.summary();

    if args.json {
        let payload = serde_json::json!({
            "nodes": graph.nodes().collect::<Vec<_>>(),
            "edges": graph.edges(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{} nodes, {} edges under {} km, density {:.4} ({})",
            summary.node_count,
            summary.edge_count,
            args.threshold_km,
            summary.density,
            summary.classification.as_str()
        );
    }

    if let Some(output) = &args.output {
        save_graph(&graph, output)?;
        println!("Graph snapshot saved to {:?}", output);
    }
    Ok(())
}
