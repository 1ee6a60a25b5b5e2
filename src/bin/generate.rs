use anyhow::Result;
use clap::Parser;
use response_graph::infrastructure::{generate_nodes, LIMA_CENTER};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a synthetic node set around Lima as JSONL")]
struct Args {
    #[arg(short, long, default_value_t = 20)]
    count: usize,
    #[arg(long, default_value = "response", help = "Category tag, e.g. risk or response")]
    category: String,
    #[arg(long, default_value_t = 5.0, help = "Half-width of the square around the center, km")]
    spread_km: f64,
    #[arg(long, help = "Seed for reproducible output")]
    seed: Option<u64>,
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let nodes = generate_nodes(args.count, &args.category, args.spread_km, args.seed);
    log::info!(
        "generated {} '{}' nodes within {} km of {:?}",
        nodes.len(),
        args.category,
        args.spread_km,
        LIMA_CENTER
    );

    let file = File::create(&args.output)?;
    let mut writer = BufWriter::new(file);
    for node in &nodes {
        writeln!(writer, "{}", serde_json::to_string(node)?)?;
    }
    println!("{} nodes written to {:?}", nodes.len(), args.output);
    Ok(())
}
