use anyhow::Result;
use clap::Parser;
use response_graph::application::{find_nearest, load_nodes_from_jsonl};
use response_graph::domain::GeoPoint;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Nearest-node queries against a JSONL node set")]
struct Args {
    #[arg(short, long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let candidates = load_nodes_from_jsonl(&args.input)?;
    log::info!("loaded {} candidate nodes", candidates.len());

    // One query per stdin line: "lat lng [category]".
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 || parts.len() > 3 {
            println!("Invalid query (expected: lat lng [category])");
            continue;
        }
        let (lat, lng) = match (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
            (Ok(lat), Ok(lng)) => (lat, lng),
            _ => {
                println!("Invalid query (expected: lat lng [category])");
                continue;
            }
        };
        let reference = GeoPoint::new("query", lat, lng);
        match find_nearest(&reference, &candidates, parts.get(2).copied()) {
            Some(found) => println!("{} {:.4}", found.node.id, found.distance_km),
            None => println!("no matching node"),
        }
    }
    Ok(())
}
