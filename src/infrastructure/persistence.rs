use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::domain::ProximityGraph;

pub fn save_graph(graph: &ProximityGraph, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, graph)?;
    Ok(())
}

pub fn load_graph(path: &Path) -> Result<ProximityGraph> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let graph: ProximityGraph = bincode::deserialize_from(reader)?;
    Ok(graph)
}
