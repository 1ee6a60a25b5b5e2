mod services;

pub use services::{build_graph, find_nearest, load_nodes_from_jsonl, shortest_route};
