mod mock;
mod persistence;

pub use mock::{generate_nodes, LIMA_CENTER};
pub use persistence::{load_graph, save_graph};
