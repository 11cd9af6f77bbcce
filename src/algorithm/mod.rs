pub mod traits;
pub mod path;
pub mod dijkstra;
pub mod yen;
pub mod batch;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
