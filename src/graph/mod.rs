pub mod traits;
pub mod directed;
pub mod overlay;
pub mod generators;

pub use traits::{Graph, MutableGraph, NodeId, Weight};
pub use directed::DirectedGraph;
pub use overlay::GraphView;
