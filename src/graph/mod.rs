//! The graph and its building blocks.

pub use graph::{Edges, Graph};
pub use neighbors::Neighbors;
pub use vertex_set::{Iter as VertexIter, VertexSet};

mod graph;
mod neighbors;
mod vertex_set;
