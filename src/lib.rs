//! Simple graphs on at most 16 vertices.
//!
//! A [`Graph`](graph/struct.Graph.html) keeps its vertex set as a 16-bit
//! membership mask and every vertex slot's neighbors as a sorted sequence.
//! Graphs are read from and written to the graph6 textual encoding.

pub mod error;
pub mod graph;
pub mod graph6;
pub mod types;

pub use error::{Error, Result};
pub use graph::Graph;
