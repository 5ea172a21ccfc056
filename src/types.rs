//! Various types shared by the graph and its textual encoding.

/// The vertex slot type.
pub type VId = usize;

/// An undirected edge, smaller endpoint first.
pub type Edge = (VId, VId);

/// The number of vertex slots a graph owns.
pub const MAX_VERTICES: usize = 16;
