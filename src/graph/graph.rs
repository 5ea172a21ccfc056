use super::{vertex_set::check_range, Neighbors, VertexSet};
use crate::{
    error::{Error, Result},
    graph6,
    types::{Edge, VId, MAX_VERTICES},
};
use log::trace;
use std::collections::BTreeSet;

/// A simple undirected graph on at most 16 labeled vertex slots.
///
/// Every slot owns a sorted adjacency sequence, present or not. Edges are
/// recorded at both endpoints, never on a slot outside the vertex set and
/// never as a self-loop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: VertexSet,
    adjacency: [Neighbors; MAX_VERTICES],
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a graph from its graph6 form, e.g. `"?"` for the empty graph.
    pub fn from_graph6(text: &str) -> Result<Self> {
        graph6::decode(text)
    }

    /// The star of order `n`: slot 0 joined to every slot in `1..n`.
    pub fn star(n: usize) -> Result<Self> {
        if n > MAX_VERTICES {
            return Err(Error::OutOfRange(n));
        }
        let mut graph = Self::with_order(n);
        for v in 1..n {
            graph.insert_edge(0, v)?;
        }
        Ok(graph)
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> VertexSet {
        self.vertices
    }

    pub fn vertex_set(&self) -> BTreeSet<VId> {
        self.vertices.iter().collect()
    }

    /// The raw membership bitset, slot 0 in the most significant bit.
    pub fn membership_bits(&self) -> u16 {
        self.vertices.bits()
    }

    pub fn contains_vertex(&self, v: VId) -> bool {
        self.vertices.contains(v)
    }

    /// The neighbors of `v` in ascending order; empty for an absent slot.
    pub fn neighbors(&self, v: VId) -> &[VId] {
        self.adjacency
            .get(v)
            .map(Neighbors::as_slice)
            .unwrap_or(&[])
    }

    pub fn vertex_degree(&self, v: VId) -> usize {
        self.neighbors(v).len()
    }

    pub fn vertex_neighbors(&self, v: VId) -> BTreeSet<VId> {
        self.neighbors(v).iter().copied().collect()
    }

    pub fn add_vertex(&mut self, v: VId) -> Result<()> {
        self.vertices.insert(v)?;
        Ok(())
    }

    /// Remove `v` together with every edge incident to it.
    pub fn delete_vertex(&mut self, v: VId) -> Result<()> {
        self.vertices.remove(v)?;
        if !self.adjacency[v].is_empty() {
            trace!("deleting vertex {} with degree {}", v, self.adjacency[v].len());
            self.adjacency[v].clear();
            for (u, neighbors) in self.adjacency.iter_mut().enumerate() {
                if u != v {
                    neighbors.remove(v);
                }
            }
        }
        Ok(())
    }

    pub fn number_of_edges(&self) -> usize {
        self.adjacency.iter().map(Neighbors::len).sum::<usize>() / 2
    }

    /// Iterate over the edges, each once, ordered by `(u, v)` with `u < v`.
    pub fn edges(&self) -> Edges {
        Edges {
            graph: self,
            u: 0,
            offset: None,
        }
    }

    pub fn edge_set(&self) -> BTreeSet<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().map(move |v| (u.min(v), u.max(v))))
            .collect()
    }

    pub fn is_edge(&self, u: VId, v: VId) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |neighbors| neighbors.contains(v))
    }

    /// Join `u` and `v`. A self-loop request is ignored; an existing edge is
    /// left as it is.
    pub fn add_edge(&mut self, u: VId, v: VId) -> Result<()> {
        self.check_endpoints(u, v)?;
        if u != v {
            self.insert_edge(u, v)?;
        }
        Ok(())
    }

    pub fn delete_edge(&mut self, u: VId, v: VId) -> Result<()> {
        self.check_endpoints(u, v)?;
        if u != v {
            self.adjacency[u].remove(v);
            self.adjacency[v].remove(u);
        }
        Ok(())
    }

    /// Encode the graph in graph6, present vertices relabeled `0..n` in
    /// slot order.
    pub fn to_graph6(&self) -> String {
        graph6::encode(self)
    }
}

// pub(crate) methods.
impl Graph {
    /// A graph with slots `0..n` present and no edges.
    pub(crate) fn with_order(n: usize) -> Self {
        Self {
            vertices: VertexSet::prefix(n),
            ..Self::default()
        }
    }

    /// Record `{u, v}` at both endpoints, or at neither.
    ///
    /// Both slots must be in range and distinct.
    pub(crate) fn insert_edge(&mut self, u: VId, v: VId) -> Result<()> {
        debug_assert!(u != v);
        let (need_u, need_v) = (
            !self.adjacency[u].contains(v),
            !self.adjacency[v].contains(u),
        );
        if need_u {
            self.adjacency[u].reserve()?;
        }
        if need_v {
            self.adjacency[v].reserve()?;
        }
        self.adjacency[u].insert_reserved(v);
        self.adjacency[v].insert_reserved(u);
        Ok(())
    }
}

// private methods.
impl Graph {
    fn check_endpoints(&self, u: VId, v: VId) -> Result<()> {
        check_range(u)?;
        check_range(v)?;
        if u != v && !(self.vertices.contains(u) && self.vertices.contains(v)) {
            Err(Error::InvalidEndpoint(u, v))
        } else {
            Ok(())
        }
    }
}

impl std::str::FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        graph6::decode(s)
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_graph6())
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edge_set())
            .finish()
    }
}

/// An iterator over the edges of a graph.
pub struct Edges<'a> {
    graph: &'a Graph,
    u: VId,
    offset: Option<usize>,
}

impl<'a> Iterator for Edges<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.u < MAX_VERTICES {
            let (graph, u) = (self.graph, self.u);
            let neighbors = graph.adjacency[u].as_slice();
            // skip the half of the adjacency already reported from the other endpoint
            let offset = *self
                .offset
                .get_or_insert_with(|| neighbors.partition_point(|&v| v < u));
            if let Some(&v) = neighbors.get(offset) {
                self.offset = Some(offset + 1);
                return Some((u, v));
            }
            self.u += 1;
            self.offset = None;
        }
        None
    }
}
