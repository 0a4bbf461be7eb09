//! Vertex-coloured graphs and digraphs as well as
//! the capability set the array codec relies on:
//! growing a graph edge by edge, recolouring vertices
//! and writing the result in DIMACS syntax.
use std::{
    fmt,
    io::{self, Write},
};

use crate::{misc::Settings, permutation::check_permutation, Error};

mod internal_graph;
pub use internal_graph::{Graph, Vertex};

mod digraph;
pub use digraph::Digraph;

mod print;
pub use print::{write_dimacs_with, write_dot};

pub type Colour = u32;
pub type VertexIndex = usize;

/// Colour of every vertex that has not been recoloured.
pub const DEFAULT_COLOUR: Colour = 0;

/// The engine refused an operation on the contained vertex index.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GraphError(pub VertexIndex);

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no vertex with index {}", self.0)
    }
}

/// Edge semantics of a graph.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Variant {
    /// Edges are unordered pairs.
    Undirected,
    /// Edges are arcs from the first to the second vertex.
    Directed,
}

/// What the array codec needs from a graph engine.
pub trait ColouredGraph {
    /// Graph with `size` vertices of colour [`DEFAULT_COLOUR`] and no edges.
    fn with_size(size: usize) -> Self
    where
        Self: Sized;

    fn variant(&self) -> Variant;

    /// Number of vertices.
    fn size(&self) -> usize;

    /// Number of edges as written to a DIMACS problem line.
    fn number_edges(&self) -> usize;

    /// Append a vertex and return its index.
    fn add_vertex(&mut self, colour: Colour) -> VertexIndex;

    fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError>;

    fn change_colour(&mut self, vertex: VertexIndex, colour: Colour) -> Result<(), GraphError>;

    fn colour(&self, vertex: VertexIndex) -> Result<Colour, GraphError>;

    /// Edges in the order they are written as DIMACS `e` lines.
    fn iterate_edges(&self) -> Box<dyn Iterator<Item = (VertexIndex, VertexIndex)> + '_>;

    fn write_dimacs(&self, writer: &mut dyn Write) -> io::Result<()> {
        write_dimacs_with(self, &Settings::default(), writer)
    }

    /// Fails if the graph cannot report the colour of one of its vertices.
    fn to_dimacs(&self) -> io::Result<String> {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_dimacs(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// New graph in which vertex `v` of this graph is called `perm[v]`.
    fn permute(&self, perm: &[VertexIndex]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let size = self.size();
        check_permutation(perm, size)?;

        let mut permuted = Self::with_size(size);
        for (vertex, image) in perm.iter().enumerate() {
            permuted.change_colour(*image, self.colour(vertex)?)?;
        }
        for (start, end) in self.iterate_edges() {
            permuted.add_edge(perm[start], perm[end])?;
        }

        Ok(permuted)
    }

    fn is_automorphism(&self, perm: &[VertexIndex]) -> Result<bool, Error>
    where
        Self: Sized + PartialEq,
    {
        Ok(self.permute(perm)? == *self)
    }
}
