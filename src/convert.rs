//! Conversion between numeric arrays and graphs.
//!
//! Arrays become a graph by validation, creation of an empty graph and
//! one mutation call per edge and vertex. A graph becomes arrays by
//! writing it as DIMACS text and parsing that text again, so the edge
//! order of the result is the order of the DIMACS writer.
use crate::{
    array::{Array, GraphArrays},
    graph::{ColouredGraph, Digraph, Graph, Variant},
    mutation::apply_arrays,
    parser::parse_dimacs,
    validation::check_arrays,
    Error,
};

/// Build a graph of type `G` with `n` vertices, the edges listed in the
/// `(E, 2)` array `edges` and the colours in the `(n,)` array `colours`.
pub fn build_graph<G: ColouredGraph>(n: i64, edges: &Array, colours: &Array) -> Result<G, Error> {
    let checked = check_arrays(n, edges, colours)?;
    let mut graph = G::with_size(checked.size);
    apply_arrays(&mut graph, &checked)?;
    Ok(graph)
}

/// Undirected graph from arrays, a row `(i, j)` connects `i` and `j`.
pub fn graph_from_arrays(n: i64, edges: &Array, colours: &Array) -> Result<Graph, Error> {
    build_graph(n, edges, colours)
}

/// Directed graph from arrays, a row `(i, j)` is the arc from `i` to `j`.
pub fn digraph_from_arrays(n: i64, edges: &Array, colours: &Array) -> Result<Digraph, Error> {
    build_graph(n, edges, colours)
}

/// Edge list and colouring of `graph`.
pub fn extract_arrays<G: ColouredGraph + ?Sized>(graph: &G) -> Result<GraphArrays, Error> {
    parse_dimacs(&graph.to_dimacs()?)
}

pub fn graph_to_arrays(graph: &Graph) -> Result<GraphArrays, Error> {
    extract_arrays(graph)
}

pub fn digraph_to_arrays(digraph: &Digraph) -> Result<GraphArrays, Error> {
    extract_arrays(digraph)
}

/// A graph whose variant is only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyGraph {
    Undirected(Graph),
    Directed(Digraph),
}

impl AnyGraph {
    pub fn new(variant: Variant, size: usize) -> Self {
        match variant {
            Variant::Undirected => Self::Undirected(Graph::with_size(size)),
            Variant::Directed => Self::Directed(Digraph::with_size(size)),
        }
    }

    pub fn as_graph(&self) -> &dyn ColouredGraph {
        match self {
            Self::Undirected(graph) => graph,
            Self::Directed(digraph) => digraph,
        }
    }

    pub fn as_graph_mut(&mut self) -> &mut dyn ColouredGraph {
        match self {
            Self::Undirected(graph) => graph,
            Self::Directed(digraph) => digraph,
        }
    }

    pub fn variant(&self) -> Variant {
        self.as_graph().variant()
    }
}

/// Build a graph of the given variant from arrays.
pub fn build(variant: Variant, n: i64, edges: &Array, colours: &Array) -> Result<AnyGraph, Error> {
    let checked = check_arrays(n, edges, colours)?;
    let mut graph = AnyGraph::new(variant, checked.size);
    apply_arrays(graph.as_graph_mut(), &checked)?;
    Ok(graph)
}

/// Edge list and colouring of a graph of either variant.
pub fn extract(graph: &AnyGraph) -> Result<GraphArrays, Error> {
    extract_arrays(graph.as_graph())
}
