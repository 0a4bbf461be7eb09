#![warn(rust_2018_idioms)]
//#![deny(warnings, missing_docs)]

//! Conversion of vertex-coloured graphs and digraphs
//! between numeric arrays (an `(E, 2)` edge list and an
//! `(N,)` colouring) and graph objects, round-tripping
//! through the DIMACS format of the bliss toolkit.
//!
//! Vertices are numbered from 0 everywhere except in
//! DIMACS text, where they are numbered from 1.

pub mod array;
pub use array::{Array, GraphArrays};

pub mod graph;
pub use graph::{
    ColouredGraph, Colour, Digraph, Graph, GraphError, Variant, VertexIndex, DEFAULT_COLOUR,
};

pub mod parser;
pub use parser::{parse_dimacs, read_dimacs};

mod validation;
pub use validation::{check_arrays, CheckedArrays};

mod mutation;
pub use mutation::apply_arrays;

mod convert;
pub use convert::{
    build, build_graph, digraph_from_arrays, digraph_to_arrays, extract, extract_arrays,
    graph_from_arrays, graph_to_arrays, AnyGraph,
};

pub mod permutation;
pub use permutation::permutation_to_string;

mod misc;
pub use misc::Settings;

mod debug;
pub use debug::{BoundsError, Error, FormatError, PermutationError, ShapeError};
