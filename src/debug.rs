//! Error types and debug facilities.
use nom::error::{VerboseError, VerboseErrorKind};
use std::{fmt, io};

use crate::{
    graph::{GraphError, VertexIndex},
    parser::ParseError,
};

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Array has the wrong shape: {0}")]
    ShapeError(ShapeError),
    #[error("Value out of bounds: {0}")]
    BoundsError(BoundsError),
    #[error("Malformed DIMACS input: {0}")]
    FormatError(FormatError),
    #[error("Problem line declares {declared} edges but {found} edge lines were found")]
    CountMismatchError { declared: usize, found: usize },
    #[error("Invalid permutation: {0}")]
    PermutationError(PermutationError),
    #[error("Graph rejected an operation: {0}")]
    GraphError(GraphError),
    #[error("Error while reading or writing DIMACS data")]
    IoError(io::Error),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ShapeError {
    #[error("edge list must be two-dimensional, found {0} dimensions")]
    EdgesNotMatrix(usize),
    #[error("colouring must be one-dimensional, found {0} dimensions")]
    ColoursNotVector(usize),
    #[error("edge list must have 2 columns, found {0}")]
    EdgeColumns(usize),
    #[error("shape needs {expected} values, found {found}")]
    DataLength { expected: usize, found: usize },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum BoundsError {
    #[error("number of vertices is negative ({0})")]
    NegativeVertexCount(i64),
    #[error("{vertices} vertices but {colours} colours")]
    ColourCountMismatch { vertices: usize, colours: usize },
    #[error("edge {row} has endpoint {value} outside of 0..{size}")]
    EndpointOutOfRange { row: usize, value: i64, size: usize },
    #[error("vertex {vertex} has colour {colour} which is not a non-negative 32 bit number")]
    InvalidColour { vertex: VertexIndex, colour: i64 },
    #[error("line {line:?} names vertex {vertex} outside of 1..={size}")]
    DimacsVertexOutOfRange {
        line: String,
        vertex: u64,
        size: usize,
    },
}

#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum FormatError {
    #[error("no problem line `p edge N E` found")]
    MissingProblemLine,
    #[error("expected problem line `p edge N E`, found {line:?}")]
    BadProblemLine {
        line: String,
        context: Vec<VerboseErrorKind>,
    },
    #[error("unrecognised line {line:?}")]
    UnrecognisedLine {
        line: String,
        context: Vec<VerboseErrorKind>,
    },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum PermutationError {
    #[error("permutation has {found} entries but the graph has {size} vertices")]
    Length { size: usize, found: usize },
    #[error("permutation is not a bijection on 0..{size}, {image} appears twice or is out of range")]
    NotBijection { size: usize, image: VertexIndex },
}

impl From<ShapeError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(se: ShapeError) -> Self {
        Self::ShapeError(se)
    }
}

impl From<BoundsError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(be: BoundsError) -> Self {
        Self::BoundsError(be)
    }
}

impl From<FormatError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(fe: FormatError) -> Self {
        Self::FormatError(fe)
    }
}

impl From<PermutationError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: PermutationError) -> Self {
        Self::PermutationError(pe)
    }
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

impl From<io::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ie: io::Error) -> Self {
        Self::IoError(ie)
    }
}

/// Keep only the error kinds of a nom error, the
/// borrowed input they point into dies with the line.
#[cfg(not(tarpaulin_include))]
pub fn handle_nom_verbose_error<E>(verbose: VerboseError<E>) -> Vec<VerboseErrorKind> {
    verbose.errors.into_iter().map(|(_, kind)| kind).collect()
}

#[cfg(not(tarpaulin_include))]
pub fn nom_error_context(pe: nom::Err<ParseError<'_>>) -> Vec<VerboseErrorKind> {
    match pe {
        nom::Err::Error(verbose) | nom::Err::Failure(verbose) => handle_nom_verbose_error(verbose),
        nom::Err::Incomplete(_) => unreachable!(),
    }
}

// Custom formatter for debug printing

/// Print a shape the way numpy does, e.g. `(5, 2)` or `(3,)`.
#[allow(clippy::ptr_arg)]
#[cfg(not(tarpaulin_include))]
pub fn shape_fmt(shape: &Vec<usize>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match shape.as_slice() {
        [single] => write!(f, "({},)", single),
        _ => {
            write!(f, "(")?;
            for (position, extent) in shape.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", extent)?;
            }
            write!(f, ")")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error: Error = BoundsError::EndpointOutOfRange {
            row: 3,
            value: 5,
            size: 5,
        }
        .into();
        assert_eq!(
            "Value out of bounds: edge 3 has endpoint 5 outside of 0..5",
            error.to_string()
        );

        let error = Error::CountMismatchError {
            declared: 2,
            found: 3,
        };
        assert_eq!(
            "Problem line declares 2 edges but 3 edge lines were found",
            error.to_string()
        );

        let error: Error = GraphError(12).into();
        assert_eq!(
            "Graph rejected an operation: no vertex with index 12",
            error.to_string()
        );
    }
}
