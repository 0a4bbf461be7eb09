//! Checks on caller supplied arrays, done in full before
//! a graph is touched so a rejected input never leaves a
//! half built graph behind.
use custom_debug_derive::Debug;
use std::convert::TryFrom;

use crate::{
    array::Array,
    debug::{BoundsError, ShapeError},
    graph::{Colour, VertexIndex},
    Error,
};

/// Arrays that passed [`check_arrays`], converted to the graph's index and colour types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedArrays {
    pub size: usize,
    pub edges: Vec<(VertexIndex, VertexIndex)>,
    #[debug(with = "colour_summary_fmt")]
    pub colours: Vec<Colour>,
}

#[allow(clippy::ptr_arg)]
#[cfg(not(tarpaulin_include))]
fn colour_summary_fmt(colours: &Vec<Colour>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} colours", colours.len())
}

/// Check `n`, `edges` and `colours` in this order and report the first violation:
/// 1. `n` is not negative,
/// 2. `edges` is two-dimensional,
/// 3. `colours` is one-dimensional,
/// 4. `colours` has `n` entries,
/// 5. `edges` has two columns,
/// 6. every endpoint lies in `0..n`,
/// 7. every colour fits a [`Colour`].
pub fn check_arrays(n: i64, edges: &Array, colours: &Array) -> Result<CheckedArrays, Error> {
    let size = usize::try_from(n).map_err(|_| BoundsError::NegativeVertexCount(n))?;

    if edges.ndim() != 2 {
        return Err(ShapeError::EdgesNotMatrix(edges.ndim()).into());
    }

    if colours.ndim() != 1 {
        return Err(ShapeError::ColoursNotVector(colours.ndim()).into());
    }

    if colours.as_slice().len() != size {
        return Err(BoundsError::ColourCountMismatch {
            vertices: size,
            colours: colours.as_slice().len(),
        }
        .into());
    }

    if edges.shape()[1] != 2 {
        return Err(ShapeError::EdgeColumns(edges.shape()[1]).into());
    }

    let endpoint = |row: usize, value: i64| {
        usize::try_from(value)
            .ok()
            .filter(|index| *index < size)
            .ok_or(BoundsError::EndpointOutOfRange { row, value, size })
    };
    let checked_edges = edges
        .rows()
        .enumerate()
        .map(|(row, edge)| Ok((endpoint(row, edge[0])?, endpoint(row, edge[1])?)))
        .collect::<Result<Vec<_>, BoundsError>>()?;

    let checked_colours = colours
        .as_slice()
        .iter()
        .enumerate()
        .map(|(vertex, colour)| {
            Colour::try_from(*colour).map_err(|_| BoundsError::InvalidColour {
                vertex,
                colour: *colour,
            })
        })
        .collect::<Result<Vec<_>, BoundsError>>()?;

    Ok(CheckedArrays {
        size,
        edges: checked_edges,
        colours: checked_colours,
    })
}
