use crate::{graph::ColouredGraph, validation::CheckedArrays, Error};

/// Add all edges in row order, then colour all vertices in index order.
///
/// The graph is expected to be freshly created with `arrays.size` vertices.
/// A rejected call is returned as is, already applied edges stay in place.
pub fn apply_arrays<'g, G: ColouredGraph + ?Sized>(
    graph: &'g mut G,
    arrays: &CheckedArrays,
) -> Result<&'g mut G, Error> {
    for (start, end) in arrays.edges.iter() {
        graph.add_edge(*start, *end)?;
    }

    for (vertex, colour) in arrays.colours.iter().enumerate() {
        graph.change_colour(vertex, *colour)?;
    }

    Ok(graph)
}
