use custom_debug_derive::Debug;
use itertools::Itertools;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::{ColouredGraph, Colour, GraphError, Variant, Vertex, VertexIndex, DEFAULT_COLOUR};
use crate::{convert::build_graph, parser::parse_dimacs, Error};

/// Fixed size directed graph.
/// `edges_to` of a vertex holds the heads of its outgoing arcs.
#[derive(Debug, Clone)]
pub struct Digraph {
    pub vertices: Vec<Vertex>,
    #[debug(skip)]
    arc_number: usize,
}

impl Digraph {
    pub fn new_ordered(n: usize) -> Self {
        Digraph {
            vertices: (0..n)
                .map(|index| Vertex::new(index, DEFAULT_COLOUR))
                .collect(),
            arc_number: 0,
        }
    }

    /// Read a digraph from DIMACS text, `e i j` being the arc from `i - 1` to `j - 1`.
    pub fn from_dimacs(text: &str) -> Result<Self, Error> {
        let arrays = parse_dimacs(text)?;
        build_graph(arrays.size() as i64, &arrays.edges, &arrays.colours)
    }

    fn get_vertex(&self, index: VertexIndex) -> Result<&Vertex, GraphError> {
        self.vertices.get(index).ok_or(GraphError(index))
    }

    fn get_vertex_mut(&mut self, index: VertexIndex) -> Result<&mut Vertex, GraphError> {
        self.vertices.get_mut(index).ok_or(GraphError(index))
    }

    pub fn lookup_arc(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.vertices
            .get(start)
            .map_or(false, |vertex| vertex.edges_to.contains(&end))
    }

    pub fn minimize(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.edges_to.sort_unstable();
            vertex.edges_to.dedup();
        }
        self.arc_number = self.vertices.iter().map(|v| v.edges_to.len()).sum();
    }

    fn normalised_arcs(&self) -> Vec<Vec<VertexIndex>> {
        self.vertices
            .iter()
            .map(|vertex| vertex.edges_to.iter().copied().sorted().dedup().collect())
            .collect()
    }

    fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.vertices.iter().map(|vertex| vertex.colour)
    }
}

impl ColouredGraph for Digraph {
    fn with_size(size: usize) -> Self {
        Self::new_ordered(size)
    }

    fn variant(&self) -> Variant {
        Variant::Directed
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn number_edges(&self) -> usize {
        self.arc_number
    }

    fn add_vertex(&mut self, colour: Colour) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, colour));
        index
    }

    fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        self.get_vertex(end)?;
        self.get_vertex_mut(start)?.add_edge(end);
        self.arc_number += 1;
        Ok(())
    }

    fn change_colour(&mut self, vertex: VertexIndex, colour: Colour) -> Result<(), GraphError> {
        self.get_vertex_mut(vertex)?.colour = colour;
        Ok(())
    }

    fn colour(&self, vertex: VertexIndex) -> Result<Colour, GraphError> {
        Ok(self.get_vertex(vertex)?.colour)
    }

    fn iterate_edges(&self) -> Box<dyn Iterator<Item = (VertexIndex, VertexIndex)> + '_> {
        Box::new(
            self.vertices
                .iter()
                .flat_map(|vertex| vertex.edges_to.iter().map(move |end| (vertex.index, *end))),
        )
    }
}

impl PartialEq for Digraph {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.colours().eq(other.colours())
            && self.normalised_arcs() == other.normalised_arcs()
    }
}

impl Eq for Digraph {}

impl Ord for Digraph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.colours().cmp(other.colours()))
            .then_with(|| self.normalised_arcs().cmp(&other.normalised_arcs()))
    }
}

impl PartialOrd for Digraph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Digraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        self.colours().for_each(|colour| colour.hash(state));
        self.normalised_arcs().hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_arc() -> Result<(), GraphError> {
        let mut digraph = Digraph::new_ordered(4);
        digraph.add_edge(0, 3)?;
        digraph.add_edge(3, 3)?;

        assert!(digraph.lookup_arc(0, 3));
        assert!(!digraph.lookup_arc(3, 0));
        assert!(digraph.lookup_arc(3, 3));
        assert_eq!(2, digraph.number_edges());

        assert_eq!(Err(GraphError(4)), digraph.add_edge(4, 0));
        assert_eq!(Err(GraphError(9)), digraph.add_edge(0, 9));
        assert_eq!(vec![3], digraph.vertices[0].edges_to);
        Ok(())
    }

    #[test]
    fn test_iterate_arcs() -> Result<(), GraphError> {
        let mut digraph = Digraph::new_ordered(5);
        for i in 0..5 {
            digraph.add_edge(i, (i + 1) % 5)?;
        }
        let arcs: Vec<_> = digraph.iterate_edges().collect();
        assert_eq!(vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)], arcs);
        Ok(())
    }

    #[test]
    fn test_equality_respects_direction() -> Result<(), GraphError> {
        let mut forward = Digraph::new_ordered(3);
        forward.add_edge(0, 1)?;
        forward.add_edge(1, 2)?;

        let mut same = Digraph::new_ordered(3);
        same.add_edge(1, 2)?;
        same.add_edge(0, 1)?;
        same.add_edge(0, 1)?;
        assert_eq!(forward, same);

        let mut backward = Digraph::new_ordered(3);
        backward.add_edge(1, 0)?;
        backward.add_edge(2, 1)?;
        assert_ne!(forward, backward);
        assert_ne!(Ordering::Equal, forward.cmp(&backward));
        Ok(())
    }

    #[test]
    fn test_minimize() -> Result<(), GraphError> {
        let mut digraph = Digraph::new_ordered(2);
        digraph.add_edge(0, 1)?;
        digraph.add_edge(0, 1)?;
        digraph.add_edge(1, 0)?;
        digraph.minimize();
        assert_eq!(2, digraph.number_edges());
        Ok(())
    }

    #[test]
    fn test_is_automorphism() -> Result<(), Error> {
        let mut cycle = Digraph::new_ordered(4);
        for i in 0..4 {
            cycle.add_edge(i, (i + 1) % 4)?;
        }
        assert!(cycle.is_automorphism(&[1, 2, 3, 0])?);
        // A reflection reverses every arc.
        assert!(!cycle.is_automorphism(&[0, 3, 2, 1])?);
        Ok(())
    }

    #[test]
    fn test_from_dimacs() -> Result<(), Error> {
        let digraph = Digraph::from_dimacs("p edge 2 1\nn 2 3\ne 2 1\n")?;
        assert!(digraph.lookup_arc(1, 0));
        assert!(!digraph.lookup_arc(0, 1));
        assert_eq!(3, digraph.colour(1)?);
        Ok(())
    }
}
