use custom_debug_derive::Debug;
use itertools::Itertools;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::{ColouredGraph, Colour, GraphError, Variant, VertexIndex, DEFAULT_COLOUR};
use crate::{convert::build_graph, parser::parse_dimacs, Error};

/// Fixed size undirected graph.
#[derive(Debug, Clone)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    #[debug(skip)]
    edge_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub index: VertexIndex,
    pub edges_to: Vec<VertexIndex>,
    pub colour: Colour,
}

impl Graph {
    pub fn new_ordered(n: usize) -> Self {
        let mut vertices = Vec::with_capacity(n);
        for index in 0..n {
            vertices.push(Vertex::new(index, DEFAULT_COLOUR));
        }
        Graph {
            vertices,
            edge_number: 0,
        }
    }

    /// Read a graph from DIMACS text.
    /// Vertex `v` of the text is vertex `v - 1` of the graph.
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

    pub fn lookup_edge(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.vertices
            .get(start)
            .map_or(false, |vertex| vertex.edges_to.contains(&end))
    }

    /// Remove duplicate edges.
    /// Does so by first sorting, thus trading runtime for reduced memory footprint.
    pub fn minimize(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.edges_to.sort_unstable();
            vertex.edges_to.dedup();
        }
        self.edge_number = self.iterate_edges().count();
    }

    /// Sorted adjacency lists without duplicates.
    fn normalised_edges(&self) -> Vec<Vec<VertexIndex>> {
        self.vertices
            .iter()
            .map(|vertex| vertex.edges_to.iter().copied().sorted().dedup().collect())
            .collect()
    }

    fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.vertices.iter().map(|vertex| vertex.colour)
    }
}

impl ColouredGraph for Graph {
    fn with_size(size: usize) -> Self {
        Self::new_ordered(size)
    }

    fn variant(&self) -> Variant {
        Variant::Undirected
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn number_edges(&self) -> usize {
        self.edge_number
    }

    fn add_vertex(&mut self, colour: Colour) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, colour));
        index
    }

    fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        // Check both ends first so a rejected edge leaves no half behind.
        self.get_vertex(end)?;
        self.get_vertex_mut(start)?.add_edge(end);
        if start != end {
            self.get_vertex_mut(end)?.add_edge(start);
        }
        self.edge_number += 1;
        Ok(())
    }

    fn change_colour(&mut self, vertex: VertexIndex, colour: Colour) -> Result<(), GraphError> {
        self.get_vertex_mut(vertex)?.colour = colour;
        Ok(())
    }

    fn colour(&self, vertex: VertexIndex) -> Result<Colour, GraphError> {
        Ok(self.get_vertex(vertex)?.colour)
    }

    /// Every edge once, from its smaller end.
    fn iterate_edges(&self) -> Box<dyn Iterator<Item = (VertexIndex, VertexIndex)> + '_> {
        Box::new(self.vertices.iter().flat_map(|vertex| {
            vertex
                .edges_to
                .iter()
                .filter(move |end| **end >= vertex.index)
                .map(move |end| (vertex.index, *end))
        }))
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.colours().eq(other.colours())
            && self.normalised_edges() == other.normalised_edges()
    }
}

impl Eq for Graph {}

impl Ord for Graph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.colours().cmp(other.colours()))
            .then_with(|| self.normalised_edges().cmp(&other.normalised_edges()))
    }
}

impl PartialOrd for Graph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Graph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        self.colours().for_each(|colour| colour.hash(state));
        self.normalised_edges().hash(state);
    }
}

impl Vertex {
    pub fn new(index: VertexIndex, colour: Colour) -> Self {
        Vertex {
            index,
            edges_to: Vec::new(),
            colour,
        }
    }

    pub fn add_edge(&mut self, end: VertexIndex) {
        self.edges_to.push(end);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pentagon() -> Result<Graph, GraphError> {
        let mut graph = Graph::new_ordered(5);
        for i in 0..5 {
            graph.add_edge(i, (i + 1) % 5)?;
        }
        for i in 0..5 {
            graph.change_colour(i, (i * i) as Colour)?;
        }
        Ok(graph)
    }

    #[test]
    fn new_graph_default() {
        let graph = Graph::new_ordered(120);
        assert_eq!(120, graph.size());
        assert_eq!(0, graph.number_edges());
        for (index, vertex) in graph.vertices.iter().enumerate() {
            assert_eq!(index, vertex.index);
            assert_eq!(DEFAULT_COLOUR, vertex.colour);
            assert!(vertex.edges_to.is_empty());
        }
    }

    #[test]
    fn test_add_edge() -> Result<(), GraphError> {
        let mut graph = Graph::new_ordered(5);
        graph.add_edge(0, 3)?;
        graph.add_edge(2, 2)?;

        assert!(graph.lookup_edge(0, 3));
        assert!(graph.lookup_edge(3, 0));
        assert!(graph.lookup_edge(2, 2));
        assert_eq!(vec![2], graph.vertices[2].edges_to);
        assert_eq!(2, graph.number_edges());

        // Index out of bounds on either end
        assert_eq!(Err(GraphError(5)), graph.add_edge(5, 1));
        assert_eq!(Err(GraphError(7)), graph.add_edge(1, 7));
        assert!(graph.vertices[1].edges_to.is_empty());
        assert_eq!(2, graph.number_edges());

        Ok(())
    }

    #[test]
    fn test_colours() -> Result<(), GraphError> {
        let mut graph = Graph::new_ordered(3);
        graph.change_colour(1, 45)?;
        assert_eq!(DEFAULT_COLOUR, graph.colour(0)?);
        assert_eq!(45, graph.colour(1)?);
        assert_eq!(Err(GraphError(3)), graph.change_colour(3, 1));
        assert_eq!(Err(GraphError(3)), graph.colour(3));

        let new_vertex = graph.add_vertex(9);
        assert_eq!(3, new_vertex);
        assert_eq!(9, graph.colour(new_vertex)?);
        Ok(())
    }

    #[test]
    fn test_iterate_edges() -> Result<(), GraphError> {
        let graph = pentagon()?;
        let edges: Vec<_> = graph.iterate_edges().collect();
        assert_eq!(vec![(0, 1), (0, 4), (1, 2), (2, 3), (3, 4)], edges);
        Ok(())
    }

    #[test]
    fn test_equality_ignores_order_and_duplicates() -> Result<(), GraphError> {
        let pentagon = pentagon()?;

        let mut other = Graph::new_ordered(5);
        for i in (0..5).rev() {
            other.add_edge((i + 1) % 5, i)?;
            other.add_edge(i, (i + 1) % 5)?;
        }
        for i in 0..5 {
            other.change_colour(i, (i * i) as Colour)?;
        }
        assert_eq!(pentagon, other);
        assert_eq!(Ordering::Equal, pentagon.cmp(&other));

        other.change_colour(4, 0)?;
        assert_ne!(pentagon, other);
        assert_eq!(Ordering::Greater, pentagon.cmp(&other));
        Ok(())
    }

    #[test]
    fn test_minimize() -> Result<(), GraphError> {
        let mut graph = Graph::new_ordered(3);
        graph.add_edge(0, 1)?;
        graph.add_edge(1, 0)?;
        graph.add_edge(1, 2)?;
        assert_eq!(3, graph.number_edges());

        let before = graph.clone();
        graph.minimize();
        assert_eq!(2, graph.number_edges());
        assert_eq!(vec![1], graph.vertices[0].edges_to);
        assert_eq!(before, graph);
        Ok(())
    }

    #[test]
    fn test_permute() -> Result<(), Error> {
        let mut graph = Graph::new_ordered(3);
        graph.add_edge(0, 1)?;
        graph.change_colour(0, 7)?;

        let permuted = graph.permute(&[2, 0, 1])?;
        assert!(permuted.lookup_edge(2, 0));
        assert!(permuted.lookup_edge(0, 2));
        assert_eq!(7, permuted.colour(2)?);
        assert_eq!(DEFAULT_COLOUR, permuted.colour(0)?);
        Ok(())
    }

    #[test]
    fn test_is_automorphism() -> Result<(), Error> {
        let mut cycle = Graph::new_ordered(5);
        for i in 0..5 {
            cycle.add_edge(i, (i + 1) % 5)?;
        }
        assert!(cycle.is_automorphism(&[1, 2, 3, 4, 0])?);
        assert!(cycle.is_automorphism(&[0, 4, 3, 2, 1])?);
        assert!(!cycle.is_automorphism(&[1, 0, 2, 3, 4])?);

        // Colours have to be preserved as well.
        let coloured = pentagon()?;
        assert!(!coloured.is_automorphism(&[1, 2, 3, 4, 0])?);
        assert!(coloured.is_automorphism(&[0, 1, 2, 3, 4])?);

        assert!(cycle.is_automorphism(&[0, 1, 2]).is_err());
        Ok(())
    }

    #[test]
    fn test_from_dimacs() -> Result<(), Error> {
        let text = "c a coloured triangle
p edge 3 3
n 1 4
e 1 2
e 2 3
e 3 1
";
        let graph = Graph::from_dimacs(text)?;
        assert_eq!(3, graph.size());
        assert_eq!(3, graph.number_edges());
        assert_eq!(4, graph.colour(0)?);
        assert!(graph.lookup_edge(0, 2));
        Ok(())
    }

    #[test]
    fn test_hash_consistent_with_eq() -> Result<(), GraphError> {
        use std::collections::hash_map::DefaultHasher;

        let hash = |graph: &Graph| {
            let mut hasher = DefaultHasher::new();
            graph.hash(&mut hasher);
            hasher.finish()
        };

        let mut left = Graph::new_ordered(4);
        left.add_edge(0, 1)?;
        left.add_edge(2, 3)?;
        let mut right = Graph::new_ordered(4);
        right.add_edge(3, 2)?;
        right.add_edge(1, 0)?;
        right.add_edge(0, 1)?;

        assert_eq!(left, right);
        assert_eq!(hash(&left), hash(&right));
        Ok(())
    }
}
