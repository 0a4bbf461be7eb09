//! Writers for the DIMACS variant read by [`crate::parser`]
//! and for graphviz.
use itertools::Itertools;
use std::io::{self, Write};

use super::{ColouredGraph, Variant, DEFAULT_COLOUR};
use crate::misc::Settings;

/// Write `graph` as
/// ```text
/// c <comment>       (one per entry of settings.comments)
/// p edge N E
/// n <v> <colour>    (vertices numbered from 1)
/// e <i> <j>         (E lines)
/// ```
pub fn write_dimacs_with<G: ColouredGraph + ?Sized>(
    graph: &G,
    settings: &Settings,
    writer: &mut dyn Write,
) -> io::Result<()> {
    for comment in settings.comments.iter() {
        for line in comment.lines() {
            writeln!(writer, "c {}", line)?;
        }
    }

    writeln!(writer, "p edge {} {}", graph.size(), graph.number_edges())?;

    for vertex in 0..graph.size() {
        let colour = graph
            .colour(vertex)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        if settings.omit_default_colours && colour == DEFAULT_COLOUR {
            continue;
        }
        writeln!(writer, "n {} {}", vertex + 1, colour)?;
    }

    for (start, end) in graph.iterate_edges() {
        writeln!(writer, "e {} {}", start + 1, end + 1)?;
    }

    writer.flush()
}

/// Write `graph` in graphviz syntax, labelling each vertex `index:colour`.
pub fn write_dot<G: ColouredGraph + ?Sized>(graph: &G, writer: &mut dyn Write) -> io::Result<()> {
    let (kind, connector) = match graph.variant() {
        Variant::Undirected => ("graph", "--"),
        Variant::Directed => ("digraph", "->"),
    };

    writeln!(writer, "{} g {{", kind)?;
    for vertex in 0..graph.size() {
        let colour = graph
            .colour(vertex)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        writeln!(writer, "v{} [label=\"{}:{}\"];", vertex, vertex, colour)?;
    }
    let edges = graph
        .iterate_edges()
        .map(|(start, end)| format!("v{} {} v{};", start, connector, end))
        .join("\n");
    if !edges.is_empty() {
        writeln!(writer, "{}", edges)?;
    }
    writeln!(writer, "}}")?;

    writer.flush()
}
