//! Vertices are numbered from 1 in the text and from 0
//! in the arrays returned here. The accepted format is
//! ```text
//! c <anything>      (only before the problem line)
//! p edge <N> <E>
//! n <vertex> <colour>
//! e <vertex> <vertex>
//! ```
//! with `n` and `e` lines in any order and exactly `E` edge lines.

use nom::error::VerboseErrorKind;
use std::{
    convert::TryFrom,
    io::{self, BufRead},
};

use super::{Input, ParseResult};
use crate::{
    array::{Array, GraphArrays},
    debug::{nom_error_context, BoundsError, FormatError},
    graph::{Colour, DEFAULT_COLOUR},
    Error,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum BodyLine {
    Colour(u64, Colour),
    Edge(u64, u64),
}

fn parse_comment(input: Input<'_>) -> ParseResult<'_, ()> {
    use nom::{
        character::complete::{char, not_line_ending},
        combinator::value,
        error::context,
        sequence::pair,
    };

    context("Comment line", value((), pair(char('c'), not_line_ending)))(input)
}

/// Parse `p edge N E` into `(N, E)`.
fn parse_problem_line(input: Input<'_>) -> ParseResult<'_, (u64, u64)> {
    use nom::{
        bytes::complete::tag,
        character::complete::{char, space1, u64},
        combinator::map,
        error::context,
        sequence::tuple,
    };

    let problem_line = tuple((char('p'), space1, tag("edge"), space1, u64, space1, u64));
    context(
        "Problem line",
        map(problem_line, |(_, _, _, _, size, _, edges)| (size, edges)),
    )(input)
}

fn parse_colour_line(input: Input<'_>) -> ParseResult<'_, BodyLine> {
    use nom::{
        character::complete::{char, space1, u32, u64},
        combinator::map,
        error::context,
        sequence::tuple,
    };

    context(
        "Node colour line",
        map(
            tuple((char('n'), space1, u64, space1, u32)),
            |(_, _, vertex, _, colour)| BodyLine::Colour(vertex, colour),
        ),
    )(input)
}

fn parse_edge_line(input: Input<'_>) -> ParseResult<'_, BodyLine> {
    use nom::{
        character::complete::{char, space1, u64},
        combinator::map,
        error::context,
        sequence::tuple,
    };

    context(
        "Edge line",
        map(
            tuple((char('e'), space1, u64, space1, u64)),
            |(_, _, start, _, end)| BodyLine::Edge(start, end),
        ),
    )(input)
}

fn parse_body_line(input: Input<'_>) -> ParseResult<'_, BodyLine> {
    use nom::branch::alt;

    alt((parse_colour_line, parse_edge_line))(input)
}

/// Run `parser` on a line that it has to consume completely.
fn parse_single_line<'a, O, F>(parser: F, line: Input<'a>) -> Result<O, Vec<VerboseErrorKind>>
where
    F: FnMut(Input<'a>) -> ParseResult<'a, O>,
{
    use nom::combinator::all_consuming;

    all_consuming(parser)(line)
        .map(|(_, parsed)| parsed)
        .map_err(nom_error_context)
}

/// Translate a 1-based vertex number from `line` into an array index.
fn vertex_index(vertex: u64, size: usize, line: &str) -> Result<i64, BoundsError> {
    if vertex == 0 || vertex > size as u64 {
        return Err(BoundsError::DimacsVertexOutOfRange {
            line: line.to_string(),
            vertex,
            size,
        });
    }
    Ok(vertex as i64 - 1)
}

fn parse_lines<L, I>(lines: I) -> Result<GraphArrays, Error>
where
    L: AsRef<str>,
    I: Iterator<Item = Result<L, io::Error>>,
{
    let mut lines = lines.filter(|line| {
        line.as_ref()
            .map_or(true, |line| !line.as_ref().trim().is_empty())
    });

    let (size, declared, mut colours) = loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(FormatError::MissingProblemLine.into()),
        };
        let line = line.as_ref();

        if parse_single_line(parse_comment, line.trim()).is_ok() {
            continue;
        }

        let bad_problem_line = |context| FormatError::BadProblemLine {
            line: line.to_string(),
            context,
        };
        let (size, declared) =
            parse_single_line(parse_problem_line, line.trim()).map_err(bad_problem_line)?;
        let (size, declared) = match (usize::try_from(size), usize::try_from(declared)) {
            (Ok(size), Ok(declared)) => (size, declared),
            _ => return Err(bad_problem_line(Vec::new()).into()),
        };

        // N comes from the input, so its allocation may fail. E is only
        // trusted as far as edge lines actually arrive.
        let mut colours: Vec<i64> = Vec::new();
        if colours.try_reserve_exact(size).is_err() {
            return Err(bad_problem_line(Vec::new()).into());
        }
        colours.resize(size, i64::from(DEFAULT_COLOUR));
        break (size, declared, colours);
    };

    let mut edges = Vec::new();
    let mut edge_cursor = 0;

    for line in lines {
        let line = line?;
        let line = line.as_ref();

        let body_line = parse_single_line(parse_body_line, line.trim()).map_err(|context| {
            FormatError::UnrecognisedLine {
                line: line.to_string(),
                context,
            }
        })?;

        match body_line {
            BodyLine::Colour(vertex, colour) => {
                let vertex = vertex_index(vertex, size, line)?;
                colours[vertex as usize] = i64::from(colour);
            }
            BodyLine::Edge(start, end) => {
                if edge_cursor == declared {
                    return Err(Error::CountMismatchError {
                        declared,
                        found: declared + 1,
                    });
                }
                edges.push(vertex_index(start, size, line)?);
                edges.push(vertex_index(end, size, line)?);
                edge_cursor += 1;
            }
        }
    }

    if edge_cursor != declared {
        return Err(Error::CountMismatchError {
            declared,
            found: edge_cursor,
        });
    }

    Ok(GraphArrays {
        edges: Array::new(vec![declared, 2], edges)?,
        colours: Array::from(colours),
    })
}

/// Parse DIMACS text into an edge list of shape `(E, 2)`
/// and a colouring of shape `(N,)`.
pub fn parse_dimacs(text: &str) -> Result<GraphArrays, Error> {
    parse_lines(text.lines().map(Ok))
}

/// Like [`parse_dimacs`], reading the text line by line from `input`.
pub fn read_dimacs<B: BufRead>(input: B) -> Result<GraphArrays, Error> {
    parse_lines(input.lines())
}
