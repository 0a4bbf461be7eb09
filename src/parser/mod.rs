//! Parser for graphs in the DIMACS variant written by bliss,
//! see [`crate::graph::write_dimacs_with`].
mod dimacs_parser;

pub use dimacs_parser::{parse_dimacs, read_dimacs};

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;
