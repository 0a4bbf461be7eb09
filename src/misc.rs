/// Knobs for writing DIMACS output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Written as `c` lines before the problem line,
    /// one per line of each entry.
    pub comments: Vec<String>,
    /// Leave out the `n` lines of vertices that
    /// still have the default colour.
    pub omit_default_colours: bool,
}
