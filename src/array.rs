//! Dense numeric arrays of arbitrary dimension, the
//! representation edge lists and colourings are exchanged in.
use custom_debug_derive::Debug;

use crate::debug::{shape_fmt, ShapeError};

/// Row-major array of `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array {
    #[debug(with = "shape_fmt")]
    shape: Vec<usize>,
    data: Vec<i64>,
}

impl Array {
    pub fn new(shape: Vec<usize>, data: Vec<i64>) -> Result<Self, ShapeError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(ShapeError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Array { shape, data })
    }

    pub fn zeros(shape: Vec<usize>) -> Self {
        let data = vec![0; shape.iter().product()];
        Array { shape, data }
    }

    /// Two-dimensional array with one row per entry of `rows`.
    pub fn from_rows<const K: usize>(rows: &[[i64; K]]) -> Self {
        Array {
            shape: vec![rows.len(), K],
            data: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Rows along the last axis.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        let width = self.shape.last().copied().unwrap_or(1).max(1);
        self.data.chunks_exact(width)
    }
}

/// A graph as numeric arrays: `edges` of shape `(E, 2)` holding
/// 0-based endpoints and `colours` of shape `(N,)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphArrays {
    pub edges: Array,
    pub colours: Array,
}

impl GraphArrays {
    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.colours.as_slice().len()
    }
}

impl From<Vec<i64>> for Array {
    fn from(data: Vec<i64>) -> Self {
        Array {
            shape: vec![data.len()],
            data,
        }
    }
}
