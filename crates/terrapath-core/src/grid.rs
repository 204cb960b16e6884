//! An immutable, row-major grid of numeric cell values.
//!
//! [`CostGrid`] stores its cells in a single flat buffer with stride
//! `cols`. How a value is read (obstacle mask or scalar cost) is fixed by
//! the grid's [`CellSemantics`].

use crate::cell::CellSemantics;
use crate::geom::{Coord, Dims};

/// Errors that can occur when building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A row's width differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The flat buffer does not match the declared shape.
    #[error("grid buffer holds {found} cells but shape {dims} needs {}", .dims.len())]
    LengthMismatch { dims: Dims, found: usize },
    /// A cell value is NaN.
    #[error("cell ({row}, {col}) is not a number")]
    NotANumber { row: usize, col: usize },
    /// A character in a text grid has no cell meaning.
    #[error("invalid character \u{201c}{ch}\u{201d} at ({row}, {col})")]
    InvalidRune { ch: char, row: usize, col: usize },
    /// The shape cannot be addressed with `i32` coordinates.
    #[error("grid shape {0} is too large")]
    TooLarge(Dims),
}

/// A rectangular grid of traversal costs or obstacle flags.
///
/// Immutable once built. Empty grids (zero rows or columns) can be
/// constructed; searching one fails.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGrid {
    dims: Dims,
    cells: Vec<f64>,
    semantics: CellSemantics,
    uniform: Option<f64>,
    walkable: usize,
}

impl CostGrid {
    /// Build a grid from a flat row-major buffer.
    ///
    /// The shape is checked before the buffer, so `dims` whose cell count
    /// overflows `usize` are reported as [`GridError::TooLarge`].
    pub fn from_flat(
        dims: Dims,
        cells: Vec<f64>,
        semantics: CellSemantics,
    ) -> Result<Self, GridError> {
        let len = match dims.rows.checked_mul(dims.cols) {
            Some(n) if dims.rows <= i32::MAX as usize && dims.cols <= i32::MAX as usize => n,
            _ => return Err(GridError::TooLarge(dims)),
        };
        if cells.len() != len {
            return Err(GridError::LengthMismatch {
                dims,
                found: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|v| v.is_nan()) {
            let c = dims.coord(i);
            return Err(GridError::NotANumber {
                row: c.row as usize,
                col: c.col as usize,
            });
        }
        Ok(Self::build(dims, cells, semantics))
    }

    /// Build a grid from nested rows, as received across a serialization
    /// boundary. Every row must have the same width.
    pub fn from_rows<R: AsRef<[f64]>>(
        rows: &[R],
        semantics: CellSemantics,
    ) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        let dims = if width == 0 {
            Dims::new(0, 0)
        } else {
            Dims::new(rows.len(), width)
        };
        if dims.is_empty() {
            cells.clear();
        }
        Self::from_flat(dims, cells, semantics)
    }

    /// Parse a text grid.
    ///
    /// `.` is a free cell, `#` an obstacle and a digit `0`-`9` an explicit
    /// cell value. In [`CellSemantics::Cost`] mode `.` costs 1; in
    /// [`CellSemantics::Mask`] mode a digit is the raw mask value (so only
    /// `0` is free). Lines must all have the same width. Leading and
    /// trailing whitespace of the whole string is ignored.
    pub fn from_ascii(s: &str, semantics: CellSemantics) -> Result<Self, GridError> {
        let (free, blocked) = match semantics {
            CellSemantics::Mask => (0.0, 1.0),
            CellSemantics::Cost => (1.0, -1.0),
        };
        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (row, line) in s.trim().lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let v = match ch {
                    '.' => free,
                    '#' => blocked,
                    '0'..='9' => f64::from(ch as u8 - b'0'),
                    _ => return Err(GridError::InvalidRune { ch, row, col }),
                };
                cells.push(v);
            }
            rows.push(cells);
        }
        Self::from_rows(&rows, semantics)
    }

    fn build(dims: Dims, cells: Vec<f64>, semantics: CellSemantics) -> Self {
        let mut uniform: Option<f64> = None;
        let mut mixed = false;
        let mut walkable = 0;
        for &v in &cells {
            let Some(c) = semantics.entry_cost(v) else {
                continue;
            };
            walkable += 1;
            match uniform {
                None => uniform = Some(c),
                Some(u) if u != c => mixed = true,
                Some(_) => {}
            }
        }
        Self {
            dims,
            cells,
            semantics,
            uniform: if mixed { None } else { uniform },
            walkable,
        }
    }

    /// Shape of the grid.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// How cell values are interpreted.
    #[inline]
    pub fn semantics(&self) -> CellSemantics {
        self.semantics
    }

    /// Whether the grid has zero rows or zero columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Raw row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Raw value at `c`, or `None` out of bounds.
    #[inline]
    pub fn value(&self, c: Coord) -> Option<f64> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Cost of entering `c`, or `None` if it is an obstacle or out of
    /// bounds.
    #[inline]
    pub fn entry_cost(&self, c: Coord) -> Option<f64> {
        self.value(c).and_then(|v| self.semantics.entry_cost(v))
    }

    /// Cost of entering the cell at flat index `idx`.
    #[inline]
    pub fn entry_cost_at(&self, idx: usize) -> Option<f64> {
        self.cells
            .get(idx)
            .and_then(|&v| self.semantics.entry_cost(v))
    }

    /// Whether `c` is in bounds and not an obstacle.
    #[inline]
    pub fn is_walkable(&self, c: Coord) -> bool {
        self.entry_cost(c).is_some()
    }

    /// The entry cost shared by every walkable cell, if there is one.
    ///
    /// Always `Some(1.0)` for a mask grid with at least one free cell.
    #[inline]
    pub fn uniform_cost(&self) -> Option<f64> {
        self.uniform
    }

    /// Number of walkable cells.
    #[inline]
    pub fn walkable_count(&self) -> usize {
        self.walkable
    }
}
