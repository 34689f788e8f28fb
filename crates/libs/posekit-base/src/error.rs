//! Validation errors.

use crate::{
    decimal::Rounding,
    repr::{format_matrix, format_vector, DEFAULT_DECIMAL_PLACES},
};
use std::fmt::{Display, Formatter};

/// Reason a value cannot be used as a matrix, a rotation matrix or a unit
/// vector.
///
/// Errors carry a copy of the offending value so that it can be rendered in
/// diagnostics after the caller's data is gone.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The matrix is not a well formed square matrix of the required size.
    #[error("{defect}:\n{}", render_matrix(.matrix))]
    Structural {
        /// The offending matrix.
        matrix: Vec<Vec<f64>>,
        /// Which structural rule was broken.
        defect: StructuralDefect,
    },

    /// The vector is not a unit vector.
    #[error("{defect}: {}", render_vector(.vector, .places))]
    UnitVector {
        /// The offending vector.
        vector: Vec<f64>,
        /// Precision the check was performed at.
        places: u32,
        /// Which rule was broken.
        defect: UnitVectorDefect,
    },

    /// A row or a column of a rotation matrix is not a unit vector.
    #[error(
        "rotation matrix does not comprise a unit vector along the {line}:\n{}\n{source}",
        render_matrix(.matrix)
    )]
    Rotation {
        /// The offending matrix.
        matrix: Vec<Vec<f64>>,
        /// The row or column that failed.
        line: MatrixLine,
        /// Failure of the unit vector check for that row or column.
        source: Box<ValidationError>,
    },
}

fn render_matrix(matrix: &[Vec<f64>]) -> String {
    format_matrix(matrix, DEFAULT_DECIMAL_PLACES, Rounding::HalfEven)
}

fn render_vector(vector: &[f64], places: &u32) -> String {
    format_vector(vector, *places, Rounding::HalfEven)
}

/// Structural rule broken by a matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StructuralDefect {
    /// The matrix has fewer than two rows.
    TooFewRows(usize),
    /// The first row has fewer than two columns.
    TooFewColumns(usize),
    /// The number of rows differs from the number of columns.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns of the first row.
        columns: usize,
    },
    /// A row (zero-based) has a different number of columns than the first.
    RaggedRow {
        /// Index of the row.
        row: usize,
        /// Number of columns of the row.
        columns: usize,
        /// Number of columns of the first row.
        expected: usize,
    },
    /// A square matrix whose side is not three cannot be a rotation.
    NotThreeByThree(usize),
}

impl Display for StructuralDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewRows(rows) => {
                write!(f, "matrix does not have more than one row (found {rows})")
            },
            Self::TooFewColumns(columns) => write!(
                f,
                "first row of the matrix does not have more than one column (found {columns})"
            ),
            Self::NotSquare { rows, columns } => write!(
                f,
                "matrix does not have an equal number of rows and columns ({rows} x {columns})"
            ),
            Self::RaggedRow {
                row,
                columns,
                expected,
            } => write!(
                f,
                "row {} of the matrix has {columns} columns instead of {expected}",
                row + 1
            ),
            Self::NotThreeByThree(side) => {
                write!(f, "rotation matrix is {side} x {side} instead of 3 x 3")
            },
        }
    }
}

/// Rule broken by a unit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitVectorDefect {
    /// The vector does not have exactly three elements.
    WrongLength(usize),
    /// The rounded sum of squares is not one; holds that rounded sum.
    NotUnitLength(String),
    /// An element is NaN or infinite.
    NotFinite,
}

impl Display for UnitVectorDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "unit vector comprises {len} elements instead of three")
            },
            Self::NotUnitLength(squared) => write!(
                f,
                "unit vector does not conform with Pythagoras' theorem (squared length {squared})"
            ),
            Self::NotFinite => write!(f, "unit vector has a non-finite element"),
        }
    }
}

/// A row or a column of a matrix, zero-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixLine {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
}

impl Display for MatrixLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        const ORDINALS: [&str; 3] = ["first", "second", "third"];
        let (kind, index) = match self {
            MatrixLine::Row(i) => ("row", *i),
            MatrixLine::Column(i) => ("column", *i),
        };
        match ORDINALS.get(index) {
            Some(ordinal) => write!(f, "{ordinal} {kind}"),
            None => write!(f, "{kind} {}", index + 1),
        }
    }
}
