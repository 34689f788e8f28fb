//! Deterministic comparison and textual rendering of vectors and matrices.
//!
//! Both work on values rounded to a fixed number of decimal places, so two
//! results of slightly different floating point paths compare and print the
//! same.

use crate::{
    decimal::{round_to_string, Decimal, Rounding},
    math::{mat3_rows, mat4_rows, DMat3, DMat4, DVec3},
};

/// Precision used for equality, validation and rendering unless the caller
/// asks for another one.
pub const DEFAULT_DECIMAL_PLACES: u32 = 3;

/// Returns true if both values round (half-to-even) to the same number at
/// `places` decimal places.
///
/// NaN never equals anything; infinities only equal themselves.
pub fn values_equal(a: f64, b: f64, places: u32) -> bool {
    match (Decimal::from_f64(a), Decimal::from_f64(b)) {
        (Some(a), Some(b)) => {
            a.round(places, Rounding::HalfEven) == b.round(places, Rounding::HalfEven)
        },
        (None, None) => a == b,
        _ => false,
    }
}

/// Returns true if the vectors have the same length and every pair of
/// corresponding elements is equal at `places` decimal places.
pub fn vectors_equal(a: &[f64], b: &[f64], places: u32) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| values_equal(x, y, places))
}

/// Returns true if the matrices have the same number of rows and every pair
/// of corresponding rows is equal at `places` decimal places.
pub fn matrices_equal<A, B>(a: &[A], b: &[B], places: u32) -> bool
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| vectors_equal(x.as_ref(), y.as_ref(), places))
}

/// Renders one cell. Non-negative values (`-0.0` included) get a leading
/// space standing in for the minus sign; a negative value that rounds to
/// zero does not.
fn render_cell(value: f64, places: u32, rounding: Rounding) -> String {
    let text = round_to_string(value, places, rounding);
    if value >= 0.0 {
        format!(" {text}")
    } else {
        text
    }
}

fn render_rows<R: AsRef<[f64]>>(rows: &[R], places: u32, rounding: Rounding) -> Vec<String> {
    let cells = rows
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|&value| render_cell(value, places, rounding))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    // One width for the whole matrix, not per column.
    let width = cells
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);

    cells
        .iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < row.len() {
                    let padding = width - cell.chars().count() + 1;
                    line.extend(std::iter::repeat(' ').take(padding));
                }
            }
            line
        })
        .collect()
}

/// Renders a matrix as rows of aligned values, one line per row.
///
/// Every value is rounded to `places` decimal places, printed without
/// trailing fractional zeros, and padded to the width of the longest value
/// in the whole matrix.
pub fn format_matrix<R: AsRef<[f64]>>(matrix: &[R], places: u32, rounding: Rounding) -> String {
    render_rows(matrix, places, rounding).join("\n")
}

/// Renders a vector as a single line of aligned values.
///
/// Same layout as a one-row matrix, without the sign column in front of the
/// first value.
pub fn format_vector(vector: &[f64], places: u32, rounding: Rounding) -> String {
    let mut lines = render_rows(&[vector], places, rounding);
    let line = lines.pop().unwrap_or_default();
    match line.strip_prefix(' ') {
        Some(stripped) => stripped.to_string(),
        None => line,
    }
}

/// Equality of values rounded to a number of decimal places.
pub trait DecimalEq {
    /// Returns true if `self` and `other` are equal at `places` decimal
    /// places (half-to-even).
    fn eq_at(&self, other: &Self, places: u32) -> bool;
}

impl DecimalEq for f64 {
    fn eq_at(&self, other: &Self, places: u32) -> bool { values_equal(*self, *other, places) }
}

impl DecimalEq for DVec3 {
    fn eq_at(&self, other: &Self, places: u32) -> bool {
        vectors_equal(&self.to_array(), &other.to_array(), places)
    }
}

impl DecimalEq for DMat3 {
    fn eq_at(&self, other: &Self, places: u32) -> bool {
        matrices_equal(&mat3_rows(self), &mat3_rows(other), places)
    }
}

impl DecimalEq for DMat4 {
    fn eq_at(&self, other: &Self, places: u32) -> bool {
        matrices_equal(&mat4_rows(self), &mat4_rows(other), places)
    }
}

/// Canonical textual rendering.
pub trait Render {
    /// Renders the value rounded to `places` decimal places.
    fn render(&self, places: u32, rounding: Rounding) -> String;
}

impl Render for f64 {
    fn render(&self, places: u32, rounding: Rounding) -> String {
        round_to_string(*self, places, rounding)
    }
}

impl Render for DVec3 {
    fn render(&self, places: u32, rounding: Rounding) -> String {
        format_vector(&self.to_array(), places, rounding)
    }
}

impl Render for DMat3 {
    fn render(&self, places: u32, rounding: Rounding) -> String {
        format_matrix(&mat3_rows(self), places, rounding)
    }
}

impl Render for DMat4 {
    fn render(&self, places: u32, rounding: Rounding) -> String {
        format_matrix(&mat4_rows(self), places, rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_rounds_each_element() {
        assert!(vectors_equal(&[0.0, -3.0, 1.0], &[0.0004, -2.9996, 1.0], 3));
        assert!(!vectors_equal(&[0.0, -3.0, 1.0], &[0.0006, -3.0, 1.0], 3));
        assert!(!vectors_equal(&[1.0, 2.0], &[1.0, 2.0, 3.0], 3));
        // 0.125 is an exact tie and goes to the even neighbour.
        assert!(values_equal(0.125, 0.12, 2));
        assert!(!values_equal(0.125, 0.13, 2));
        // Tiny negatives round to zero and equal zero.
        assert!(values_equal(-1.65507589855e-08, 0.0, 3));
        assert!(values_equal(-0.0, 0.0, 3));
    }

    #[test]
    fn non_finite_equality() {
        assert!(!values_equal(f64::NAN, f64::NAN, 3));
        assert!(values_equal(f64::INFINITY, f64::INFINITY, 3));
        assert!(!values_equal(f64::INFINITY, f64::NEG_INFINITY, 3));
        assert!(!values_equal(f64::INFINITY, 1e300, 3));
    }

    #[test]
    fn matrix_equality() {
        let a = [[1.0, 0.0], [0.0, 1.0]];
        let b = vec![vec![1.0001, 0.0], vec![0.0, 0.9999]];
        assert!(matrices_equal(&a, &b, 3));
        assert!(!matrices_equal(&a, &b, 4));
        assert!(!matrices_equal(&a, &b[..1], 3));
        assert!(DMat3::IDENTITY.eq_at(&DMat3::from_diagonal(DVec3::splat(1.0004)), 3));
    }

    #[test]
    fn vector_formatting() {
        assert_eq!(format_vector(&[0.0, 0.0, 1.0, 4.0], 2, Rounding::HalfEven), "0  0  1  4");
        assert_eq!(format_vector(&[-1.0, 2.5, 0.5], 3, Rounding::HalfEven), "-1    2.5  0.5");
        assert_eq!(format_vector(&[], 3, Rounding::HalfEven), "");
        assert_eq!(DVec3::new(0.5, -0.25, 10.0).render(1, Rounding::HalfEven), "0.5 -0.2  10");
        assert_eq!(DVec3::new(0.5, -0.25, 10.0).render(1, Rounding::HalfUp), "0.5 -0.3  10");
    }

    #[test]
    fn matrix_formatting() {
        let rows = [
            [1.0, 0.0, -0.0000000165],
            [0.0, 0.316228151321, 0.948683142662],
            [0.0, -0.948683142662, 0.316228151321],
        ];
        assert_eq!(
            format_matrix(&rows, 3, Rounding::HalfEven),
            " 1      0     0\n 0      0.316  0.949\n 0     -0.949  0.316"
        );
        assert_eq!(
            DMat3::IDENTITY.render(3, Rounding::HalfEven),
            " 1  0  0\n 0  1  0\n 0  0  1"
        );
        assert_eq!(
            DMat4::from_translation(DVec3::new(1.5, -2.0, 0.0)).render(3, Rounding::HalfEven),
            " 1    0    0    1.5\n 0    1    0   -2\n 0    0    1    0\n 0    0    0    1"
        );
    }

    #[test]
    fn sign_column_follows_the_raw_value() {
        assert_eq!(format_matrix(&[[1.0, -1e-8], [0.0, 1.0]], 3, Rounding::HalfEven), " 1 0\n 0  1");
        assert_eq!(format_matrix(&[[-0.0, 1.0]], 3, Rounding::HalfEven), " 0  1");
        assert_eq!(format_vector(&[-1e-8, 2.0], 3, Rounding::HalfEven), "0   2");
        assert_eq!(format_vector(&[f64::NAN, 1.0], 3, Rounding::HalfEven), "NaN  1");
        assert_eq!(format_vector(&[f64::NEG_INFINITY, 1.0], 3, Rounding::HalfEven), "-inf  1");
    }

    #[test]
    fn ragged_rows_render_without_panicking() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![], vec![4.0]];
        assert_eq!(format_matrix(&rows, 3, Rounding::HalfEven), " 1  2  3\n\n 4");
    }
}
