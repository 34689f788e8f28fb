//! Structural, rotation matrix and unit vector validation.
//!
//! Validation is opt-in: none of the composition operations call into this
//! module, and nothing here corrects or clamps its input.

use crate::{
    decimal::{sum_of_squares, Decimal, Rounding},
    error::{MatrixLine, StructuralDefect, UnitVectorDefect, ValidationError},
};

fn to_owned_rows<R: AsRef<[f64]>>(matrix: &[R]) -> Vec<Vec<f64>> {
    matrix.iter().map(|row| row.as_ref().to_vec()).collect()
}

fn structural<R: AsRef<[f64]>>(matrix: &[R], defect: StructuralDefect) -> ValidationError {
    log::trace!("structural validation failed: {defect}");
    ValidationError::Structural {
        matrix: to_owned_rows(matrix),
        defect,
    }
}

/// Checks that the matrix has at least two rows, that its first row has at
/// least two columns, that it is square and that no row is ragged.
///
/// An empty matrix fails as having too few rows.
pub fn validate_square_matrix<R: AsRef<[f64]>>(matrix: &[R]) -> Result<(), ValidationError> {
    let rows = matrix.len();
    if rows <= 1 {
        return Err(structural(matrix, StructuralDefect::TooFewRows(rows)));
    }
    let columns = matrix[0].as_ref().len();
    if columns <= 1 {
        return Err(structural(matrix, StructuralDefect::TooFewColumns(columns)));
    }
    if rows != columns {
        return Err(structural(
            matrix,
            StructuralDefect::NotSquare { rows, columns },
        ));
    }
    if let Some((row, found)) = matrix
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, r)| (i, r.as_ref().len()))
        .find(|&(_, len)| len != columns)
    {
        return Err(structural(
            matrix,
            StructuralDefect::RaggedRow {
                row,
                columns: found,
                expected: columns,
            },
        ));
    }
    Ok(())
}

/// Checks that both matrices are structurally valid and have the same
/// number of rows and columns.
pub fn validate_same_shape<A, B>(a: &[A], b: &[B]) -> Result<(), ValidationError>
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    validate_square_matrix(a)?;
    validate_square_matrix(b)?;
    if a.len() != b.len() {
        return Err(structural(
            b,
            StructuralDefect::NotSquare {
                rows: b.len(),
                columns: a.len(),
            },
        ));
    }
    Ok(())
}

/// Checks that the vector has three elements whose squares sum to one once
/// rounded half-to-even to `places` decimal places.
///
/// The sum of squares is computed exactly, without binary rounding error.
pub fn validate_unit_vector(vector: &[f64], places: u32) -> Result<(), ValidationError> {
    let fail = |defect| ValidationError::UnitVector {
        vector: vector.to_vec(),
        places,
        defect,
    };
    if vector.len() != 3 {
        return Err(fail(UnitVectorDefect::WrongLength(vector.len())));
    }
    let squared = sum_of_squares(vector)
        .ok_or_else(|| fail(UnitVectorDefect::NotFinite))?
        .round(places, Rounding::HalfEven);
    if squared == Decimal::one() {
        Ok(())
    } else {
        Err(fail(UnitVectorDefect::NotUnitLength(squared.to_plain_string())))
    }
}

/// Checks that the matrix is a 3x3 matrix whose rows and columns are all unit
/// vectors at `places` decimal places.
///
/// Mutual perpendicularity of the rows is not checked.
pub fn validate_rotation_matrix<R: AsRef<[f64]>>(
    matrix: &[R],
    places: u32,
) -> Result<(), ValidationError> {
    validate_square_matrix(matrix)?;
    if matrix.len() != 3 {
        return Err(structural(
            matrix,
            StructuralDefect::NotThreeByThree(matrix.len()),
        ));
    }

    let rows = (0..3).map(|i| (MatrixLine::Row(i), matrix[i].as_ref().to_vec()));
    let columns = (0..3).map(|j| {
        let column = matrix.iter().map(|row| row.as_ref()[j]).collect::<Vec<_>>();
        (MatrixLine::Column(j), column)
    });
    for (line, vector) in rows.chain(columns) {
        if let Err(err) = validate_unit_vector(&vector, places) {
            log::trace!("rotation matrix rejected along the {line}");
            return Err(ValidationError::Rotation {
                matrix: to_owned_rows(matrix),
                line,
                source: Box::new(err),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::DEFAULT_DECIMAL_PLACES;

    fn defect_of(err: ValidationError) -> StructuralDefect {
        match err {
            ValidationError::Structural { defect, .. } => defect,
            other => panic!("expected a structural error, got {other:?}"),
        }
    }

    #[test]
    fn unit_vector_boundary() {
        assert!(validate_unit_vector(&[0.70710678, 0.70710678, 0.0], 3).is_ok());
        let err = validate_unit_vector(&[0.7, 0.7, 0.0], 3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnitVector {
                vector: vec![0.7, 0.7, 0.0],
                places: 3,
                defect: UnitVectorDefect::NotUnitLength(String::from("0.98")),
            }
        );
        // At one place 0.98 rounds to 1.0.
        assert!(validate_unit_vector(&[0.7, 0.7, 0.0], 1).is_ok());
    }

    #[test]
    fn unit_vector_shape_and_finiteness() {
        assert!(matches!(
            validate_unit_vector(&[1.0, 0.0], 3),
            Err(ValidationError::UnitVector {
                defect: UnitVectorDefect::WrongLength(2),
                ..
            })
        ));
        assert!(matches!(
            validate_unit_vector(&[1.0, 0.0, 0.0, 0.0], 3),
            Err(ValidationError::UnitVector {
                defect: UnitVectorDefect::WrongLength(4),
                ..
            })
        ));
        assert!(matches!(
            validate_unit_vector(&[f64::NAN, 0.0, 0.0], 3),
            Err(ValidationError::UnitVector {
                defect: UnitVectorDefect::NotFinite,
                ..
            })
        ));
    }

    #[test]
    fn structural_checks_in_order() {
        let empty: [[f64; 3]; 0] = [];
        assert_eq!(
            defect_of(validate_square_matrix(&empty).unwrap_err()),
            StructuralDefect::TooFewRows(0)
        );
        assert_eq!(
            defect_of(validate_square_matrix(&[[1.0, 0.0]]).unwrap_err()),
            StructuralDefect::TooFewRows(1)
        );
        assert_eq!(
            defect_of(validate_square_matrix(&[vec![1.0], vec![0.0, 1.0]]).unwrap_err()),
            StructuralDefect::TooFewColumns(1)
        );
        assert_eq!(
            defect_of(validate_square_matrix(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap_err()),
            StructuralDefect::NotSquare {
                rows: 2,
                columns: 3
            }
        );
        assert_eq!(
            defect_of(
                validate_square_matrix(&[vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0]])
                    .unwrap_err()
            ),
            StructuralDefect::RaggedRow {
                row: 2,
                columns: 1,
                expected: 3
            }
        );
        assert!(validate_square_matrix(&[[1.0, 2.0], [3.0, 4.0]]).is_ok());
    }

    #[test]
    fn structural_error_keeps_the_matrix() {
        let matrix = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0]];
        match validate_square_matrix(&matrix) {
            Err(ValidationError::Structural { matrix: kept, .. }) => assert_eq!(kept, matrix),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn same_shape() {
        let a = [[1.0, 0.0], [0.0, 1.0]];
        let b = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(validate_same_shape(&a, &a).is_ok());
        assert!(validate_same_shape(&a, &b).is_err());
        assert!(validate_same_shape(&a, &[[1.0]]).is_err());
    }

    #[test]
    fn rotation_matrix_size() {
        let two = [[1.0, 0.0], [0.0, 1.0]];
        assert_eq!(
            defect_of(validate_rotation_matrix(&two, DEFAULT_DECIMAL_PLACES).unwrap_err()),
            StructuralDefect::NotThreeByThree(2)
        );
        let four = [[0.0; 4]; 4];
        assert_eq!(
            defect_of(validate_rotation_matrix(&four, DEFAULT_DECIMAL_PLACES).unwrap_err()),
            StructuralDefect::NotThreeByThree(4)
        );
    }

    #[test]
    fn rotation_matrix_rows_then_columns() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(validate_rotation_matrix(&identity, 3).is_ok());

        let camera = [
            [1.0, 0.0, -0.0],
            [0.0, 0.316228151321, 0.948683142662],
            [0.0, -0.948683142662, 0.316228151321],
        ];
        assert!(validate_rotation_matrix(&camera, 3).is_ok());

        let bad_row = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.5], [0.0, 0.0, 1.0]];
        assert!(matches!(
            validate_rotation_matrix(&bad_row, 3),
            Err(ValidationError::Rotation {
                line: MatrixLine::Row(1),
                ..
            })
        ));

        // Every row is a unit vector, the second column is the first that is not.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let bad_column = [[s, s, 0.0], [s, 0.0, s], [0.0, 0.0, 1.0]];
        assert!(matches!(
            validate_rotation_matrix(&bad_column, 3),
            Err(ValidationError::Rotation {
                line: MatrixLine::Column(1),
                ..
            })
        ));
    }

    #[test]
    fn perpendicularity_is_not_checked() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let parallel_rows = [[s, s, 0.0], [s, s, 0.0], [0.0, 0.0, 1.0]];
        assert!(validate_rotation_matrix(&parallel_rows, 3).is_ok());
        let reflection = [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(validate_rotation_matrix(&reflection, 3).is_ok());
    }
}
