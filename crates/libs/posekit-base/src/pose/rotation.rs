use super::{EulerAngles, UnitVector};
use crate::{
    decimal::Rounding,
    error::ValidationError,
    math::{mat3_from_rows, mat3_rows, DMat3},
    repr::{DecimalEq, Render, DEFAULT_DECIMAL_PLACES},
    transform::{
        multiply_rotations, rotate_around_arbitrary_axis, rotate_around_global_axes,
        rotate_around_local_axes, rotation_of, transform_for_rotation,
    },
    validate::validate_rotation_matrix,
};
use std::fmt::{Display, Formatter};

/// Orientation of an object: a 3x3 matrix whose rows are the object's local
/// axes in global coordinates.
///
/// Public constructors check that every row and column is a unit vector.
/// Results of the rotation methods are not checked again.
#[derive(Debug, Copy, Clone)]
pub struct Rotation(DMat3);

impl Rotation {
    /// Orientation aligned with the global axes.
    pub const fn identity() -> Self { Self(DMat3::IDENTITY) }

    /// Creates a rotation from its rows, validated at three decimal places.
    pub fn new(rows: [[f64; 3]; 3]) -> Result<Self, ValidationError> {
        Self::with_precision(rows, DEFAULT_DECIMAL_PLACES)
    }

    /// Creates a rotation from its rows, validated at `places` decimal
    /// places.
    pub fn with_precision(rows: [[f64; 3]; 3], places: u32) -> Result<Self, ValidationError> {
        validate_rotation_matrix(&rows, places)?;
        Ok(Self(mat3_from_rows(rows)))
    }

    /// Creates a rotation from rows of any shape, validated at three decimal
    /// places.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ValidationError> {
        validate_rotation_matrix(rows, DEFAULT_DECIMAL_PLACES)?;
        let row = |i: usize| -> [f64; 3] {
            let r = rows[i].as_ref();
            [r[0], r[1], r[2]]
        };
        Ok(Self(mat3_from_rows([row(0), row(1), row(2)])))
    }

    pub(crate) const fn new_unchecked(matrix: DMat3) -> Self { Self(matrix) }

    /// Returns the matrix.
    pub const fn as_mat3(&self) -> DMat3 { self.0 }

    /// Returns the rows of the matrix.
    pub fn to_rows(&self) -> [[f64; 3]; 3] { mat3_rows(&self.0) }

    /// Local X axis.
    pub fn x_axis(&self) -> UnitVector { UnitVector::new_unchecked(self.0.row(0)) }

    /// Local Y axis.
    pub fn y_axis(&self) -> UnitVector { UnitVector::new_unchecked(self.0.row(1)) }

    /// Local Z axis.
    pub fn z_axis(&self) -> UnitVector { UnitVector::new_unchecked(self.0.row(2)) }

    /// Rotates by `angle` degrees around `axis`.
    pub fn rotate_around_axis(&self, angle: f64, axis: &UnitVector) -> Self {
        let rotated =
            rotate_around_arbitrary_axis(transform_for_rotation(self.0), angle, axis.as_vec3());
        Self(rotation_of(rotated))
    }

    /// Rotates around the global axes.
    pub fn rotate_around_global_axes(&self, angles: &EulerAngles) -> Self {
        let rotated = rotate_around_global_axes(
            transform_for_rotation(self.0),
            angles.x(),
            angles.y(),
            angles.z(),
        );
        Self(rotation_of(rotated))
    }

    /// Rotates around the local axes as they were before the call.
    pub fn rotate_around_local_axes(&self, angles: &EulerAngles) -> Self {
        let rotated = rotate_around_local_axes(
            transform_for_rotation(self.0),
            angles.x(),
            angles.y(),
            angles.z(),
        );
        Self(rotation_of(rotated))
    }

    /// Rotates around the axes of `frame`.
    pub fn rotate_around_foreign_axes(&self, angles: &EulerAngles, frame: &Rotation) -> Self {
        [
            (angles.x(), frame.x_axis()),
            (angles.y(), frame.y_axis()),
            (angles.z(), frame.z_axis()),
        ]
        .into_iter()
        .filter(|(angle, _)| *angle != 0.0)
        .fold(*self, |rotated, (angle, axis)| rotated.rotate_around_axis(angle, &axis))
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Rotation) -> Self { Self(multiply_rotations(self.0, other.0)) }
}

impl Default for Rotation {
    fn default() -> Self { Self::identity() }
}

impl DecimalEq for Rotation {
    fn eq_at(&self, other: &Self, places: u32) -> bool { self.0.eq_at(&other.0, places) }
}

impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool { self.eq_at(other, DEFAULT_DECIMAL_PLACES) }
}

impl Render for Rotation {
    fn render(&self, places: u32, rounding: Rounding) -> String { self.0.render(places, rounding) }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_DECIMAL_PLACES, Rounding::HalfUp))
    }
}
