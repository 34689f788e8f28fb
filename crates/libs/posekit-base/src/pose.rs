//! Validated value types built on top of the transform algebra.
//!
//! Values are checked once, when a caller constructs them. Anything derived
//! from a valid value by the algebra is trusted and not checked again.

mod euler;
mod rotation;
mod translation;
mod unit_vector;

pub use euler::*;
pub use rotation::*;
pub use translation::*;
pub use unit_vector::*;

use crate::{
    camera::camera_following,
    decimal::Rounding,
    error::ValidationError,
    math::{mat3_rows, measure_distance, DMat4, DVec3, Positioned},
    repr::{DecimalEq, Render, DEFAULT_DECIMAL_PLACES},
    transform::{
        rotate_around_foreign_axes, rotation_of, transform_for_rotation, transform_from,
        translate_along_foreign_axes, translation_of,
    },
    validate::validate_rotation_matrix,
};
use std::fmt::{Display, Formatter};

/// Orientation and position of a rigid body.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    rotation: Rotation,
    translation: Translation,
}

impl Pose {
    /// Creates a pose.
    pub const fn new(rotation: Rotation, translation: Translation) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Splits a transform into a pose, validating its rotation block at three
    /// decimal places.
    pub fn from_transform(transform: DMat4) -> Result<Self, ValidationError> {
        let rotation = rotation_of(transform);
        validate_rotation_matrix(&mat3_rows(&rotation), DEFAULT_DECIMAL_PLACES)?;
        Ok(Self::from_transform_unchecked(transform))
    }

    fn from_transform_unchecked(transform: DMat4) -> Self {
        Self::new(
            Rotation::new_unchecked(rotation_of(transform)),
            Translation::from(translation_of(transform)),
        )
    }

    /// Returns the pose as a transform.
    pub fn to_transform(&self) -> DMat4 {
        transform_from(self.rotation.as_mat3(), self.translation.as_vec3())
    }

    /// Orientation.
    pub const fn rotation(&self) -> Rotation { self.rotation }

    /// Position.
    pub const fn translation(&self) -> Translation { self.translation }

    /// Rotates around the axes of `frame`; the position is kept.
    pub fn rotate_around_foreign_axes(&self, angles: &EulerAngles, frame: &Rotation) -> Self {
        let rotated = rotate_around_foreign_axes(
            self.to_transform(),
            angles.x(),
            angles.y(),
            angles.z(),
            transform_for_rotation(frame.as_mat3()),
        );
        Self::from_transform_unchecked(rotated)
    }

    /// Rotates around the global axes; the position is kept.
    pub fn rotate_around_global_axes(&self, angles: &EulerAngles) -> Self {
        self.rotate_around_foreign_axes(angles, &Rotation::identity())
    }

    /// Rotates around the object's own axes; the position is kept.
    pub fn rotate_around_local_axes(&self, angles: &EulerAngles) -> Self {
        self.rotate_around_foreign_axes(angles, &self.rotation)
    }

    /// Moves along the axes of `frame`; the orientation is kept.
    pub fn translate_along_foreign_axes(&self, units: DVec3, frame: &Rotation) -> Self {
        let moved = translate_along_foreign_axes(
            self.to_transform(),
            units.x,
            units.y,
            units.z,
            transform_for_rotation(frame.as_mat3()),
        );
        Self::from_transform_unchecked(moved)
    }

    /// Moves along the global axes; the orientation is kept.
    pub fn translate_along_global_axes(&self, units: DVec3) -> Self {
        self.translate_along_foreign_axes(units, &Rotation::identity())
    }

    /// Moves along the object's own axes; the orientation is kept.
    pub fn translate_along_local_axes(&self, units: DVec3) -> Self {
        self.translate_along_foreign_axes(units, &self.rotation)
    }

    /// Pose of a camera following this object from `units_behind` and
    /// `units_above`, see [`camera_following`].
    ///
    /// An object whose local X axis is vertical yields NaN components.
    pub fn camera_follow(&self, units_behind: f64, units_above: f64) -> Self {
        Self::from_transform_unchecked(camera_following(
            self.to_transform(),
            units_behind,
            units_above,
        ))
    }

    /// Euclidean distance between the positions of two poses.
    pub fn distance_to(&self, other: &Pose) -> f64 { measure_distance(self, other) }
}

impl Positioned for Pose {
    fn position(&self) -> DVec3 { self.translation.as_vec3() }
}

impl DecimalEq for Pose {
    fn eq_at(&self, other: &Self, places: u32) -> bool {
        self.rotation.eq_at(&other.rotation, places)
            && self.translation.eq_at(&other.translation, places)
    }
}

impl Render for Pose {
    fn render(&self, places: u32, rounding: Rounding) -> String {
        self.to_transform().render(places, rounding)
    }
}

impl Display for Pose {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_DECIMAL_PLACES, Rounding::HalfUp))
    }
}
