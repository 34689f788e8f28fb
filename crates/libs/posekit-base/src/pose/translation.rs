use super::Rotation;
use crate::{
    decimal::Rounding,
    math::{measure_distance, DVec3, Positioned},
    repr::{DecimalEq, Render, DEFAULT_DECIMAL_PLACES},
    transform::{
        transform_for_rotation, transform_for_translation, translate_along_foreign_axes,
        translation_of,
    },
};
use std::fmt::{Display, Formatter};

/// Position of an object in global coordinates.
#[derive(Debug, Copy, Clone, Default)]
pub struct Translation(DVec3);

impl Translation {
    /// Creates a position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self(DVec3::new(x, y, z)) }

    /// The global origin.
    pub const fn origin() -> Self { Self(DVec3::ZERO) }

    /// Returns the position as a vector.
    pub const fn as_vec3(&self) -> DVec3 { self.0 }

    /// Returns the coordinates.
    pub fn to_array(&self) -> [f64; 3] { self.0.to_array() }

    /// Moves the position by `units` along the axes of `frame`, X first.
    ///
    /// Use [`Rotation::identity`] to move along the global axes.
    pub fn translate_along_axes(&self, units: DVec3, frame: &Rotation) -> Self {
        let moved = translate_along_foreign_axes(
            transform_for_translation(self.0),
            units.x,
            units.y,
            units.z,
            transform_for_rotation(frame.as_mat3()),
        );
        Self(translation_of(moved))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Translation) -> f64 { measure_distance(self, other) }
}

impl From<DVec3> for Translation {
    fn from(value: DVec3) -> Self { Self(value) }
}

impl From<[f64; 3]> for Translation {
    fn from(value: [f64; 3]) -> Self { Self(DVec3::from_array(value)) }
}

impl Positioned for Translation {
    fn position(&self) -> DVec3 { self.0 }
}

impl DecimalEq for Translation {
    fn eq_at(&self, other: &Self, places: u32) -> bool { self.0.eq_at(&other.0, places) }
}

impl PartialEq for Translation {
    fn eq(&self, other: &Self) -> bool { self.eq_at(other, DEFAULT_DECIMAL_PLACES) }
}

impl Render for Translation {
    fn render(&self, places: u32, rounding: Rounding) -> String { self.0.render(places, rounding) }
}

impl Display for Translation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_DECIMAL_PLACES, Rounding::HalfUp))
    }
}
