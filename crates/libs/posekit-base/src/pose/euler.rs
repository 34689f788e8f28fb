use crate::{
    decimal::Rounding,
    math::DVec3,
    repr::{DecimalEq, Render, DEFAULT_DECIMAL_PLACES},
};
use std::fmt::{Display, Formatter};

/// Rotation angles in degrees around the X, Y and Z axes, always applied in
/// that order.
#[derive(Debug, Copy, Clone, Default)]
pub struct EulerAngles {
    x: f64,
    y: f64,
    z: f64,
}

impl EulerAngles {
    /// Creates a set of angles, in degrees.
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    /// No rotation at all.
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0) }

    /// Angle around the X axis.
    pub const fn x(&self) -> f64 { self.x }

    /// Angle around the Y axis.
    pub const fn y(&self) -> f64 { self.y }

    /// Angle around the Z axis.
    pub const fn z(&self) -> f64 { self.z }

    /// Returns the angles with their signs flipped.
    ///
    /// The axes are still visited in X, Y, Z order, so applying the negated
    /// angles does not in general undo a rotation by more than one axis.
    pub fn negate(&self) -> Self { Self::new(-self.x, -self.y, -self.z) }

    fn as_vec3(&self) -> DVec3 { DVec3::new(self.x, self.y, self.z) }
}

impl From<[f64; 3]> for EulerAngles {
    fn from([x, y, z]: [f64; 3]) -> Self { Self::new(x, y, z) }
}

impl DecimalEq for EulerAngles {
    fn eq_at(&self, other: &Self, places: u32) -> bool {
        self.as_vec3().eq_at(&other.as_vec3(), places)
    }
}

impl PartialEq for EulerAngles {
    fn eq(&self, other: &Self) -> bool { self.eq_at(other, DEFAULT_DECIMAL_PLACES) }
}

impl Render for EulerAngles {
    fn render(&self, places: u32, rounding: Rounding) -> String {
        self.as_vec3().render(places, rounding)
    }
}

impl Display for EulerAngles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_DECIMAL_PLACES, Rounding::HalfUp))
    }
}
