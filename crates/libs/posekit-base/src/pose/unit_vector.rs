use crate::{
    decimal::Rounding,
    error::{UnitVectorDefect, ValidationError},
    math::DVec3,
    repr::{DecimalEq, Render, DEFAULT_DECIMAL_PLACES},
    validate::validate_unit_vector,
};
use std::fmt::{Display, Formatter};

/// A vector of length one, validated at construction.
///
/// Equality compares at three decimal places, so it is not transitive.
#[derive(Debug, Copy, Clone)]
pub struct UnitVector(DVec3);

impl UnitVector {
    /// Creates a unit vector, checking its length at three decimal places.
    pub fn new(vector: [f64; 3]) -> Result<Self, ValidationError> {
        Self::with_precision(vector, DEFAULT_DECIMAL_PLACES)
    }

    /// Creates a unit vector, checking its length at `places` decimal places.
    pub fn with_precision(vector: [f64; 3], places: u32) -> Result<Self, ValidationError> {
        validate_unit_vector(&vector, places)?;
        Ok(Self(DVec3::from_array(vector)))
    }

    /// Wraps a vector already known to be of unit length.
    pub(crate) const fn new_unchecked(vector: DVec3) -> Self { Self(vector) }

    /// Returns the vector.
    pub const fn as_vec3(&self) -> DVec3 { self.0 }

    /// Returns the components of the vector.
    pub fn to_array(&self) -> [f64; 3] { self.0.to_array() }
}

impl TryFrom<&[f64]> for UnitVector {
    type Error = ValidationError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match <[f64; 3]>::try_from(value) {
            Ok(vector) => Self::new(vector),
            Err(_) => Err(ValidationError::UnitVector {
                vector: value.to_vec(),
                places: DEFAULT_DECIMAL_PLACES,
                defect: UnitVectorDefect::WrongLength(value.len()),
            }),
        }
    }
}

impl DecimalEq for UnitVector {
    fn eq_at(&self, other: &Self, places: u32) -> bool { self.0.eq_at(&other.0, places) }
}

impl PartialEq for UnitVector {
    fn eq(&self, other: &Self) -> bool { self.eq_at(other, DEFAULT_DECIMAL_PLACES) }
}

impl Render for UnitVector {
    fn render(&self, places: u32, rounding: Rounding) -> String { self.0.render(places, rounding) }
}

impl Display for UnitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_DECIMAL_PLACES, Rounding::HalfUp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates() {
        let v = UnitVector::new([0.6, 0.8, 0.0]).unwrap();
        assert_eq!(v.to_array(), [0.6, 0.8, 0.0]);
        assert!(UnitVector::new([0.7, 0.7, 0.0]).is_err());
        assert!(UnitVector::with_precision([0.7, 0.7, 0.0], 1).is_ok());
    }

    #[test]
    fn construction_from_slices() {
        let v = UnitVector::try_from(&[0.0, 0.0, 1.0][..]).unwrap();
        assert_eq!(v.as_vec3(), DVec3::Z);
        assert!(matches!(
            UnitVector::try_from(&[1.0, 0.0][..]),
            Err(ValidationError::UnitVector {
                defect: UnitVectorDefect::WrongLength(2),
                ..
            })
        ));
    }

    #[test]
    fn equality_and_display() {
        let a = UnitVector::new([0.6, 0.8, 0.0]).unwrap();
        let b = UnitVector::new([0.6001, 0.7999, 0.0]).unwrap();
        assert_eq!(a, b);
        assert!(!a.eq_at(&b, 4));
        // 0.0625 is exact: half-up for display, half-even for rendering.
        let c = UnitVector::new_unchecked(DVec3::new(0.0625, 0.0, 1.0));
        assert_eq!(c.to_string(), "0.063  0      1");
        assert_eq!(c.render(3, Rounding::HalfEven), "0.062  0      1");
    }
}
