//! Vector algebra.
//!
//! Right-handed coordinate system. Matrices are stored by `glam` column by
//! column, but everything in this crate talks about them row by row: row `i`
//! of a rotation block is the local axis `i` expressed in the global frame.

pub use glam::{DMat3, DMat4, DVec3, DVec4};

/// Origin of the global axes.
pub const GLOBAL_ORIGIN: DVec3 = DVec3::ZERO;

/// Unit vector along the global X axis.
pub const GLOBAL_X_AXIS: DVec3 = DVec3::X;

/// Unit vector along the global Y axis.
pub const GLOBAL_Y_AXIS: DVec3 = DVec3::Y;

/// Unit vector along the global Z axis, the vertical axis.
pub const GLOBAL_Z_AXIS: DVec3 = DVec3::Z;

/// Anything that occupies a position in global space.
///
/// Points are their own position; transforms are positioned by their
/// translation component.
pub trait Positioned {
    /// Returns the position in global coordinates.
    fn position(&self) -> DVec3;
}

impl Positioned for DVec3 {
    fn position(&self) -> DVec3 { *self }
}

impl Positioned for DMat4 {
    fn position(&self) -> DVec3 { self.w_axis.truncate() }
}

impl Positioned for [f64; 3] {
    fn position(&self) -> DVec3 { DVec3::from_array(*self) }
}

/// Scales the vector to unit length.
///
/// The zero vector has no direction; its normalisation yields NaN components
/// which are left for the caller to observe.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let length = v.length();
    DVec3::new(v.x / length, v.y / length, v.z / length)
}

/// Cross product `a × b`.
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    DVec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Returns the unit vector perpendicular to both `a` and `b`.
///
/// Right-hand rule: forefinger along `a`, middle finger along `b`, the thumb
/// points along the result.
pub fn perpendicular_unit_vector(a: DVec3, b: DVec3) -> DVec3 { normalize(cross(a, b)) }

/// Returns the unit vector pointing from `from` to `to`.
pub fn unit_vector_from_points<A, B>(from: &A, to: &B) -> DVec3
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    normalize(to.position() - from.position())
}

/// Euclidean distance between two positions.
pub fn measure_distance<A, B>(a: &A, b: &B) -> f64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    let d = a.position() - b.position();
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

/// Builds a 3x3 matrix from its rows.
pub fn mat3_from_rows(rows: [[f64; 3]; 3]) -> DMat3 { DMat3::from_cols_array_2d(&rows).transpose() }

/// Returns the rows of a 3x3 matrix.
pub fn mat3_rows(m: &DMat3) -> [[f64; 3]; 3] { m.transpose().to_cols_array_2d() }

/// Returns the rows of a 4x4 matrix.
pub fn mat4_rows(m: &DMat4) -> [[f64; 4]; 4] { m.transpose().to_cols_array_2d() }
