//! # posekit-base
//! Transform matrix algebra for positioning and orienting rigid bodies.
//!
//! An object's pose is a 4x4 transform in a right-handed coordinate system:
//! a 3x3 rotation block whose rows are the object's local axes and a
//! translation column holding its position. The [`transform`] module
//! composes rotations and translations around global, local and foreign
//! axes; [`camera`] derives a follow camera from it; [`validate`] checks
//! rotation matrices and unit vectors; [`repr`] compares and renders values
//! at a fixed number of decimal places. The [`pose`] module wraps all of it
//! in validated value types.
#![warn(missing_docs)]

pub mod camera;
pub mod decimal;
pub mod error;
pub mod math;
pub mod pose;
pub mod repr;
pub mod transform;
pub mod validate;

pub use error::ValidationError;
pub use pose::{EulerAngles, Pose, Rotation, Translation, UnitVector};
pub use repr::{DecimalEq, Render, DEFAULT_DECIMAL_PLACES};
