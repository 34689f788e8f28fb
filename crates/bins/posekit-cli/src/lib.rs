//! Command line front end of posekit.
//!
//! Composes transforms from a list of operations, derives follow cameras,
//! validates rotation matrices and unit vectors, and measures distances.

mod app;
pub mod error;

pub use app::*;
