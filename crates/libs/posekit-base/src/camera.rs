//! Follow camera derived from the transform of the object it tracks.

use crate::{
    math::{perpendicular_unit_vector, unit_vector_from_points, DMat4, GLOBAL_Z_AXIS},
    transform::{local_x_axis, transform_from, translate_along_arbitrary_axis, translation_of},
};
use glam::DMat3;

/// Returns the transform of a camera that sits `units_behind` the object and
/// `units_above` it, looking straight at the object's origin.
///
/// "Behind" is measured along the direction the object's local Y axis would
/// point if the object were upright, so the camera ignores the object's roll
/// and pitch. The camera's local X axis is kept level with the global
/// horizon; its local Z axis points from the object towards the camera.
///
/// An object whose local X axis is vertical has no upright direction and
/// yields a transform with NaN components.
pub fn camera_following(object: DMat4, units_behind: f64, units_above: f64) -> DMat4 {
    let object_x = local_x_axis(object);
    let ideal_y = perpendicular_unit_vector(object_x, GLOBAL_Z_AXIS);
    if ideal_y.is_nan() {
        log::debug!("object X axis {object_x} is vertical, the follow camera is undefined");
    }

    let behind = translate_along_arbitrary_axis(object, units_behind, ideal_y);
    let placed = translate_along_arbitrary_axis(behind, units_above, GLOBAL_Z_AXIS);

    let camera_z = unit_vector_from_points(&object, &placed);
    let camera_x = perpendicular_unit_vector(GLOBAL_Z_AXIS, camera_z);
    let camera_y = perpendicular_unit_vector(camera_z, camera_x);

    transform_from(
        DMat3::from_cols(camera_x, camera_y, camera_z).transpose(),
        translation_of(placed),
    )
}
