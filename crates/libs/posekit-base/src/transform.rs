//! Transform algebra.
//!
//! A transform is a [`DMat4`] whose upper-left 3x3 block is the orientation
//! of an object (row `i` is the object's local axis `i` in global
//! coordinates) and whose fourth column holds its position. Every operation
//! here takes transforms by value and returns a new one; none of them
//! inspects or rejects its numeric input.
//!
//! Rotations are clockwise when looking from the origin towards positive
//! infinity along the axis of rotation. Angles are given in degrees.

use crate::math::{mat3_from_rows, DMat3, DMat4, DVec3};

/// Returns the transform of an object at the global origin, aligned with the
/// global axes.
pub fn identity_transform() -> DMat4 { DMat4::IDENTITY }

/// Assembles a transform from a rotation block and a translation.
///
/// The rotation is not validated.
pub fn transform_from(rotation: DMat3, translation: DVec3) -> DMat4 {
    DMat4::from_cols(
        rotation.x_axis.extend(0.0),
        rotation.y_axis.extend(0.0),
        rotation.z_axis.extend(0.0),
        translation.extend(1.0),
    )
}

/// Returns a transform at the global origin with the given orientation.
pub fn transform_for_rotation(rotation: DMat3) -> DMat4 { transform_from(rotation, DVec3::ZERO) }

/// Returns a transform at the given position, aligned with the global axes.
pub fn transform_for_translation(translation: DVec3) -> DMat4 {
    transform_from(DMat3::IDENTITY, translation)
}

/// Extracts the 3x3 rotation block.
pub fn rotation_of(transform: DMat4) -> DMat3 { DMat3::from_mat4(transform) }

/// Extracts the translation column.
pub fn translation_of(transform: DMat4) -> DVec3 { transform.w_axis.truncate() }

/// Local X axis of the object, in global coordinates.
pub fn local_x_axis(transform: DMat4) -> DVec3 { rotation_of(transform).row(0) }

/// Local Y axis of the object, in global coordinates.
pub fn local_y_axis(transform: DMat4) -> DVec3 { rotation_of(transform).row(1) }

/// Local Z axis of the object, in global coordinates.
pub fn local_z_axis(transform: DMat4) -> DVec3 { rotation_of(transform).row(2) }

/// Matrix product `first · second`.
///
/// Row `i` of the result is row `i` of `first` transformed by `second`, so
/// multiplying an orientation by a rotation rotates each of its local axes.
pub fn multiply_rotations(first: DMat3, second: DMat3) -> DMat3 { first * second }

/// Rotation matrix for `angle` degrees around the unit vector `axis`
/// (Rodrigues' formula).
fn axis_angle_rotation(angle: f64, axis: DVec3) -> DMat3 {
    let (s, c) = angle.to_radians().sin_cos();
    let m = 1.0 - c;
    let DVec3 { x, y, z } = axis;
    mat3_from_rows([
        [m * x * x + c, m * x * y + s * z, m * x * z - s * y],
        [m * x * y - s * z, m * y * y + c, m * y * z + s * x],
        [m * x * z + s * y, m * y * z - s * x, m * z * z + c],
    ])
}

/// Rotates the object by `angle` degrees around `axis`, which must be a unit
/// vector. The position is carried through unchanged.
pub fn rotate_around_arbitrary_axis(transform: DMat4, angle: f64, axis: DVec3) -> DMat4 {
    let rotation = multiply_rotations(rotation_of(transform), axis_angle_rotation(angle, axis));
    transform_from(rotation, translation_of(transform))
}

/// Rotates the object around the axes of `foreign`, by `x`, `y` then `z`
/// degrees.
///
/// The axes are taken from `foreign` before the first rotation is applied.
/// Zero angles are skipped.
pub fn rotate_around_foreign_axes(
    transform: DMat4,
    x: f64,
    y: f64,
    z: f64,
    foreign: DMat4,
) -> DMat4 {
    let frame = rotation_of(foreign);
    [(x, frame.row(0)), (y, frame.row(1)), (z, frame.row(2))]
        .into_iter()
        .filter(|&(angle, _)| angle != 0.0)
        .fold(transform, |rotated, (angle, axis)| {
            rotate_around_arbitrary_axis(rotated, angle, axis)
        })
}

/// Rotates the object around the global axes, by `x`, `y` then `z` degrees.
pub fn rotate_around_global_axes(transform: DMat4, x: f64, y: f64, z: f64) -> DMat4 {
    rotate_around_foreign_axes(transform, x, y, z, identity_transform())
}

/// Rotates the object around its own axes as they were before the call, by
/// `x`, `y` then `z` degrees.
pub fn rotate_around_local_axes(transform: DMat4, x: f64, y: f64, z: f64) -> DMat4 {
    rotate_around_foreign_axes(transform, x, y, z, transform)
}

/// Moves the object by `units` along `axis`. The orientation is carried
/// through unchanged.
///
/// The axis is not normalised; a non-unit axis scales the distance moved.
pub fn translate_along_arbitrary_axis(transform: DMat4, units: f64, axis: DVec3) -> DMat4 {
    transform_from(
        rotation_of(transform),
        translation_of(transform) + units * axis,
    )
}

/// Moves the object along the axes of `foreign`, by `x`, `y` then `z` units.
///
/// The axes are taken from `foreign` before the first move is applied. Zero
/// distances are skipped.
pub fn translate_along_foreign_axes(
    transform: DMat4,
    x: f64,
    y: f64,
    z: f64,
    foreign: DMat4,
) -> DMat4 {
    let frame = rotation_of(foreign);
    [(x, frame.row(0)), (y, frame.row(1)), (z, frame.row(2))]
        .into_iter()
        .filter(|&(units, _)| units != 0.0)
        .fold(transform, |moved, (units, axis)| {
            translate_along_arbitrary_axis(moved, units, axis)
        })
}

/// Moves the object along the global axes.
pub fn translate_along_global_axes(transform: DMat4, x: f64, y: f64, z: f64) -> DMat4 {
    translate_along_foreign_axes(transform, x, y, z, identity_transform())
}

/// Moves the object along its own axes.
pub fn translate_along_local_axes(transform: DMat4, x: f64, y: f64, z: f64) -> DMat4 {
    translate_along_foreign_axes(transform, x, y, z, transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{mat3_rows, measure_distance, GLOBAL_Z_AXIS},
        repr::DecimalEq,
        validate::validate_rotation_matrix,
    };
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const PLACES: u32 = 3;

    fn sin(deg: f64) -> f64 { deg.to_radians().sin() }
    fn cos(deg: f64) -> f64 { deg.to_radians().cos() }

    fn assert_rotation(transform: DMat4, rows: [[f64; 3]; 3]) {
        let actual = rotation_of(transform);
        assert!(
            actual.eq_at(&mat3_from_rows(rows), PLACES),
            "unexpected rotation {:?}",
            mat3_rows(&actual)
        );
    }

    fn assert_translation(transform: DMat4, expected: [f64; 3]) {
        let actual = translation_of(transform);
        assert!(
            actual.eq_at(&DVec3::from_array(expected), PLACES),
            "unexpected translation {actual:?}"
        );
    }

    /// Orientation after -30° around global Z followed by -40° around local Y.
    const GLOBAL_THEN_LOCAL: [[f64; 3]; 3] = [
        [0.663414001465, -0.383022248745, 0.642787575722],
        [0.5, 0.866025388241, 0.0],
        [-0.556670367718, 0.321393787861, 0.76604449749],
    ];

    fn global_then_local(start: DMat4) -> DMat4 {
        let t = rotate_around_global_axes(start, 0.0, 0.0, -30.0);
        rotate_around_local_axes(t, 0.0, -40.0, 0.0)
    }

    #[test]
    fn decomposition() {
        let rotation = mat3_from_rows([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let t = transform_from(rotation, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(rotation_of(t), rotation);
        assert_eq!(translation_of(t), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(local_x_axis(t), DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(local_y_axis(t), DVec3::new(-1.0, 0.0, 0.0));
        assert_eq!(local_z_axis(t), GLOBAL_Z_AXIS);
        assert_eq!(t.row(3), glam::DVec4::new(0.0, 0.0, 0.0, 1.0));

        assert_eq!(transform_for_rotation(rotation).w_axis, glam::DVec4::W);
        assert_eq!(
            rotation_of(transform_for_translation(DVec3::ONE)),
            DMat3::IDENTITY
        );
        assert_eq!(identity_transform(), transform_from(DMat3::IDENTITY, DVec3::ZERO));
    }

    #[test]
    fn clockwise_rotation_around_z() {
        let t = rotate_around_arbitrary_axis(identity_transform(), 90.0, GLOBAL_Z_AXIS);
        assert_abs_diff_eq!(local_x_axis(t), DVec3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(local_y_axis(t), DVec3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(local_z_axis(t), GLOBAL_Z_AXIS, epsilon = 1e-12);
    }

    #[test]
    fn rotation_keeps_position() {
        let start = transform_for_translation(DVec3::new(2.0, -3.0, 7.5));
        let t = rotate_around_global_axes(start, 10.0, 20.0, 30.0);
        assert_eq!(translation_of(t), DVec3::new(2.0, -3.0, 7.5));
        let t = translate_along_local_axes(t, 1.0, 2.0, 3.0);
        let moved = translate_along_global_axes(t, 0.0, 0.0, 1.0);
        assert_eq!(rotation_of(moved), rotation_of(t));
    }

    #[test]
    fn global_then_global_composition() {
        let t = rotate_around_global_axes(identity_transform(), 0.0, 0.0, -30.0);
        let t = rotate_around_global_axes(t, 0.0, -40.0, 0.0);
        let t = translate_along_local_axes(t, 4.0, 0.0, 0.0);
        assert_translation(
            t,
            [
                4.0 - 8.0 * sin(15.0).powi(2) - 8.0 * sin(20.0).powi(2) * cos(30.0),
                -8.0 * sin(15.0) * cos(15.0),
                8.0 * sin(20.0) * cos(20.0) * cos(30.0),
            ],
        );
        assert_rotation(
            t,
            [
                [0.663414001465, -0.499999940395, 0.556670427322],
                [0.38302218914, 0.866025447845, 0.321393728256],
                [-0.642787575722, 1.60373581082e-08, 0.766044437885],
            ],
        );
    }

    #[test]
    fn global_then_local_composition() {
        let t = translate_along_local_axes(global_then_local(identity_transform()), 4.0, 0.0, 0.0);
        assert_translation(
            t,
            [
                4.0 - 8.0 * sin(15.0).powi(2) - 8.0 * sin(20.0).powi(2) * cos(30.0),
                -8.0 * sin(15.0) * cos(15.0) + 8.0 * sin(20.0).powi(2) * sin(30.0),
                8.0 * sin(20.0) * cos(20.0),
            ],
        );
        assert_rotation(t, GLOBAL_THEN_LOCAL);
    }

    #[test]
    fn global_translation_after_local_composition() {
        let t = translate_along_local_axes(global_then_local(identity_transform()), 4.0, 0.0, 0.0);
        let t = translate_along_global_axes(t, 2.0, 3.0, 0.0);
        assert_translation(
            t,
            [
                2.0 + 4.0 - 8.0 * sin(15.0).powi(2) - 8.0 * sin(20.0).powi(2) * cos(30.0),
                3.0 - 8.0 * sin(15.0) * cos(15.0) + 8.0 * sin(20.0).powi(2) * sin(30.0),
                8.0 * sin(20.0) * cos(20.0),
            ],
        );
        assert_rotation(t, GLOBAL_THEN_LOCAL);
    }

    #[test]
    fn composition_from_an_offset_start() {
        let start = translate_along_global_axes(identity_transform(), 2.0, -3.0, 0.0);
        let t = translate_along_local_axes(global_then_local(start), 4.0, 0.0, 0.0);
        assert_translation(
            t,
            [
                2.0 + 4.0 - 8.0 * sin(15.0).powi(2) - 8.0 * sin(20.0).powi(2) * cos(30.0),
                -3.0 - 8.0 * sin(15.0) * cos(15.0) + 8.0 * sin(20.0).powi(2) * sin(30.0),
                8.0 * sin(20.0) * cos(20.0),
            ],
        );
        assert_rotation(t, GLOBAL_THEN_LOCAL);
    }

    #[test]
    fn translation_along_two_local_axes() {
        let t = translate_along_local_axes(global_then_local(identity_transform()), 4.0, 3.0, 0.0);
        assert_translation(t, [4.15365600586, 1.06598711014, 2.57115054131]);
        assert_rotation(t, GLOBAL_THEN_LOCAL);
    }

    #[test]
    fn foreign_axes() {
        let foreign = rotate_around_global_axes(identity_transform(), 0.0, 0.0, 90.0);
        // Foreign X is global Y.
        let t = translate_along_foreign_axes(identity_transform(), 2.0, 0.0, 0.0, foreign);
        assert_abs_diff_eq!(translation_of(t), DVec3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
        // Foreign Z is global Z, so rotating around it matches a global rotation.
        let a = rotate_around_foreign_axes(identity_transform(), 0.0, 0.0, 45.0, foreign);
        let b = rotate_around_global_axes(identity_transform(), 0.0, 0.0, 45.0);
        assert!(a.eq_at(&b, 12));
    }

    #[test]
    fn axes_are_taken_once() {
        // With local axes refreshed between steps, Y would be applied around
        // the already-rotated Y axis.
        let once = rotate_around_local_axes(identity_transform(), 90.0, 90.0, 0.0);
        let step = rotate_around_local_axes(identity_transform(), 90.0, 0.0, 0.0);
        let refreshed = rotate_around_local_axes(step, 0.0, 90.0, 0.0);
        let expected = rotate_around_global_axes(identity_transform(), 90.0, 90.0, 0.0);
        assert!(once.eq_at(&expected, 12));
        assert!(!once.eq_at(&refreshed, 3));
    }

    #[test]
    fn zero_deltas_are_skipped() {
        let t = rotate_around_global_axes(identity_transform(), 12.0, -7.0, 33.0);
        let t = translate_along_local_axes(t, 1.5, -2.0, 0.25);
        assert_eq!(rotate_around_global_axes(t, 0.0, 0.0, 0.0), t);
        assert_eq!(rotate_around_local_axes(t, -0.0, 0.0, -0.0), t);
        assert_eq!(translate_along_global_axes(t, 0.0, 0.0, 0.0), t);
        assert_eq!(translate_along_foreign_axes(t, 0.0, -0.0, 0.0, t), t);
    }

    #[test]
    fn nan_is_applied() {
        let t = rotate_around_global_axes(identity_transform(), f64::NAN, 0.0, 0.0);
        assert!(rotation_of(t).is_nan());
        let t = translate_along_global_axes(identity_transform(), 0.0, f64::NAN, 0.0);
        assert!(translation_of(t).y.is_nan());
        assert!(!rotation_of(t).is_nan());
    }

    #[test]
    fn non_unit_axis_scales_translation() {
        let t = translate_along_arbitrary_axis(identity_transform(), 2.0, DVec3::new(0.0, 3.0, 0.0));
        assert_eq!(translation_of(t), DVec3::new(0.0, 6.0, 0.0));
    }

    #[test]
    fn distance_between_transforms() {
        let a = transform_for_translation(DVec3::new(1.0, 2.0, 3.0));
        let b = rotate_around_global_axes(transform_for_translation(DVec3::new(4.0, 6.0, 3.0)), 10.0, 0.0, 0.0);
        assert_eq!(measure_distance(&a, &b), 5.0);
    }

    fn angle() -> impl Strategy<Value = f64> { -360.0f64..360.0 }

    proptest! {
        #[test]
        fn rotation_preserves_unit_rows_and_columns(
            start in (angle(), angle(), angle()),
            delta in (angle(), angle(), angle()),
            local in any::<bool>(),
        ) {
            let t = rotate_around_global_axes(identity_transform(), start.0, start.1, start.2);
            let t = if local {
                rotate_around_local_axes(t, delta.0, delta.1, delta.2)
            } else {
                rotate_around_global_axes(t, delta.0, delta.1, delta.2)
            };
            prop_assert!(validate_rotation_matrix(&mat3_rows(&rotation_of(t)), PLACES).is_ok());
        }

        #[test]
        fn decomposition_round_trips(
            angles in (angle(), angle(), angle()),
            x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e6f64..1e6,
        ) {
            let t = rotate_around_global_axes(identity_transform(), angles.0, angles.1, angles.2);
            let t = translate_along_global_axes(t, x, y, z);
            prop_assert_eq!(transform_from(rotation_of(t), translation_of(t)), t);
        }

        #[test]
        fn zero_deltas_round_trip(
            angles in (angle(), angle(), angle()),
            x in -1e3f64..1e3, y in -1e3f64..1e3, z in -1e3f64..1e3,
        ) {
            let t = rotate_around_global_axes(identity_transform(), angles.0, angles.1, angles.2);
            let t = translate_along_global_axes(t, x, y, z);
            prop_assert_eq!(rotate_around_global_axes(t, 0.0, 0.0, 0.0), t);
            prop_assert_eq!(translate_along_global_axes(t, 0.0, 0.0, 0.0), t);
        }
    }
}
