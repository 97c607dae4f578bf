mod common;

use common::init_logging;
use linmath::near::Near;
use linmath::{
    Color, DualQuaternion, MathError, Matrix2, Matrix2d, Matrix3, Matrix4, Quaternion, Vector2,
    Vector3, Vector4,
};
use pretty_assertions::assert_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use testresult::TestResult;

#[test]
fn cross_product_of_axes() {
    assert_eq!(
        Vector3::new(1.0, 0.0, 0.0).cross(&Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn quarter_turn_around_z() {
    let v = Matrix4::rotation_z(FRAC_PI_2) * Vector3::new(1.0, 0.0, 0.0);
    assert!(v.near(&Vector4::new(0.0, 1.0, 0.0, 1.0)));
}

#[test]
fn hex_color_to_bytes() -> TestResult {
    assert_eq!(Color::from_hex("#FF8000")?.to_bytes(), [255, 128, 0, 255]);
    Ok(())
}

#[test]
fn matrix2_identity_and_singular_zero() {
    init_logging();
    assert_eq!(Matrix2::identity().determinant(), 1.0);
    assert!(matches!(
        Matrix2::zero().inverse(),
        Err(MathError::SingularMatrix { .. })
    ));
}

#[test]
fn singular_inverse_reports_error() {
    init_logging();
    let err = Matrix4::scaling(1.0, 0.0, 1.0).inverse().unwrap_err();
    assert_eq!(err, MathError::SingularMatrix { determinant: 0.0 });
    assert!(err.to_string().contains("not invertible"));
    assert!(Matrix2d::zero().inverse().is_err());
    assert!(Matrix3::zero().inverse().is_err());
}

#[test]
fn short_input_is_rejected() {
    assert!(matches!(
        Matrix4::try_from(&[1.0, 2.0, 3.0][..]),
        Err(MathError::InvalidArgument(_))
    ));
    assert!(Matrix3::try_from(&[0.0; 8][..]).is_err());
    assert!(Vector3::try_from(&[1.0][..]).is_err());
    assert_eq!(Vector3::from_partial(&[1.0]), Ok(Vector3::new(1.0, 0.0, 0.0)));
    assert_eq!(
        Vector4::from_partial(&[]),
        Ok(Vector4::new(0.0, 0.0, 0.0, 1.0))
    );
    assert!(Vector2::from_partial(&[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn index_out_of_range() {
    let mut v = Vector2::new(1.0, 2.0);
    assert_eq!(
        v.set(2, 5.0),
        Err(MathError::OutOfRange { index: 2, len: 2 })
    );
    assert_eq!(v, Vector2::new(1.0, 2.0));
    assert!(Matrix4::identity().get(16).is_err());
    assert!(Color::WHITE.get(4).is_err());
}

#[test]
fn zero_vector_normalizes_to_nan() {
    let n = Vector3::zero().normalize();
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
}

#[test]
fn camera_pipeline() -> TestResult {
    let view = Matrix4::look_at(
        &Vector3::new(0.0, 2.0, 10.0),
        &Vector3::zero(),
        &Vector3::up(),
    );
    let projection = Matrix4::perspective(PI / 3.0, 16.0 / 9.0, 0.1, 100.0);
    let clip = projection * view * Vector3::zero();
    let ndc = clip.perspective_divide();
    // the target projects to the center of the screen
    assert!(ndc.x.near(&0.0));
    assert!(ndc.y.near(&0.0));
    assert!(ndc.z > -1.0 && ndc.z < 1.0);

    let back = view.inverse()? * Vector3::zero();
    assert!(back.xyz().near(&Vector3::new(0.0, 2.0, 10.0)));
    Ok(())
}

#[test]
fn rigid_transform_three_ways() {
    let rotation = Quaternion::from_euler(0.2, -0.4, 1.1);
    let translation = Vector3::new(-3.0, 0.5, 7.0);
    let point = Vector3::new(1.0, 1.0, 1.0);

    let dq = DualQuaternion::from_rotation_translation(&rotation, &translation);
    let matrix = Matrix4::translation(translation.x, translation.y, translation.z)
        * rotation.to_matrix4();
    let direct = rotation * point + translation;

    assert!((dq * point).near(&direct));
    assert!((matrix * point).xyz().near(&direct));
    assert!(dq.to_matrix4().near(&matrix));
}

#[test]
fn affine_2d_matches_matrix3() -> TestResult {
    let affine = Matrix2d::identity()
        .translate(4.0, 2.0)
        .rotate(FRAC_PI_2)
        .scale(2.0, 2.0);
    let homogeneous = Matrix3::identity()
        .translate(4.0, 2.0)
        .rotate(FRAC_PI_2)
        .scale(2.0, 2.0);
    assert!(affine.to_matrix3().near(&homogeneous));

    let p = Vector2::new(1.0, 0.0);
    assert!((affine * p).near(&Vector2::new(4.0, 4.0)));
    assert!((affine.inverse()? * (affine * p)).near(&p));
    Ok(())
}

#[test]
fn display_formats() {
    assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_string(), "Vector3[1, 2, 3]");
    assert_eq!(
        Matrix2::identity().to_string(),
        "Matrix2[\n    1.0000,   0.0000\n    0.0000,   1.0000\n]"
    );
}
