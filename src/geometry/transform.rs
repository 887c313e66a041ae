//! Affine transforms - Rotate, Scale, Shear, Translate
//!
//! Each builder returns a 3x3 homogeneous matrix acting on column vectors
//! `(x, y, 1)`. `combined` folds them into the single matrix used per redraw.

use nalgebra::{Matrix3, Point2, Vector3};

use super::state::TransformState;

/// Rotation about the origin, counter-clockwise by `degrees`
pub fn rotation(degrees: f64) -> Matrix3<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
        cos, -sin, 0.0,
        sin,  cos, 0.0,
        0.0,  0.0, 1.0,
    );
    m
}

/// Uniform scale relative to the origin
pub fn scaling(factor: f64) -> Matrix3<f64> {
    #[rustfmt::skip]
    let m = Matrix3::new(
        factor, 0.0,    0.0,
        0.0,    factor, 0.0,
        0.0,    0.0,    1.0,
    );
    m
}

/// Shear with `x` in row 0 / column 1 and `y` in row 1 / column 0
///
/// ```text
/// x' = x + shear_x * y
/// y' = y + shear_y * x
/// ```
pub fn shearing(shear_x: f64, shear_y: f64) -> Matrix3<f64> {
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0,     shear_x, 0.0,
        shear_y, 1.0,     0.0,
        0.0,     0.0,     1.0,
    );
    m
}

/// Translation by `(x, y)`, carried in the third column
pub fn translation(x: f64, y: f64) -> Matrix3<f64> {
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, x,
        0.0, 1.0, y,
        0.0, 0.0, 1.0,
    );
    m
}

/// Compose the state's parameters into one matrix
///
/// Points are rotated first, then scaled, sheared and finally translated.
/// With column vectors that is `T · Sh · S · R`, the same transform as the
/// row-vector form `p · Rᵗ · Sᵗ · Shᵗ · Tᵗ`.
pub fn combined(state: &TransformState) -> Matrix3<f64> {
    translation(state.translate_x, state.translate_y)
        * shearing(state.shear_x, state.shear_y)
        * scaling(state.scale)
        * rotation(state.rotation_degrees)
}

/// Apply `matrix` to homogeneous vertices, dropping the homogeneous coordinate
pub fn apply(matrix: &Matrix3<f64>, vertices: &[Vector3<f64>]) -> Vec<Point2<f64>> {
    vertices
        .iter()
        .map(|v| {
            let p = matrix * v;
            Point2::new(p.x, p.y)
        })
        .collect()
}
