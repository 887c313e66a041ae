//! Regular polygon generator
//!
//! Vertices are produced in homogeneous coordinates `(x, y, 1)` so that the
//! whole affine pipeline (including translation) is a single matrix product.

use nalgebra::Vector3;
use std::f64::consts::TAU;

/// Build the vertices of a regular polygon inscribed in the unit circle
///
/// Vertex `i` sits at angle `2π·i/n`, so the first vertex is `(1, 0)` and the
/// rest follow counter-clockwise. Consecutive vertices share an edge and the
/// last one connects back to the first.
///
/// `n` must already be validated (at least three sides).
///
/// ## Example
/// ```text
/// n = 4  →  (1, 0, 1), (0, 1, 1), (-1, 0, 1), (0, -1, 1)
/// ```
pub fn regular_polygon(n: usize) -> Vec<Vector3<f64>> {
    debug_assert!(n >= 3, "Regular polygon requires at least 3 sides");

    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            let (sin, cos) = angle.sin_cos();
            Vector3::new(cos, sin, 1.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_vertex_count_and_radius() {
        for n in [3, 4, 5, 7, 12, 100] {
            let vertices = regular_polygon(n);
            assert_eq!(vertices.len(), n);

            for v in &vertices {
                let radius = (v.x * v.x + v.y * v.y).sqrt();
                assert!((radius - 1.0).abs() < EPS);
                assert_eq!(v.z, 1.0);
            }
        }
    }

    #[test]
    fn test_even_angular_spacing() {
        let n = 9;
        let step = TAU / n as f64;
        let vertices = regular_polygon(n);

        for pair in vertices.windows(2) {
            let a = pair[0].y.atan2(pair[0].x);
            let b = pair[1].y.atan2(pair[1].x);
            let delta = (b - a).rem_euclid(TAU);
            assert!((delta - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_triangle() {
        let vertices = regular_polygon(3);
        let half_sqrt3 = 3f64.sqrt() / 2.0;

        // Starts on the positive X axis and winds counter-clockwise
        assert!((vertices[0].x - 1.0).abs() < EPS);
        assert!(vertices[0].y.abs() < EPS);
        assert!((vertices[1].x - (-0.5)).abs() < EPS);
        assert!((vertices[1].y - half_sqrt3).abs() < EPS);
        assert!((vertices[2].x - (-0.5)).abs() < EPS);
        assert!((vertices[2].y - (-half_sqrt3)).abs() < EPS);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(regular_polygon(6), regular_polygon(6));
    }
}
