//! 4x4 Matrix utilities for the panel transforms
//!
//! Column-major matrices matching the WGSL `mat4x4<f32>` layout. The quad
//! pipeline consumes a fully composed model-view-projection per instance,
//! so everything here is plain builders plus multiply/transform.

use crate::Vec2;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Rotation around the vertical (Y) axis
///
/// Positive angles turn +Z toward +X, the direction a panel travels when the
/// ring advances.
pub fn rotation_y(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    [
        [cs, 0.0, -sn, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sn, 0.0, cs, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation around the depth (Z) axis, for spinning screen-space quads
pub fn rotation_z(angle: f32) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    [
        [cs, sn, 0.0, 0.0],
        [-sn, cs, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation matrix
pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = x;
    m[3][1] = y;
    m[3][2] = z;
    m
}

/// Non-uniform scale matrix
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = x;
    m[1][1] = y;
    m[2][2] = z;
    m
}

/// Perspective projection matrix
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

/// Orthographic projection mapping pixel coordinates to clip space
///
/// (0,0) is the top-left corner of the surface, matching cursor coordinates.
pub fn orthographic_pixels(width: f32, height: f32) -> Mat4 {
    [
        [2.0 / width, 0.0, 0.0, 0.0],
        [0.0, -2.0 / height, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0, 1.0],
    ]
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point by a 4x4 matrix (column-major), returning (x, y, z, w)
pub fn transform_point(m: Mat4, x: f32, y: f32, z: f32) -> [f32; 4] {
    [
        m[0][0] * x + m[1][0] * y + m[2][0] * z + m[3][0],
        m[0][1] * x + m[1][1] * y + m[2][1] * z + m[3][1],
        m[0][2] * x + m[1][2] * y + m[2][2] * z + m[3][2],
        m[0][3] * x + m[1][3] * y + m[2][3] * z + m[3][3],
    ]
}

/// Project a point through an MVP matrix into pixel coordinates
///
/// Returns `None` when the point is behind the eye (w <= 0).
pub fn project_to_pixels(mvp: Mat4, x: f32, y: f32, z: f32, surface: Vec2) -> Option<Vec2> {
    let clip = transform_point(mvp, x, y, z);
    if clip[3] <= 0.0 {
        return None;
    }

    let ndc_x = clip[0] / clip[3];
    let ndc_y = clip[1] / clip[3];
    Some(Vec2::new(
        (ndc_x + 1.0) * 0.5 * surface.x,
        (1.0 - ndc_y) * 0.5 * surface.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn point_approx_eq(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y))
    }

    #[test]
    fn test_identity_transform() {
        let p = transform_point(IDENTITY, 1.0, 2.0, 3.0);
        assert!(point_approx_eq(p, [1.0, 2.0, 3.0, 1.0]));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        // 90° around Y takes +Z to +X
        let m = rotation_y(FRAC_PI_2);
        let p = transform_point(m, 0.0, 0.0, 1.0);
        assert!(point_approx_eq(p, [1.0, 0.0, 0.0, 1.0]), "got {:?}", p);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        // 90° around Z takes +X to +Y
        let m = rotation_z(FRAC_PI_2);
        let p = transform_point(m, 1.0, 0.0, 0.0);
        assert!(point_approx_eq(p, [0.0, 1.0, 0.0, 1.0]), "got {:?}", p);
    }

    #[test]
    fn test_translation_then_rotation() {
        // mul applies the right-hand matrix first
        let m = mul(rotation_y(FRAC_PI_2), translation(0.0, 0.0, 5.0));
        let p = transform_point(m, 0.0, 0.0, 0.0);
        assert!(point_approx_eq(p, [5.0, 0.0, 0.0, 1.0]), "got {:?}", p);
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation_y(0.5);
        let left = mul(IDENTITY, a);
        let right = mul(a, IDENTITY);
        for i in 0..4 {
            for j in 0..4 {
                assert!(approx_eq(left[i][j], a[i][j]));
                assert!(approx_eq(right[i][j], a[i][j]));
            }
        }
    }

    #[test]
    fn test_perspective_w_division() {
        let m = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        // A point in front of the eye projects with positive w
        let clip = transform_point(m, 0.0, 0.0, -10.0);
        assert!(clip[3] > 0.0);
        // On-axis point stays on-axis
        assert!(approx_eq(clip[0], 0.0));
        assert!(approx_eq(clip[1], 0.0));
    }

    #[test]
    fn test_orthographic_pixels_corners() {
        let m = orthographic_pixels(800.0, 600.0);
        let top_left = transform_point(m, 0.0, 0.0, 0.0);
        assert!(point_approx_eq(top_left, [-1.0, 1.0, 0.0, 1.0]));
        let bottom_right = transform_point(m, 800.0, 600.0, 0.0);
        assert!(point_approx_eq(bottom_right, [1.0, -1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_project_to_pixels() {
        let view = translation(0.0, 0.0, -10.0);
        let proj = perspective(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let mvp = mul(proj, view);
        let surface = Vec2::new(400.0, 400.0);

        // The origin lands dead center
        let center = project_to_pixels(mvp, 0.0, 0.0, 0.0, surface).unwrap();
        assert!(approx_eq(center.x, 200.0));
        assert!(approx_eq(center.y, 200.0));

        // A point behind the eye does not project
        assert!(project_to_pixels(mvp, 0.0, 0.0, 20.0, surface).is_none());
    }
}
