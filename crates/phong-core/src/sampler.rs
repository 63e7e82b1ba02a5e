//! Surface samplers.
//!
//! Both samplers enumerate pixel-aligned samples lazily and in a fixed order.
//! Offsets are relative to the draw center, +y up.

use std::f32::consts::FRAC_1_SQRT_2;
use std::ops::RangeInclusive;

use glam::{IVec2, Mat3, Vec3};

/// One visible surface point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceSample {
    /// Screen offset from the draw center, in pixels.
    pub offset: IVec2,
    pub position: Vec3,
    pub normal: Vec3,
}

/// Samples the front hemisphere of the unit sphere under orthographic projection.
///
/// Rows run `i = -R..=R`; each row spans `j = -w..=w` with `w = floor(sqrt(R² - i²))`.
/// On the unit sphere the normal equals the position.
pub fn sample_sphere(draw_radius: i32) -> impl Iterator<Item = SurfaceSample> {
    let r = draw_radius;
    let scale = r as f32;

    lattice(r).flat_map(move |i| {
        let half_width = ((r * r - i * i) as f32).sqrt().floor() as i32;
        (-half_width..=half_width).map(move |j| {
            let x = j as f32 / scale;
            let y = i as f32 / scale;
            let z = (1.0 - x * x - y * y).max(0.0).sqrt();
            let p = Vec3::new(x, y, z);
            SurfaceSample { offset: IVec2::new(j, i), position: p, normal: p }
        })
    })
}

/// Samples the three cube faces visible from the fixed three-quarter view.
///
/// Faces are emitted in [`CubeFace::ALL`] order with no depth test, so a later
/// face overwrites an earlier one wherever both land on the same pixel.
pub fn sample_cube(draw_radius: i32) -> impl Iterator<Item = SurfaceSample> {
    let orientation = Orientation::isometric();
    let r = draw_radius;
    let scale = r as f32;

    CubeFace::ALL.into_iter().flat_map(move |face| {
        let normal = orientation.apply(face.normal());
        lattice(r).flat_map(move |a| {
            lattice(r).map(move |b| {
                let local = face.point(a as f32 / scale, b as f32 / scale);
                let position = orientation.apply(local);
                let offset = IVec2::new(
                    (position.x * scale).round() as i32,
                    (position.y * scale).round() as i32,
                );
                SurfaceSample { offset, position, normal }
            })
        })
    })
}

/// `-r..=r`, or empty when there is no room to draw.
fn lattice(r: i32) -> RangeInclusive<i32> {
    if r > 0 { -r..=r } else { 0..=-1 }
}

/// Visible cube faces, in paint order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CubeFace {
    Top,
    NegX,
    PosY,
}

impl CubeFace {
    pub const ALL: [CubeFace; 3] = [CubeFace::Top, CubeFace::NegX, CubeFace::PosY];

    /// Face normal before rotation.
    #[inline]
    pub const fn normal(self) -> Vec3 {
        match self {
            CubeFace::Top => Vec3::Z,
            CubeFace::NegX => Vec3::NEG_X,
            CubeFace::PosY => Vec3::Y,
        }
    }

    /// Point on the face for face-local coordinates `u, v` in `[-1, 1]`.
    #[inline]
    pub const fn point(self, u: f32, v: f32) -> Vec3 {
        match self {
            CubeFace::Top => Vec3::new(u, v, 1.0),
            CubeFace::NegX => Vec3::new(-1.0, u, v),
            CubeFace::PosY => Vec3::new(u, 1.0, v),
        }
    }
}

// Row-major:
//   [ c  c  0 ]
//   [-c  c  0 ]
//   [ 0  0  1 ]
const ROTATE_Z: Mat3 = Mat3::from_cols(
    Vec3::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
    Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
    Vec3::Z,
);

// Row-major:
//   [ 1  0  0 ]
//   [ 0  c -c ]
//   [ 0  c  c ]
const ROTATE_X: Mat3 = Mat3::from_cols(
    Vec3::X,
    Vec3::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec3::new(0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
);

/// Fixed view orientation of the cube: 45° about z, then 45° about x.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    matrix: Mat3,
}

impl Orientation {
    pub fn isometric() -> Self {
        Self { matrix: ROTATE_X * ROTATE_Z }
    }

    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.matrix * v
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::isometric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn lattice_points_in_disc(r: i32) -> usize {
        let mut n = 0;
        for i in -r..=r {
            for j in -r..=r {
                if i * i + j * j <= r * r {
                    n += 1;
                }
            }
        }
        n
    }

    // ── sphere ────────────────────────────────────────────────────────────

    #[test]
    fn sphere_sample_count_matches_disc_lattice() {
        for r in [1, 2, 5, 17, 40] {
            let by_rows: usize = (-r..=r)
                .map(|i| 2 * ((r * r - i * i) as f32).sqrt().floor() as usize + 1)
                .sum();
            let n = sample_sphere(r).count();
            assert_eq!(n, by_rows, "radius {r}");
            assert_eq!(n, lattice_points_in_disc(r), "radius {r}");
        }
    }

    #[test]
    fn sphere_samples_lie_on_unit_sphere() {
        for s in sample_sphere(23) {
            assert!((s.position.length_squared() - 1.0).abs() < 1e-4, "{s:?}");
            assert_eq!(s.position, s.normal);
            assert!(s.position.z >= 0.0);
        }
    }

    #[test]
    fn sphere_enumeration_is_row_major() {
        let samples: Vec<_> = sample_sphere(6).collect();
        assert_eq!(samples.first().map(|s| s.offset), Some(IVec2::new(0, -6)));
        assert_eq!(samples.last().map(|s| s.offset), Some(IVec2::new(0, 6)));
        for pair in samples.windows(2) {
            let (a, b) = (pair[0].offset, pair[1].offset);
            assert!((a.y, a.x) < (b.y, b.x), "{a:?} then {b:?}");
        }
    }

    #[test]
    fn sphere_apex_is_center_sample() {
        let apex = sample_sphere(8)
            .find(|s| s.offset == IVec2::ZERO)
            .map(|s| s.position);
        assert_eq!(apex, Some(Vec3::Z));
    }

    #[test]
    fn sphere_is_reproducible() {
        let a: Vec<_> = sample_sphere(9).collect();
        let b: Vec<_> = sample_sphere(9).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn non_positive_radius_samples_nothing() {
        assert_eq!(sample_sphere(0).count(), 0);
        assert_eq!(sample_sphere(-3).count(), 0);
        assert_eq!(sample_cube(0).count(), 0);
        assert_eq!(sample_cube(-3).count(), 0);
    }

    // ── cube ──────────────────────────────────────────────────────────────

    #[test]
    fn cube_sample_count_is_three_faces() {
        for r in [1, 4, 10] {
            let side = (2 * r + 1) as usize;
            assert_eq!(sample_cube(r).count(), 3 * side * side, "radius {r}");
        }
    }

    #[test]
    fn cube_face_normals_before_rotation() {
        let normals = CubeFace::ALL.map(CubeFace::normal);
        assert_eq!(normals, [Vec3::Z, Vec3::NEG_X, Vec3::Y]);
    }

    #[test]
    fn cube_faces_are_emitted_in_paint_order() {
        let r = 3;
        let per_face = ((2 * r + 1) * (2 * r + 1)) as usize;
        let o = Orientation::isometric();
        let samples: Vec<_> = sample_cube(r).collect();

        for (k, face) in CubeFace::ALL.into_iter().enumerate() {
            let expected = o.apply(face.normal());
            for s in &samples[k * per_face..(k + 1) * per_face] {
                assert!(s.normal.abs_diff_eq(expected, EPS), "{face:?}: {s:?}");
            }
        }
    }

    #[test]
    fn cube_faces_all_face_the_viewer() {
        for face in CubeFace::ALL {
            let n = Orientation::isometric().apply(face.normal());
            assert!(n.z > 0.0, "{face:?} -> {n:?}");
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn cube_offset_is_projected_position() {
        let r = 5;
        for s in sample_cube(r) {
            let expected = IVec2::new(
                (s.position.x * r as f32).round() as i32,
                (s.position.y * r as f32).round() as i32,
            );
            assert_eq!(s.offset, expected);
        }
    }

    #[test]
    fn cube_samples_stay_on_cube_surface() {
        let inverse = Orientation::isometric().matrix().transpose();
        for s in sample_cube(4) {
            let local = inverse * s.position;
            assert!((local.abs().max_element() - 1.0).abs() < EPS, "{local:?}");
        }
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[test]
    fn orientation_matches_row_major_product() {
        let c = FRAC_1_SQRT_2;
        let rz = |v: Vec3| Vec3::new(c * v.x + c * v.y, -c * v.x + c * v.y, v.z);
        let rx = |v: Vec3| Vec3::new(v.x, c * v.y - c * v.z, c * v.y + c * v.z);
        let o = Orientation::isometric();

        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.3, -0.7, 0.2)] {
            assert!(o.apply(v).abs_diff_eq(rx(rz(v)), EPS), "{v:?}");
        }
    }

    #[test]
    fn orientation_is_a_rotation() {
        let m = Orientation::default().matrix();
        assert!((m * m.transpose()).abs_diff_eq(Mat3::IDENTITY, EPS));
        assert!((m.determinant() - 1.0).abs() < EPS);
    }
}
