//! Local illumination.
//!
//! [`shade`] evaluates ambient + diffuse + specular for one surface sample.
//! [`toon_band`] is the optional global post-process applied to its output.

use glam::Vec3;

use crate::scene::{Light, Material};
use crate::Color;

/// Fixed orthographic viewer looking down -z from +z.
pub const VIEWER_DIRECTION: Vec3 = Vec3::Z;

/// Number of luminance bands produced by [`toon_band`].
pub const TOON_BANDS: f32 = 5.0;

/// Width of one toon band in mean-luminance units.
pub const TOON_STEP: f32 = 1.0 / TOON_BANDS;

/// Slack added before flooring so a mean sitting on a band edge, give or take
/// rounding error, stays in that band.
const TOON_SNAP: f32 = 1e-4;

/// Evaluates the Phong lighting equation at one surface sample.
///
/// `normal` does not need to be unit length; it is normalized for the diffuse
/// and reflection cosines. The reflection vector itself is built from the
/// unnormalized light direction and normal:
///
/// `r = -light_dir + 2 (normalize(light_dir) . normalize(normal)) normal`
///
/// The result is unclamped. An empty light list yields black. Zero-length
/// normals or light directions produce NaN channels.
pub fn shade(position: Vec3, normal: Vec3, material: &Material, lights: &[Light]) -> Color {
    let n = normal.normalize();
    let mut result = Color::ZERO;

    for light in lights {
        result += material.ka * light.color;

        let light_dir = light.direction_from(position);
        let l = light_dir.normalize();

        let diffuse = n.dot(l);
        if diffuse > 0.0 {
            result += material.kd * light.color * diffuse;
        }

        let reflected = -light_dir + 2.0 * l.dot(n) * normal;
        let mut specular = reflected.dot(VIEWER_DIRECTION);
        // Not `max`: a NaN cosine must stay NaN.
        if specular < 0.0 {
            specular = 0.0;
        }
        let specular = specular.powf(material.sp);
        result += material.ks * light.color * specular;
    }

    result
}

/// Shifts all channels by the same amount so that mean luminance lands on the
/// band below it. Hue is preserved.
///
/// Banding an already banded color moves it by rounding error only.
pub fn toon_band(color: Color) -> Color {
    let mean = (color.x + color.y + color.z) / 3.0;
    let quantized = (mean * TOON_BANDS + TOON_SNAP).floor() / TOON_BANDS;
    color - Vec3::splat(mean - quantized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Light;

    const EPS: f32 = 1e-5;

    fn material() -> Material {
        Material::new(Vec3::splat(0.1), Vec3::splat(0.5), Vec3::splat(0.5), 20.0)
    }

    // ── ambient ───────────────────────────────────────────────────────────

    #[test]
    fn no_lights_is_black() {
        let m = material();
        for (p, n) in [
            (Vec3::Z, Vec3::Z),
            (Vec3::new(0.6, 0.0, 0.8), Vec3::new(0.6, 0.0, 0.8)),
            (Vec3::new(-1.0, 2.0, 3.0), Vec3::new(0.0, -1.0, 0.0)),
        ] {
            assert_eq!(shade(p, n, &m, &[]), Vec3::ZERO);
        }
    }

    #[test]
    fn ambient_sums_over_lights_independent_of_geometry() {
        // Only ka is non-zero, so the result is pure ambient.
        let m = Material::new(Vec3::new(0.1, 0.2, 0.3), Vec3::ZERO, Vec3::ZERO, 1.0);
        let light = Light::directional(Vec3::new(0.3, -0.2, 1.0), Vec3::new(1.0, 0.5, 0.25));
        let expected_one = m.ka * light.color;

        for count in 1..=4 {
            let lights = vec![light; count];
            for (p, n) in [
                (Vec3::Z, Vec3::Z),
                (Vec3::X, Vec3::NEG_X),
                (Vec3::new(0.0, 0.6, 0.8), Vec3::new(0.0, 0.6, 0.8)),
            ] {
                let c = shade(p, n, &m, &lights);
                assert!(c.abs_diff_eq(expected_one * count as f32, EPS), "{count} lights: {c:?}");
            }
        }
    }

    // ── diffuse / specular ────────────────────────────────────────────────

    #[test]
    fn back_facing_directional_light_leaves_only_ambient() {
        let m = Material::new(Vec3::splat(0.1), Vec3::splat(0.7), Vec3::splat(0.9), 10.0);
        let white = Vec3::ONE;

        let cases = [
            // Directly behind.
            (Vec3::Z, Vec3::NEG_Z),
            // Grazing (cosine exactly zero).
            (Vec3::Z, Vec3::X),
            // Oblique, behind.
            (Vec3::Z, Vec3::new(1.0, 0.0, -1.0)),
        ];

        for (normal, dir) in cases {
            let c = shade(normal, normal, &m, &[Light::directional(dir, white)]);
            assert!(c.abs_diff_eq(m.ka, EPS), "normal {normal:?} dir {dir:?}: {c:?}");
        }
    }

    #[test]
    fn unit_directional_light_along_view_gives_full_diffuse_and_specular() {
        let m = material();
        let c = shade(Vec3::Z, Vec3::Z, &m, &[Light::directional(Vec3::Z, Vec3::ONE)]);
        // r = -z + 2z = z, so the specular cosine is exactly 1.
        let expected = m.ka + m.kd + m.ks;
        assert!(c.abs_diff_eq(expected, EPS), "{c:?}");
    }

    #[test]
    fn diffuse_scales_with_cosine() {
        let m = Material::new(Vec3::ZERO, Vec3::ONE, Vec3::ZERO, 1.0);
        let dir = Vec3::new(0.0, 1.0, 1.0);
        let c = shade(Vec3::Z, Vec3::Z, &m, &[Light::directional(dir, Vec3::ONE)]);
        let cos45 = std::f32::consts::FRAC_1_SQRT_2;
        assert!(c.abs_diff_eq(Vec3::splat(cos45), EPS), "{c:?}");
    }

    #[test]
    fn light_color_is_applied_per_channel() {
        let m = Material::new(Vec3::ZERO, Vec3::ONE, Vec3::ZERO, 1.0);
        let light = Light::directional(Vec3::Z, Vec3::new(1.0, 0.5, 0.0));
        let c = shade(Vec3::Z, Vec3::Z, &m, &[light]);
        assert!(c.abs_diff_eq(Vec3::new(1.0, 0.5, 0.0), EPS), "{c:?}");
    }

    #[test]
    fn normal_is_renormalized_for_diffuse() {
        let m = Material::new(Vec3::ZERO, Vec3::ONE, Vec3::ZERO, 1.0);
        let light = [Light::directional(Vec3::Z, Vec3::ONE)];
        let unit = shade(Vec3::Z, Vec3::Z, &m, &light);
        let long = shade(Vec3::Z, Vec3::Z * 3.0, &m, &light);
        assert!(unit.abs_diff_eq(long, EPS));
    }

    #[test]
    fn zero_exponent_with_zero_cosine_counts_as_one() {
        // Light from behind: specular cosine clamps to 0, and 0^0 == 1.
        let m = Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::splat(0.25), 0.0);
        let c = shade(Vec3::Z, Vec3::Z, &m, &[Light::directional(Vec3::NEG_Z, Vec3::ONE)]);
        assert!(c.abs_diff_eq(Vec3::splat(0.25), EPS), "{c:?}");
    }

    #[test]
    fn degenerate_normal_propagates_nan() {
        let m = material();
        let c = shade(Vec3::Z, Vec3::ZERO, &m, &[Light::directional(Vec3::Z, Vec3::ONE)]);
        assert!(c.x.is_nan() && c.y.is_nan() && c.z.is_nan());
    }

    #[test]
    fn sphere_apex_under_point_light_matches_formula() {
        let m = material();
        let light = Light::point(Vec3::new(0.0, 0.0, 5.0), Vec3::ONE);
        let apex = Vec3::Z;

        let c = shade(apex, apex, &m, &[light]);

        // Hand-evaluated: light_dir = (0,0,4), diffuse cosine 1, reflection
        // -(0,0,4) + 2(0,0,1) = (0,0,-2), so the specular term clamps to zero.
        let light_dir = Vec3::new(0.0, 0.0, 4.0);
        let r = -light_dir + 2.0 * light_dir.normalize().dot(apex) * apex;
        let specular = r.z.max(0.0).powf(m.sp);
        let expected = m.ka + m.kd + m.ks * specular;

        assert!(c.abs_diff_eq(expected, EPS), "{c:?} vs {expected:?}");
        assert!(c.abs_diff_eq(m.ka + m.kd, EPS), "diffuse should equal kd at the apex");
        assert!(c.max_element() <= expected.max_element() + EPS);
    }

    #[test]
    fn multiple_lights_accumulate() {
        let m = Material::new(Vec3::ZERO, Vec3::ONE, Vec3::ZERO, 1.0);
        let one = [Light::directional(Vec3::Z, Vec3::splat(0.25))];
        let two = [one[0], Light::directional(Vec3::Z, Vec3::splat(0.5))];
        let a = shade(Vec3::Z, Vec3::Z, &m, &one);
        let b = shade(Vec3::Z, Vec3::Z, &m, &two);
        assert!(a.abs_diff_eq(Vec3::splat(0.25), EPS));
        assert!(b.abs_diff_eq(Vec3::splat(0.75), EPS));
    }

    #[test]
    fn reflection_uses_unnormalized_normal() {
        let m = Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, 1.0);
        let light = [Light::directional(Vec3::Z, Vec3::ONE)];

        let unit = shade(Vec3::Z, Vec3::Z, &m, &light);
        assert!(unit.abs_diff_eq(Vec3::ONE, EPS), "{unit:?}");

        // r = -z + 2 * 1 * (3z) = 5z
        let long = shade(Vec3::Z, Vec3::Z * 3.0, &m, &light);
        assert!(long.abs_diff_eq(Vec3::splat(5.0), EPS), "{long:?}");
    }

    #[test]
    fn off_axis_point_light_specular_matches_formula() {
        let m = Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, 2.0);
        let p = Vec3::new(0.6, 0.0, 0.8);
        let light = Light::point(Vec3::new(0.6, 0.0, 1.8), Vec3::ONE);

        let c = shade(p, p, &m, &[light]);

        // light_dir = (0,0,1), l.n = 0.8, r = (0,0,-1) + 1.6 p = (0.96, 0, 0.28)
        let light_dir = light.pos_dir - p;
        let r = -light_dir + 2.0 * light_dir.normalize().dot(p.normalize()) * p;
        assert!((r.z - 0.28).abs() < EPS, "{r:?}");
        let expected = Vec3::splat(r.z.powf(2.0));

        assert!(c.abs_diff_eq(expected, EPS), "{c:?} vs {expected:?}");
        assert!(c.abs_diff_eq(Vec3::splat(0.0784), 1e-4), "{c:?}");
    }

    // ── toon ──────────────────────────────────────────────────────────────

    #[test]
    fn toon_shifts_mean_down_to_band() {
        let c = toon_band(Vec3::new(0.5, 0.5, 0.5));
        assert!(c.abs_diff_eq(Vec3::splat(0.4), EPS), "{c:?}");
    }

    #[test]
    fn toon_preserves_channel_differences() {
        let input = Vec3::new(0.9, 0.3, 0.1);
        let out = toon_band(input);
        assert!((out.x - out.y - (input.x - input.y)).abs() < EPS);
        assert!((out.y - out.z - (input.y - input.z)).abs() < EPS);
        // mean 0.4333 -> band 0.4
        let mean = (out.x + out.y + out.z) / 3.0;
        assert!((mean - 0.4).abs() < EPS, "{mean}");
    }

    #[test]
    fn toon_never_brightens() {
        for c in [Vec3::new(0.05, 0.1, 0.2), Vec3::new(0.99, 0.2, 0.7), Vec3::splat(1.3)] {
            let out = toon_band(c);
            let before = (c.x + c.y + c.z) / 3.0;
            let after = (out.x + out.y + out.z) / 3.0;
            assert!(after <= before + EPS);
            assert!(before - after < TOON_STEP + EPS);
        }
    }

    #[test]
    fn toon_is_idempotent_within_one_step() {
        for c in [
            Vec3::new(0.12, 0.55, 0.31),
            Vec3::new(0.9, 0.3, 0.1),
            Vec3::splat(0.5),
            Vec3::new(1.4, 0.2, 0.0),
            // First pass lands the mean a hair below zero.
            Vec3::new(0.0, 0.0488, 0.1628),
        ] {
            let once = toon_band(c);
            let twice = toon_band(once);
            let delta = (twice - once).abs().max_element();
            assert!(delta < TOON_STEP, "{c:?}: {delta}");
            assert!(delta < EPS, "{c:?}: second pass moved by {delta}");
        }
    }

    #[test]
    fn toon_second_pass_is_stable_over_color_grid() {
        let steps = 40;
        let mut worst = 0.0f32;
        for r in 0..=steps {
            for g in 0..=steps {
                for b in 0..=steps {
                    let c = Vec3::new(r as f32, g as f32, b as f32) / steps as f32;
                    let once = toon_band(c);
                    let delta = (toon_band(once) - once).abs().max_element();
                    worst = worst.max(delta);
                }
            }
        }
        assert!(worst < EPS, "worst second-pass change {worst}");
    }

    #[test]
    fn toon_keeps_exact_band_edges() {
        for k in 0..=5 {
            let edge = Vec3::splat(k as f32 * TOON_STEP);
            assert!(toon_band(edge).abs_diff_eq(edge, EPS), "{edge:?}");
        }
    }
}
