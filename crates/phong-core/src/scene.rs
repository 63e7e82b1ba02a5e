use glam::Vec3;

use crate::Color;

/// Surface reflectance used by every shading evaluation.
///
/// All channels default to zero, which renders black until the caller sets them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Material {
    /// Ambient reflectance.
    pub ka: Color,
    /// Diffuse reflectance.
    pub kd: Color,
    /// Specular reflectance.
    pub ks: Color,
    /// Specular (Phong) exponent. Non-negative.
    pub sp: f32,
}

impl Material {
    #[inline]
    pub const fn new(ka: Color, kd: Color, ks: Color, sp: f32) -> Self {
        Self { ka, kd, ks, sp }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LightKind {
    /// `pos_dir` is an absolute position in the shape-local frame.
    Point,
    /// `pos_dir` is the direction the light arrives from.
    Directional,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub pos_dir: Vec3,
    pub color: Color,
}

impl Light {
    #[inline]
    pub const fn point(position: Vec3, color: Color) -> Self {
        Self { kind: LightKind::Point, pos_dir: position, color }
    }

    #[inline]
    pub const fn directional(direction: Vec3, color: Color) -> Self {
        Self { kind: LightKind::Directional, pos_dir: direction, color }
    }

    /// Direction from `position` towards the light. Not normalized.
    #[inline]
    pub fn direction_from(&self, position: Vec3) -> Vec3 {
        match self.kind {
            LightKind::Directional => self.pos_dir,
            LightKind::Point => self.pos_dir - position,
        }
    }
}

/// Material plus the ordered illumination set.
///
/// Built once from the command line and shared read-only by every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub material: Material,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(material: Material) -> Self {
        Self { material, lights: Vec::new() }
    }

    /// Appends a light; iteration order is insertion order.
    pub fn push_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_direction_depends_on_position() {
        let l = Light::point(Vec3::new(0.0, 0.0, 5.0), Vec3::ONE);
        assert_eq!(l.direction_from(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(l.direction_from(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(-1.0, 0.0, 5.0));
    }

    #[test]
    fn directional_light_ignores_position() {
        let l = Light::directional(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
        assert_eq!(l.direction_from(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(l.direction_from(Vec3::splat(7.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn push_light_preserves_order() {
        let mut scene = Scene::default();
        scene.push_light(Light::point(Vec3::X, Vec3::ONE));
        scene.push_light(Light::directional(Vec3::Y, Vec3::ONE));
        assert_eq!(scene.lights[0].kind, LightKind::Point);
        assert_eq!(scene.lights[1].kind, LightKind::Directional);
    }

    #[test]
    fn default_material_is_black() {
        let m = Material::default();
        assert_eq!(m.ka, Vec3::ZERO);
        assert_eq!(m.kd, Vec3::ZERO);
        assert_eq!(m.ks, Vec3::ZERO);
        assert_eq!(m.sp, 0.0);
    }
}
