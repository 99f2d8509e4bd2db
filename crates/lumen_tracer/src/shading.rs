//! Phong/Lambert shading terms and the shadow test.
//!
//! All terms use the struck sphere's albedo as their only color source;
//! lights have a position and nothing else.

use crate::{nearest_hit, Color, IntersectionPoint, Light, Sphere};
use lumen_math::{Interval, Ray, Vec3};

/// Specular parameters shared by every sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Scalar intensity of the highlight
    pub spec_value: f32,
    /// Exponent controlling the highlight's tightness
    pub spec_power: f32,
}

impl Material {
    pub fn new(spec_value: f32, spec_power: f32) -> Self {
        Self {
            spec_value,
            spec_power,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            spec_value: 0.5,
            spec_power: 16.0,
        }
    }
}

/// Ambient term: the albedo scaled by a constant factor.
#[inline]
pub fn ambient(albedo: Color, factor: f32) -> Color {
    albedo * factor
}

/// Lambert cosine between the direction to the light and the surface normal.
pub fn lambert(point: Vec3, normal: Vec3, light: Vec3) -> f32 {
    let light_dir = (light - point).normalize();
    light_dir.dot(normal).max(0.0)
}

/// Blinn-style specular intensity.
///
/// Uses `normalize(light_dir - view_dir)` rather than the usual half vector
/// `normalize(light_dir + view_dir)`; output depends on the exact formula.
pub fn specular(material: &Material, point: Vec3, normal: Vec3, light: Vec3, eye: Vec3) -> f32 {
    let light_dir = (light - point).normalize();
    let view_dir = (point - eye).normalize();
    let blinn_dir = (light_dir - view_dir).normalize();

    // A degenerate blinn_dir is NaN here, and NaN.max(0.0) is 0.0
    material.spec_value * blinn_dir.dot(normal).max(0.0).powf(material.spec_power)
}

/// True if any sphere lies along the ray from `point` toward `light`.
///
/// The sphere that owns `point` is not excluded. Hits past the light still
/// count as occluders.
pub fn is_shadowed(spheres: &[Sphere], point: Vec3, light: Vec3, epsilon: f32) -> bool {
    let to_light = Ray::new(point, (light - point).normalize());
    nearest_hit(spheres, &to_light, Interval::beyond(epsilon)).is_some()
}

/// Diffuse plus specular light from one point light, or black if shadowed.
///
/// `eye` is the origin of the ray that produced `hit`.
pub fn light_contribution(
    spheres: &[Sphere],
    hit: &IntersectionPoint,
    light: &Light,
    material: &Material,
    eye: Vec3,
    epsilon: f32,
) -> Color {
    if is_shadowed(spheres, hit.point, light.position, epsilon) {
        return Color::BLACK;
    }

    let normal = hit.normal();
    let albedo = hit.sphere.albedo;
    let diffuse = lambert(hit.point, normal, light.position);
    let spec = specular(material, hit.point, normal, light.position, eye);

    albedo * diffuse + albedo * spec
}

/// Mirror `direction` about `normal`.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - normal * (2.0 * direction.dot(normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, Color::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn test_ambient() {
        let color = ambient(Color::new(1.0, 0.5, 0.0), 0.1);
        assert!((color.red() - 0.1).abs() < 1e-6);
        assert!((color.green() - 0.05).abs() < 1e-6);
        assert_eq!(color.blue(), 0.0);
    }

    #[test]
    fn test_lambert() {
        let point = Vec3::new(0.0, 0.0, -0.5);
        let normal = Vec3::Z;

        // Light straight above the surface
        assert!((lambert(point, normal, Vec3::new(0.0, 0.0, 1.0)) - 1.0).abs() < 1e-6);
        // Light behind the surface
        assert_eq!(lambert(point, normal, Vec3::new(0.0, 0.0, -2.0)), 0.0);
        // Light at 45 degrees
        let oblique = lambert(point, normal, Vec3::new(1.0, 0.0, 0.5));
        assert!((oblique - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_specular_uses_light_minus_view() {
        let material = Material::new(1.0, 1.0);
        let point = Vec3::ZERO;
        let normal = Vec3::Z;
        // Eye straight above, light on the x axis at 45 degrees:
        // light_dir = (1, 0, 1)/sqrt2, view_dir = (0, 0, -1)
        let eye = Vec3::new(0.0, 0.0, 1.0);
        let light = Vec3::new(1.0, 0.0, 1.0);

        let expected_dir = (Vec3::new(1.0, 0.0, 1.0).normalize() - Vec3::NEG_Z).normalize();
        let expected = expected_dir.dot(normal);

        let value = specular(&material, point, normal, light, eye);
        assert!((value - expected).abs() < 1e-6);

        // The textbook half vector would give a different value here
        let half = (Vec3::new(1.0, 0.0, 1.0).normalize() + Vec3::NEG_Z).normalize();
        assert!((value - half.dot(normal).max(0.0)).abs() > 0.1);
    }

    #[test]
    fn test_specular_respects_power_and_intensity() {
        let point = Vec3::ZERO;
        let normal = Vec3::Z;
        let eye = Vec3::new(0.0, 0.0, 1.0);
        let light = Vec3::new(1.0, 0.0, 1.0);

        let base = specular(&Material::new(1.0, 1.0), point, normal, light, eye);
        let squared = specular(&Material::new(1.0, 2.0), point, normal, light, eye);
        let halved = specular(&Material::new(0.5, 1.0), point, normal, light, eye);

        assert!((squared - base * base).abs() < 1e-6);
        assert!((halved - base * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_blocker_casts_shadow() {
        let point = Vec3::new(0.0, 0.0, 0.0);
        let light = Vec3::new(0.0, 0.0, 4.0);
        let blocker = sphere_at(Vec3::new(0.0, 0.0, 2.0));

        assert!(is_shadowed(&[blocker], point, light, EPSILON));
        assert!(!is_shadowed(&[], point, light, EPSILON));

        let aside = sphere_at(Vec3::new(3.0, 0.0, 2.0));
        assert!(!is_shadowed(&[aside], point, light, EPSILON));
    }

    #[test]
    fn test_lit_side_is_not_self_shadowed() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0));
        let point = Vec3::new(0.0, 0.0, -0.5);
        let light = Vec3::new(0.5, 0.5, 0.0);

        assert!(!is_shadowed(&[sphere], point, light, EPSILON));
    }

    #[test]
    fn test_far_side_is_self_shadowed() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0));
        let point = Vec3::new(0.0, 0.0, -1.5);
        let light = Vec3::new(0.0, 0.0, 1.0);

        assert!(is_shadowed(&[sphere], point, light, EPSILON));
    }

    #[test]
    fn test_light_contribution() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0));
        let spheres = [sphere];
        let hit = IntersectionPoint {
            sphere: &spheres[0],
            point: Vec3::new(0.0, 0.0, -0.5),
            t: 0.5,
        };
        let material = Material::default();
        let light = Light::new(Vec3::new(0.5, 0.5, 0.0));

        let lit = light_contribution(&spheres, &hit, &light, &material, Vec3::ZERO, EPSILON);
        let diffuse = lambert(hit.point, Vec3::Z, light.position);
        let spec = specular(&material, hit.point, Vec3::Z, light.position, Vec3::ZERO);
        assert!((lit.red() - (diffuse + spec)).abs() < 1e-5);
        assert_eq!(lit.green(), 0.0);
        assert_eq!(lit.blue(), 0.0);

        // Put a blocker between the surface and the light
        let blocked = [sphere, sphere_at(Vec3::new(0.25, 0.25, -0.25))];
        let shadowed = light_contribution(&blocked, &hit, &light, &material, Vec3::ZERO, EPSILON);
        assert_eq!(shadowed, Color::BLACK);
    }

    #[test]
    fn test_reflect() {
        let reflected = reflect(Vec3::NEG_Z, Vec3::Z);
        assert_eq!(reflected, Vec3::Z);

        let incoming = Vec3::new(1.0, 0.0, -1.0).normalize();
        let reflected = reflect(incoming, Vec3::Z);
        assert!((reflected - Vec3::new(1.0, 0.0, 1.0).normalize()).length() < 1e-6);
        assert!((reflected.length() - 1.0).abs() < 1e-6);
    }
}
