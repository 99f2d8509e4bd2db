//! Scene description: spheres, point lights and the shared material.
//!
//! A scene is built once and then only read; the renderer takes it by
//! reference.

use crate::{Color, Material, Sphere};
use lumen_math::Vec3;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// Ordered spheres and lights plus the material every sphere shares.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub material: Material,
}

impl Scene {
    /// Create an empty scene with the default material.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere (builder pattern).
    pub fn with_sphere(mut self, center: Vec3, albedo: Color) -> Self {
        self.spheres.push(Sphere::new(center, albedo));
        self
    }

    /// Add a point light (builder pattern).
    pub fn with_light(mut self, position: Vec3) -> Self {
        self.lights.push(Light::new(position));
        self
    }

    /// Replace the shared material (builder pattern).
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// The built-in scene rendered by the `lumen` binary: a red sphere
    /// stacked on a yellow one, lit from the upper right with a dimmer
    /// fill light from the left.
    pub fn default_scene() -> Self {
        Self::new()
            .with_sphere(Vec3::new(0.0, 0.3, -1.0), Color::new(1.0, 0.0, 0.0))
            .with_sphere(Vec3::new(0.0, -0.3, -1.0), Color::new(0.96, 0.94, 0.32))
            .with_light(Vec3::new(0.5, 0.5, 0.0))
            .with_light(Vec3::new(-1.0, 0.0, 0.5))
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
