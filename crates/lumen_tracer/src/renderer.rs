//! Recursive render driver.
//!
//! Implements a Whitted-style bounce loop with:
//! - Orthographic primary rays, one per pixel
//! - Ambient on the primary hit, Lambert + specular per light on every hit
//! - Mirror reflections with geometric attenuation, up to a depth limit

use crate::tga::{buffer_len, BYTES_PER_PIXEL};
use crate::{
    ambient, light_contribution, nearest_hit, reflect, Color, PixelBuffer, RenderError,
    RenderResult, Scene,
};
use lumen_math::{Interval, Ray, Vec3};
use std::time::{Duration, Instant};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Width and height of the square image in pixels
    pub resolution: u32,
    /// Maximum number of surface hits followed per pixel
    pub max_depth: u32,
    /// Multiplier applied to the reflection factor after every hit
    pub reflection_decay: f32,
    /// Ambient factor applied to the albedo of the primary hit
    pub ambient: f32,
    /// Roots at or below this distance are ignored
    pub hit_epsilon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: 128,
            max_depth: 10,
            reflection_decay: 0.6,
            ambient: 0.1,
            hit_epsilon: 1e-5,
        }
    }
}

impl RenderConfig {
    /// Set image resolution (builder pattern).
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the bounce limit (builder pattern).
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Bytes needed for a buffer at this resolution.
    pub fn buffer_len(&self) -> RenderResult<usize> {
        buffer_len(self.resolution).ok_or(RenderError::InvalidResolution(self.resolution))
    }
}

/// Map a pixel index onto the [-1, 1] world span of the image plane.
#[inline]
pub fn pixel_to_world(coord: u32, resolution: u32) -> f32 {
    ((coord as f32 / resolution as f32) - 0.5) * 2.0
}

/// The orthographic primary ray for pixel (`col`, `row`): starts on the z=0
/// plane and looks down -Z.
pub fn primary_ray(col: u32, row: u32, resolution: u32) -> Ray {
    let origin = Vec3::new(
        pixel_to_world(col, resolution),
        pixel_to_world(row, resolution),
        0.0,
    );
    Ray::new(origin, Vec3::NEG_Z)
}

/// Outcome of one [`PathState::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounce {
    /// A surface was hit; `contribution` is the attenuated light added.
    Hit { contribution: Color },
    /// The ray left the scene.
    Miss,
    /// The bounce limit was reached.
    DepthLimit,
}

/// Per-pixel bounce state: current ray, bounce depth, reflection factor and
/// the color accumulated so far.
#[derive(Debug, Clone, Copy)]
pub struct PathState {
    ray: Ray,
    depth: u32,
    reflection_factor: f32,
    color: Color,
}

impl PathState {
    /// Start a path at depth 0 with full reflection and no color.
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            depth: 0,
            reflection_factor: 1.0,
            color: Color::UNDEFINED,
        }
    }

    /// Follow the current ray to its next surface.
    ///
    /// On a hit the ambient term is added (first hit only), then every
    /// light's contribution scaled by the reflection factor; the factor
    /// decays and the ray is mirrored about the surface normal. Once `Miss`
    /// or `DepthLimit` is returned the state no longer changes.
    pub fn step(&mut self, scene: &Scene, config: &RenderConfig) -> Bounce {
        if self.depth >= config.max_depth {
            return Bounce::DepthLimit;
        }

        let ray_t = Interval::beyond(config.hit_epsilon);
        let Some(hit) = nearest_hit(&scene.spheres, &self.ray, ray_t) else {
            return Bounce::Miss;
        };

        if self.depth == 0 {
            self.color = self.color + ambient(hit.sphere.albedo, config.ambient);
        }

        let mut contribution = Color::BLACK;
        for light in &scene.lights {
            let lit = light_contribution(
                &scene.spheres,
                &hit,
                light,
                &scene.material,
                self.ray.origin,
                config.hit_epsilon,
            ) * self.reflection_factor;
            self.color = self.color + lit;
            contribution = contribution + lit;
        }

        self.reflection_factor *= config.reflection_decay;
        self.ray = Ray::new(hit.point, reflect(self.ray.direction, hit.normal()));
        self.depth += 1;

        Bounce::Hit { contribution }
    }

    pub fn ray(&self) -> Ray {
        self.ray
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn reflection_factor(&self) -> f32 {
        self.reflection_factor
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Trace a ray through all of its bounces and return the accumulated color.
///
/// The result is undefined if the ray hits nothing at all.
pub fn trace_ray(scene: &Scene, config: &RenderConfig, ray: Ray) -> Color {
    let mut state = PathState::new(ray);
    while let Bounce::Hit { .. } = state.step(scene, config) {}
    state.color()
}

/// Color of pixel (`col`, `row`).
pub fn trace_pixel(scene: &Scene, config: &RenderConfig, col: u32, row: u32) -> Color {
    trace_ray(scene, config, primary_ray(col, row, config.resolution))
}

/// Summary of a [`render_into`] pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Pixels whose primary ray struck a sphere
    pub hit_pixels: usize,
    /// Pixels left untouched for the background
    pub background_pixels: usize,
    pub elapsed: Duration,
}

/// Render `scene` into a caller-provided BGR buffer.
///
/// `pixels` must hold exactly `3 * resolution²` bytes, row-major with the
/// first row at world y = -1. Pixels whose primary ray misses everything
/// keep their existing bytes.
pub fn render_into(
    scene: &Scene,
    config: &RenderConfig,
    pixels: &mut [u8],
) -> RenderResult<RenderStats> {
    let expected = config.buffer_len()?;
    if pixels.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    log::debug!(
        "Rendering {}x{}: {} spheres, {} lights, max depth {}",
        config.resolution,
        config.resolution,
        scene.sphere_count(),
        scene.light_count(),
        config.max_depth
    );

    let start = Instant::now();
    let mut stats = RenderStats::default();
    let row_len = config.resolution as usize * BYTES_PER_PIXEL;

    for (row, row_bytes) in pixels.chunks_exact_mut(row_len).enumerate() {
        for (col, pixel) in row_bytes.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let color = trace_pixel(scene, config, col as u32, row as u32);
            if color.is_defined() {
                pixel.copy_from_slice(&color.to_bgr());
                stats.hit_pixels += 1;
            } else {
                stats.background_pixels += 1;
            }
        }
    }

    stats.elapsed = start.elapsed();
    log::info!(
        "Rendered {}x{} in {:?} ({} hit, {} background)",
        config.resolution,
        config.resolution,
        stats.elapsed,
        stats.hit_pixels,
        stats.background_pixels
    );

    Ok(stats)
}

/// Allocate a buffer, paint the background gradient and render over it.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<PixelBuffer> {
    let mut buffer = PixelBuffer::new(config.resolution)?;
    buffer.fill_background_gradient();
    render_into(scene, config, buffer.bytes_mut())?;
    Ok(buffer)
}
