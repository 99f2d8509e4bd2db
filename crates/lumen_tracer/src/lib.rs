//! Lumen - a small recursive ray tracer.
//!
//! Casts one orthographic primary ray per pixel into a scene of fixed-radius
//! spheres lit by point lights, shades hits with ambient, Lambert and a
//! Blinn-style specular term, tests shadows, and follows mirror reflections
//! up to a depth limit with geometric attenuation. The result is written as
//! an uncompressed 24-bit TGA image.

mod color;
mod error;
mod hit;
mod tga;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use color::Color;
pub use error::{ImageError, ImageResult, RenderError, RenderResult};
pub use hit::{nearest_hit, IntersectionPoint};
pub use tga::{save_tga, tga_header, write_tga, PixelBuffer, TGA_HEADER_LEN};
pub use renderer::{
    pixel_to_world, primary_ray, render, render_into, trace_pixel, trace_ray, Bounce, PathState,
    RenderConfig, RenderStats,
};
pub use scene::{Light, Scene};
pub use shading::{ambient, is_shadowed, lambert, light_contribution, reflect, specular, Material};
pub use sphere::{Roots, Sphere, SPHERE_RADIUS};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
