//! Sphere primitive and its ray intersection.

use crate::Color;
use lumen_math::{Ray, Vec3};

/// Radius shared by every sphere in the scene.
pub const SPHERE_RADIUS: f32 = 0.5;

const RADIUS_SQUARED: f32 = SPHERE_RADIUS * SPHERE_RADIUS;

/// The two parametric distances at which a ray crosses a sphere surface,
/// nearest first. A tangent ray yields two equal roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    pub near: f32,
    pub far: f32,
}

impl Roots {
    /// Both roots, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = f32> {
        [self.near, self.far].into_iter()
    }
}

/// A sphere of radius [`SPHERE_RADIUS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub albedo: Color,
}

/// Shared terms of the geometric solver: `s` is the projection of the
/// center onto the ray, `l_squared` the squared center distance and `q` the
/// half chord length.
struct Chord {
    s: f32,
    l_squared: f32,
    q: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, albedo: Color) -> Self {
        Self { center, albedo }
    }

    /// Outward unit normal at a point on the surface.
    ///
    /// `point` must not coincide with the center.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn chord(&self, ray: &Ray) -> Option<Chord> {
        let l = self.center - ray.origin;
        let s = l.dot(ray.direction);
        let l_squared = l.dot(l);

        // Sphere behind the origin, and origin outside it
        if s < 0.0 && l_squared > RADIUS_SQUARED {
            return None;
        }

        // Squared distance from the center to the ray line
        let m_squared = l_squared - s * s;
        if m_squared > RADIUS_SQUARED {
            return None;
        }

        // Cancellation at grazing tangents can push the radicand below zero
        let q = (RADIUS_SQUARED - m_squared).max(0.0).sqrt();
        Some(Chord { s, l_squared, q })
    }

    /// Both distances along `ray` where it crosses the surface.
    ///
    /// `ray.direction` must be unit length. Roots may be negative when the
    /// origin is inside the sphere; filtering is up to the caller.
    pub fn intersect(&self, ray: &Ray) -> Option<Roots> {
        self.chord(ray).map(|c| Roots {
            near: c.s - c.q,
            far: c.s + c.q,
        })
    }

    /// The single physically meaningful root: the exit point when the origin
    /// is inside the sphere, the entry point otherwise.
    pub fn nearest_root(&self, ray: &Ray) -> Option<f32> {
        self.chord(ray).map(|c| {
            if c.l_squared > RADIUS_SQUARED {
                c.s - c.q
            } else {
                c.s + c.q
            }
        })
    }
}
