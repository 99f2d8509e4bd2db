//! Nearest-hit selection over a list of spheres.

use crate::Sphere;
use lumen_math::{Interval, Ray, Vec3};

/// The closest surface a ray strikes.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionPoint<'a> {
    /// Sphere that was struck
    pub sphere: &'a Sphere,
    /// World-space hit location
    pub point: Vec3,
    /// Distance along the ray
    pub t: f32,
}

impl<'a> IntersectionPoint<'a> {
    /// Outward surface normal at the hit.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.sphere.normal_at(self.point)
    }
}

/// Find the closest intersection of `ray` with any sphere.
///
/// Every root of every sphere is considered; only roots strictly inside
/// `ray_t` survive. Pass a small positive minimum to keep a bounced ray from
/// re-hitting the surface it starts on. On equal distances the sphere that
/// comes first in `spheres` wins.
pub fn nearest_hit<'a>(
    spheres: &'a [Sphere],
    ray: &Ray,
    ray_t: Interval,
) -> Option<IntersectionPoint<'a>> {
    let mut closest: Option<(&'a Sphere, f32)> = None;
    let mut closest_so_far = ray_t.max;

    for sphere in spheres {
        let Some(roots) = sphere.intersect(ray) else {
            continue;
        };

        for t in roots.iter() {
            if Interval::new(ray_t.min, closest_so_far).surrounds(t) {
                closest = Some((sphere, t));
                closest_so_far = t;
            }
        }
    }

    closest.map(|(sphere, t)| IntersectionPoint {
        sphere,
        point: ray.at(t),
        t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    const FORWARD: Interval = Interval::beyond(1e-5);

    fn two_spheres() -> (Sphere, Sphere) {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -1.0), Color::new(1.0, 0.0, 0.0));
        let far = Sphere::new(Vec3::new(0.0, 0.0, -3.0), Color::new(0.0, 0.0, 1.0));
        (near, far)
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let (near, far) = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let spheres = [near, far];
        let hit = nearest_hit(&spheres, &ray, FORWARD).expect("should hit");
        assert_eq!(*hit.sphere, near);
        assert!((hit.t - 0.5).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-6);
    }

    #[test]
    fn test_nearest_hit_ignores_insertion_order() {
        let (near, far) = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let forward = [near, far];
        let reversed = [far, near];
        let a = nearest_hit(&forward, &ray, FORWARD).expect("should hit");
        let b = nearest_hit(&reversed, &ray, FORWARD).expect("should hit");

        assert_eq!(*a.sphere, *b.sphere);
        assert_eq!(a.t, b.t);
    }

    #[test]
    fn test_nearest_hit_skips_roots_at_origin() {
        let (near, _) = two_spheres();
        // Start on the surface, heading into the sphere
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.5), Vec3::NEG_Z);

        let spheres = [near];
        let hit = nearest_hit(&spheres, &ray, FORWARD).expect("should exit");
        assert!((hit.t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_miss() {
        let (near, far) = two_spheres();
        let ray = Ray::new(Vec3::new(0.9, 0.9, 0.0), Vec3::NEG_Z);

        assert!(nearest_hit(&[near, far], &ray, FORWARD).is_none());
        assert!(nearest_hit(&[], &ray, FORWARD).is_none());
    }

    #[test]
    fn test_intersection_normal() {
        let (near, _) = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let spheres = [near];
        let hit = nearest_hit(&spheres, &ray, FORWARD).expect("should hit");
        assert!((hit.normal() - Vec3::Z).length() < 1e-6);
    }
}
