// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Recursive radiance-evaluation contract. One call per camera ray (and
/// per internally spawned bounce ray); evaluation is purely functional per
/// top-level ray, so implementors must be shareable across workers while
/// all mutable sampling state lives in the injected rng.
pub trait Integrator: Send + Sync {
    /// Outgoing radiance reaching the ray origin. A miss yields the
    /// integrator's background color.
    fn compute_color(&self, ray: &Ray3f, scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum;

    fn background(&self) -> RGBSpectrum;
}
