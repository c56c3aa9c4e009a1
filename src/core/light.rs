// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Area emitter contract consumed by the integrators. Positions are
/// re-sampled on every call; nothing is memoized across calls, so a light
/// is safe to share between concurrently evaluated rays.
pub trait LightSource: Send + Sync {
    /// Uniform random position on the emitting surface.
    fn sample_position(&self, rng: &mut LcgRng) -> Vector3f;

    /// Deterministic map from a canonical `[0,1]^2` point onto the
    /// emitting surface. Stratified estimators build their own variates
    /// and feed them through here.
    fn position_at(&self, u: &Vector2f) -> Vector3f;

    /// Emitted radiance.
    fn intensity(&self) -> RGBSpectrum;

    fn normal(&self) -> Vector3f;

    fn area(&self) -> Float;
}
