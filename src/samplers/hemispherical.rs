// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::math::constants::Vector3f;
use crate::math::warp::{sample_cosine_hemisphere, sample_uniform_hemisphere};

/// Draws world-space directions in the hemisphere around a surface normal.
/// Stateless; every draw consumes fresh variates from the injected rng.
pub struct HemisphericalSampler;

impl HemisphericalSampler {
    pub fn new() -> Self {
        Self
    }

    /// Direction with constant density over the hemisphere of `n`.
    /// Estimators using this pair it with the `1 / (2 pi)` pdf.
    pub fn uniform_about(&self, n: &Vector3f, rng: &mut LcgRng) -> Vector3f {
        let local = sample_uniform_hemisphere(&rng.next_2d());
        let (tangent, bitangent) = build_tangent_frame(n);
        local_to_world(&local, &tangent, &bitangent, n)
    }

    /// Direction with density proportional to `cos(theta)` about `n`.
    pub fn cosine_about(&self, n: &Vector3f, rng: &mut LcgRng) -> Vector3f {
        let local = sample_cosine_hemisphere(&rng.next_2d());
        let (tangent, bitangent) = build_tangent_frame(n);
        local_to_world(&local, &tangent, &bitangent, n)
    }
}

fn build_tangent_frame(n: &Vector3f) -> (Vector3f, Vector3f) {
    let up = if n.z.abs() < 0.999 {
        Vector3f::new(0.0, 0.0, 1.0)
    } else {
        Vector3f::new(1.0, 0.0, 0.0)
    };
    let tangent = n.cross(&up).normalize();
    let bitangent = n.cross(&tangent).normalize();
    (tangent, bitangent)
}

fn local_to_world(v: &Vector3f, t: &Vector3f, b: &Vector3f, n: &Vector3f) -> Vector3f {
    t * v.x + b * v.y + n * v.z
}
