// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{Float, PI, TWO_PI, Vector3f};
use crate::math::optics::{reflect, refract};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::samplers::hemispherical::HemisphericalSampler;

const DEFAULT_MAX_DEPTH: u32 = 10;
const DEFAULT_AMBIENT: Float = 0.2;
const HEMISPHERE_SAMPLES: u32 = 200;

/// Direct-illumination evaluator that probes the hemisphere above each
/// diffuse hit instead of sampling light surfaces. Only probes landing on
/// an emitter contribute; everything else is indirect light and ignored.
/// Specular and transmissive surfaces recurse as in the Whitted evaluator.
pub struct HemisphericalIntegrator {
    bg_color: RGBSpectrum,
    ambient_light: RGBSpectrum,
    max_depth: u32,
    cosine_weighted: bool,
}

impl HemisphericalIntegrator {
    pub fn new(bg_color: RGBSpectrum) -> Self {
        Self {
            bg_color,
            ambient_light: RGBSpectrum::from_scalar(DEFAULT_AMBIENT),
            max_depth: DEFAULT_MAX_DEPTH,
            cosine_weighted: false,
        }
    }

    pub fn with_ambient(mut self, ambient_light: RGBSpectrum) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Importance-sample the projection term instead of the bare
    /// hemisphere. Same estimate, lower variance near grazing angles.
    pub fn with_cosine_sampling(mut self) -> Self {
        self.cosine_weighted = true;
        self
    }

    fn direct_lighting(&self, its: &SurfaceIntersection, wo: &Vector3f, n: &Vector3f,
                       scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let material = its.material();
        let sampler = HemisphericalSampler::new();
        let inv_n = 1.0 / HEMISPHERE_SAMPLES as Float;
        let mut color = RGBSpectrum::default();

        for _ in 0..HEMISPHERE_SAMPLES {
            let wi = if self.cosine_weighted {
                sampler.cosine_about(n, rng)
            } else {
                sampler.uniform_about(n, rng)
            };

            let probe = Ray3f::new(its.p(), wi, None, None);
            let li = match scene.closest_intersection(&probe) {
                Some(hit) if hit.material().is_emissive() =>
                    hit.material().emissive_radiance(),
                _ => RGBSpectrum::default(),
            };
            if li.is_black() {
                continue;
            }

            let fr = material.reflectance(n, wo, &wi);
            // Under cosine sampling the cos(theta) / pi pdf cancels the
            // projection term; under uniform sampling 2 pi compensates it.
            let weight = if self.cosine_weighted {
                PI
            } else {
                wi.dot(n).max(0.0) * TWO_PI
            };
            color += li * fr * (weight * inv_n);
        }

        color + self.ambient_light * material.diffuse_reflectance()
    }
}

impl Integrator for HemisphericalIntegrator {
    fn compute_color(&self, ray: &Ray3f, scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let its = match scene.closest_intersection(ray) {
            Some(its) => its,
            None => return self.bg_color,
        };

        let material = its.material();
        let emitted = material.emissive_radiance();
        if ray.depth >= self.max_depth {
            return emitted;
        }

        let wo = -ray.dir();
        let n = its.normal().normalize();

        if material.has_specular() {
            let wr = reflect(&wo, &n);
            let reflected = Ray3f::new(its.p(), wr, None, None).with_depth(ray.depth + 1);
            return emitted + self.compute_color(&reflected, scene, rng);
        }

        if material.has_transmission() {
            let wt = refract(&wo, &n, material.index_of_refraction()).direction();
            let refracted = Ray3f::new(its.p(), wt, None, None).with_depth(ray.depth + 1);
            return emitted + self.compute_color(&refracted, scene, rng);
        }

        if material.has_diffuse_or_glossy() {
            return emitted + self.direct_lighting(&its, &wo, &n, scene, rng);
        }

        emitted
    }

    fn background(&self) -> RGBSpectrum {
        self.bg_color
    }
}
