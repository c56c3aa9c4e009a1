// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{EPSILON, Float, TWO_PI, Vector2f, Vector3f};
use crate::math::optics::{reflect, refract};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::samplers::hemispherical::HemisphericalSampler;

const MAX_DEPTH: u32 = 3;
const LIGHT_SAMPLES: u32 = 5;
// Sample-count decay by depth is a tuned variance/cost policy, not
// Russian-roulette termination; the estimator stays unbiased because the
// per-sample weight is 1/N either way.
const INDIRECT_SAMPLES_FIRST_BOUNCE: u32 = 100;

/// Next-event-estimation evaluator. Direct illumination explicitly
/// samples the light surfaces; indirect bounces recurse through
/// `reflected_radiance` so the emission at a bounce point is never
/// counted twice.
pub struct NeeIntegrator {
    bg_color: RGBSpectrum,
}

impl NeeIntegrator {
    pub fn new(bg_color: RGBSpectrum) -> Self {
        Self { bg_color }
    }

    fn reflected_radiance(&self, its: &SurfaceIntersection, wo: &Vector3f, depth: u32,
                          scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let direct = self.direct_radiance(its, wo, scene, rng);
        let indirect = self.indirect_radiance(its, wo, depth, scene, rng);
        direct + indirect
    }

    /// Stratified area sampling of every light, shadow-tested, weighted by
    /// the geometric term and the light area.
    fn direct_radiance(&self, its: &SurfaceIntersection, wo: &Vector3f,
                       scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let n = its.normal().normalize();
        let material = its.material();
        let mut color = RGBSpectrum::default();
        let inv_n = 1.0 / LIGHT_SAMPLES as Float;

        for light in scene.lights() {
            for j in 0..LIGHT_SAMPLES {
                // First variate jittered within its stratum.
                let u = Vector2f::new((j as Float + rng.next_f32()) * inv_n, rng.next_f32());
                let light_pos = light.position_at(&u);

                let to_light = light_pos - its.p();
                let dist2 = to_light.dot(&to_light);
                if dist2 <= 0.0 {
                    continue;
                }
                let dist = dist2.sqrt();
                let wi = to_light / dist;

                let geometric_term =
                    wi.dot(&n).max(0.0) * (-wi).dot(&light.normal()).max(0.0) / dist2;
                if geometric_term <= 0.0 {
                    continue;
                }

                // Occluded iff the nearest hit is strictly closer than the
                // sampled light point.
                let shadow_ray = Ray3f::new(its.p(), wi, None, None);
                if let Some(blocker) = scene.closest_intersection(&shadow_ray) {
                    if blocker.t() < dist - EPSILON {
                        continue;
                    }
                }

                let fr = material.reflectance(&n, wo, &wi);
                color += light.intensity() * fr * (geometric_term * light.area() * inv_n);
            }
        }

        color
    }

    fn indirect_radiance(&self, its: &SurfaceIntersection, wo: &Vector3f, depth: u32,
                         scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        if depth >= MAX_DEPTH {
            return RGBSpectrum::default();
        }

        let n = its.normal().normalize();
        let material = its.material();

        if material.has_specular() {
            let wr = reflect(wo, &n);
            let reflected = Ray3f::new(its.p(), wr, None, None).with_depth(depth + 1);
            return self.compute_color(&reflected, scene, rng);
        }

        if material.has_transmission() {
            let wt = refract(wo, &n, material.index_of_refraction()).direction();
            let refracted = Ray3f::new(its.p(), wt, None, None).with_depth(depth + 1);
            return self.compute_color(&refracted, scene, rng);
        }

        if material.has_diffuse_or_glossy() {
            let n_samples = if depth >= 1 { 1 } else { INDIRECT_SAMPLES_FIRST_BOUNCE };
            let inv_n = 1.0 / n_samples as Float;
            let sampler = HemisphericalSampler::new();
            let mut lind = RGBSpectrum::default();

            for _ in 0..n_samples {
                let wi = sampler.uniform_about(&n, rng);
                let bounce = Ray3f::new(its.p(), wi, None, None).with_depth(depth + 1);
                let li = match scene.closest_intersection(&bounce) {
                    // Recurse on the reflected radiance only: the emission
                    // at the bounce point belongs to the direct estimator.
                    Some(hit) => self.reflected_radiance(&hit, &-wi, depth + 1, scene, rng),
                    None => RGBSpectrum::default(),
                };

                let cos_theta = wi.dot(&n).max(0.0);
                let fr = material.reflectance(&n, wo, &wi);
                // 2 pi compensates the uniform-hemisphere pdf.
                lind += li * fr * (cos_theta * TWO_PI * inv_n);
            }

            return lind;
        }

        RGBSpectrum::default()
    }
}

impl Integrator for NeeIntegrator {
    fn compute_color(&self, ray: &Ray3f, scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let its = match scene.closest_intersection(ray) {
            Some(its) => its,
            None => return self.bg_color,
        };

        let wo = -ray.dir();
        let emitted = its.material().emissive_radiance();
        emitted + self.reflected_radiance(&its, &wo, ray.depth, scene, rng)
    }

    fn background(&self) -> RGBSpectrum {
        self.bg_color
    }
}
