// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{EPSILON, Vector3f};
use crate::math::optics::{reflect, refract};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

const DEFAULT_MAX_DEPTH: u32 = 10;
const DEFAULT_AMBIENT: f32 = 0.2;

/// Whitted-style evaluator: diffuse surfaces get one bounce of sampled
/// direct light plus a constant ambient term, while mirror and dielectric
/// surfaces recurse. Historically the specular recursion here was
/// unbounded; the depth counter now caps every branch so two facing
/// mirrors cannot recurse forever.
pub struct WhittedIntegrator {
    bg_color: RGBSpectrum,
    ambient_light: RGBSpectrum,
    max_depth: u32,
}

impl WhittedIntegrator {
    pub fn new(bg_color: RGBSpectrum) -> Self {
        Self {
            bg_color,
            ambient_light: RGBSpectrum::from_scalar(DEFAULT_AMBIENT),
            max_depth: DEFAULT_MAX_DEPTH,
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

    /// One light-position sample per light, shadow-tested. The ambient
    /// term is added once, independent of the light count.
    fn direct_lighting(&self, its: &SurfaceIntersection, n: &Vector3f, wo: &Vector3f,
                       scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let material = its.material();
        let mut lo = material.diffuse_reflectance() * self.ambient_light;

        for light in scene.lights() {
            let light_pos = light.sample_position(rng);
            let to_light = light_pos - its.p();
            let dist = to_light.norm();
            if dist <= 0.0 {
                continue;
            }
            let wi = to_light / dist;

            let cos_theta = wi.dot(n).max(0.0);
            if cos_theta <= 0.0 {
                continue;
            }

            // Occluded iff something sits strictly closer than the light.
            let shadow_ray = Ray3f::new(its.p(), wi, None, None);
            if let Some(blocker) = scene.closest_intersection(&shadow_ray) {
                if blocker.t() < dist - EPSILON {
                    continue;
                }
            }

            let fr = material.reflectance(n, wo, &wi);
            lo += light.intensity() * fr * cos_theta;
        }

        lo
    }
}

impl Integrator for WhittedIntegrator {
    fn compute_color(&self, ray: &Ray3f, scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let its = match scene.closest_intersection(ray) {
            Some(its) => its,
            None => return self.bg_color,
        };

        let wo = -ray.dir();
        let n = its.normal().normalize();
        let material = its.material();

        if ray.depth >= self.max_depth {
            return material.emissive_radiance();
        }

        if material.has_specular() {
            let wr = reflect(&wo, &n);
            let reflected = Ray3f::new(its.p(), wr, None, None).with_depth(ray.depth + 1);
            return self.compute_color(&reflected, scene, rng);
        }

        if material.has_transmission() {
            let wt = refract(&wo, &n, material.index_of_refraction()).direction();
            let refracted = Ray3f::new(its.p(), wt, None, None).with_depth(ray.depth + 1);
            return self.compute_color(&refracted, scene, rng);
        }

        if material.has_diffuse_or_glossy() {
            return self.direct_lighting(&its, &n, &wo, scene, rng);
        }

        material.emissive_radiance()
    }

    fn background(&self) -> RGBSpectrum {
        self.bg_color
    }
}
