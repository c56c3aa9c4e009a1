// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{Float, TWO_PI};
use crate::math::optics::{reflect, refract};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::samplers::hemispherical::HemisphericalSampler;

const MAX_DEPTH: u32 = 5;
// Decayed to one sample past the first bounce; a tuned variance/cost
// policy, not Russian roulette.
const FIRST_BOUNCE_SAMPLES: u32 = 256;

/// Brute-force path tracer: light is only found by bounce rays that
/// happen to reach an emitter. Every branch, mirror bounces included,
/// increments the depth counter, so termination is uniform.
pub struct PurePathIntegrator {
    bg_color: RGBSpectrum,
}

impl PurePathIntegrator {
    pub fn new(bg_color: RGBSpectrum) -> Self {
        Self { bg_color }
    }
}

impl Integrator for PurePathIntegrator {
    fn compute_color(&self, ray: &Ray3f, scene: &Scene, rng: &mut LcgRng) -> RGBSpectrum {
        let its = match scene.closest_intersection(ray) {
            Some(its) => its,
            None => return self.bg_color,
        };

        let wo = -ray.dir();
        let n = its.normal().normalize();
        let material = its.material();

        let mut color = material.emissive_radiance();
        if ray.depth >= MAX_DEPTH {
            return color;
        }

        if material.has_specular() {
            let wr = reflect(&wo, &n);
            let reflected = Ray3f::new(its.p(), wr, None, None).with_depth(ray.depth + 1);
            color += self.compute_color(&reflected, scene, rng);
        } else if material.has_transmission() {
            let wt = refract(&wo, &n, material.index_of_refraction()).direction();
            let refracted = Ray3f::new(its.p(), wt, None, None).with_depth(ray.depth + 1);
            color += self.compute_color(&refracted, scene, rng);
        } else if material.has_diffuse_or_glossy() {
            let n_samples = if ray.depth >= 1 { 1 } else { FIRST_BOUNCE_SAMPLES };
            let sampler = HemisphericalSampler::new();
            let mut lo = RGBSpectrum::default();

            for _ in 0..n_samples {
                let wi = sampler.uniform_about(&n, rng);
                let bounce = Ray3f::new(its.p(), wi, None, None).with_depth(ray.depth + 1);
                let li = self.compute_color(&bounce, scene, rng);

                let cos_theta = wi.dot(&n).max(0.0);
                let fr = material.reflectance(&n, &wo, &wi);
                // 2 pi compensates the uniform-hemisphere pdf.
                lo += li * fr * (cos_theta * TWO_PI);
            }

            color += lo / n_samples as Float;
        }

        color
    }

    fn background(&self) -> RGBSpectrum {
        self.bg_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrators::testbed;
    use crate::materials::emissive::Emissive;
    use crate::math::constants::Vector3f;
    use crate::shapes::sphere::Sphere;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    #[test]
    fn test_emissive_sphere_seen_directly() {
        let mut scene = Scene::new();
        scene.add_shape(Arc::new(Sphere::new(
            Vector3f::new(0.0, 0.0, 5.0), 1.0,
            Arc::new(Emissive::new(RGBSpectrum::new(2.0, 1.0, 0.5))),
        )));

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
        let purepath = PurePathIntegrator::new(RGBSpectrum::default());
        let mut rng = LcgRng::new(0);
        let color = purepath.compute_color(&ray, &scene, &mut rng);

        assert_relative_eq!(color[0], 2.0, epsilon = 1e-5);
        assert_relative_eq!(color[2], 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_depth_cap_returns_emission_only() {
        let scene = testbed::sphere_under_light(0.7, 1.0);
        let ray = Ray3f::new(Vector3f::new(0.0, -2.0, 0.5),
                             Vector3f::new(0.0, 2.0, -0.5), None, None)
            .with_depth(MAX_DEPTH);
        let purepath = PurePathIntegrator::new(RGBSpectrum::default());
        let mut rng = LcgRng::new(0);

        // The sphere does not emit, so the capped evaluation is black.
        let color = purepath.compute_color(&ray, &scene, &mut rng);
        assert!(color.is_black());
    }

    #[test]
    fn test_mirror_corridor_terminates() {
        let scene = testbed::mirror_corridor();
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 0.5),
                             Vector3f::new(0.0, 0.0, 1.0), None, None);
        let purepath = PurePathIntegrator::new(RGBSpectrum::default());
        let mut rng = LcgRng::new(0);

        // Specular bounces increment the depth, so the corridor bottoms
        // out at MAX_DEPTH instead of recursing forever.
        let color = purepath.compute_color(&ray, &scene, &mut rng);
        assert!(color.is_black());
    }

    #[test]
    fn test_diffuse_estimate_converges_to_nee_direct() {
        let scene = testbed::sphere_under_light(0.7, 1.0);
        let light = &scene.lights()[0];
        let pole = Vector3f::zeros();
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let expected = 0.7 * crate::math::constants::INV_PI
            * testbed::quadrature_direct_factor(&scene, pole, n)
            * light.area();

        let ray = Ray3f::new(Vector3f::new(0.0, -2.0, 0.5),
                             Vector3f::new(0.0, 2.0, -0.5), None, None);
        let purepath = PurePathIntegrator::new(RGBSpectrum::default());
        let mut rng = LcgRng::new(31);
        let mut estimate = 0.0;
        let evals = 48;
        for _ in 0..evals {
            estimate += purepath.compute_color(&ray, &scene, &mut rng)[0];
        }
        estimate /= evals as f32;

        assert_relative_eq!(estimate, expected, max_relative = 0.15);
    }
}
