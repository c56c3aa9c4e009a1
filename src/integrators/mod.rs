// Copyright @yucwang 2026

pub mod depth;
pub mod hemispherical;
pub mod nee;
pub mod purepath;
pub mod whitted;

#[cfg(test)]
pub(crate) mod testbed {
    use crate::core::scene::Scene;
    use crate::lights::area::AreaLightSource;
    use crate::materials::emissive::Emissive;
    use crate::materials::phong::Phong;
    use crate::math::constants::{Float, Vector3f};
    use crate::math::spectrum::RGBSpectrum;
    use crate::shapes::parallelogram::Parallelogram;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    /// Square area light of the given side length, centered at `center`,
    /// emitting `le` towards -z. Registered both as scene geometry and as
    /// a light source.
    pub fn add_ceiling_light(scene: &mut Scene, center: Vector3f, side: Float, le: RGBSpectrum) {
        let material = Arc::new(Emissive::new(le));
        let quad = Arc::new(Parallelogram::new(
            center + Vector3f::new(-0.5 * side, 0.5 * side, 0.0),
            Vector3f::new(side, 0.0, 0.0),
            Vector3f::new(0.0, -side, 0.0),
            material,
        ));
        scene.add_shape(quad.clone());
        scene.add_light(Arc::new(AreaLightSource::new(quad)));
    }

    /// Lambertian unit sphere whose north pole sits at the origin with
    /// normal +z, lit by a small ceiling light directly above. The light
    /// side equals its height above the pole, which makes the unattenuated
    /// Whitted light model commensurable with the area-sampled estimators.
    pub fn sphere_under_light(kd: Float, le: Float) -> Scene {
        let mut scene = Scene::new();
        let material = Arc::new(Phong::lambertian(RGBSpectrum::from_scalar(kd)));
        scene.add_shape(Arc::new(Sphere::new(Vector3f::new(0.0, 0.0, -1.0), 1.0, material)));
        add_ceiling_light(&mut scene, Vector3f::new(0.0, 0.0, 0.1), 0.1,
                          RGBSpectrum::from_scalar(le));
        scene
    }

    /// Two parallel mirrors facing each other across the z axis. Any ray
    /// bouncing between them only terminates through a depth cap.
    pub fn mirror_corridor() -> Scene {
        use crate::materials::mirror::Mirror;

        let mut scene = Scene::new();
        let mirror: Arc<dyn crate::core::material::Material> =
            Arc::new(Mirror::new(RGBSpectrum::default(),
                                 RGBSpectrum::from_scalar(1.0), 8.0));
        scene.add_shape(Arc::new(Parallelogram::new(
            Vector3f::new(-5.0, -5.0, 0.0),
            Vector3f::new(10.0, 0.0, 0.0),
            Vector3f::new(0.0, 10.0, 0.0),
            mirror.clone(),
        )));
        scene.add_shape(Arc::new(Parallelogram::new(
            Vector3f::new(-5.0, -5.0, 1.0),
            Vector3f::new(10.0, 0.0, 0.0),
            Vector3f::new(0.0, 10.0, 0.0),
            mirror,
        )));
        scene
    }

    /// Average of the geometric term over the light surface by grid
    /// quadrature, for a receiver at `p` with normal `n`. Reference value
    /// for the Monte-Carlo convergence checks.
    pub fn quadrature_direct_factor(scene: &Scene, p: Vector3f, n: Vector3f) -> Float {
        let light = &scene.lights()[0];
        let steps = 64;
        let mut sum = 0.0;
        for i in 0..steps {
            for j in 0..steps {
                let u = crate::math::constants::Vector2f::new(
                    (i as Float + 0.5) / steps as Float,
                    (j as Float + 0.5) / steps as Float,
                );
                let light_pos = light.position_at(&u);
                let to_light = light_pos - p;
                let dist2 = to_light.dot(&to_light);
                let wi = to_light / dist2.sqrt();
                let g = wi.dot(&n).max(0.0) * (-wi).dot(&light.normal()).max(0.0) / dist2;
                sum += g;
            }
        }
        sum / (steps * steps) as Float
    }
}
