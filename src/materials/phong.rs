// Copyright @yucwang 2026

use crate::core::material::Material;
use crate::math::constants::{Float, INV_PI, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Diffuse-or-glossy surface: Lambertian term plus a Phong specular lobe
/// around the mirror direction of `wi`. A shininess of zero with black
/// `ks` degenerates to a pure Lambertian surface.
pub struct Phong {
    kd: RGBSpectrum,
    ks: RGBSpectrum,
    shininess: Float,
}

impl Phong {
    pub fn new(kd: RGBSpectrum, ks: RGBSpectrum, shininess: Float) -> Self {
        Self { kd, ks, shininess }
    }

    pub fn lambertian(kd: RGBSpectrum) -> Self {
        Self { kd, ks: RGBSpectrum::default(), shininess: 1.0 }
    }
}

impl Material for Phong {
    fn name(&self) -> &'static str {
        "Phong"
    }

    fn has_diffuse_or_glossy(&self) -> bool {
        true
    }

    fn reflectance(&self, n: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum {
        let diffuse = self.kd * INV_PI;
        if self.ks.is_black() {
            return diffuse;
        }

        let wr = 2.0 * n.dot(wi) * n - wi;
        let lobe = wo.dot(&wr).max(0.0).powf(self.shininess);
        diffuse + self.ks * lobe
    }

    fn diffuse_reflectance(&self) -> RGBSpectrum {
        self.kd
    }
}
