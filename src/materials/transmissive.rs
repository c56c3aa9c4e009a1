// Copyright @yucwang 2026

use crate::core::material::Material;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Dielectric interface. All energy is carried by the refracted (or, under
/// total internal reflection, mirrored) ray the integrators construct, so
/// BRDF evaluation is black by contract.
pub struct Transmissive {
    index_of_refraction: Float,
}

impl Transmissive {
    pub fn new(index_of_refraction: Float) -> Self {
        Self { index_of_refraction }
    }
}

impl Material for Transmissive {
    fn name(&self) -> &'static str {
        "Transmissive"
    }

    fn has_transmission(&self) -> bool {
        true
    }

    fn reflectance(&self, _n: &Vector3f, _wo: &Vector3f, _wi: &Vector3f) -> RGBSpectrum {
        RGBSpectrum::default()
    }

    fn index_of_refraction(&self) -> Float {
        self.index_of_refraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transmissive_reflectance_is_black() {
        let m = Transmissive::new(1.5);
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let wo = Vector3f::new(0.0, 1.0, 1.0).normalize();
        let wi = Vector3f::new(1.0, 0.0, 1.0).normalize();
        assert!(m.reflectance(&n, &wo, &wi).is_black());
    }

    #[test]
    fn test_transmissive_stores_index() {
        let m = Transmissive::new(1.33);
        assert_relative_eq!(m.index_of_refraction(), 1.33);
        assert!(m.has_transmission());
        assert!(!m.has_specular());
        assert!(!m.has_diffuse_or_glossy());
    }
}
