// Copyright @yucwang 2026

use crate::core::material::Material;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Emission-only material backing area light shapes. It carries no
/// scattering lobe, so no integrator dispatch branch fires on it; hits
/// contribute exactly the emissive term.
pub struct Emissive {
    radiance: RGBSpectrum,
}

impl Emissive {
    pub fn new(radiance: RGBSpectrum) -> Self {
        Self { radiance }
    }
}

impl Material for Emissive {
    fn name(&self) -> &'static str {
        "Emissive"
    }

    fn is_emissive(&self) -> bool {
        true
    }

    fn reflectance(&self, _n: &Vector3f, _wo: &Vector3f, _wi: &Vector3f) -> RGBSpectrum {
        RGBSpectrum::default()
    }

    fn emissive_radiance(&self) -> RGBSpectrum {
        self.radiance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_emissive_radiance() {
        let m = Emissive::new(RGBSpectrum::new(4.0, 3.0, 2.0));
        assert!(m.is_emissive());
        assert_relative_eq!(m.emissive_radiance()[0], 4.0);
        assert!(!m.has_specular());
        assert!(!m.has_transmission());
        assert!(!m.has_diffuse_or_glossy());
    }
}
