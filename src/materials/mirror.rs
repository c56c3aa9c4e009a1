// Copyright @yucwang 2026

use crate::core::material::Material;
use crate::math::constants::{Float, INV_PI, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// Perfect specular surface with a Phong-style evaluation lobe. The
/// integrators follow the mirror direction instead of sampling this BRDF;
/// `reflectance` only matters when a mirror shows up in a light loop.
pub struct Mirror {
    rho_d: RGBSpectrum,
    ks: RGBSpectrum,
    alpha: Float,
}

impl Mirror {
    pub fn new(rho_d: RGBSpectrum, ks: RGBSpectrum, alpha: Float) -> Self {
        Self { rho_d, ks, alpha }
    }
}

impl Material for Mirror {
    fn name(&self) -> &'static str {
        "Mirror"
    }

    fn has_specular(&self) -> bool {
        true
    }

    fn reflectance(&self, n: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum {
        let wr = 2.0 * n.dot(wi) * n - wi;
        let lobe = wo.dot(&wr).max(0.0).powf(self.alpha);
        self.rho_d * INV_PI + self.ks * lobe
    }

    fn diffuse_reflectance(&self) -> RGBSpectrum {
        self.rho_d
    }

    // index_of_refraction() deliberately not overridden: querying it on a
    // mirror is a programming error and hits the warning default.
}
