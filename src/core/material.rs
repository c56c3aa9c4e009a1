// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use log::warn;

/// Surface material as a set of capability queries plus the value queries
/// the integrators dispatch on. The scattering capabilities are not
/// exclusive in principle, but every integrator checks them in a fixed
/// if/else order (specular, then transmissive, then diffuse-or-glossy) so
/// only the first matching branch ever executes for a hit.
pub trait Material: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn has_specular(&self) -> bool {
        false
    }

    fn has_transmission(&self) -> bool {
        false
    }

    fn has_diffuse_or_glossy(&self) -> bool {
        false
    }

    fn is_emissive(&self) -> bool {
        false
    }

    /// BRDF value for light arriving along `wi` and leaving along `wo`
    /// at a surface with normal `n`. All three directions point away from
    /// the surface point.
    fn reflectance(&self, n: &Vector3f, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum;

    fn emissive_radiance(&self) -> RGBSpectrum {
        RGBSpectrum::default()
    }

    fn diffuse_reflectance(&self) -> RGBSpectrum {
        RGBSpectrum::default()
    }

    /// Only meaningful for transmissive materials. The default signals the
    /// misuse and returns a negative sentinel; callers must gate on
    /// `has_transmission` first.
    fn index_of_refraction(&self) -> Float {
        warn!("index_of_refraction() queried on non-transmissive material {}", self.name());
        -1.0
    }
}
