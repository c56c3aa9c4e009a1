// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

/// Tristimulus radiance value. All integrator arithmetic (accumulation,
/// scaling by estimator weights, componentwise reflectance products) goes
/// through this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f,
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::zeros() }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn from_scalar(v: Float) -> Self {
        Self { rgb: Vector3f::new(v, v, v) }
    }

    pub fn is_black(&self) -> bool {
        self.rgb[0] == 0.0 && self.rgb[1] == 0.0 && self.rgb[2] == 0.0
    }

    pub fn max_component(&self) -> Float {
        self.rgb[0].max(self.rgb[1]).max(self.rgb[2])
    }

    pub fn rgb(&self) -> Vector3f {
        self.rgb
    }
}

impl std::ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, idx: usize) -> &Float {
        &self.rgb[idx]
    }
}

impl std::ops::Add for RGBSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl std::ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

// Componentwise product, radiance modulated by a reflectance.
impl std::ops::Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl std::ops::Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl std::ops::Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}
