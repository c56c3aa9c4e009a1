// Copyright @yucwang 2023

use super::constants::{Float, INV_PI, PI, TWO_PI, Vector2f, Vector3f};

/// Warp a canonical `[0,1]^2` sample onto the unit hemisphere around +z
/// with constant density.
pub fn sample_uniform_hemisphere(u: &Vector2f) -> Vector3f {
    let z: Float = u.x;
    let r: Float = (1.0 - z * z).max(0.0).sqrt();
    let phi: Float = TWO_PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn sample_uniform_hemisphere_pdf() -> Float {
    INV_PI / 2.0
}

/// Warp a canonical `[0,1]^2` sample onto the unit hemisphere around +z
/// with density proportional to `cos(theta)`.
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let r = u.x.sqrt();
    let phi = TWO_PI * u.y;
    let z = (1.0 - u.x).max(0.0).sqrt();

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

pub fn invert_uniform_hemisphere(v: &Vector3f) -> Vector2f {
    let mut phi = v.y.atan2(v.x);
    if phi < 0.0 {
        phi += 2.0 * PI;
    }

    Vector2f::new(v.z, phi / TWO_PI)
}
