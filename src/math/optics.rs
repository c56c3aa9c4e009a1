// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// Outcome of a Snell's-law evaluation. When the discriminant goes
/// negative the surface behaves like a mirror instead of transmitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    Transmitted(Vector3f),
    TotalInternal(Vector3f),
}

impl Refraction {
    pub fn direction(&self) -> Vector3f {
        match *self {
            Refraction::Transmitted(d) => d,
            Refraction::TotalInternal(d) => d,
        }
    }
}

/// Perfect mirror direction `wr = 2 (n . wo) n - wo`, normalized.
/// `wo` points away from the surface, towards the previous ray origin.
pub fn reflect(wo: &Vector3f, n: &Vector3f) -> Vector3f {
    (2.0 * n.dot(wo) * n - wo).normalize()
}

/// Refraction through an interface with the outside medium at index 1.
/// The normal is flipped and the index ratio swapped when the ray exits
/// the object (`wo . n < 0`).
pub fn refract(wo: &Vector3f, n: &Vector3f, index_of_refraction: Float) -> Refraction {
    let mut n = *n;
    let mu: Float;
    if wo.dot(&n) < 0.0 {
        n = -n;
        mu = 1.0 / index_of_refraction;
    } else {
        mu = index_of_refraction;
    }

    let cos_theta = n.dot(wo);
    let discr = 1.0 - (mu * mu) * (1.0 - cos_theta * cos_theta);
    if discr < 0.0 {
        Refraction::TotalInternal(reflect(wo, &n))
    } else {
        let wt = (-mu * wo + n * (mu * cos_theta - discr.sqrt())).normalize();
        Refraction::Transmitted(wt)
    }
}
