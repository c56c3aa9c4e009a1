// Copyright 2020 @TwoCookingMice

use super::constants::{EPSILON, Float, Vector3f};

/// A ray with a clip range and a bounce counter. `min_t` defaults to a
/// small epsilon so intersection queries exclude the origin itself.
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float,
    pub depth: u32,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d.normalize(),
               min_t: min_t.unwrap_or(EPSILON),
               max_t: max_t.unwrap_or(std::f32::MAX),
               depth: 0 }
    }

    /// Ray for the next bounce. The caller owns the depth bookkeeping:
    /// every recursive branch passes its current depth plus one.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn update(&mut self, t: Float) -> bool {
        if t < self.min_t || t > self.max_t {
            false
        } else {
            self.max_t = t;
            true
        }
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */
