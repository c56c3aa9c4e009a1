// Copyright @yucwang 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod core;
pub mod math;
pub mod samplers;
pub mod materials;
pub mod shapes;
pub mod lights;
pub mod integrators;
