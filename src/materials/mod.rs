// Copyright @yucwang 2026

pub mod emissive;
pub mod mirror;
pub mod phong;
pub mod transmissive;
