//! Math library for the Vitrine showcase
//!
//! This crate provides the 2D vector, angle, and matrix types the widgets
//! and render pipelines are built on.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`mat4`] - 4x4 column-major matrix builders for the panel transforms
//! - [`angle`] - degree normalization and conversion helpers

mod vec2;
pub mod angle;
pub mod mat4;

pub use vec2::Vec2;
pub use mat4::Mat4;
