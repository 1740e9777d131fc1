//! Rendering for the Vitrine showcase
//!
//! This crate provides the wgpu pipelines that draw the widget state held
//! in `vitrine_core`.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::GlowPipeline`] - instanced radial-gradient discs for the
//!   particle field
//! - [`pipeline::QuadPipeline`] - instanced solid quads for the carousel
//!   panels, confetti, and the lightbox overlay
//! - [`frame`] - CPU-side assembly of per-frame instance buffers from
//!   widget state
//!
//! Everything is alpha-composited back to front; there is no depth buffer.

pub mod context;
pub mod frame;
pub mod pipeline;

pub use context::{RenderContext, RenderInitError};
pub use frame::ViewParams;

// Re-export core types for convenience
pub use vitrine_core::{ConfettiSystem, Lightbox, ParticleField, Ring};
pub use vitrine_math::{Mat4, Vec2};
