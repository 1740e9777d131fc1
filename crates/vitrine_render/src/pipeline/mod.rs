//! Render pipelines
//!
//! Two instanced pipelines cover everything the showcase draws:
//!
//! - [`GlowPipeline`] - soft radial-gradient discs with a solid core, the
//!   particle field's two fill primitives in a single draw
//! - [`QuadPipeline`] - flat colored quads with a full MVP per instance,
//!   used for the carousel panels, confetti, and the lightbox

mod glow;
mod quad;
pub mod types;

pub use glow::GlowPipeline;
pub use quad::QuadPipeline;
pub use types::{GlowInstance, GlowUniforms, QuadInstance};
