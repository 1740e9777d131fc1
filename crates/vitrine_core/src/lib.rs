//! Core widget state for the Vitrine showcase
//!
//! Every visual component is an owned object with explicit construction,
//! advanced by the frame loop and read back out by the renderer. Nothing in
//! this crate touches the window or the GPU.
//!
//! - [`ParticleField`] - fixed-count drifting glow particles with wraparound
//! - [`Ring`] - angular state and layout of the 3D panel carousel
//! - [`AutoRotate`] - the carousel's periodic rotation task
//! - [`Lightbox`] - full-window panel zoom overlay
//! - [`Countdown`] - calendar time elapsed since a fixed epoch
//! - [`Typewriter`] - character-by-character title reveal
//! - [`ConfettiSystem`] - transient celebratory burst particles

mod field;
mod ring;
mod lightbox;
mod countdown;
mod typewriter;
pub mod confetti;

pub use field::{FieldParams, Particle, ParticleField};
pub use ring::{AutoRotate, DepthClass, PanelPlacement, Ring};
pub use lightbox::{Lightbox, LightboxPhase};
pub use countdown::{CivilDate, Countdown, Elapsed};
pub use typewriter::Typewriter;
pub use confetti::{ConfettiPiece, ConfettiSystem, CONFETTI_PALETTE};

// Re-export commonly used math types for convenience
pub use vitrine_math::Vec2;
