//! Input handling for the Vitrine showcase
//!
//! Translates winit window events into widget commands.

mod ring_controller;

pub use ring_controller::{RingCommand, RingController};
