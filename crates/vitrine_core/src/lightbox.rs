//! Lightbox overlay
//!
//! Full-window zoom for a single panel. The overlay animates open and
//! closed over a fixed duration; while visible it exposes a backdrop alpha
//! and a content scale for the renderer.

use std::time::Duration;

/// Animation duration for both opening and closing
pub const TRANSITION: Duration = Duration::from_millis(300);

const SCALE_CLOSED: f32 = 0.7;
const BACKDROP_ALPHA: f32 = 0.9;

/// Lifecycle phase of the overlay
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightboxPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// The lightbox state machine
pub struct Lightbox {
    phase: LightboxPhase,
    /// Progress through the current transition, 0..=1
    progress: f32,
    panel: Option<usize>,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Lightbox {
    pub fn new() -> Self {
        Self {
            phase: LightboxPhase::Closed,
            progress: 0.0,
            panel: None,
        }
    }

    /// Begin opening on the given panel
    ///
    /// Ignored while the overlay is already showing a panel.
    pub fn open(&mut self, panel: usize) {
        if self.phase != LightboxPhase::Closed {
            return;
        }
        self.phase = LightboxPhase::Opening;
        self.progress = 0.0;
        self.panel = Some(panel);
        log::info!("Lightbox opening on panel {}", panel);
    }

    /// Begin closing; idempotent while closing or closed
    pub fn request_close(&mut self) {
        match self.phase {
            LightboxPhase::Opening | LightboxPhase::Open => {
                self.phase = LightboxPhase::Closing;
                self.progress = 1.0 - self.progress.min(1.0);
            }
            LightboxPhase::Closing | LightboxPhase::Closed => {}
        }
    }

    /// Advance the transition
    pub fn update(&mut self, dt: Duration) {
        let step = dt.as_secs_f32() / TRANSITION.as_secs_f32();
        match self.phase {
            LightboxPhase::Opening => {
                self.progress += step;
                if self.progress >= 1.0 {
                    self.progress = 1.0;
                    self.phase = LightboxPhase::Open;
                }
            }
            LightboxPhase::Closing => {
                self.progress += step;
                if self.progress >= 1.0 {
                    self.progress = 0.0;
                    self.phase = LightboxPhase::Closed;
                    self.panel = None;
                }
            }
            LightboxPhase::Open | LightboxPhase::Closed => {}
        }
    }

    #[inline]
    pub fn phase(&self) -> LightboxPhase {
        self.phase
    }

    /// Panel shown by the overlay, while one is shown
    #[inline]
    pub fn panel(&self) -> Option<usize> {
        self.panel
    }

    /// True from the first opening frame until fully closed
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase != LightboxPhase::Closed
    }

    /// True while clicks should dismiss rather than activate
    #[inline]
    pub fn intercepts_input(&self) -> bool {
        matches!(self.phase, LightboxPhase::Opening | LightboxPhase::Open)
    }

    /// Eased openness in 0..=1 (0 closed, 1 fully open)
    fn openness(&self) -> f32 {
        let t = match self.phase {
            LightboxPhase::Closed => 0.0,
            LightboxPhase::Open => 1.0,
            LightboxPhase::Opening => self.progress,
            LightboxPhase::Closing => 1.0 - self.progress,
        };
        // Smoothstep approximates the CSS ease curve closely enough here
        t * t * (3.0 - 2.0 * t)
    }

    /// Content scale, 0.7 at the edges of the transition, 1.0 when open
    pub fn content_scale(&self) -> f32 {
        SCALE_CLOSED + (1.0 - SCALE_CLOSED) * self.openness()
    }

    /// Backdrop alpha, 0.0 closed to 0.9 open
    pub fn backdrop_alpha(&self) -> f32 {
        BACKDROP_ALPHA * self.openness()
    }
}
