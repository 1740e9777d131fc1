//! Carousel ring
//!
//! Angular state for a fixed set of flat panels standing on a circle in 3D
//! space. The ring accumulates an unbounded signed angle; layout is a pure
//! function of that angle, recomputed on every change. Each panel's depth
//! bucket (front / side / back) depends only on the normalized difference
//! between its fixed offset and the ring angle.

use std::time::Duration;

use vitrine_math::angle::{distance_to_front, normalize_degrees};

/// Depth bucket for a panel, derived from its angular distance to the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthClass {
    Front,
    Side,
    Back,
}

impl DepthClass {
    /// Classify a normalized angular difference in [0, 360)
    ///
    /// Back covers (90, 270), the sides cover (45, 90] and [270, 315),
    /// everything else faces the viewer.
    pub fn classify(d: f32) -> Self {
        if d > 90.0 && d < 270.0 {
            DepthClass::Back
        } else if (d > 45.0 && d <= 90.0) || (d >= 270.0 && d < 315.0) {
            DepthClass::Side
        } else {
            DepthClass::Front
        }
    }

    /// Visual scale for this bucket
    #[inline]
    pub fn scale(self) -> f32 {
        match self {
            DepthClass::Front => 1.0,
            DepthClass::Side => 0.95,
            DepthClass::Back => 0.85,
        }
    }
}

/// One panel's computed placement for the current ring angle
#[derive(Clone, Copy, Debug)]
pub struct PanelPlacement {
    /// Panel index, 0-based
    pub index: usize,
    /// Fixed angular offset of this panel, degrees
    pub offset_deg: f32,
    /// Screen azimuth for this frame: normalized (offset - angle), degrees.
    /// 0 faces the viewer.
    pub azimuth_deg: f32,
    /// Depth bucket at the current angle
    pub depth: DepthClass,
    /// Visual scale (1.0 / 0.95 / 0.85 by depth)
    pub scale: f32,
    /// Visual opacity, unconditionally 1.0
    pub opacity: f32,
}

/// The carousel ring
///
/// A ring constructed with zero panels is inert: layout is empty and
/// rotation is a no-op, so the 360/N increment is never divided by zero.
pub struct Ring {
    angle_deg: f32,
    panel_count: usize,
    increment_deg: f32,
    radius: f32,
}

impl Ring {
    /// Create a ring of `panel_count` panels of the given width
    ///
    /// The radius is the edge-fit distance `(panel_width/2) / tan(PI/N)` at
    /// which adjacent panels meet edge to edge.
    pub fn new(panel_count: usize, panel_width: f32) -> Self {
        let (increment_deg, radius) = if panel_count == 0 {
            log::warn!("Carousel ring constructed with no panels; disabling rotation");
            (0.0, 0.0)
        } else {
            let increment = 360.0 / panel_count as f32;
            let radius = (panel_width / 2.0) / (std::f32::consts::PI / panel_count as f32).tan();
            (increment, radius)
        };

        Self {
            angle_deg: 0.0,
            panel_count,
            increment_deg,
            radius,
        }
    }

    /// Current accumulated angle in degrees (unbounded, signed)
    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Angular step between adjacent panels (360/N)
    #[inline]
    pub fn increment_deg(&self) -> f32 {
        self.increment_deg
    }

    /// Distance from the ring axis to each panel
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of panels
    #[inline]
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// True when the ring was constructed without panels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panel_count == 0
    }

    /// Advance the ring by one step in the given direction (+1 or -1)
    pub fn rotate(&mut self, direction: i32) {
        if self.panel_count == 0 {
            return;
        }
        self.angle_deg += self.increment_deg * direction as f32;
    }

    /// Fixed angular offset of panel `index`
    #[inline]
    pub fn panel_offset_deg(&self, index: usize) -> f32 {
        self.increment_deg * index as f32
    }

    /// Compute every panel's placement for the current angle
    pub fn layout(&self) -> Vec<PanelPlacement> {
        (0..self.panel_count)
            .map(|index| {
                let offset_deg = self.panel_offset_deg(index);
                let azimuth_deg = normalize_degrees(offset_deg - self.angle_deg);
                let depth = DepthClass::classify(azimuth_deg);
                PanelPlacement {
                    index,
                    offset_deg,
                    azimuth_deg,
                    depth,
                    scale: depth.scale(),
                    opacity: 1.0,
                }
            })
            .collect()
    }

    /// The panel currently closest to facing the viewer, if any
    pub fn front_panel(&self) -> Option<usize> {
        (0..self.panel_count).min_by(|&a, &b| {
            let da = distance_to_front(self.panel_offset_deg(a) - self.angle_deg);
            let db = distance_to_front(self.panel_offset_deg(b) - self.angle_deg);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// The carousel's periodic rotation task
///
/// A cooperative timer advanced by the frame loop. `tick` reports how many
/// periods elapsed; the owner applies one rotation per fire. Stopping is
/// idempotent. Visibility pause/resume is kept separate from the user's
/// explicit stop so that returning to a visible window never restarts a
/// rotation the user halted.
pub struct AutoRotate {
    period: Duration,
    elapsed: Duration,
    running: bool,
    manually_paused: bool,
}

impl AutoRotate {
    /// Create a timer with the given period, initially running
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            running: true,
            manually_paused: false,
        }
    }

    /// Whether the timer is currently firing
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the user explicitly stopped rotation
    #[inline]
    pub fn is_manually_paused(&self) -> bool {
        self.manually_paused
    }

    /// Advance the timer; returns the number of periods that elapsed
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if !self.running || self.period.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut fires = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fires += 1;
        }
        fires
    }

    /// User control: stop rotating (idempotent)
    pub fn user_stop(&mut self) {
        self.running = false;
        self.manually_paused = true;
        self.elapsed = Duration::ZERO;
    }

    /// User control: start rotating
    pub fn user_start(&mut self) {
        self.running = true;
        self.manually_paused = false;
        self.elapsed = Duration::ZERO;
    }

    /// User control: toggle; returns the new running state
    pub fn user_toggle(&mut self) -> bool {
        if self.running {
            self.user_stop();
        } else {
            self.user_start();
        }
        self.running
    }

    /// The window became hidden: suspend firing
    pub fn visibility_hidden(&mut self) {
        self.running = false;
    }

    /// The window became visible: resume unless the user stopped rotation
    pub fn visibility_visible(&mut self) {
        if !self.manually_paused {
            self.running = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_classification_table() {
        // offset 0, angle 0 -> d = 0 -> front
        assert_eq!(DepthClass::classify(0.0), DepthClass::Front);
        // offset 180, angle 0 -> d = 180 -> back
        assert_eq!(DepthClass::classify(180.0), DepthClass::Back);
        // offset 60, angle 0 -> d = 60 -> side
        assert_eq!(DepthClass::classify(60.0), DepthClass::Side);
    }

    #[test]
    fn test_depth_classification_boundaries() {
        assert_eq!(DepthClass::classify(45.0), DepthClass::Front);
        assert_eq!(DepthClass::classify(45.1), DepthClass::Side);
        assert_eq!(DepthClass::classify(90.0), DepthClass::Side);
        assert_eq!(DepthClass::classify(90.1), DepthClass::Back);
        assert_eq!(DepthClass::classify(269.9), DepthClass::Back);
        assert_eq!(DepthClass::classify(270.0), DepthClass::Side);
        assert_eq!(DepthClass::classify(314.9), DepthClass::Side);
        assert_eq!(DepthClass::classify(315.0), DepthClass::Front);
    }

    #[test]
    fn test_depth_scales() {
        assert_eq!(DepthClass::Front.scale(), 1.0);
        assert_eq!(DepthClass::Side.scale(), 0.95);
        assert_eq!(DepthClass::Back.scale(), 0.85);
    }

    #[test]
    fn test_six_panel_increment() {
        let ring = Ring::new(6, 300.0);
        assert_eq!(ring.increment_deg(), 60.0);
        assert_eq!(ring.panel_offset_deg(3), 180.0);
    }

    #[test]
    fn test_rotate_inverse_no_drift() {
        let mut ring = Ring::new(6, 300.0);
        ring.rotate(1);
        ring.rotate(1);
        ring.rotate(-1);
        ring.rotate(-1);
        assert_eq!(ring.angle_deg(), 0.0);
    }

    #[test]
    fn test_full_revolution_periodicity() {
        let mut ring = Ring::new(6, 300.0);
        let at_zero = ring.layout();

        for _ in 0..6 {
            ring.rotate(1);
        }
        assert_eq!(ring.angle_deg(), 360.0);

        let at_full = ring.layout();
        for (a, b) in at_zero.iter().zip(at_full.iter()) {
            assert_eq!(a.depth, b.depth);
            assert_eq!(a.scale, b.scale);
            assert!((a.azimuth_deg - b.azimuth_deg).abs() < 1e-3);
        }
    }

    #[test]
    fn test_angle_is_unbounded() {
        let mut ring = Ring::new(4, 200.0);
        for _ in 0..100 {
            ring.rotate(-1);
        }
        assert_eq!(ring.angle_deg(), -9000.0);
        // Layout still classifies correctly
        let layout = ring.layout();
        assert_eq!(layout.len(), 4);
    }

    #[test]
    fn test_empty_ring_is_inert() {
        let mut ring = Ring::new(0, 300.0);
        ring.rotate(1);
        assert_eq!(ring.angle_deg(), 0.0);
        assert!(ring.layout().is_empty());
        assert!(ring.front_panel().is_none());
        assert!(ring.is_empty());
        // No NaN anywhere
        assert_eq!(ring.increment_deg(), 0.0);
        assert_eq!(ring.radius(), 0.0);
    }

    #[test]
    fn test_edge_fit_radius() {
        // With 6 panels of width 300, radius = 150 / tan(30°)
        let ring = Ring::new(6, 300.0);
        let expected = 150.0 / (std::f32::consts::PI / 6.0).tan();
        assert!((ring.radius() - expected).abs() < 1e-3);
        assert!((ring.radius() - 259.8).abs() < 0.1);
    }

    #[test]
    fn test_front_panel_tracks_rotation() {
        let mut ring = Ring::new(6, 300.0);
        assert_eq!(ring.front_panel(), Some(0));
        ring.rotate(-1);
        // angle = -60; panel 5 at offset 300: d = normalize(300 + 60) = 0
        assert_eq!(ring.front_panel(), Some(5));
    }

    #[test]
    fn test_opacity_always_one() {
        let mut ring = Ring::new(8, 240.0);
        for _ in 0..8 {
            ring.rotate(1);
            for panel in ring.layout() {
                assert_eq!(panel.opacity, 1.0);
            }
        }
    }

    #[test]
    fn test_auto_rotate_fires_per_period() {
        let mut auto = AutoRotate::new(Duration::from_secs(4));
        assert_eq!(auto.tick(Duration::from_secs(3)), 0);
        assert_eq!(auto.tick(Duration::from_secs(1)), 1);
        assert_eq!(auto.tick(Duration::from_secs(9)), 2);
    }

    #[test]
    fn test_auto_rotate_stop_is_idempotent() {
        let mut auto = AutoRotate::new(Duration::from_secs(4));
        auto.user_stop();
        auto.user_stop();
        assert!(!auto.is_running());
        assert_eq!(auto.tick(Duration::from_secs(60)), 0);
    }

    #[test]
    fn test_visibility_does_not_override_manual_pause() {
        let mut auto = AutoRotate::new(Duration::from_secs(4));
        auto.user_stop();
        auto.visibility_hidden();
        auto.visibility_visible();
        assert!(!auto.is_running(), "visibility resume must not restart a user-stopped rotation");
    }

    #[test]
    fn test_visibility_pause_resume() {
        let mut auto = AutoRotate::new(Duration::from_secs(4));
        auto.visibility_hidden();
        assert!(!auto.is_running());
        assert_eq!(auto.tick(Duration::from_secs(60)), 0);
        auto.visibility_visible();
        assert!(auto.is_running());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut auto = AutoRotate::new(Duration::from_secs(4));
        assert!(!auto.user_toggle());
        assert!(auto.is_manually_paused());
        assert!(auto.user_toggle());
        assert!(!auto.is_manually_paused());
    }
}
