//! Confetti burst
//!
//! Transient celebration particles. Unlike the particle field, confetti is
//! short-lived: each piece falls once, fading and spinning, and is retired
//! when its fall completes. Pieces spawn with a small stagger so a burst
//! streams from the top edge rather than appearing as one sheet.

use std::time::Duration;

use rand::Rng;
use vitrine_math::Vec2;

/// Celebration palette: two golds, two greens
pub const CONFETTI_PALETTE: [[f32; 4]; 4] = [
    [0.831, 0.686, 0.216, 1.0],
    [0.957, 0.816, 0.247, 1.0],
    [0.176, 0.314, 0.086, 1.0],
    [0.290, 0.486, 0.173, 1.0],
];

/// Piece edge length in surface units
pub const PIECE_SIZE: f32 = 10.0;

const SPAWN_STAGGER: Duration = Duration::from_millis(20);

/// One falling confetti piece
#[derive(Clone, Copy, Debug)]
pub struct ConfettiPiece {
    /// Horizontal spawn position
    pub start_x: f32,
    /// Total horizontal drift over the full fall
    pub drift: f32,
    /// Total rotation over the full fall, radians
    pub spin: f32,
    /// Fall duration in seconds
    pub duration: f32,
    /// Seconds since spawn; negative while waiting out the stagger
    pub age: f32,
    pub color: [f32; 4],
}

impl ConfettiPiece {
    /// Fall progress in 0..=1, eased to decelerate like the original drop
    #[inline]
    pub fn progress(&self) -> f32 {
        let t = (self.age / self.duration).clamp(0.0, 1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// True once the stagger delay has passed
    #[inline]
    pub fn is_live(&self) -> bool {
        self.age >= 0.0
    }

    /// True once the fall has completed
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.age >= self.duration
    }

    /// Current position for a surface of the given height
    pub fn position(&self, surface_height: f32) -> Vec2 {
        let t = self.progress();
        Vec2::new(
            self.start_x + self.drift * t,
            -PIECE_SIZE + (surface_height + 2.0 * PIECE_SIZE) * t,
        )
    }

    /// Current rotation in radians
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.spin * self.progress()
    }

    /// Fades out linearly over the fall
    #[inline]
    pub fn alpha(&self) -> f32 {
        1.0 - (self.age / self.duration).clamp(0.0, 1.0)
    }
}

/// Owns all in-flight confetti
pub struct ConfettiSystem {
    pieces: Vec<ConfettiPiece>,
}

impl Default for ConfettiSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self { pieces: Vec::new() }
    }

    /// Piece count for a burst on a surface of the given width
    ///
    /// Narrow surfaces get half a burst, matching the original's mobile cut.
    pub fn burst_size(surface_width: f32) -> usize {
        if surface_width <= 768.0 {
            50
        } else {
            100
        }
    }

    /// Spawn a burst across the given surface width
    pub fn burst(&mut self, surface_width: f32) {
        let count = Self::burst_size(surface_width);
        let mut rng = rand::thread_rng();

        for i in 0..count {
            self.pieces.push(ConfettiPiece {
                start_x: rng.gen_range(0.0..surface_width.max(1.0)),
                drift: rng.gen_range(-100.0..100.0),
                spin: rng.gen_range(0.0..2.0 * std::f32::consts::TAU),
                duration: rng.gen_range(2.0..4.0),
                age: -(SPAWN_STAGGER.as_secs_f32() * i as f32),
                color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
            });
        }

        log::info!("Confetti burst: {} pieces", count);
    }

    /// Advance all pieces and retire the spent ones
    pub fn update(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        for piece in &mut self.pieces {
            piece.age += dt;
        }
        self.pieces.retain(|p| !p.is_spent());
    }

    /// Pieces past their stagger delay, ready to draw
    pub fn live_pieces(&self) -> impl Iterator<Item = &ConfettiPiece> {
        self.pieces.iter().filter(|p| p.is_live())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_size_by_width() {
        assert_eq!(ConfettiSystem::burst_size(1280.0), 100);
        assert_eq!(ConfettiSystem::burst_size(768.0), 50);
        assert_eq!(ConfettiSystem::burst_size(360.0), 50);
    }

    #[test]
    fn test_burst_spawns_and_retires() {
        let mut system = ConfettiSystem::new();
        system.burst(1280.0);
        assert_eq!(system.len(), 100);

        // Longest possible life: 2s stagger tail + 4s fall
        for _ in 0..70 {
            system.update(ms(100));
        }
        assert!(system.is_empty(), "{} pieces left", system.len());
    }

    #[test]
    fn test_stagger_delays_liveness() {
        let mut system = ConfettiSystem::new();
        system.burst(1280.0);
        let live_at_start = system.live_pieces().count();
        assert!(live_at_start < system.len());

        // Past the last stagger (1.98 s) but before any fall (>= 2 s) ends
        system.update(ms(1_999));
        assert_eq!(system.live_pieces().count(), system.len());
        assert_eq!(system.len(), 100);
    }

    #[test]
    fn test_piece_falls_top_to_bottom() {
        let piece = ConfettiPiece {
            start_x: 100.0,
            drift: 50.0,
            spin: std::f32::consts::TAU,
            duration: 2.0,
            age: 0.0,
            color: CONFETTI_PALETTE[0],
        };
        assert_eq!(piece.position(600.0).y, -PIECE_SIZE);

        let landed = ConfettiPiece { age: 2.0, ..piece };
        assert!(landed.position(600.0).y >= 600.0);
        assert_eq!(landed.alpha(), 0.0);
        assert_eq!(landed.rotation(), std::f32::consts::TAU);
    }

    #[test]
    fn test_progress_monotonic() {
        let mut piece = ConfettiPiece {
            start_x: 0.0,
            drift: 0.0,
            spin: 0.0,
            duration: 3.0,
            age: 0.0,
            color: CONFETTI_PALETTE[1],
        };
        let mut last = piece.progress();
        while piece.age < piece.duration {
            piece.age += 0.1;
            let p = piece.progress();
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }
}
