//! Particle field
//!
//! A fixed-size collection of drifting, pulsing glow points. Particles are
//! created once at construction and recycled forever by wraparound; the
//! collection never grows or shrinks. The field advances one step per
//! display frame (velocities are in surface units per frame).

use rand::Rng;
use vitrine_math::Vec2;

/// Attribute ranges for the randomized particle draws
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    /// Number of particles, fixed for the field's lifetime
    pub particle_count: usize,
    /// Maximum drift speed per axis, in surface units per frame
    pub max_drift: f32,
    /// Particle core radius range
    pub radius_min: f32,
    pub radius_max: f32,
    /// Base opacity range
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Pulse phase advance per frame range
    pub pulse_rate_min: f32,
    pub pulse_rate_max: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: 50,
            max_drift: 0.25,
            radius_min: 1.0,
            radius_max: 4.0,
            opacity_min: 0.3,
            opacity_max: 0.8,
            pulse_rate_min: 0.01,
            pulse_rate_max: 0.03,
        }
    }
}

/// A single glow particle
///
/// All attributes except position and pulse phase are drawn once at
/// creation and never change.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_opacity: f32,
    pub pulse_phase: f32,
    pub pulse_rate: f32,
}

impl Particle {
    /// Current pulse brightness, always in [0.4, 1.0]
    #[inline]
    pub fn brightness(&self) -> f32 {
        self.pulse_phase.sin() * 0.3 + 0.7
    }

    /// Effective alpha for both the glow and the core
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.base_opacity * self.brightness()
    }
}

/// The particle field
pub struct ParticleField {
    bounds: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field sized to `bounds` with randomized particles
    pub fn new(bounds: Vec2, params: FieldParams) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..params.particle_count)
            .map(|_| Particle {
                position: Vec2::new(
                    rng.gen_range(0.0..bounds.x.max(1.0)),
                    rng.gen_range(0.0..bounds.y.max(1.0)),
                ),
                velocity: Vec2::new(
                    rng.gen_range(-params.max_drift..params.max_drift),
                    rng.gen_range(-params.max_drift..params.max_drift),
                ),
                radius: rng.gen_range(params.radius_min..params.radius_max),
                base_opacity: rng.gen_range(params.opacity_min..params.opacity_max),
                pulse_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                pulse_rate: rng.gen_range(params.pulse_rate_min..params.pulse_rate_max),
            })
            .collect();

        Self { bounds, particles }
    }

    /// Advance every particle by one frame
    ///
    /// Position advances by velocity, then wraps one-sided: overshoot past a
    /// max bound teleports to 0, undershoot past 0 teleports to the max
    /// bound. Exact 0 is in-bounds. The pulse phase grows without bound;
    /// only its sine is ever consumed.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;

            if p.position.x < 0.0 {
                p.position.x = self.bounds.x;
            }
            if p.position.x > self.bounds.x {
                p.position.x = 0.0;
            }
            if p.position.y < 0.0 {
                p.position.y = self.bounds.y;
            }
            if p.position.y > self.bounds.y {
                p.position.y = 0.0;
            }

            p.pulse_phase += p.pulse_rate;
        }
    }

    /// Resync the field bounds to a resized surface
    ///
    /// Particles are not repositioned; any that land out of bounds re-enter
    /// through the wraparound test on their next step.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Current surface bounds
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// All particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles (fixed at construction)
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
