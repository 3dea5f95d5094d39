//! Coin burst particles
//!
//! Visual only. Nothing in here feeds back into scoring.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Particles emitted per second while a burst is active
const EMIT_RATE: f32 = 240.0;

/// A single coin particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, removed at 0.0
    pub life: f32,
    pub size: f32,
}

/// Emitter that follows an anchor and emits for a short window when triggered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BurstEmitter {
    /// Seconds of emission left in the current burst
    remaining: f32,
    /// Fractional particles carried between steps
    carry: f32,
    /// Upper bound on live particles
    pub max_particles: usize,
}

impl BurstEmitter {
    pub fn new(max_particles: usize) -> Self {
        Self {
            remaining: 0.0,
            carry: 0.0,
            max_particles,
        }
    }

    /// Start (or restart) a burst
    pub fn start(&mut self) {
        self.remaining = BURST_DURATION_SECS;
    }

    pub fn is_emitting(&self) -> bool {
        self.remaining > 0.0
    }

    /// Emit new particles at `anchor` and age existing ones
    pub fn update<R: Rng>(
        &mut self,
        particles: &mut Vec<Particle>,
        anchor: Vec2,
        dt: f32,
        rng: &mut R,
    ) {
        if self.remaining > 0.0 {
            let window = dt.min(self.remaining);
            self.remaining -= window;
            self.carry += window * EMIT_RATE;
            while self.carry >= 1.0 {
                self.carry -= 1.0;
                if particles.len() >= self.max_particles {
                    continue;
                }
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                particles.push(Particle {
                    pos: anchor,
                    vel: Vec2::from_angle(angle) * PARTICLE_SPEED,
                    life: 1.0,
                    size: PARTICLE_SIZE,
                });
            }
        } else {
            self.carry = 0.0;
        }

        for p in particles.iter_mut() {
            p.vel.y += PARTICLE_GRAVITY * dt;
            p.pos += p.vel * dt;
            p.life -= dt / PARTICLE_LIFETIME_SECS;
        }
        particles.retain(|p| p.life > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_emits_then_stops() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut emitter = BurstEmitter::new(256);
        let mut particles = Vec::new();

        emitter.start();
        let mut steps = 0;
        while emitter.is_emitting() {
            emitter.update(&mut particles, Vec2::new(50.0, 50.0), SIM_DT, &mut rng);
            steps += 1;
            assert!(steps < 100, "burst never ended");
        }
        assert!(!particles.is_empty());
        let emitted = particles.len();

        // No new particles once the burst window closes
        emitter.update(&mut particles, Vec2::ZERO, SIM_DT, &mut rng);
        assert!(particles.len() <= emitted);
    }

    #[test]
    fn test_particles_expire() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut emitter = BurstEmitter::new(256);
        let mut particles = Vec::new();
        emitter.start();
        for _ in 0..((PARTICLE_LIFETIME_SECS + 0.5) / SIM_DT) as usize {
            emitter.update(&mut particles, Vec2::ZERO, SIM_DT, &mut rng);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_respects_particle_cap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut emitter = BurstEmitter::new(3);
        let mut particles = Vec::new();
        emitter.start();
        emitter.update(&mut particles, Vec2::ZERO, 0.1, &mut rng);
        assert_eq!(particles.len(), 3);
    }
}
