//! Round state and core simulation types

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::countdown::Countdown;
use super::particles::{BurstEmitter, Particle};
use crate::consts::*;

/// How a finished round went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn from_score(score: u32) -> Self {
        if score >= WIN_THRESHOLD {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        }
    }
}

/// Final result published when the countdown expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: u32,
    pub outcome: Outcome,
}

impl RoundSummary {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            outcome: Outcome::from_score(score),
        }
    }
}

/// Things that happened during a frame, for audio and presentation
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted,
    /// Apple landed in the basket
    TargetCaught { score: u32 },
    /// Apple fell past the bottom edge
    TargetMissed,
    RoundEnded(RoundSummary),
}

/// Everything that exists only while a round is running
#[derive(Debug, Clone)]
pub struct RoundState {
    pub score: u32,
    pub countdown: Countdown,
    /// Basket
    pub player: Body,
    /// Falling apple
    pub target: Body,
    pub emitter: BurstEmitter,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
}

impl RoundState {
    /// Fresh round with the apple at the top at `target_x`
    pub fn new(target_x: f32, max_particles: usize) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let mut player = Body::new(Vec2::new(0.0, WORLD_HEIGHT - PLAYER_BOTTOM_GAP), size)
            .with_collider(
                Vec2::new(size.x - size.x / 4.0, size.y / 10.0),
                Vec2::new(size.x / 10.0, size.y - size.y / 10.0),
            );
        player.allow_gravity = false;
        player.collide_world_bounds = true;

        let target = Body::new(Vec2::new(target_x, 0.0), Vec2::splat(TARGET_SIZE))
            .with_max_velocity(Vec2::new(0.0, TARGET_MAX_FALL_SPEED));

        Self {
            score: 0,
            countdown: Countdown::new(ROUND_DURATION_SECS),
            player,
            target,
            emitter: BurstEmitter::new(max_particles),
            particles: Vec::new(),
        }
    }

    pub fn remaining_seconds(&self) -> f32 {
        self.countdown.remaining_seconds()
    }

    /// Move the apple back to the top at `x`
    pub fn respawn_target(&mut self, x: f32) {
        self.target.pos = Vec2::new(x, 0.0);
        self.target.vel = Vec2::ZERO;
    }

    /// True once the apple has dropped past the bottom edge
    pub fn target_fell(&self) -> bool {
        self.target.pos.y >= WORLD_HEIGHT
    }

    pub fn target_in_basket(&self) -> bool {
        self.target.collider().overlaps(&self.player.collider())
    }
}

/// Random respawn column: integer in `[0, WORLD_WIDTH - TARGET_SIZE)`
pub fn random_target_x<R: Rng>(rng: &mut R) -> f32 {
    let max_x = (WORLD_WIDTH - TARGET_SIZE) as u32;
    if max_x == 0 {
        return 0.0;
    }
    rng.random_range(0..max_x) as f32
}

/// Where the round state machine currently is
#[derive(Debug, Clone)]
pub enum RoundPhase {
    /// Waiting on the start overlay
    Idle,
    Running(RoundState),
    /// Terminal summary; nothing mutates until a new round starts
    Ended(RoundSummary),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_outcome_threshold() {
        assert_eq!(Outcome::from_score(10), Outcome::Win);
        assert_eq!(Outcome::from_score(25), Outcome::Win);
        assert_eq!(Outcome::from_score(9), Outcome::Lose);
        assert_eq!(Outcome::from_score(0), Outcome::Lose);
    }

    #[test]
    fn test_new_round_layout() {
        let state = RoundState::new(120.0, 64);
        assert_eq!(state.score, 0);
        assert_eq!(state.target.pos, Vec2::new(120.0, 0.0));
        assert_eq!(state.player.pos, Vec2::new(0.0, WORLD_HEIGHT - PLAYER_BOTTOM_GAP));
        assert!(!state.player.allow_gravity);
        assert_eq!(state.remaining_seconds(), ROUND_DURATION_SECS);

        // Catch zone is a thin strip along the bottom of the basket
        let zone = state.player.collider();
        assert_eq!(zone.size(), Vec2::new(75.0, 8.0));
        assert_eq!(zone.min, Vec2::new(10.0, WORLD_HEIGHT - PLAYER_BOTTOM_GAP + 72.0));
    }

    #[test]
    fn test_random_target_x_in_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let x = random_target_x(&mut rng);
            assert!((0.0..WORLD_WIDTH - TARGET_SIZE).contains(&x));
            assert_eq!(x.fract(), 0.0);
        }
    }
}
