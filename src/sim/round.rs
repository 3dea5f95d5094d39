//! Round state machine and per-frame update
//!
//! `GameRound` moves through `Idle -> Running -> Ended`. The host calls
//! `frame` once per animation frame; physics advances in fixed substeps and
//! the countdown advances by real elapsed time.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, RoundPhase, RoundState, RoundSummary, random_target_x};
use crate::consts::*;

/// Directional key state sampled at the start of a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
}

impl FrameInput {
    /// Basket x velocity for this input; opposing keys cancel out
    pub fn velocity_x(&self, speed: f32) -> f32 {
        match (self.left, self.right) {
            (true, false) => -speed,
            (false, true) => speed,
            _ => 0.0,
        }
    }
}

pub struct GameRound {
    phase: RoundPhase,
    rng: Pcg32,
    accumulator: f32,
    max_particles: usize,
    events: Vec<GameEvent>,
}

impl GameRound {
    pub fn new(seed: u64, max_particles: usize) -> Self {
        Self {
            phase: RoundPhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
            accumulator: 0.0,
            max_particles,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// Live round state, if a round is running
    pub fn state(&self) -> Option<&RoundState> {
        match &self.phase {
            RoundPhase::Running(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable round state, for hosts that place bodies directly
    pub fn state_mut(&mut self) -> Option<&mut RoundState> {
        match &mut self.phase {
            RoundPhase::Running(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, RoundPhase::Running(_))
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        match self.phase {
            RoundPhase::Ended(summary) => Some(summary),
            _ => None,
        }
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a round from the start screen or after a previous round ended
    pub fn start_round(&mut self) {
        if self.is_running() {
            return;
        }
        let x = random_target_x(&mut self.rng);
        self.phase = RoundPhase::Running(RoundState::new(x, self.max_particles));
        self.accumulator = 0.0;
        self.events.push(GameEvent::RoundStarted);
        log::info!("Round started ({}s, {} to win)", ROUND_DURATION_SECS, WIN_THRESHOLD);
    }

    /// Full per-frame driver: physics substeps, then frame rules
    pub fn frame(&mut self, input: FrameInput, elapsed_secs: f32) {
        if !self.is_running() {
            return;
        }

        // A non-finite delta would leave the accumulator NaN
        let dt = if elapsed_secs.is_finite() {
            elapsed_secs.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step_physics(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }

        self.on_frame(input, elapsed_secs);
    }

    /// One fixed physics step: move bodies, clamp the basket, detect catches
    pub fn step_physics(&mut self, dt: f32) {
        let RoundPhase::Running(state) = &mut self.phase else {
            return;
        };

        state.player.integrate(dt, GRAVITY);
        if state.player.collide_world_bounds {
            state.player.clamp_to_bounds(WORLD_WIDTH, WORLD_HEIGHT);
        }
        state.target.integrate(dt, GRAVITY);

        let anchor = state.player.center();
        state
            .emitter
            .update(&mut state.particles, anchor, dt, &mut self.rng);

        if state.target_in_basket() {
            self.on_target_caught();
        }
    }

    /// Frame rules: respawn a missed apple, steer the basket, tick the clock
    pub fn on_frame(&mut self, input: FrameInput, elapsed_secs: f32) {
        let RoundPhase::Running(state) = &mut self.phase else {
            return;
        };

        if state.target_fell() {
            state.respawn_target(random_target_x(&mut self.rng));
            self.events.push(GameEvent::TargetMissed);
        }

        state.player.vel.x = input.velocity_x(PLAYER_SPEED);
        state.player.vel.y = 0.0;

        if state.countdown.advance(elapsed_secs) {
            self.end_round();
        }
    }

    /// Collision callback: score, respawn, and fire the coin burst
    pub fn on_target_caught(&mut self) {
        let RoundPhase::Running(state) = &mut self.phase else {
            return;
        };

        state.respawn_target(random_target_x(&mut self.rng));
        state.score += 1;
        state.emitter.start();

        log::debug!("Caught apple, score {}", state.score);
        self.events.push(GameEvent::TargetCaught {
            score: state.score,
        });
    }

    /// Countdown expiry: freeze the round and publish the outcome
    pub fn end_round(&mut self) -> Option<RoundSummary> {
        let RoundPhase::Running(state) = &self.phase else {
            return None;
        };

        let summary = RoundSummary::new(state.score);
        self.phase = RoundPhase::Ended(summary);
        self.accumulator = 0.0;
        self.events.push(GameEvent::RoundEnded(summary));
        log::info!(
            "Round over: {} with {} points",
            summary.outcome.as_str(),
            summary.score
        );
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Outcome;
    use glam::Vec2;

    fn running(seed: u64) -> GameRound {
        let mut round = GameRound::new(seed, 64);
        round.start_round();
        round
    }

    fn state_mut(round: &mut GameRound) -> &mut RoundState {
        round.state_mut().expect("round not running")
    }

    #[test]
    fn test_idle_until_started() {
        let mut round = GameRound::new(1, 64);
        assert!(matches!(round.phase(), RoundPhase::Idle));

        // Frames before start are ignored
        round.frame(FrameInput::default(), 1.0);
        round.on_target_caught();
        assert!(matches!(round.phase(), RoundPhase::Idle));
        assert!(round.drain_events().is_empty());

        round.start_round();
        assert!(round.is_running());
        assert_eq!(round.drain_events(), vec![GameEvent::RoundStarted]);
        let state = round.state().unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.target.pos.y, 0.0);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut round = running(3);
        round.on_target_caught();
        round.start_round();
        assert_eq!(round.state().unwrap().score, 1);
    }

    #[test]
    fn test_input_mapping() {
        let speed = PLAYER_SPEED;
        let left = FrameInput { left: true, right: false };
        let right = FrameInput { left: false, right: true };
        let both = FrameInput { left: true, right: true };
        assert_eq!(left.velocity_x(speed), -speed);
        assert_eq!(right.velocity_x(speed), speed);
        assert_eq!(both.velocity_x(speed), 0.0);
        assert_eq!(FrameInput::default().velocity_x(speed), 0.0);
    }

    #[test]
    fn test_on_frame_sets_player_velocity() {
        let mut round = running(4);
        round.on_frame(FrameInput { left: false, right: true }, 0.0);
        assert_eq!(round.state().unwrap().player.vel.x, PLAYER_SPEED);
        round.on_frame(FrameInput::default(), 0.0);
        assert_eq!(round.state().unwrap().player.vel.x, 0.0);
    }

    #[test]
    fn test_missed_target_respawns_at_top() {
        let mut round = running(5);
        state_mut(&mut round).target.pos = Vec2::new(200.0, WORLD_HEIGHT + 3.0);
        round.drain_events();

        round.on_frame(FrameInput::default(), 0.0);
        let state = round.state().unwrap();
        assert_eq!(state.target.pos.y, 0.0);
        assert_eq!(state.target.vel, Vec2::ZERO);
        assert!((0.0..WORLD_WIDTH - TARGET_SIZE).contains(&state.target.pos.x));
        assert_eq!(state.score, 0);
        assert_eq!(round.drain_events(), vec![GameEvent::TargetMissed]);
    }

    #[test]
    fn test_catch_scores_and_respawns() {
        let mut round = running(6);
        state_mut(&mut round).target.pos.y = 300.0;
        round.drain_events();

        round.on_target_caught();
        let state = round.state().unwrap();
        assert_eq!(state.score, 1);
        assert_eq!(state.target.pos.y, 0.0);
        assert!(state.emitter.is_emitting());
        let events = round.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::TargetCaught { score: 1, .. }]));
    }

    #[test]
    fn test_falling_apple_lands_in_still_basket() {
        let mut round = running(7);
        {
            let state = state_mut(&mut round);
            let zone = state.player.collider();
            state.target.pos = Vec2::new(zone.center().x - TARGET_SIZE / 2.0, zone.min.y - 60.0);
        }
        for _ in 0..240 {
            round.frame(FrameInput::default(), SIM_DT);
            if round.state().unwrap().score > 0 {
                break;
            }
        }
        assert_eq!(round.state().unwrap().score, 1);
    }

    #[test]
    fn test_basket_stops_at_left_wall() {
        let mut round = running(8);
        let left = FrameInput { left: true, right: false };
        for _ in 0..120 {
            round.frame(left, 1.0 / 60.0);
        }
        let state = round.state().unwrap();
        assert!(state.player.collider().min.x >= 0.0);
        assert!(state.player.collider().min.x < 1.0);
    }

    #[test]
    fn test_bad_frame_delta_does_not_freeze_physics() {
        let mut round = running(12);
        let right = FrameInput { left: false, right: true };
        round.frame(right, f32::NAN);
        round.frame(right, f32::INFINITY);
        round.frame(right, -1.0);
        assert_eq!(round.state().unwrap().remaining_seconds(), ROUND_DURATION_SECS);

        for _ in 0..30 {
            round.frame(right, 1.0 / 60.0);
        }
        let state = round.state().unwrap();
        assert!(state.target.pos.y > 0.0);
        assert!(state.player.pos.x > 0.0);
    }

    #[test]
    fn test_countdown_ends_round_once() {
        let mut round = running(9);
        for _ in 0..3 {
            round.on_target_caught();
        }
        round.drain_events();
        // Keep the apple well away from the parked basket
        state_mut(&mut round).target.pos.x = 400.0;

        for _ in 0..29 {
            round.frame(FrameInput::default(), 1.0);
        }
        assert!(round.is_running());
        assert!(round.state().unwrap().remaining_seconds() <= 1.0);

        round.frame(FrameInput::default(), 1.0);
        let summary = round.summary().unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.outcome, Outcome::Lose);

        // Further frames are inert
        round.frame(FrameInput::default(), 5.0);
        round.on_target_caught();
        assert_eq!(round.end_round(), None);
        let ended: Vec<_> = round
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::RoundEnded(_)))
            .collect();
        assert_eq!(ended.len(), 1);
    }

    #[test]
    fn test_ten_catches_wins() {
        let mut round = running(10);
        for _ in 0..WIN_THRESHOLD {
            round.on_target_caught();
        }
        let summary = round.end_round().unwrap();
        assert_eq!(summary.score, 10);
        assert_eq!(summary.outcome, Outcome::Win);
    }

    #[test]
    fn test_restart_after_end() {
        let mut round = running(11);
        round.on_target_caught();
        round.end_round();
        round.start_round();
        assert!(round.is_running());
        assert_eq!(round.state().unwrap().score, 0);
        assert_eq!(round.state().unwrap().remaining_seconds(), ROUND_DURATION_SECS);
    }

    #[test]
    fn test_determinism() {
        let mut a = running(99999);
        let mut b = running(99999);
        let inputs = [
            FrameInput { left: true, right: false },
            FrameInput::default(),
            FrameInput { left: false, right: true },
        ];
        for _ in 0..200 {
            for input in inputs {
                a.frame(input, 1.0 / 60.0);
                b.frame(input, 1.0 / 60.0);
            }
        }
        let (sa, sb) = (a.state().unwrap(), b.state().unwrap());
        assert_eq!(sa.score, sb.score);
        assert_eq!(sa.target.pos, sb.target.pos);
        assert_eq!(sa.player.pos, sb.player.pos);
    }
}
