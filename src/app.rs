//! Application context
//!
//! One object owns the round, the presentation layer and the audio sink.
//! The browser shell builds it at start-up and forwards frames and button
//! presses; tests build it with recording fakes.

use crate::hud::{self, Presenter};
use crate::settings::Settings;
use crate::sim::{FrameInput, GameEvent, GameRound, RoundState};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Apple caught
    Coin,
    /// Round ended with enough points
    RoundWon,
    /// Round ended short of the target
    RoundLost,
}

/// Audio playback the round needs
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    fn start_music(&mut self);
    fn stop_music(&mut self);
    /// Called once per frame; schedulers top up queued notes here
    fn update(&mut self) {}
    fn set_muted(&mut self, _muted: bool) {}
}

/// Audio sink for headless runs
#[derive(Debug, Default)]
pub struct Silence;

impl AudioSink for Silence {
    fn play(&mut self, _effect: SoundEffect) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
}

pub struct App {
    round: GameRound,
    presenter: Box<dyn Presenter>,
    audio: Box<dyn AudioSink>,
    /// Demo mode: the autopilot supplies input
    pub autopilot: bool,
    /// Set when a round ends; the shell drops GPU resources and stops the loop
    released: bool,
}

impl App {
    pub fn new(
        seed: u64,
        settings: &Settings,
        presenter: Box<dyn Presenter>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        Self {
            round: GameRound::new(seed, settings.max_particles()),
            presenter,
            audio,
            autopilot: false,
            released: false,
        }
    }

    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Mutable access for hosts that drive collision callbacks directly
    pub fn round_mut(&mut self) -> &mut GameRound {
        &mut self.round
    }

    pub fn state(&self) -> Option<&RoundState> {
        self.round.state()
    }

    /// True once the finished round has asked for teardown
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Page visibility changed and the player wants silence while away
    pub fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
    }

    /// Start button pressed
    pub fn start(&mut self) {
        self.round.start_round();
        self.released = false;
        self.dispatch_events();
        self.update_hud();
    }

    /// One animation frame of `elapsed_secs` real time
    pub fn frame(&mut self, input: FrameInput, elapsed_secs: f32) {
        let input = match (self.autopilot, self.round.state()) {
            (true, Some(state)) => crate::sim::autopilot::steer(state),
            _ => input,
        };
        self.round.frame(input, elapsed_secs);
        self.dispatch_events();
        self.audio.update();
        self.update_hud();
    }

    /// Route round events to audio and the page
    pub fn dispatch_events(&mut self) {
        for event in self.round.drain_events() {
            match event {
                GameEvent::RoundStarted => {
                    self.presenter.hide_start_overlay();
                    self.presenter.hide_end_overlay();
                    self.audio.start_music();
                }
                GameEvent::TargetCaught { .. } => {
                    self.audio.play(SoundEffect::Coin);
                }
                GameEvent::TargetMissed => {}
                GameEvent::RoundEnded(summary) => {
                    self.audio.stop_music();
                    self.audio.play(match summary.outcome {
                        crate::sim::Outcome::Win => SoundEffect::RoundWon,
                        crate::sim::Outcome::Lose => SoundEffect::RoundLost,
                    });
                    self.released = true;
                    self.presenter.set_time_text(&hud::time_text(0.0));
                    hud::show_summary(self.presenter.as_mut(), &summary);
                }
            }
        }
    }

    /// Refresh score and time displays
    fn update_hud(&mut self) {
        if let Some(state) = self.round.state() {
            self.presenter.set_score_text(&hud::score_text(state.score));
            self.presenter
                .set_time_text(&hud::time_text(state.remaining_seconds()));
        }
    }
}
