//! Apple Catch - catch falling apples in a basket before the clock runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (round state machine, arcade physics, countdown)
//! - `app`: Application context wiring the round to presentation and audio
//! - `hud`: Presentation layer contract and HUD text
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Player preferences

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AudioSink, SoundEffect};
pub use error::StartupError;
pub use hud::Presenter;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the physics accumulator accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions (pixels, origin top-left, y down)
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Downward acceleration applied to the apple (pixels/s²)
    pub const GRAVITY: f32 = 400.0;
    /// Apple fall speed cap
    pub const TARGET_MAX_FALL_SPEED: f32 = GRAVITY;
    /// Apple sprite is square
    pub const TARGET_SIZE: f32 = 20.0;

    /// Basket sprite size
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Basket rests this far above the bottom edge
    pub const PLAYER_BOTTOM_GAP: f32 = 100.0;
    /// Basket horizontal speed (pixels/s)
    pub const PLAYER_SPEED: f32 = GRAVITY - 50.0;

    /// Round length in seconds
    pub const ROUND_DURATION_SECS: f32 = 30.0;
    /// Catches needed to win a round
    pub const WIN_THRESHOLD: u32 = 10;

    /// Coin burst tuning
    pub const BURST_DURATION_SECS: f32 = 0.1;
    pub const PARTICLE_SPEED: f32 = 100.0;
    pub const PARTICLE_GRAVITY: f32 = GRAVITY - 200.0;
    pub const PARTICLE_LIFETIME_SECS: f32 = 1.0;
    pub const PARTICLE_SIZE: f32 = 4.0;
}
