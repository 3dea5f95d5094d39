//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed physics timestep
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod countdown;
pub mod particles;
pub mod round;
pub mod state;

pub use body::Body;
pub use collision::Aabb;
pub use countdown::Countdown;
pub use particles::{BurstEmitter, Particle};
pub use round::{FrameInput, GameRound};
pub use state::{GameEvent, Outcome, RoundPhase, RoundState, RoundSummary};
