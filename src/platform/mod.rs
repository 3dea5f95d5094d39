//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input state
//! - DOM presentation (score/time text, start and end overlays)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod input;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPresenter;
pub use input::KeyState;
