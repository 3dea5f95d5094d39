//! Idle/demo mode - the game steers the basket itself

use super::round::FrameInput;
use super::state::RoundState;

/// Horizontal slack before the autopilot bothers moving
const DEAD_ZONE: f32 = 6.0;

/// Steer the catch zone under the apple
pub fn steer(state: &RoundState) -> FrameInput {
    let basket = state.player.collider().center().x;
    let apple = state.target.collider().center().x;
    let dx = apple - basket;

    FrameInput {
        left: dx < -DEAD_ZONE,
        right: dx > DEAD_ZONE,
    }
}
