//! Scene assembly: round state to a vertex list

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Body, RoundState};

/// Height of the grass strip along the bottom
const GRASS_HEIGHT: f32 = 60.0;

/// Backdrop shown before, during and after a round
pub fn background() -> Vec<Vertex> {
    let mut v = shapes::gradient_rect(
        Vec2::ZERO,
        Vec2::new(WORLD_WIDTH, WORLD_HEIGHT - GRASS_HEIGHT),
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    );
    v.extend(shapes::rect(
        Vec2::new(0.0, WORLD_HEIGHT - GRASS_HEIGHT),
        Vec2::new(WORLD_WIDTH, GRASS_HEIGHT),
        colors::GRASS,
    ));
    v
}

fn basket(body: &Body) -> Vec<Vertex> {
    let rim_h = body.size.y * 0.15;
    let mut v = shapes::rect(body.pos, Vec2::new(body.size.x, rim_h), colors::BASKET_RIM);
    let bowl_min = body.pos + Vec2::new(0.0, rim_h);
    let bowl_size = Vec2::new(body.size.x, body.size.y - rim_h);
    v.extend(shapes::trapezoid(bowl_min, bowl_size, body.size.x * 0.1, colors::BASKET));

    // Weave bands
    for i in 1..4 {
        let y = bowl_min.y + bowl_size.y * i as f32 / 4.0;
        let inset = body.size.x * 0.1 * i as f32 / 4.0;
        v.extend(shapes::rect(
            Vec2::new(body.pos.x + inset, y - 1.5),
            Vec2::new(body.size.x - 2.0 * inset, 3.0),
            colors::BASKET_WEAVE,
        ));
    }
    v
}

fn apple(body: &Body) -> Vec<Vertex> {
    let r = body.size.x * 0.5;
    let c = body.center();
    let mut v = shapes::circle(c, r, colors::APPLE, 20);
    v.extend(shapes::circle(c + Vec2::new(-r * 0.35, -r * 0.35), r * 0.25, colors::APPLE_SHINE, 10));
    v.extend(shapes::rect(
        Vec2::new(c.x - 1.0, body.pos.y - r * 0.4),
        Vec2::new(2.0, r * 0.5),
        colors::STEM,
    ));
    v.extend(shapes::circle(c + Vec2::new(r * 0.35, -r * 0.9), r * 0.3, colors::LEAF, 8));
    v
}

/// Full frame for a running round
pub fn build(state: &RoundState) -> Vec<Vertex> {
    let mut v = background();
    v.extend(apple(&state.target));
    v.extend(basket(&state.player));
    for p in &state.particles {
        let mut color = colors::COIN;
        color[3] = p.life.clamp(0.0, 1.0);
        v.extend(shapes::circle(p.pos, p.size, color, 8));
    }
    v
}
