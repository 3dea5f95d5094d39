//! Arcade physics bodies
//!
//! A body is a sprite rectangle (top-left origin) with a collider box that
//! may sit inset inside the sprite. Velocity integrates with optional
//! gravity and a per-axis speed cap.

use glam::Vec2;

use super::collision::Aabb;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Sprite top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite dimensions
    pub size: Vec2,
    /// Collider offset from `pos`
    pub collider_offset: Vec2,
    /// Collider dimensions
    pub collider_size: Vec2,
    /// Absolute per-axis speed cap (`None` = unbounded)
    pub max_velocity: Option<Vec2>,
    pub allow_gravity: bool,
    /// Keep the collider inside the world after every step
    pub collide_world_bounds: bool,
}

impl Body {
    /// A body whose collider matches its sprite
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            collider_offset: Vec2::ZERO,
            collider_size: size,
            max_velocity: None,
            allow_gravity: true,
            collide_world_bounds: false,
        }
    }

    pub fn with_collider(mut self, size: Vec2, offset: Vec2) -> Self {
        self.collider_size = size;
        self.collider_offset = offset;
        self
    }

    pub fn with_max_velocity(mut self, max: Vec2) -> Self {
        self.max_velocity = Some(max.abs());
        self
    }

    pub fn collider(&self) -> Aabb {
        Aabb::new(self.pos + self.collider_offset, self.collider_size)
    }

    /// Sprite centre, used as the particle anchor
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Advance one step: gravity, velocity clamp, then position
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        if self.allow_gravity {
            self.vel.y += gravity * dt;
        }
        if let Some(max) = self.max_velocity {
            self.vel = self.vel.clamp(-max, max);
        }
        self.pos += self.vel * dt;
    }

    /// Push the collider back inside the world, zeroing blocked velocity
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32) {
        let offset = self.collider().containment_offset(width, height);
        if offset.x != 0.0 {
            self.pos.x += offset.x;
            self.vel.x = 0.0;
        }
        if offset.y != 0.0 {
            self.pos.y += offset.y;
            self.vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accelerates_and_moves() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(10.0));
        body.integrate(0.5, 400.0);
        assert_eq!(body.vel.y, 200.0);
        assert_eq!(body.pos.y, 100.0);
    }

    #[test]
    fn test_max_velocity_clamps_each_axis() {
        let mut body =
            Body::new(Vec2::ZERO, Vec2::splat(10.0)).with_max_velocity(Vec2::new(0.0, 400.0));
        body.vel = Vec2::new(50.0, 390.0);
        body.integrate(1.0, 400.0);
        assert_eq!(body.vel, Vec2::new(0.0, 400.0));
        assert_eq!(body.pos, Vec2::new(0.0, 400.0));
    }

    #[test]
    fn test_no_gravity_body_keeps_height() {
        let mut body = Body::new(Vec2::new(0.0, 50.0), Vec2::splat(10.0));
        body.allow_gravity = false;
        body.vel.x = 100.0;
        body.integrate(0.1, 400.0);
        assert_eq!(body.pos.y, 50.0);
        assert!((body.pos.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_uses_collider_not_sprite() {
        // Collider inset 10px from the sprite's left edge
        let mut body = Body::new(Vec2::new(-30.0, 0.0), Vec2::new(100.0, 80.0))
            .with_collider(Vec2::new(75.0, 8.0), Vec2::new(10.0, 72.0));
        body.vel.x = -350.0;
        body.clamp_to_bounds(500.0, 500.0);
        assert_eq!(body.pos.x, -10.0);
        assert_eq!(body.collider().min.x, 0.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_clamp_right_edge() {
        let mut body = Body::new(Vec2::new(480.0, 0.0), Vec2::new(100.0, 80.0))
            .with_collider(Vec2::new(75.0, 8.0), Vec2::new(10.0, 72.0));
        body.clamp_to_bounds(500.0, 500.0);
        assert_eq!(body.collider().max.x, 500.0);
    }
}
