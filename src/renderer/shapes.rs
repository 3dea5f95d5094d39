//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, size, color, color)
}

/// Rectangle blending from `top` colour to `bottom` colour
pub fn gradient_rect(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Trapezoid with a wide top edge, for the basket body
pub fn trapezoid(min: Vec2, size: Vec2, inset: f32, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    let top_l = Vec2::new(min.x, min.y);
    let top_r = Vec2::new(max.x, min.y);
    let bot_l = Vec2::new(min.x + inset, max.y);
    let bot_r = Vec2::new(max.x - inset, max.y);
    vec![
        Vertex::new(top_l.x, top_l.y, color),
        Vertex::new(top_r.x, top_r.y, color),
        Vertex::new(bot_l.x, bot_l.y, color),
        Vertex::new(bot_l.x, bot_l.y, color),
        Vertex::new(top_r.x, top_r.y, color),
        Vertex::new(bot_r.x, bot_r.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_counts() {
        assert_eq!(rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]).len(), 6);
        assert_eq!(circle(Vec2::ZERO, 5.0, [1.0; 4], 16).len(), 48);
    }

    #[test]
    fn test_trapezoid_narrow_bottom() {
        let v = trapezoid(Vec2::ZERO, Vec2::new(100.0, 50.0), 10.0, [1.0; 4]);
        let bottom: Vec<f32> = v
            .iter()
            .filter(|v| v.position[1] == 50.0)
            .map(|v| v.position[0])
            .collect();
        assert!(bottom.iter().all(|x| (10.0..=90.0).contains(x)));
    }
}
