//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in playfield coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle border drawn inside `pos..pos+size`
pub fn rect_outline(pos: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);

    // Top, bottom, left, right
    vertices.extend(rect(pos, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x, pos.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x + size.x - t, pos.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));

    vertices
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

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(30.0, 30.0), Vec2::new(50.0, 20.0), WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 30.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 80.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 30.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 50.0);
    }

    #[test]
    fn test_outline_stays_inside() {
        let pos = Vec2::new(10.0, 10.0);
        let size = Vec2::new(50.0, 20.0);
        let v = rect_outline(pos, size, 1.0, WHITE);
        assert_eq!(v.len(), 24);
        for vertex in &v {
            assert!(vertex.position[0] >= 10.0 && vertex.position[0] <= 60.0);
            assert!(vertex.position[1] >= 10.0 && vertex.position[1] <= 30.0);
        }
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(100.0, 100.0);
        let v = circle(center, 8.0, WHITE, 16);
        assert_eq!(v.len(), 48);
        for vertex in &v {
            let d = Vec2::from(vertex.position).distance(center);
            assert!(d <= 8.0 + 1e-4);
        }
    }
}
