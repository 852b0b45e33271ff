//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a triangle list in window coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for small circles (shots, missiles, explosions)
pub const CIRCLE_SEGMENTS: u32 = 24;

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

/// Generate vertices for a quad given its four corners in winding order
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners.map(|p| Vertex::new(p.x, p.y, color));
    [a, b, c, c, d, a]
}

/// Generate vertices for a rectangle placed at `pos`, with `pivot` the point
/// inside the rectangle (local coordinates) that sits on `pos` and that the
/// rectangle rotates around by `degrees`.
pub fn rect(pos: Vec2, size: Vec2, pivot: Vec2, degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let rotation = Vec2::from_angle(degrees.to_radians());
    let corners = [
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        size,
        Vec2::new(0.0, size.y),
    ]
    .map(|local| pos + rotation.rotate(local - pivot));
    quad(corners, color).to_vec()
}

/// Rectangle with an outline band. A positive `thickness` grows the
/// outline outward, a negative one eats into the fill.
pub fn outlined_rect(
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    degrees: f32,
    thickness: f32,
    fill: [f32; 4],
    outline: [f32; 4],
) -> Vec<Vertex> {
    let band = thickness.abs();
    let (outer_size, outer_pivot, inner_size, inner_pivot) = if thickness >= 0.0 {
        (
            size + Vec2::splat(2.0 * band),
            pivot + Vec2::splat(band),
            size,
            pivot,
        )
    } else {
        (
            size,
            pivot,
            size - Vec2::splat(2.0 * band),
            pivot - Vec2::splat(band),
        )
    };

    let mut vertices = rect(pos, outer_size, outer_pivot, degrees, outline);
    vertices.extend(rect(pos, inner_size, inner_pivot, degrees, fill));
    vertices
}

/// Generate vertices for a thin line between two points
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = dir.perp() * (width / 2.0);
    quad([from + perp, to + perp, to - perp, from - perp], color).to_vec()
}
