//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Size of one vertex in an upload buffer
pub const VERTEX_STRIDE: usize = std::mem::size_of::<Vertex>();

/// Colors for game elements
pub mod colors {
    use crate::sim::ExplosionColor;

    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const NO_FIRE_ZONE: [f32; 4] = [0.0, 100.0 / 255.0, 0.0, 1.0];
    pub const SHOT: [f32; 4] = WHITE;
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TRAIL: [f32; 4] = WHITE;
    pub const STRUCTURE: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0];
    pub const STRUCTURE_OUTLINE: [f32; 4] = WHITE;
    pub const TURRET: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
    pub const TURRET_OUTLINE: [f32; 4] = WHITE;
    pub const RELOADING: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = WHITE;

    pub fn explosion(color: ExplosionColor) -> [f32; 4] {
        match color {
            ExplosionColor::Red => [1.0, 0.0, 0.0, 1.0],
            ExplosionColor::Yellow => [1.0, 1.0, 0.0, 1.0],
            ExplosionColor::Orange => [1.0, 165.0 / 255.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(VERTEX_STRIDE, 24);
        let vertices = [Vertex::new(1.0, 2.0, colors::WHITE); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 3 * VERTEX_STRIDE);
    }
}
