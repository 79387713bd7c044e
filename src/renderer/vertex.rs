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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, written to the surface unconverted)
pub mod colors {
    /// 0xRRGGBB -> opaque RGBA
    pub const fn hex(rgb: u32) -> [f32; 4] {
        [
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
            1.0,
        ]
    }

    pub const BACKGROUND: [f32; 4] = hex(0xEEEEEE);
    pub const BALL: [f32; 4] = hex(0x0095DD);
    pub const PADDLE: [f32; 4] = hex(0x0095DD);
    pub const BRICK_OUTLINE: [f32; 4] = hex(0x000000);

    /// Brick fill by row, top to bottom, cycling
    pub const BRICK_ROWS: [[f32; 4]; 5] = [
        hex(0xFF6347), // Tomato
        hex(0xFFA500), // Orange
        hex(0xFFD700), // Gold
        hex(0x90EE90), // Light green
        hex(0x87CEFA), // Light sky blue
    ];

    pub fn brick(row: usize) -> [f32; 4] {
        BRICK_ROWS[row % BRICK_ROWS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::colors;

    #[test]
    fn test_hex() {
        assert_eq!(colors::hex(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors::hex(0x000000), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_brick_palette_cycles() {
        assert_eq!(colors::brick(0), colors::hex(0xFF6347));
        assert_eq!(colors::brick(4), colors::hex(0x87CEFA));
        assert_eq!(colors::brick(5), colors::brick(0));
    }
}
