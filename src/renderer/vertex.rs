//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Court-space vertex with a solid color.
///
/// `tex_coord` always samples the center of a white texture.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
    pub tex_coord: [f32; 2],
}

/// Texture coordinate used for every solid-color vertex
pub const WHITE_TEX_COORD: [f32; 2] = [0.5, 0.5];

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [u8; 4]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
            tex_coord: WHITE_TEX_COORD,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: [u8; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
                wgpu::VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 3]>() + std::mem::size_of::<[u8; 4]>())
                        as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Pack a 0xRRGGBBAA literal into RGBA bytes
pub const fn hex_color(hex: u32) -> [u8; 4] {
    [
        (hex >> 24) as u8,
        (hex >> 16) as u8,
        (hex >> 8) as u8,
        hex as u8,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::hex_color;

    pub const BACKGROUND: [u8; 4] = hex_color(0x193b59ff);
    pub const FOREGROUND: [u8; 4] = hex_color(0xffffffff);
    pub const BALL: [u8; 4] = FOREGROUND;
    pub const BRICK: [u8; 4] = FOREGROUND;
    pub const HUB: [u8; 4] = FOREGROUND;
    pub const LIFE: [u8; 4] = FOREGROUND;
}
