/// Texture descriptors, formats, filters and clear values used by the
/// host's temporary render targets.

use glam::Vec4;
use serde::{Deserialize, Serialize};

// ===== COLOR =====

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color as a vector uniform (x = r, y = g, z = b, w = a)
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<Color> for Vec4 {
    fn from(color: Color) -> Self {
        color.to_vec4()
    }
}

// ===== FORMATS =====

/// Color format of a render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorFormat {
    /// 8 bits per channel
    #[default]
    Argb32,
    /// 16-bit float per channel
    ArgbHalf,
    /// 32-bit float per channel
    ArgbFloat,
    /// Two 16-bit float channels
    RgHalf,
    /// One 16-bit float channel
    RHalf,
    /// One 8-bit channel
    R8,
    /// The host's default HDR format
    DefaultHdr,
}

/// Sampling filter of a render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    Point,
    Bilinear,
    Trilinear,
}

// ===== TEXTURE DESCRIPTOR =====

/// Descriptor for a render target
///
/// The host supplies the camera's descriptor every frame. Passes derive the
/// descriptors of their temporary targets from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color format
    pub color_format: ColorFormat,
    /// Depth buffer precision in bits (0 = no depth buffer)
    pub depth_buffer_bits: u32,
    /// MSAA sample count (1 = no multisampling)
    pub msaa_samples: u32,
}

impl TextureDescriptor {
    pub fn new(width: u32, height: u32, color_format: ColorFormat, depth_buffer_bits: u32) -> Self {
        Self {
            width,
            height,
            color_format,
            depth_buffer_bits,
            msaa_samples: 1,
        }
    }

    /// Copy of this descriptor with another color format
    pub fn with_color_format(mut self, color_format: ColorFormat) -> Self {
        self.color_format = color_format;
        self
    }

    /// Copy of this descriptor with another depth precision
    pub fn with_depth_buffer_bits(mut self, depth_buffer_bits: u32) -> Self {
        self.depth_buffer_bits = depth_buffer_bits;
        self
    }

    /// Returns true when the descriptor covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ===== CLEAR FLAGS =====

bitflags::bitflags! {
    /// Buffers cleared by `FrameContext::clear_render_target`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits();
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
