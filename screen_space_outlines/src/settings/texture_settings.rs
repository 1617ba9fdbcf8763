/// Settings of the two texture-producing passes.
///
/// The shared `TextureSettings` is composed into each specialized settings
/// struct and flattened in the serialized form.

use serde::{Deserialize, Serialize};
use crate::pipeline::{Color, ColorFormat, FilterMode, PerObjectData};

/// Settings shared by every texture-producing pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    /// Override material (asset name). Unset disables the pass.
    pub material: Option<String>,
    /// Color format of the produced texture
    pub color_format: ColorFormat,
    /// Depth precision of the produced texture
    pub depth_buffer_bits: u32,
    /// Sampling filter of the produced texture
    pub filter_mode: FilterMode,
    /// Clear color of the produced texture
    pub background_color: Color,
    pub enable_dynamic_batching: bool,
    pub enable_instancing: bool,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            material: None,
            color_format: ColorFormat::default(),
            depth_buffer_bits: 16,
            filter_mode: FilterMode::default(),
            background_color: Color::BLACK,
            enable_dynamic_batching: false,
            enable_instancing: false,
        }
    }
}

/// Settings of the view-space normals pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalsTextureSettings {
    #[serde(flatten)]
    pub texture: TextureSettings,
    /// Material drawn over the occluder layer (asset name)
    pub occluders_material: Option<String>,
    /// Per-object attributes supplied to the normals shader
    pub per_object_data: PerObjectData,
}

/// Settings of the vertex colors pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexColorsTextureSettings {
    #[serde(flatten)]
    pub texture: TextureSettings,
}
