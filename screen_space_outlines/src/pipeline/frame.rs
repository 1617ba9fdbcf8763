/// Per-frame data supplied by the host pipeline.

use crate::material::ShaderPropertyId;
use super::drawing::{ShaderTagId, SortingCriteria};
use super::texture::TextureDescriptor;

/// Identifies a render target inside one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTargetId {
    /// The camera's color target (the frame being composed)
    CameraColor,
    /// The camera's depth target
    CameraDepth,
    /// A temporary target allocated under a stable property name
    Temporary(ShaderPropertyId),
}

/// One object that survived culling this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRenderer {
    /// Host-side object id
    pub id: u32,
    /// Object layer (0..=31)
    pub layer: u8,
    /// Render queue of the object's material
    pub render_queue: u32,
    /// Pass tags of the object's shader
    pub shader_tags: Vec<ShaderTagId>,
}

impl VisibleRenderer {
    /// Renderer with a standard opaque forward-lit shader
    pub fn opaque(id: u32, layer: u8) -> Self {
        Self {
            id,
            layer,
            render_queue: 2000,
            shader_tags: vec![ShaderTagId::UNIVERSAL_FORWARD],
        }
    }
}

/// Snapshot of the objects visible to the camera this frame
#[derive(Debug, Clone, Default)]
pub struct CullingResults {
    pub renderers: Vec<VisibleRenderer>,
}

impl CullingResults {
    pub fn new(renderers: Vec<VisibleRenderer>) -> Self {
        Self { renderers }
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

/// Everything a pass may read about the frame being rendered
#[derive(Debug, Clone)]
pub struct FrameData {
    /// Descriptor of the camera target (resolution, format, depth)
    pub camera_target_descriptor: TextureDescriptor,
    /// The camera's current color target
    pub camera_color_target: RenderTargetId,
    /// Visible objects
    pub culling_results: CullingResults,
    /// Sorting the host uses for opaque geometry
    pub opaque_sort_flags: SortingCriteria,
}

impl FrameData {
    pub fn new(camera_target_descriptor: TextureDescriptor, culling_results: CullingResults) -> Self {
        Self {
            camera_target_descriptor,
            camera_color_target: RenderTargetId::CameraColor,
            culling_results,
            opaque_sort_flags: SortingCriteria::COMMON_OPAQUE,
        }
    }
}
