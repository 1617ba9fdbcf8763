/// Draw-call selection: layer masks, render queues, shader tags and the
/// drawing/filtering settings passed to `FrameContext::draw_renderers`.
///
/// `FilteringSettings::matches` and `DrawingSettings::accepts` define the
/// selection rule, so every host backend filters the same way.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::material::Material;
use super::frame::VisibleRenderer;

// ===== LAYER MASK =====

/// Bitmask of object layers (32 layers, 0..=31)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Selects no layer
    pub const NOTHING: LayerMask = LayerMask(0);
    /// Selects every layer
    pub const EVERYTHING: LayerMask = LayerMask(u32::MAX);

    /// Number of addressable layers
    pub const LAYER_COUNT: u8 = 32;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Build a mask from layer indices. Indices >= 32 are ignored.
    pub fn from_layers(layers: &[u8]) -> Self {
        layers.iter().fold(Self::NOTHING, |mask, &layer| mask.with_layer(layer))
    }

    /// Copy of this mask with `layer` added. Indices >= 32 are ignored.
    pub fn with_layer(self, layer: u8) -> Self {
        if layer >= Self::LAYER_COUNT {
            return self;
        }
        Self(self.0 | (1 << layer))
    }

    pub fn contains_layer(&self, layer: u8) -> bool {
        layer < Self::LAYER_COUNT && self.0 & (1 << layer) != 0
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

// ===== RENDER QUEUE RANGE =====

/// Inclusive range of render queue values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderQueueRange {
    pub lower: u32,
    pub upper: u32,
}

impl RenderQueueRange {
    /// Upper bound of the opaque queues (geometry and alpha test)
    pub const OPAQUE_UPPER: u32 = 2500;
    /// Upper bound of all queues
    pub const MAX: u32 = 5000;

    pub const fn new(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    pub const fn opaque() -> Self {
        Self::new(0, Self::OPAQUE_UPPER)
    }

    pub const fn transparent() -> Self {
        Self::new(Self::OPAQUE_UPPER + 1, Self::MAX)
    }

    pub const fn all() -> Self {
        Self::new(0, Self::MAX)
    }

    pub fn contains(&self, queue: u32) -> bool {
        queue >= self.lower && queue <= self.upper
    }
}

// ===== SHADER TAGS =====

/// Name of a shader pass tag (LightMode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderTagId(pub &'static str);

impl ShaderTagId {
    pub const UNIVERSAL_FORWARD: ShaderTagId = ShaderTagId("UniversalForward");
    pub const UNIVERSAL_FORWARD_ONLY: ShaderTagId = ShaderTagId("UniversalForwardOnly");
    pub const LIGHTWEIGHT_FORWARD: ShaderTagId = ShaderTagId("LightweightForward");
    pub const SRP_DEFAULT_UNLIT: ShaderTagId = ShaderTagId("SRPDefaultUnlit");

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Tags of the standard forward-lit shader passes
pub const FORWARD_SHADER_TAGS: [ShaderTagId; 4] = [
    ShaderTagId::UNIVERSAL_FORWARD,
    ShaderTagId::UNIVERSAL_FORWARD_ONLY,
    ShaderTagId::LIGHTWEIGHT_FORWARD,
    ShaderTagId::SRP_DEFAULT_UNLIT,
];

// ===== FLAGS =====

bitflags::bitflags! {
    /// Per-object attributes the host supplies to the override shader
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PerObjectData: u32 {
        const LIGHT_PROBE = 1 << 0;
        const REFLECTION_PROBES = 1 << 1;
        const LIGHT_PROBE_PROXY_VOLUME = 1 << 2;
        const LIGHTMAPS = 1 << 3;
        const LIGHT_DATA = 1 << 4;
        const MOTION_VECTORS = 1 << 5;
        const LIGHT_INDICES = 1 << 6;
        const REFLECTION_PROBE_DATA = 1 << 7;
        const OCCLUSION_PROBE = 1 << 8;
        const OCCLUSION_PROBE_PROXY_VOLUME = 1 << 9;
        const SHADOW_MASK = 1 << 10;
    }
}

bitflags::bitflags! {
    /// How the host orders objects inside one draw call
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SortingCriteria: u32 {
        const SORTING_LAYER = 1 << 0;
        const RENDER_QUEUE = 1 << 1;
        const BACK_TO_FRONT = 1 << 2;
        const QUANTIZED_FRONT_TO_BACK = 1 << 3;
        const OPTIMIZE_STATE_CHANGES = 1 << 4;
        const CANVAS_ORDER = 1 << 5;
        const COMMON_OPAQUE = Self::SORTING_LAYER.bits()
            | Self::RENDER_QUEUE.bits()
            | Self::QUANTIZED_FRONT_TO_BACK.bits()
            | Self::OPTIMIZE_STATE_CHANGES.bits()
            | Self::CANVAS_ORDER.bits();
    }
}

// ===== DRAWING SETTINGS =====

/// Which shader passes to draw and how to draw them
#[derive(Debug, Clone)]
pub struct DrawingSettings {
    /// Objects are drawn if their shader has one of these pass tags
    pub shader_tags: Vec<ShaderTagId>,
    /// Draw order inside the call
    pub sorting: SortingCriteria,
    /// Material substituted for every object's own material
    pub override_material: Option<Arc<Material>>,
    pub enable_dynamic_batching: bool,
    pub enable_instancing: bool,
    /// Per-object attributes supplied to the shader
    pub per_object_data: PerObjectData,
}

impl DrawingSettings {
    pub fn new(shader_tags: &[ShaderTagId], sorting: SortingCriteria) -> Self {
        Self {
            shader_tags: shader_tags.to_vec(),
            sorting,
            override_material: None,
            enable_dynamic_batching: false,
            enable_instancing: false,
            per_object_data: PerObjectData::empty(),
        }
    }

    /// Returns true if the renderer has a shader pass with one of our tags
    pub fn accepts(&self, renderer: &VisibleRenderer) -> bool {
        renderer.shader_tags.iter().any(|tag| self.shader_tags.contains(tag))
    }
}

// ===== FILTERING SETTINGS =====

/// Which objects participate in a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteringSettings {
    pub render_queue_range: RenderQueueRange,
    pub layer_mask: LayerMask,
}

impl FilteringSettings {
    pub fn new(render_queue_range: RenderQueueRange, layer_mask: LayerMask) -> Self {
        Self { render_queue_range, layer_mask }
    }

    /// Opaque queues restricted to `layer_mask`
    pub fn opaque(layer_mask: LayerMask) -> Self {
        Self::new(RenderQueueRange::opaque(), layer_mask)
    }

    pub fn matches(&self, renderer: &VisibleRenderer) -> bool {
        self.render_queue_range.contains(renderer.render_queue)
            && self.layer_mask.contains_layer(renderer.layer)
    }
}

#[cfg(test)]
#[path = "drawing_tests.rs"]
mod tests;
