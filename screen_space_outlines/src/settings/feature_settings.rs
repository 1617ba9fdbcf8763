/// Top-level settings of the screen-space outlines feature.

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::pipeline::{LayerMask, RenderPassEvent};
use super::outline_settings::OutlineSettings;
use super::texture_settings::{NormalsTextureSettings, VertexColorsTextureSettings};

/// Everything the feature reads when it builds its passes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineFeatureSettings {
    /// Requested insertion point (raised to BeforeRenderingPrePasses if earlier)
    pub render_pass_event: RenderPassEvent,
    /// Objects that receive outlines
    pub outlines_layer_mask: LayerMask,
    /// Objects that hide outlines behind them
    pub outlines_occluder_layer_mask: LayerMask,

    pub outline: OutlineSettings,
    pub view_space_normals: NormalsTextureSettings,
    pub vertex_colors: VertexColorsTextureSettings,
}

impl OutlineFeatureSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
