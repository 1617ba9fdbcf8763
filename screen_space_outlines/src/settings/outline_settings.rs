/// Settings of the outline composite pass.
///
/// The ranges in the field docs are advisory. Values outside them are
/// passed to the shader unchanged.

use serde::{Deserialize, Serialize};
use crate::pipeline::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Composite material (asset name). Unset disables the pass.
    pub material: Option<String>,

    // General
    pub outline_color: Color,
    /// 0 to 20
    pub outline_scale: f32,

    // Depth
    /// 0 to 100
    pub depth_threshold: f32,
    /// 0 to 500
    pub roberts_cross_multiplier: f32,

    // Normals
    /// 0 to 1
    pub normal_threshold: f32,

    // Depth/normal relation
    /// 0 to 2
    pub steep_angle_threshold: f32,
    /// 0 to 500
    pub steep_angle_multiplier: f32,

    /// Show the raw edge mask instead of the composited image
    pub debug_view: bool,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            material: None,
            outline_color: Color::BLACK,
            outline_scale: 1.0,
            depth_threshold: 1.5,
            roberts_cross_multiplier: 100.0,
            normal_threshold: 0.4,
            steep_angle_threshold: 0.2,
            steep_angle_multiplier: 25.0,
            debug_view: false,
        }
    }
}
