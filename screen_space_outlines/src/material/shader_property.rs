/// Shader property identifiers.
///
/// Every uniform and texture name the outline shaders read has a fixed slot
/// in a process-wide table. The name→slot map is built once on first use
/// and is read-only afterwards.

use std::fmt;
use std::sync::OnceLock;
use rustc_hash::FxHashMap;

/// Property names, indexed by slot
const PROPERTY_NAMES: [&str; 12] = [
    "_Color",
    "_OutlineColor",
    "_OutlineScale",
    "_DepthThreshold",
    "_RobertsCrossMultiplier",
    "_NormalThreshold",
    "_SteepAngleThreshold",
    "_SteepAngleMultiplier",
    "_DebugView",
    "_TemporaryBuffer",
    "_SceneViewSpaceNormals",
    "_SceneVertexColors",
];

static PROPERTY_TABLE: OnceLock<FxHashMap<&'static str, ShaderPropertyId>> = OnceLock::new();

fn property_table() -> &'static FxHashMap<&'static str, ShaderPropertyId> {
    PROPERTY_TABLE.get_or_init(|| {
        PROPERTY_NAMES
            .iter()
            .enumerate()
            .map(|(slot, name)| (*name, ShaderPropertyId(slot as u32)))
            .collect()
    })
}

/// Slot of a shader property in the process-wide table
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderPropertyId(u32);

impl ShaderPropertyId {
    /// Tint written to the occluder material (`_Color`)
    pub const COLOR: ShaderPropertyId = ShaderPropertyId(0);
    pub const OUTLINE_COLOR: ShaderPropertyId = ShaderPropertyId(1);
    pub const OUTLINE_SCALE: ShaderPropertyId = ShaderPropertyId(2);
    pub const DEPTH_THRESHOLD: ShaderPropertyId = ShaderPropertyId(3);
    pub const ROBERTS_CROSS_MULTIPLIER: ShaderPropertyId = ShaderPropertyId(4);
    pub const NORMAL_THRESHOLD: ShaderPropertyId = ShaderPropertyId(5);
    pub const STEEP_ANGLE_THRESHOLD: ShaderPropertyId = ShaderPropertyId(6);
    pub const STEEP_ANGLE_MULTIPLIER: ShaderPropertyId = ShaderPropertyId(7);
    pub const DEBUG_VIEW: ShaderPropertyId = ShaderPropertyId(8);
    /// Full-screen copy of the camera color used by the composite pass
    pub const TEMPORARY_BUFFER: ShaderPropertyId = ShaderPropertyId(9);
    /// View-space normals texture sampled by the composite shader
    pub const SCENE_VIEW_SPACE_NORMALS: ShaderPropertyId = ShaderPropertyId(10);
    /// Vertex colors texture sampled by the composite shader
    pub const SCENE_VERTEX_COLORS: ShaderPropertyId = ShaderPropertyId(11);

    /// Look up the slot of a property name
    pub fn from_name(name: &str) -> Option<ShaderPropertyId> {
        property_table().get(name).copied()
    }

    /// Property name of this slot
    pub fn name(&self) -> &'static str {
        PROPERTY_NAMES[self.0 as usize]
    }

    /// Slot index
    pub fn slot(&self) -> u32 {
        self.0
    }

    /// Number of known properties
    pub fn count() -> usize {
        PROPERTY_NAMES.len()
    }
}

impl fmt::Debug for ShaderPropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderPropertyId({} = {})", self.0, self.name())
    }
}

impl fmt::Display for ShaderPropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "shader_property_tests.rs"]
mod tests;
