/// FrameContext trait - the host's command/context object for one frame

use crate::error::Result;
use crate::material::{Material, ShaderPropertyId};
use super::drawing::{DrawingSettings, FilteringSettings};
use super::frame::{CullingResults, RenderTargetId};
use super::texture::{ClearFlags, Color, FilterMode, TextureDescriptor};

/// Command/context object supplied by the host pipeline
///
/// Passes record their GPU work through this trait. The host decides how
/// (and whether) the commands reach a GPU.
pub trait FrameContext {
    /// Allocate a frame-scoped render target under a stable property name
    ///
    /// The target is visible to shaders under the same name until released.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable name of the target
    /// * `desc` - Resolution and formats
    /// * `filter` - Sampling filter
    fn get_temporary_render_target(
        &mut self,
        id: ShaderPropertyId,
        desc: &TextureDescriptor,
        filter: FilterMode,
    ) -> Result<()>;

    /// Release a target allocated with `get_temporary_render_target`
    fn release_temporary_render_target(&mut self, id: ShaderPropertyId) -> Result<()>;

    /// Bind the target subsequent draws write to
    fn set_render_target(&mut self, target: RenderTargetId) -> Result<()>;

    /// Clear the bound render target
    fn clear_render_target(&mut self, flags: ClearFlags, color: Color) -> Result<()>;

    /// Draw every culled object selected by `drawing` and `filtering`
    /// into the bound render target
    fn draw_renderers(
        &mut self,
        culling_results: &CullingResults,
        drawing: &DrawingSettings,
        filtering: &FilteringSettings,
    ) -> Result<()>;

    /// Full-screen copy from `source` to `destination`
    ///
    /// With a material, `source` is bound as the material's main texture
    /// and the material's shader produces the destination pixels.
    fn blit(
        &mut self,
        source: RenderTargetId,
        destination: RenderTargetId,
        material: Option<&Material>,
    ) -> Result<()>;

    /// Open a named profiling scope
    fn begin_sample(&mut self, name: &str) -> Result<()>;

    /// Close a named profiling scope
    fn end_sample(&mut self, name: &str) -> Result<()>;
}
