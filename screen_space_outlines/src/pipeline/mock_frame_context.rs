/// Mock FrameContext for unit tests (no host required)
///
/// Records every call as a readable string and keeps the draw calls so
/// tests can inspect materials, masks and flags.

use crate::error::Result;
use crate::material::{Material, ShaderPropertyId};
use super::drawing::{DrawingSettings, FilteringSettings};
use super::frame::{CullingResults, RenderTargetId};
use super::frame_context::FrameContext;
use super::texture::{ClearFlags, Color, FilterMode, TextureDescriptor};

/// One recorded `draw_renderers` call
#[derive(Debug, Clone)]
pub struct MockDraw {
    pub drawing: DrawingSettings,
    pub filtering: FilteringSettings,
    /// Ids of the renderers selected by the call
    pub drawn: Vec<u32>,
}

/// One recorded `get_temporary_render_target` call
#[derive(Debug, Clone, Copy)]
pub struct MockAllocation {
    pub id: ShaderPropertyId,
    pub desc: TextureDescriptor,
    pub filter: FilterMode,
}

#[derive(Debug, Default)]
pub struct MockFrameContext {
    pub commands: Vec<String>,
    pub draws: Vec<MockDraw>,
    pub allocations: Vec<MockAllocation>,
    pub releases: Vec<ShaderPropertyId>,
}

impl MockFrameContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }
}

fn target_name(target: RenderTargetId) -> String {
    match target {
        RenderTargetId::CameraColor => "camera_color".to_string(),
        RenderTargetId::CameraDepth => "camera_depth".to_string(),
        RenderTargetId::Temporary(id) => id.name().to_string(),
    }
}

impl FrameContext for MockFrameContext {
    fn get_temporary_render_target(
        &mut self,
        id: ShaderPropertyId,
        desc: &TextureDescriptor,
        filter: FilterMode,
    ) -> Result<()> {
        self.commands.push(format!("get_temporary:{}", id.name()));
        self.allocations.push(MockAllocation { id, desc: *desc, filter });
        Ok(())
    }

    fn release_temporary_render_target(&mut self, id: ShaderPropertyId) -> Result<()> {
        self.commands.push(format!("release_temporary:{}", id.name()));
        self.releases.push(id);
        Ok(())
    }

    fn set_render_target(&mut self, target: RenderTargetId) -> Result<()> {
        self.commands.push(format!("set_render_target:{}", target_name(target)));
        Ok(())
    }

    fn clear_render_target(&mut self, flags: ClearFlags, _color: Color) -> Result<()> {
        self.commands.push(format!("clear:{:?}", flags));
        Ok(())
    }

    fn draw_renderers(
        &mut self,
        culling_results: &CullingResults,
        drawing: &DrawingSettings,
        filtering: &FilteringSettings,
    ) -> Result<()> {
        let drawn = culling_results
            .renderers
            .iter()
            .filter(|r| filtering.matches(r) && drawing.accepts(r))
            .map(|r| r.id)
            .collect();
        let material = drawing
            .override_material
            .as_ref()
            .map(|m| m.name().to_string())
            .unwrap_or_default();
        self.commands.push(format!("draw_renderers:{}", material));
        self.draws.push(MockDraw {
            drawing: drawing.clone(),
            filtering: *filtering,
            drawn,
        });
        Ok(())
    }

    fn blit(
        &mut self,
        source: RenderTargetId,
        destination: RenderTargetId,
        material: Option<&Material>,
    ) -> Result<()> {
        let material = material.map(|m| m.name().to_string()).unwrap_or_default();
        self.commands.push(format!(
            "blit:{}->{}:{}",
            target_name(source),
            target_name(destination),
            material
        ));
        Ok(())
    }

    fn begin_sample(&mut self, name: &str) -> Result<()> {
        self.commands.push(format!("begin_sample:{}", name));
        Ok(())
    }

    fn end_sample(&mut self, name: &str) -> Result<()> {
        self.commands.push(format!("end_sample:{}", name));
        Ok(())
    }
}
