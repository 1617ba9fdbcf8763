/// Outline composite pass.
///
/// Copies the camera color into `_TemporaryBuffer`, then runs the outline
/// material full-screen from that copy back into the camera color. The
/// material samples `_SceneViewSpaceNormals`, `_SceneVertexColors` and the
/// camera depth on its own.

use std::sync::Arc;
use crate::error::Result;
use crate::material::{Material, MaterialLibrary, ShaderPropertyId};
use crate::pipeline::{FilterMode, FrameContext, FrameData, RenderPass, RenderPassEvent, RenderTargetId};
use crate::settings::OutlineSettings;
use crate::{outline_debug, outline_trace, outline_warn};

/// Profiling name of the composite pass
pub const OUTLINE_PASS_NAME: &str = "Screen Space Outline Pass";

/// Write every outline parameter into the material's uniform table
///
/// Each call overwrites the same slots, so binding the same settings twice
/// leaves identical values.
pub fn bind_outline_parameters(material: &Material, settings: &OutlineSettings) {
    material.set_color(ShaderPropertyId::OUTLINE_COLOR, settings.outline_color);
    material.set_float(ShaderPropertyId::OUTLINE_SCALE, settings.outline_scale);

    material.set_float(ShaderPropertyId::DEPTH_THRESHOLD, settings.depth_threshold);
    material.set_float(ShaderPropertyId::ROBERTS_CROSS_MULTIPLIER, settings.roberts_cross_multiplier);

    material.set_float(ShaderPropertyId::NORMAL_THRESHOLD, settings.normal_threshold);

    material.set_float(ShaderPropertyId::STEEP_ANGLE_THRESHOLD, settings.steep_angle_threshold);
    material.set_float(ShaderPropertyId::STEEP_ANGLE_MULTIPLIER, settings.steep_angle_multiplier);

    material.set_float(ShaderPropertyId::DEBUG_VIEW, if settings.debug_view { 1.0 } else { 0.0 });
}

/// Full-screen edge-detection composite
pub struct OutlinePass {
    event: RenderPassEvent,
    material: Option<Arc<Material>>,
    /// Set between a setup that allocated and the matching cleanup
    temporary_buffer: Option<RenderTargetId>,
    camera_color_target: Option<RenderTargetId>,
}

impl OutlinePass {
    /// Build the pass and bind the outline parameters once
    ///
    /// Later edits to `settings` have no effect until the pass is rebuilt.
    pub fn new(event: RenderPassEvent, settings: &OutlineSettings, materials: &MaterialLibrary) -> Self {
        let material = materials.resolve(settings.material.as_deref());
        match &material {
            Some(m) => {
                bind_outline_parameters(m, settings);
                outline_debug!("outlines::OutlinePass",
                    "Bound {} outline parameters to '{}' at {:?}", m.uniform_count(), m.name(), event);
            }
            None => outline_warn!("outlines::OutlinePass",
                "No outline material, outlines will not be composited"),
        }

        Self {
            event,
            material,
            temporary_buffer: None,
            camera_color_target: None,
        }
    }

    /// Composite material (None disables the pass)
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// True while this frame's temporary buffer is allocated
    pub fn is_allocated(&self) -> bool {
        self.temporary_buffer.is_some()
    }
}

impl RenderPass for OutlinePass {
    fn name(&self) -> &str {
        OUTLINE_PASS_NAME
    }

    fn event(&self) -> RenderPassEvent {
        self.event
    }

    fn setup(&mut self, ctx: &mut dyn FrameContext, frame: &FrameData) -> Result<()> {
        if self.material.is_none() || frame.camera_target_descriptor.is_empty() {
            outline_trace!("outlines::OutlinePass", "Skipped setup");
            return Ok(());
        }

        let desc = frame.camera_target_descriptor.with_depth_buffer_bits(0);
        ctx.get_temporary_render_target(ShaderPropertyId::TEMPORARY_BUFFER, &desc, FilterMode::Bilinear)?;

        self.temporary_buffer = Some(RenderTargetId::Temporary(ShaderPropertyId::TEMPORARY_BUFFER));
        self.camera_color_target = Some(frame.camera_color_target);
        Ok(())
    }

    fn execute(&mut self, ctx: &mut dyn FrameContext, _frame: &FrameData) -> Result<()> {
        let (material, temporary, camera) =
            match (&self.material, self.temporary_buffer, self.camera_color_target) {
                (Some(material), Some(temporary), Some(camera)) => (material.clone(), temporary, camera),
                _ => return Ok(()),
            };

        ctx.begin_sample(OUTLINE_PASS_NAME)?;
        ctx.blit(camera, temporary, None)?;
        ctx.blit(temporary, camera, Some(&material))?;
        ctx.end_sample(OUTLINE_PASS_NAME)
    }

    fn cleanup(&mut self, ctx: &mut dyn FrameContext) -> Result<()> {
        self.camera_color_target = None;
        match self.temporary_buffer.take() {
            Some(_) => ctx.release_temporary_render_target(ShaderPropertyId::TEMPORARY_BUFFER),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "outline_pass_tests.rs"]
mod tests;
