/// Recording FrameContext
///
/// Records every command of a frame and rejects calls a real backend would
/// fault on: allocating a temporary twice, releasing or binding one that is
/// not allocated, drawing with no target bound, unbalanced samples.

use std::fmt;
use rustc_hash::FxHashMap;
use screen_space_outlines::material::{Material, ShaderPropertyId};
use screen_space_outlines::pipeline::{
    ClearFlags, Color, CullingResults, DrawingSettings, FilterMode, FilteringSettings,
    FrameContext, LayerMask, PerObjectData, RenderTargetId, TextureDescriptor,
};
use screen_space_outlines::{outline_bail, outline_trace, Result};

/// One command recorded by a RecordingContext
#[derive(Debug, Clone, PartialEq)]
pub enum FrameCommand {
    GetTemporary {
        id: ShaderPropertyId,
        desc: TextureDescriptor,
        filter: FilterMode,
    },
    ReleaseTemporary {
        id: ShaderPropertyId,
    },
    SetRenderTarget {
        target: RenderTargetId,
    },
    Clear {
        target: RenderTargetId,
        flags: ClearFlags,
        color: Color,
    },
    DrawRenderers {
        target: RenderTargetId,
        /// Override material name (None if the draw keeps object materials)
        material: Option<String>,
        layer_mask: LayerMask,
        per_object_data: PerObjectData,
        /// Ids of the renderers that passed filtering, in culling order
        drawn: Vec<u32>,
    },
    Blit {
        source: RenderTargetId,
        destination: RenderTargetId,
        material: Option<String>,
    },
    BeginSample(String),
    EndSample(String),
}

fn target_name(target: RenderTargetId) -> &'static str {
    match target {
        RenderTargetId::CameraColor => "camera_color",
        RenderTargetId::CameraDepth => "camera_depth",
        RenderTargetId::Temporary(id) => id.name(),
    }
}

impl fmt::Display for FrameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameCommand::GetTemporary { id, desc, filter } => write!(
                f,
                "get_temporary {} {}x{} {:?} depth={} {:?}",
                id, desc.width, desc.height, desc.color_format, desc.depth_buffer_bits, filter
            ),
            FrameCommand::ReleaseTemporary { id } => write!(f, "release_temporary {}", id),
            FrameCommand::SetRenderTarget { target } => write!(f, "set_render_target {}", target_name(*target)),
            FrameCommand::Clear { target, flags, .. } => write!(f, "clear {} {:?}", target_name(*target), flags),
            FrameCommand::DrawRenderers { target, material, layer_mask, drawn, .. } => write!(
                f,
                "draw_renderers {} material={} mask={:#010x} drawn={}",
                target_name(*target),
                material.as_deref().unwrap_or("-"),
                layer_mask.bits(),
                drawn.len()
            ),
            FrameCommand::Blit { source, destination, material } => write!(
                f,
                "blit {} -> {} material={}",
                target_name(*source),
                target_name(*destination),
                material.as_deref().unwrap_or("-")
            ),
            FrameCommand::BeginSample(name) => write!(f, "begin_sample \"{}\"", name),
            FrameCommand::EndSample(name) => write!(f, "end_sample \"{}\"", name),
        }
    }
}

/// Command counts of a RecordingContext
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub allocations: u32,
    pub releases: u32,
    pub clears: u32,
    pub draws: u32,
    pub blits: u32,
    pub samples: u32,
}

/// In-memory FrameContext
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<FrameCommand>,
    /// Allocated temporaries and their descriptors
    live: FxHashMap<ShaderPropertyId, TextureDescriptor>,
    bound_target: Option<RenderTargetId>,
    open_samples: Vec<String>,
    stats: FrameStats,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since creation or the last `take_commands`
    pub fn commands(&self) -> &[FrameCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<FrameCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Counts accumulated since creation
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Currently allocated temporaries, ordered by slot
    pub fn live_temporaries(&self) -> Vec<ShaderPropertyId> {
        let mut ids: Vec<_> = self.live.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Descriptor of an allocated temporary
    pub fn temporary_descriptor(&self, id: ShaderPropertyId) -> Option<&TextureDescriptor> {
        self.live.get(&id)
    }

    pub fn bound_target(&self) -> Option<RenderTargetId> {
        self.bound_target
    }

    /// Check that the frame left nothing behind
    ///
    /// # Errors
    ///
    /// Returns an error if a temporary is still allocated or a profiling
    /// sample is still open.
    pub fn end_frame(&mut self) -> Result<()> {
        if !self.live.is_empty() {
            let names: Vec<_> = self.live_temporaries().iter().map(|id| id.name()).collect();
            outline_bail!("outlines::RecordingContext",
                "Temporaries still allocated at end of frame: {}", names.join(", "));
        }
        if let Some(name) = self.open_samples.last() {
            outline_bail!("outlines::RecordingContext", "Sample '{}' still open at end of frame", name);
        }
        self.bound_target = None;
        Ok(())
    }

    fn check_target(&self, target: RenderTargetId) -> Result<()> {
        if let RenderTargetId::Temporary(id) = target {
            if !self.live.contains_key(&id) {
                outline_bail!("outlines::RecordingContext", "Temporary '{}' is not allocated", id);
            }
        }
        Ok(())
    }

    fn require_bound_target(&self, command: &str) -> Result<RenderTargetId> {
        match self.bound_target {
            Some(target) => Ok(target),
            None => outline_bail!("outlines::RecordingContext", "{} with no render target bound", command),
        }
    }
}

impl FrameContext for RecordingContext {
    fn get_temporary_render_target(
        &mut self,
        id: ShaderPropertyId,
        desc: &TextureDescriptor,
        filter: FilterMode,
    ) -> Result<()> {
        if self.live.contains_key(&id) {
            outline_bail!("outlines::RecordingContext", "Temporary '{}' is already allocated", id);
        }
        if desc.is_empty() {
            outline_bail!("outlines::RecordingContext",
                "Temporary '{}' requested with empty size {}x{}", id, desc.width, desc.height);
        }

        self.live.insert(id, *desc);
        self.stats.allocations += 1;
        self.commands.push(FrameCommand::GetTemporary { id, desc: *desc, filter });
        outline_trace!("outlines::RecordingContext", "Allocated {} ({}x{})", id, desc.width, desc.height);
        Ok(())
    }

    fn release_temporary_render_target(&mut self, id: ShaderPropertyId) -> Result<()> {
        if self.live.remove(&id).is_none() {
            outline_bail!("outlines::RecordingContext", "Release of unallocated temporary '{}'", id);
        }
        if self.bound_target == Some(RenderTargetId::Temporary(id)) {
            self.bound_target = None;
        }

        self.stats.releases += 1;
        self.commands.push(FrameCommand::ReleaseTemporary { id });
        Ok(())
    }

    fn set_render_target(&mut self, target: RenderTargetId) -> Result<()> {
        self.check_target(target)?;
        self.bound_target = Some(target);
        self.commands.push(FrameCommand::SetRenderTarget { target });
        Ok(())
    }

    fn clear_render_target(&mut self, flags: ClearFlags, color: Color) -> Result<()> {
        let target = self.require_bound_target("clear_render_target")?;
        self.stats.clears += 1;
        self.commands.push(FrameCommand::Clear { target, flags, color });
        Ok(())
    }

    fn draw_renderers(
        &mut self,
        culling_results: &CullingResults,
        drawing: &DrawingSettings,
        filtering: &FilteringSettings,
    ) -> Result<()> {
        let target = self.require_bound_target("draw_renderers")?;
        let drawn = culling_results
            .renderers
            .iter()
            .filter(|r| filtering.matches(r) && drawing.accepts(r))
            .map(|r| r.id)
            .collect();

        self.stats.draws += 1;
        self.commands.push(FrameCommand::DrawRenderers {
            target,
            material: drawing.override_material.as_ref().map(|m| m.name().to_string()),
            layer_mask: filtering.layer_mask,
            per_object_data: drawing.per_object_data,
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
        self.check_target(source)?;
        self.check_target(destination)?;
        if source == destination {
            outline_bail!("outlines::RecordingContext",
                "Blit from '{}' onto itself", target_name(source));
        }

        self.stats.blits += 1;
        self.commands.push(FrameCommand::Blit {
            source,
            destination,
            material: material.map(|m| m.name().to_string()),
        });
        Ok(())
    }

    fn begin_sample(&mut self, name: &str) -> Result<()> {
        self.open_samples.push(name.to_string());
        self.stats.samples += 1;
        self.commands.push(FrameCommand::BeginSample(name.to_string()));
        Ok(())
    }

    fn end_sample(&mut self, name: &str) -> Result<()> {
        match self.open_samples.pop() {
            Some(open) if open == name => {}
            Some(open) => outline_bail!("outlines::RecordingContext",
                "end_sample '{}' does not match open sample '{}'", name, open),
            None => outline_bail!("outlines::RecordingContext",
                "end_sample '{}' with no open sample", name),
        }
        self.commands.push(FrameCommand::EndSample(name.to_string()));
        Ok(())
    }
}
