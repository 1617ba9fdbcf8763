/// RenderPass trait, insertion points, and the host's pass queue.

use std::sync::{Arc, Mutex};
use serde::{Deserialize, Serialize};
use crate::error::Result;
use super::frame::FrameData;
use super::frame_context::FrameContext;

/// Point in the host frame where a pass is inserted
///
/// Variants are ordered by their position in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum RenderPassEvent {
    BeforeRendering = 0,
    BeforeRenderingShadows = 50,
    AfterRenderingShadows = 100,
    BeforeRenderingPrePasses = 150,
    AfterRenderingPrePasses = 200,
    BeforeRenderingGbuffer = 210,
    AfterRenderingGbuffer = 220,
    BeforeRenderingDeferredLights = 230,
    AfterRenderingDeferredLights = 240,
    BeforeRenderingOpaques = 250,
    #[default]
    AfterRenderingOpaques = 300,
    BeforeRenderingSkybox = 350,
    AfterRenderingSkybox = 400,
    BeforeRenderingTransparents = 450,
    AfterRenderingTransparents = 500,
    BeforeRenderingPostProcessing = 550,
    AfterRenderingPostProcessing = 600,
    AfterRendering = 1000,
}

impl RenderPassEvent {
    /// Numeric position in the frame
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Raise this event to `min` if it occurs earlier
    pub fn clamp_min(self, min: RenderPassEvent) -> RenderPassEvent {
        self.max(min)
    }
}

/// A unit of GPU work with a per-frame setup/execute/cleanup lifecycle
///
/// The host calls, for every frame:
/// 1. `setup` then `execute`, pass after pass, in queue order
/// 2. `cleanup` for every pass once all passes have executed
///
/// `cleanup` runs even if `setup` or `execute` failed or did nothing, and
/// must release exactly what `setup` allocated.
pub trait RenderPass: Send + Sync {
    /// Profiling name
    fn name(&self) -> &str;

    /// Insertion point in the frame
    fn event(&self) -> RenderPassEvent;

    /// Allocate and bind per-frame resources
    fn setup(&mut self, ctx: &mut dyn FrameContext, frame: &FrameData) -> Result<()>;

    /// Record the pass's GPU work
    fn execute(&mut self, ctx: &mut dyn FrameContext, frame: &FrameData) -> Result<()>;

    /// Release per-frame resources
    fn cleanup(&mut self, ctx: &mut dyn FrameContext) -> Result<()>;
}

/// Pass shared between its owner and the host's queue
pub type SharedRenderPass = Arc<Mutex<dyn RenderPass>>;

/// Host-side list of passes to run this frame
pub trait RenderPassQueue {
    /// Append a pass to this frame's queue
    fn enqueue_pass(&mut self, pass: SharedRenderPass);
}

#[cfg(test)]
#[path = "render_pass_tests.rs"]
mod tests;
