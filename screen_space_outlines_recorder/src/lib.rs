/*!
# Screen Space Outlines - Recording Backend

In-memory host backend for the screen_space_outlines crate.

This crate implements the host-side traits without a GPU:

- **RecordingContext**: `FrameContext` that records every command and
  validates the lifecycle of temporary render targets
- **FrameRenderer**: `RenderPassQueue` that runs the enqueued passes in
  frame order (setup/execute per pass, then cleanup for all)

It is used to test the outline passes end to end and to inspect the
commands a frame produces.
*/

mod recording_context;
mod frame_renderer;
mod report;

pub use recording_context::{FrameCommand, FrameStats, RecordingContext};
pub use frame_renderer::FrameRenderer;

// Re-export report utilities
pub use report::print_frame_report;
