/// Frame renderer: runs enqueued passes the way the host frame does.
///
/// Passes are ordered by event (stable, so enqueue order holds within an
/// event). Every pass runs setup then execute; cleanup runs for every pass
/// only once all of them have executed, so textures written early in the
/// frame are still allocated when later passes sample them.

use std::sync::MutexGuard;
use screen_space_outlines::pipeline::{FrameContext, FrameData, RenderPass, RenderPassQueue, SharedRenderPass};
use screen_space_outlines::{outline_err, outline_trace, outline_warn, Error, Result};

#[derive(Default)]
pub struct FrameRenderer {
    queue: Vec<SharedRenderPass>,
    frame_count: u64,
}

impl RenderPassQueue for FrameRenderer {
    fn enqueue_pass(&mut self, pass: SharedRenderPass) {
        self.queue.push(pass);
    }
}

fn lock_pass(pass: &SharedRenderPass) -> Result<MutexGuard<'_, dyn RenderPass + 'static>> {
    pass.lock()
        .map_err(|_| outline_err!("outlines::FrameRenderer", "Render pass mutex poisoned"))
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of passes waiting for the next frame
    pub fn queued_pass_count(&self) -> usize {
        self.queue.len()
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run every queued pass against `ctx`, then empty the queue
    ///
    /// Cleanup runs for every pass even when an earlier hook failed. A
    /// pass whose setup failed is not executed.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any pass hook.
    pub fn render_frame(&mut self, ctx: &mut dyn FrameContext, frame: &FrameData) -> Result<()> {
        let queue = std::mem::take(&mut self.queue);
        self.frame_count += 1;

        let mut ordered = Vec::with_capacity(queue.len());
        for pass in queue {
            let event = lock_pass(&pass)?.event();
            ordered.push((event, pass));
        }
        ordered.sort_by_key(|(event, _)| *event);

        let mut first_error: Option<Error> = None;

        for (_, pass) in &ordered {
            let mut pass = match lock_pass(pass) {
                Ok(pass) => pass,
                Err(err) => {
                    first_error.get_or_insert(err);
                    continue;
                }
            };

            outline_trace!("outlines::FrameRenderer", "Frame {}: running '{}'", self.frame_count, pass.name());
            let result = match pass.setup(ctx, frame) {
                Ok(()) => pass.execute(ctx, frame),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                outline_warn!("outlines::FrameRenderer", "'{}' failed: {}", pass.name(), err);
                first_error.get_or_insert(err);
            }
        }

        for (_, pass) in &ordered {
            let result = lock_pass(pass).and_then(|mut pass| pass.cleanup(ctx));
            if let Err(err) = result {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "frame_renderer_tests.rs"]
mod tests;
