/// The screen-space outlines feature.
///
/// Owns one instance of each pass and hands them to the host every frame,
/// in the order normals, vertex colors, outline. The passes are rebuilt by
/// `create`, which is also the only point where materials are resolved and
/// uniforms are bound.

use std::sync::{Arc, Mutex};
use crate::material::MaterialLibrary;
use crate::passes::{OutlinePass, TexturePass};
use crate::pipeline::{RenderPassEvent, RenderPassQueue, SharedRenderPass};
use crate::settings::OutlineFeatureSettings;
use crate::{outline_debug, outline_info, outline_warn};

/// Earliest event the feature's passes may run at
pub const MIN_RENDER_PASS_EVENT: RenderPassEvent = RenderPassEvent::BeforeRenderingPrePasses;

/// Passes built by the last `create`
struct FeaturePasses {
    event: RenderPassEvent,
    view_space_normals: Arc<Mutex<TexturePass>>,
    vertex_colors: Arc<Mutex<TexturePass>>,
    outline: Arc<Mutex<OutlinePass>>,
}

pub struct ScreenSpaceOutlines {
    settings: OutlineFeatureSettings,
    passes: Option<FeaturePasses>,
}

impl ScreenSpaceOutlines {
    pub fn new(settings: OutlineFeatureSettings) -> Self {
        Self { settings, passes: None }
    }

    /// Build (or rebuild) the three passes from the current settings
    ///
    /// Previously built passes are dropped. A pass still held by the host
    /// keeps running with its old settings until the host drops it.
    pub fn create(&mut self, materials: &MaterialLibrary) {
        let requested = self.settings.render_pass_event;
        let event = requested.clamp_min(MIN_RENDER_PASS_EVENT);
        if event != requested {
            outline_debug!("outlines::ScreenSpaceOutlines",
                "Raised render pass event from {:?} to {:?}", requested, event);
        }

        let view_space_normals = TexturePass::view_space_normals(
            event,
            self.settings.outlines_layer_mask,
            self.settings.outlines_occluder_layer_mask,
            &self.settings.view_space_normals,
            materials,
        );
        let vertex_colors = TexturePass::vertex_colors(
            event,
            self.settings.outlines_layer_mask,
            &self.settings.vertex_colors,
            materials,
        );
        let outline = OutlinePass::new(event, &self.settings.outline, materials);

        self.passes = Some(FeaturePasses {
            event,
            view_space_normals: Arc::new(Mutex::new(view_space_normals)),
            vertex_colors: Arc::new(Mutex::new(vertex_colors)),
            outline: Arc::new(Mutex::new(outline)),
        });

        outline_info!("outlines::ScreenSpaceOutlines", "Created outline passes at {:?}", event);
    }

    /// Enqueue the passes for this frame (normals, vertex colors, outline)
    pub fn add_render_passes(&self, queue: &mut dyn RenderPassQueue) {
        let passes = match &self.passes {
            Some(passes) => passes,
            None => {
                outline_warn!("outlines::ScreenSpaceOutlines",
                    "add_render_passes called before create, nothing enqueued");
                return;
            }
        };

        let view_space_normals: SharedRenderPass = passes.view_space_normals.clone();
        let vertex_colors: SharedRenderPass = passes.vertex_colors.clone();
        let outline: SharedRenderPass = passes.outline.clone();

        queue.enqueue_pass(view_space_normals);
        queue.enqueue_pass(vertex_colors);
        queue.enqueue_pass(outline);
    }

    pub fn settings(&self) -> &OutlineFeatureSettings {
        &self.settings
    }

    /// Mutable settings. Edits take effect on the next `create`.
    pub fn settings_mut(&mut self) -> &mut OutlineFeatureSettings {
        &mut self.settings
    }

    pub fn is_created(&self) -> bool {
        self.passes.is_some()
    }

    /// Event the built passes run at (None before `create`)
    pub fn render_pass_event(&self) -> Option<RenderPassEvent> {
        self.passes.as_ref().map(|p| p.event)
    }

    pub fn view_space_normals_pass(&self) -> Option<&Arc<Mutex<TexturePass>>> {
        self.passes.as_ref().map(|p| &p.view_space_normals)
    }

    pub fn vertex_colors_pass(&self) -> Option<&Arc<Mutex<TexturePass>>> {
        self.passes.as_ref().map(|p| &p.vertex_colors)
    }

    pub fn outline_pass(&self) -> Option<&Arc<Mutex<OutlinePass>>> {
        self.passes.as_ref().map(|p| &p.outline)
    }
}

#[cfg(test)]
#[path = "feature_tests.rs"]
mod tests;
