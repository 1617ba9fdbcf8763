/// Texture-producing passes: view-space normals and vertex colors.
///
/// Both passes share one lifecycle: allocate a named temporary target
/// sized like the camera, clear it, and draw opaque geometry into it with
/// an override material. They differ only in the draws they issue, which
/// `TextureDraw` selects.

use std::sync::Arc;
use crate::error::Result;
use crate::material::{Material, MaterialLibrary, ShaderPropertyId};
use crate::pipeline::{
    ClearFlags, DrawingSettings, FilteringSettings, FrameContext, FrameData, LayerMask,
    PerObjectData, RenderPass, RenderPassEvent, RenderTargetId, FORWARD_SHADER_TAGS,
};
use crate::settings::{NormalsTextureSettings, TextureSettings, VertexColorsTextureSettings};
use crate::{outline_debug, outline_trace, outline_warn};

/// Profiling name of the normals pass
pub const VIEW_SPACE_NORMALS_PASS_NAME: &str = "View Space Normals Texture Pass";
/// Profiling name of the vertex colors pass
pub const VERTEX_COLORS_PASS_NAME: &str = "Vertex Colors Texture Pass";

/// Draws issued by a texture pass
#[derive(Debug, Clone)]
pub enum TextureDraw {
    /// Primary normals draw, then an occluder draw into the same target
    ///
    /// Without an occluder material only the primary draw is issued. The
    /// pass is not skipped as a whole.
    ViewSpaceNormals {
        /// Material drawn over the occluder layer. Unset skips that draw.
        occluder_material: Option<Arc<Material>>,
        occluder_filtering: FilteringSettings,
        per_object_data: PerObjectData,
    },
    /// A single vertex colors draw
    VertexColors,
}

/// Pass rendering scene geometry into a named auxiliary texture
pub struct TexturePass {
    name: &'static str,
    event: RenderPassEvent,
    texture_id: ShaderPropertyId,
    settings: TextureSettings,
    material: Option<Arc<Material>>,
    filtering: FilteringSettings,
    draw: TextureDraw,
    /// True between a setup that allocated and the matching cleanup
    allocated: bool,
}

impl TexturePass {
    /// Build the view-space normals pass (`_SceneViewSpaceNormals`)
    ///
    /// The occluder material's `_Color` is set to the background color, so
    /// occluders erase normals behind them.
    pub fn view_space_normals(
        event: RenderPassEvent,
        layer_mask: LayerMask,
        occluder_layer_mask: LayerMask,
        settings: &NormalsTextureSettings,
        materials: &MaterialLibrary,
    ) -> Self {
        let occluder_material = materials.resolve(settings.occluders_material.as_deref());
        if let Some(occluder) = &occluder_material {
            occluder.set_color(ShaderPropertyId::COLOR, settings.texture.background_color);
        }

        let draw = TextureDraw::ViewSpaceNormals {
            occluder_material,
            occluder_filtering: FilteringSettings::opaque(occluder_layer_mask),
            per_object_data: settings.per_object_data,
        };

        Self::new(
            VIEW_SPACE_NORMALS_PASS_NAME,
            ShaderPropertyId::SCENE_VIEW_SPACE_NORMALS,
            event,
            layer_mask,
            &settings.texture,
            materials,
            draw,
        )
    }

    /// Build the vertex colors pass (`_SceneVertexColors`)
    pub fn vertex_colors(
        event: RenderPassEvent,
        layer_mask: LayerMask,
        settings: &VertexColorsTextureSettings,
        materials: &MaterialLibrary,
    ) -> Self {
        Self::new(
            VERTEX_COLORS_PASS_NAME,
            ShaderPropertyId::SCENE_VERTEX_COLORS,
            event,
            layer_mask,
            &settings.texture,
            materials,
            TextureDraw::VertexColors,
        )
    }

    fn new(
        name: &'static str,
        texture_id: ShaderPropertyId,
        event: RenderPassEvent,
        layer_mask: LayerMask,
        settings: &TextureSettings,
        materials: &MaterialLibrary,
        draw: TextureDraw,
    ) -> Self {
        let material = materials.resolve(settings.material.as_deref());
        match &material {
            Some(m) => outline_debug!("outlines::TexturePass",
                "'{}' writes {} with material '{}' at {:?}", name, texture_id, m.name(), event),
            None => outline_warn!("outlines::TexturePass",
                "'{}' has no material, {} will not be rendered", name, texture_id),
        }

        Self {
            name,
            event,
            texture_id,
            settings: settings.clone(),
            material,
            filtering: FilteringSettings::opaque(layer_mask),
            draw,
            allocated: false,
        }
    }

    /// Stable name of the produced texture
    pub fn texture_id(&self) -> ShaderPropertyId {
        self.texture_id
    }

    /// Override material (None disables the pass)
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// Primary filter (opaque queue + pass layer mask)
    pub fn filtering(&self) -> &FilteringSettings {
        &self.filtering
    }

    pub fn draw(&self) -> &TextureDraw {
        &self.draw
    }

    /// True while this frame's texture is allocated
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    fn drawing_settings(&self, material: &Arc<Material>, frame: &FrameData) -> DrawingSettings {
        let mut drawing = DrawingSettings::new(&FORWARD_SHADER_TAGS, frame.opaque_sort_flags);
        drawing.override_material = Some(material.clone());
        drawing.enable_dynamic_batching = self.settings.enable_dynamic_batching;
        drawing.enable_instancing = self.settings.enable_instancing;
        drawing
    }
}

impl RenderPass for TexturePass {
    fn name(&self) -> &str {
        self.name
    }

    fn event(&self) -> RenderPassEvent {
        self.event
    }

    fn setup(&mut self, ctx: &mut dyn FrameContext, frame: &FrameData) -> Result<()> {
        if self.material.is_none() || frame.camera_target_descriptor.is_empty() {
            outline_trace!("outlines::TexturePass", "'{}' skipped setup", self.name);
            return Ok(());
        }

        let desc = frame
            .camera_target_descriptor
            .with_color_format(self.settings.color_format)
            .with_depth_buffer_bits(self.settings.depth_buffer_bits);

        ctx.get_temporary_render_target(self.texture_id, &desc, self.settings.filter_mode)?;
        self.allocated = true;

        ctx.set_render_target(RenderTargetId::Temporary(self.texture_id))?;
        ctx.clear_render_target(ClearFlags::ALL, self.settings.background_color)
    }

    fn execute(&mut self, ctx: &mut dyn FrameContext, frame: &FrameData) -> Result<()> {
        let material = match (&self.material, self.allocated) {
            (Some(material), true) => material.clone(),
            _ => return Ok(()),
        };

        ctx.begin_sample(self.name)?;

        let mut drawing = self.drawing_settings(&material, frame);
        match &self.draw {
            TextureDraw::ViewSpaceNormals { occluder_material, occluder_filtering, per_object_data } => {
                drawing.per_object_data = *per_object_data;
                ctx.draw_renderers(&frame.culling_results, &drawing, &self.filtering)?;

                // Same target, no clear: occluders stamp over the primary normals
                if let Some(occluder) = occluder_material {
                    let mut occluder_drawing = drawing.clone();
                    occluder_drawing.override_material = Some(occluder.clone());
                    ctx.draw_renderers(&frame.culling_results, &occluder_drawing, occluder_filtering)?;
                }
            }
            TextureDraw::VertexColors => {
                ctx.draw_renderers(&frame.culling_results, &drawing, &self.filtering)?;
            }
        }

        ctx.end_sample(self.name)
    }

    fn cleanup(&mut self, ctx: &mut dyn FrameContext) -> Result<()> {
        if !self.allocated {
            return Ok(());
        }
        self.allocated = false;
        ctx.release_temporary_render_target(self.texture_id)
    }
}

#[cfg(test)]
#[path = "texture_pass_tests.rs"]
mod tests;
