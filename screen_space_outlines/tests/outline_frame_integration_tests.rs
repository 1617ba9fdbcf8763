//! End-to-end frame tests
//!
//! These tests run the feature's passes through the recording backend and
//! check the command stream a host would receive.
//! No GPU required.
//!
//! Run with: cargo test --test outline_frame_integration_tests

use screen_space_outlines::material::{MaterialLibrary, ShaderPropertyId};
use screen_space_outlines::pipeline::{
    ColorFormat, CullingResults, FilterMode, FrameData, LayerMask, RenderPassEvent,
    RenderTargetId, TextureDescriptor, VisibleRenderer,
};
use screen_space_outlines::settings::OutlineFeatureSettings;
use screen_space_outlines::ScreenSpaceOutlines;
use screen_space_outlines_recorder::{FrameCommand, FrameRenderer, RecordingContext};

// ============================================================================
// HELPERS
// ============================================================================

const OUTLINE_LAYER: u8 = 8;
const OCCLUDER_LAYER: u8 = 9;

fn library() -> MaterialLibrary {
    let mut materials = MaterialLibrary::new();
    materials.create_material("ViewSpaceNormals", "Hidden/ViewSpaceNormals").unwrap();
    materials.create_material("Occluder", "Hidden/UnlitColor").unwrap();
    materials.create_material("VertexColors", "Hidden/VertexColors").unwrap();
    materials.create_material("Outline", "Hidden/ScreenSpaceOutlines").unwrap();
    materials
}

fn configured_settings() -> OutlineFeatureSettings {
    let mut settings = OutlineFeatureSettings::default();
    settings.outlines_layer_mask = LayerMask::from_layers(&[OUTLINE_LAYER]);
    settings.outlines_occluder_layer_mask = LayerMask::from_layers(&[OCCLUDER_LAYER]);
    settings.view_space_normals.texture.material = Some("ViewSpaceNormals".to_string());
    settings.view_space_normals.occluders_material = Some("Occluder".to_string());
    settings.vertex_colors.texture.material = Some("VertexColors".to_string());
    settings.outline.material = Some("Outline".to_string());
    settings
}

fn frame() -> FrameData {
    let culling = CullingResults::new(vec![
        VisibleRenderer::opaque(1, OUTLINE_LAYER),
        VisibleRenderer::opaque(2, OUTLINE_LAYER),
        VisibleRenderer::opaque(3, OUTLINE_LAYER),
        VisibleRenderer::opaque(4, OCCLUDER_LAYER),
        VisibleRenderer::opaque(5, 0),
    ]);
    FrameData::new(TextureDescriptor::new(1920, 1080, ColorFormat::DefaultHdr, 24), culling)
}

fn target(target: &RenderTargetId) -> &'static str {
    match target {
        RenderTargetId::CameraColor => "camera",
        RenderTargetId::CameraDepth => "depth",
        RenderTargetId::Temporary(id) => id.name(),
    }
}

/// Short form of a command for order assertions
fn summary(command: &FrameCommand) -> String {
    match command {
        FrameCommand::GetTemporary { id, .. } => format!("get {}", id),
        FrameCommand::ReleaseTemporary { id } => format!("release {}", id),
        FrameCommand::SetRenderTarget { target: t } => format!("bind {}", target(t)),
        FrameCommand::Clear { target: t, .. } => format!("clear {}", target(t)),
        FrameCommand::DrawRenderers { material, .. } => {
            format!("draw {}", material.as_deref().unwrap_or("-"))
        }
        FrameCommand::Blit { source, destination, .. } => {
            format!("blit {}->{}", target(source), target(destination))
        }
        FrameCommand::BeginSample(name) => format!("begin {}", name),
        FrameCommand::EndSample(name) => format!("end {}", name),
    }
}

fn render(feature: &ScreenSpaceOutlines, ctx: &mut RecordingContext) {
    let mut renderer = FrameRenderer::new();
    feature.add_render_passes(&mut renderer);
    renderer.render_frame(&mut *ctx, &frame()).unwrap();
    ctx.end_frame().unwrap();
}

// ============================================================================
// FRAME ORDER TESTS
// ============================================================================

#[test]
fn test_full_frame_command_order() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    render(&feature, &mut ctx);

    let commands: Vec<_> = ctx.commands().iter().map(summary).collect();
    assert_eq!(commands, vec![
        "get _SceneViewSpaceNormals",
        "bind _SceneViewSpaceNormals",
        "clear _SceneViewSpaceNormals",
        "begin View Space Normals Texture Pass",
        "draw ViewSpaceNormals",
        "draw Occluder",
        "end View Space Normals Texture Pass",
        "get _SceneVertexColors",
        "bind _SceneVertexColors",
        "clear _SceneVertexColors",
        "begin Vertex Colors Texture Pass",
        "draw VertexColors",
        "end Vertex Colors Texture Pass",
        "get _TemporaryBuffer",
        "begin Screen Space Outline Pass",
        "blit camera->_TemporaryBuffer",
        "blit _TemporaryBuffer->camera",
        "end Screen Space Outline Pass",
        "release _SceneViewSpaceNormals",
        "release _SceneVertexColors",
        "release _TemporaryBuffer",
    ]);
}

#[test]
fn test_occluders_drawn_after_primary() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    render(&feature, &mut ctx);

    let draws: Vec<_> = ctx
        .commands()
        .iter()
        .filter_map(|c| match c {
            FrameCommand::DrawRenderers { target, material, layer_mask, drawn, .. } => {
                Some((*target, material.clone(), *layer_mask, drawn.clone()))
            }
            _ => None,
        })
        .collect();

    let normals = RenderTargetId::Temporary(ShaderPropertyId::SCENE_VIEW_SPACE_NORMALS);
    assert_eq!(draws[0], (normals, Some("ViewSpaceNormals".to_string()), LayerMask::from_layers(&[8]), vec![1, 2, 3]));
    assert_eq!(draws[1], (normals, Some("Occluder".to_string()), LayerMask::from_layers(&[9]), vec![4]));
}

#[test]
fn test_outline_pass_blits_twice() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    render(&feature, &mut ctx);

    let blits: Vec<_> = ctx
        .commands()
        .iter()
        .filter_map(|c| match c {
            FrameCommand::Blit { material, .. } => Some(material.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(blits, vec![None, Some("Outline".to_string())]);
}

#[test]
fn test_outline_buffer_matches_camera() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    render(&feature, &mut ctx);

    let buffer = ctx.commands().iter().find_map(|c| match c {
        FrameCommand::GetTemporary { id, desc, filter } if *id == ShaderPropertyId::TEMPORARY_BUFFER => {
            Some((*desc, *filter))
        }
        _ => None,
    });
    let (desc, filter) = buffer.unwrap();
    assert_eq!((desc.width, desc.height), (1920, 1080));
    assert_eq!(desc.color_format, ColorFormat::DefaultHdr);
    assert_eq!(desc.depth_buffer_bits, 0);
    assert_eq!(filter, FilterMode::Bilinear);
}

// ============================================================================
// RESOURCE BALANCE TESTS
// ============================================================================

#[test]
fn test_allocations_balanced_over_frames() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    for _ in 0..5 {
        render(&feature, &mut ctx);
        assert!(ctx.live_temporaries().is_empty());
    }

    let stats = ctx.stats();
    assert_eq!(stats.allocations, 15);
    assert_eq!(stats.releases, 15);
    assert_eq!(stats.blits, 10);
}

#[test]
fn test_unset_materials_issue_no_commands() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(OutlineFeatureSettings::default());
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    render(&feature, &mut ctx);

    assert!(ctx.commands().is_empty());
}

#[test]
fn test_only_outline_material_set() {
    let materials = library();
    let mut settings = OutlineFeatureSettings::default();
    settings.outline.material = Some("Outline".to_string());
    let mut feature = ScreenSpaceOutlines::new(settings);
    feature.create(&materials);
    let mut ctx = RecordingContext::new();

    render(&feature, &mut ctx);

    let stats = ctx.stats();
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.draws, 0);
    assert_eq!(stats.blits, 2);
}

#[test]
fn test_empty_camera_issues_no_commands() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);
    let mut renderer = FrameRenderer::new();
    let mut ctx = RecordingContext::new();
    let frame = FrameData::new(
        TextureDescriptor::new(0, 0, ColorFormat::Argb32, 0),
        CullingResults::default(),
    );

    feature.add_render_passes(&mut renderer);
    renderer.render_frame(&mut ctx, &frame).unwrap();

    assert!(ctx.commands().is_empty());
}

// ============================================================================
// CONFIGURATION TESTS
// ============================================================================

#[test]
fn test_feature_from_json() {
    let json = r#"{
        "render_pass_event": "BeforeRenderingShadows",
        "outlines_layer_mask": 256,
        "outlines_occluder_layer_mask": 512,
        "outline": { "material": "Outline", "outline_scale": 3.0, "debug_view": true },
        "view_space_normals": { "material": "ViewSpaceNormals", "occluders_material": "Occluder" },
        "vertex_colors": { "material": "VertexColors", "color_format": "ArgbHalf" }
    }"#;
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(OutlineFeatureSettings::from_json_str(json).unwrap());

    feature.create(&materials);

    assert_eq!(feature.render_pass_event(), Some(RenderPassEvent::BeforeRenderingPrePasses));
    let outline = materials.material("Outline").unwrap();
    assert_eq!(outline.float(ShaderPropertyId::OUTLINE_SCALE), Some(3.0));
    assert_eq!(outline.float(ShaderPropertyId::DEBUG_VIEW), Some(1.0));

    let mut ctx = RecordingContext::new();
    render(&feature, &mut ctx);
    let vertex_colors = ctx.commands().iter().find_map(|c| match c {
        FrameCommand::GetTemporary { id, desc, .. } if *id == ShaderPropertyId::SCENE_VERTEX_COLORS => Some(*desc),
        _ => None,
    });
    assert_eq!(vertex_colors.unwrap().color_format, ColorFormat::ArgbHalf);
    assert_eq!(ctx.stats().draws, 3);
}

#[test]
fn test_rebuild_applies_edits_to_next_frame() {
    let materials = library();
    let mut feature = ScreenSpaceOutlines::new(configured_settings());
    feature.create(&materials);

    feature.settings_mut().view_space_normals.occluders_material = None;
    let mut ctx = RecordingContext::new();
    render(&feature, &mut ctx);
    assert_eq!(ctx.stats().draws, 3);

    feature.create(&materials);
    let mut ctx = RecordingContext::new();
    render(&feature, &mut ctx);
    assert_eq!(ctx.stats().draws, 2);
}
