/// Tests for layer masks, queue ranges and draw selection

use super::*;
use crate::pipeline::frame::VisibleRenderer;

// ============================================================================
// Tests: LayerMask
// ============================================================================

#[test]
fn test_layer_mask_from_layers() {
    let mask = LayerMask::from_layers(&[8, 9]);
    assert_eq!(mask.bits(), (1 << 8) | (1 << 9));
    assert!(mask.contains_layer(8));
    assert!(mask.contains_layer(9));
    assert!(!mask.contains_layer(0));
}

#[test]
fn test_layer_mask_ignores_out_of_range_layers() {
    let mask = LayerMask::from_layers(&[3, 32, 200]);
    assert_eq!(mask, LayerMask::from_layers(&[3]));
    assert!(!mask.contains_layer(32));
}

#[test]
fn test_layer_mask_constants() {
    assert!(LayerMask::NOTHING.is_empty());
    assert!(!LayerMask::default().contains_layer(0));
    for layer in 0..LayerMask::LAYER_COUNT {
        assert!(LayerMask::EVERYTHING.contains_layer(layer));
    }
}

#[test]
fn test_layer_mask_serializes_as_bits() {
    let mask = LayerMask::from_layers(&[8]);
    assert_eq!(serde_json::to_string(&mask).unwrap(), "256");

    let parsed: LayerMask = serde_json::from_str("512").unwrap();
    assert!(parsed.contains_layer(9));
}

// ============================================================================
// Tests: RenderQueueRange
// ============================================================================

#[test]
fn test_render_queue_ranges() {
    assert!(RenderQueueRange::opaque().contains(2000));
    assert!(RenderQueueRange::opaque().contains(2500));
    assert!(!RenderQueueRange::opaque().contains(3000));

    assert!(RenderQueueRange::transparent().contains(3000));
    assert!(!RenderQueueRange::transparent().contains(2500));

    assert!(RenderQueueRange::all().contains(0));
    assert!(RenderQueueRange::all().contains(5000));
}

// ============================================================================
// Tests: Selection
// ============================================================================

#[test]
fn test_filtering_matches_layer_and_queue() {
    let filtering = FilteringSettings::opaque(LayerMask::from_layers(&[8]));

    assert!(filtering.matches(&VisibleRenderer::opaque(1, 8)));
    assert!(!filtering.matches(&VisibleRenderer::opaque(2, 9)));

    let mut transparent = VisibleRenderer::opaque(3, 8);
    transparent.render_queue = 3000;
    assert!(!filtering.matches(&transparent));
}

#[test]
fn test_drawing_settings_accepts_forward_tags() {
    let drawing = DrawingSettings::new(&FORWARD_SHADER_TAGS, SortingCriteria::COMMON_OPAQUE);

    assert!(drawing.accepts(&VisibleRenderer::opaque(1, 0)));

    let mut unlit = VisibleRenderer::opaque(2, 0);
    unlit.shader_tags = vec![ShaderTagId::SRP_DEFAULT_UNLIT];
    assert!(drawing.accepts(&unlit));

    let mut shadow_only = VisibleRenderer::opaque(3, 0);
    shadow_only.shader_tags = vec![ShaderTagId("ShadowCaster")];
    assert!(!drawing.accepts(&shadow_only));
}

#[test]
fn test_drawing_settings_defaults() {
    let drawing = DrawingSettings::new(&FORWARD_SHADER_TAGS, SortingCriteria::COMMON_OPAQUE);
    assert_eq!(drawing.shader_tags.len(), 4);
    assert!(drawing.override_material.is_none());
    assert!(!drawing.enable_dynamic_batching);
    assert!(!drawing.enable_instancing);
    assert!(drawing.per_object_data.is_empty());
}

// ============================================================================
// Tests: Flags
// ============================================================================

#[test]
fn test_per_object_data_serializes_by_name() {
    let flags = PerObjectData::LIGHTMAPS | PerObjectData::LIGHT_PROBE;
    let json = serde_json::to_string(&flags).unwrap();
    let parsed: PerObjectData = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, flags);
}

#[test]
fn test_common_opaque_sorting() {
    assert!(SortingCriteria::COMMON_OPAQUE.contains(SortingCriteria::QUANTIZED_FRONT_TO_BACK));
    assert!(!SortingCriteria::COMMON_OPAQUE.contains(SortingCriteria::BACK_TO_FRONT));
}
