/// Serialized configuration of the feature and its three passes

mod texture_settings;
mod outline_settings;
mod feature_settings;

pub use texture_settings::{TextureSettings, NormalsTextureSettings, VertexColorsTextureSettings};
pub use outline_settings::OutlineSettings;
pub use feature_settings::OutlineFeatureSettings;

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
