/// Materials, the shader property table, and the material library

mod shader_property;
mod material;
mod material_library;

pub use shader_property::ShaderPropertyId;
pub use material::{Material, UniformValue};
pub use material_library::MaterialLibrary;
