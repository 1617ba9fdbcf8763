/// Override material: a shader reference plus a table of uniform values.
///
/// Materials are shared between the passes (which write uniforms once, at
/// construction) and the host (which reads them when drawing). The uniform
/// table sits behind a RwLock so both sides can hold an `Arc<Material>`.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::pipeline::Color;
use super::shader_property::ShaderPropertyId;

/// A uniform value stored in a material slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vector(Vec4),
}

/// Shader + uniform bundle substituted for object materials during a pass
#[derive(Debug)]
pub struct Material {
    name: String,
    shader: String,
    uniforms: RwLock<FxHashMap<ShaderPropertyId, UniformValue>>,
}

impl Material {
    /// Create a material with an empty uniform table
    ///
    /// # Arguments
    ///
    /// * `name` - Asset name, used for lookup and logging
    /// * `shader` - Name of the shader program the host binds
    pub fn new(name: &str, shader: &str) -> Self {
        Self {
            name: name.to_string(),
            shader: shader.to_string(),
            uniforms: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }

    // ===== WRITE =====

    /// Write a float uniform (last write wins)
    pub fn set_float(&self, id: ShaderPropertyId, value: f32) {
        self.write().insert(id, UniformValue::Float(value));
    }

    /// Write a vector uniform (last write wins)
    pub fn set_vector(&self, id: ShaderPropertyId, value: Vec4) {
        self.write().insert(id, UniformValue::Vector(value));
    }

    /// Write a color uniform as an RGBA vector
    pub fn set_color(&self, id: ShaderPropertyId, color: Color) {
        self.set_vector(id, color.to_vec4());
    }

    // ===== READ =====

    /// Read a uniform slot
    pub fn uniform(&self, id: ShaderPropertyId) -> Option<UniformValue> {
        self.read().get(&id).copied()
    }

    /// Read a float uniform (None if unset or not a float)
    pub fn float(&self, id: ShaderPropertyId) -> Option<f32> {
        match self.uniform(id)? {
            UniformValue::Float(value) => Some(value),
            UniformValue::Vector(_) => None,
        }
    }

    /// Read a vector uniform (None if unset or not a vector)
    pub fn vector(&self, id: ShaderPropertyId) -> Option<Vec4> {
        match self.uniform(id)? {
            UniformValue::Vector(value) => Some(value),
            UniformValue::Float(_) => None,
        }
    }

    /// Number of slots written so far
    pub fn uniform_count(&self) -> usize {
        self.read().len()
    }

    /// All written slots, ordered by slot index
    pub fn uniforms(&self) -> Vec<(ShaderPropertyId, UniformValue)> {
        let mut uniforms: Vec<_> = self.read().iter().map(|(id, v)| (*id, *v)).collect();
        uniforms.sort_by_key(|(id, _)| *id);
        uniforms
    }

    // Inserts are atomic: a poisoned table is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<ShaderPropertyId, UniformValue>> {
        self.uniforms.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<ShaderPropertyId, UniformValue>> {
        self.uniforms.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
