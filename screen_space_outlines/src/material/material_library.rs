/// Named registry of override materials.
///
/// Settings refer to materials by asset name. The library resolves those
/// names when the feature builds its passes.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::{outline_error, outline_warn};
use super::material::Material;

/// Stores named materials shared with the host
pub struct MaterialLibrary {
    materials: FxHashMap<String, Arc<Material>>,
}

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self {
            materials: FxHashMap::default(),
        }
    }

    /// Create and register a material
    ///
    /// Returns the shared material.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if a material with the same name
    /// already exists.
    pub fn create_material(&mut self, name: &str, shader: &str) -> Result<Arc<Material>> {
        if self.materials.contains_key(name) {
            let message = format!("Material '{}' already exists", name);
            outline_error!("outlines::MaterialLibrary", "{}", message);
            return Err(Error::InvalidResource(message));
        }

        let material = Arc::new(Material::new(name, shader));
        self.materials.insert(name.to_string(), material.clone());
        Ok(material)
    }

    /// Get a material by name
    pub fn material(&self, name: &str) -> Option<&Arc<Material>> {
        self.materials.get(name)
    }

    /// Resolve an optional asset reference from settings
    ///
    /// An unset reference resolves to None silently. A reference to an
    /// unknown material also resolves to None, with a warning.
    pub fn resolve(&self, name: Option<&str>) -> Option<Arc<Material>> {
        let name = name?;
        let material = self.materials.get(name).cloned();
        if material.is_none() {
            outline_warn!("outlines::MaterialLibrary",
                "Material '{}' not found, the pass using it is disabled", name);
        }
        material
    }

    /// Remove a material by name
    ///
    /// Returns the removed material, or None if not found. Passes that
    /// already hold the material keep it alive.
    pub fn remove_material(&mut self, name: &str) -> Option<Arc<Material>> {
        self.materials.remove(name)
    }

    /// Get the number of materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Get all material names
    pub fn material_names(&self) -> Vec<&str> {
        self.materials.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all materials
    pub fn clear(&mut self) {
        self.materials.clear();
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "material_library_tests.rs"]
mod tests;
