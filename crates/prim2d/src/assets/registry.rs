use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::api::types::TextureId;
use crate::assets::texture::{TextureData, TextureError};
use crate::collision::mask::AlphaMask;

/// Manifest describing the textures a game registers up front.
/// Loaded from a JSON string at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Named texture lookup: name → dimensions (+ optional opacity rows).
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single texture in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    pub width: u32,
    pub height: u32,
    /// Optional opacity rows, one string of '0'/'1' per pixel row.
    /// Omitted means the texture collides as a full rectangle.
    #[serde(default)]
    pub mask: Option<Vec<String>>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TextureError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Registry of named textures. Primitives resolve their texture by name at
/// construction; a missing name is a fatal error propagated to the caller.
#[derive(Debug)]
pub struct TextureRegistry {
    names: HashMap<String, TextureId>,
    textures: Vec<Arc<TextureData>>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            textures: Vec::new(),
        }
    }

    /// Build a registry from a parsed manifest.
    pub fn from_manifest(manifest: &TextureManifest) -> Result<Self, TextureError> {
        let mut registry = Self::new();
        for (name, desc) in &manifest.textures {
            let data = match &desc.mask {
                Some(rows) => {
                    if rows.len() != desc.height as usize
                        || rows.iter().any(|r| r.chars().count() != desc.width as usize)
                    {
                        return Err(TextureError::BadMask(name.clone()));
                    }
                    TextureData::from_mask(AlphaMask::from_rows(desc.width, desc.height, rows))
                }
                None => TextureData::solid(desc.width, desc.height),
            };
            registry.insert(name.clone(), data);
        }
        info!("texture registry built: {} textures", registry.len());
        Ok(registry)
    }

    /// Parse a JSON manifest and build a registry from it.
    pub fn from_json(json: &str) -> Result<Self, TextureError> {
        Self::from_manifest(&TextureManifest::from_json(json)?)
    }

    /// Register a texture under a name. Re-registering a name replaces the
    /// id it resolves to; previously constructed primitives keep their data.
    pub fn insert(&mut self, name: impl Into<String>, data: TextureData) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(Arc::new(data));
        self.names.insert(name.into(), id);
        id
    }

    /// Resolve a texture by name. Missing textures are a fatal load failure.
    pub fn get(&self, name: &str) -> Result<(TextureId, Arc<TextureData>), TextureError> {
        let id = self
            .names
            .get(name)
            .copied()
            .ok_or_else(|| TextureError::NotFound(name.to_string()))?;
        Ok((id, Arc::clone(&self.textures[id.0 as usize])))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
