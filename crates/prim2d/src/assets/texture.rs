use std::fmt;

use crate::collision::mask::AlphaMask;

/// Errors raised while registering or resolving textures.
///
/// An unresolvable texture is fatal for the primitive being constructed;
/// callers propagate it, they do not recover.
#[derive(Debug)]
pub enum TextureError {
    /// No texture registered under the requested name.
    NotFound(String),
    /// RGBA byte length does not match width * height * 4.
    SizeMismatch { expected: usize, actual: usize },
    /// Manifest mask rows do not match the declared width/height.
    BadMask(String),
    /// Manifest JSON failed to parse.
    Manifest(serde_json::Error),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::NotFound(name) => write!(f, "texture not found: {}", name),
            TextureError::SizeMismatch { expected, actual } => {
                write!(f, "rgba data size mismatch: expected {} bytes, got {}", expected, actual)
            }
            TextureError::BadMask(name) => {
                write!(f, "mask rows do not match texture dimensions: {}", name)
            }
            TextureError::Manifest(err) => write!(f, "manifest parse error: {}", err),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Manifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TextureError {
    fn from(err: serde_json::Error) -> Self {
        TextureError::Manifest(err)
    }
}

/// A decoded texture: dimensions plus the per-pixel opacity mask used for
/// collision. Pixel color data stays with the external renderer; only the
/// alpha information matters here.
#[derive(Debug, Clone)]
pub struct TextureData {
    width: u32,
    height: u32,
    mask: AlphaMask,
}

impl TextureData {
    /// Build from raw RGBA8 bytes. Fails if the byte length does not match
    /// the declared dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, TextureError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            mask: AlphaMask::from_rgba(width, height, rgba),
        })
    }

    /// A fully opaque texture of the given dimensions.
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mask: AlphaMask::solid(width, height),
        }
    }

    /// Build from an explicit mask (dimensions taken from the mask).
    pub fn from_mask(mask: AlphaMask) -> Self {
        Self {
            width: mask.width(),
            height: mask.height(),
            mask,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mask(&self) -> &AlphaMask {
        &self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_validates_length() {
        let err = TextureData::from_rgba(2, 2, &[0u8; 15]).unwrap_err();
        match err {
            TextureError::SizeMismatch { expected, actual } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn huge_dimensions_do_not_overflow() {
        // width * height * 4 exceeds u32::MAX; must still report the
        // mismatch instead of wrapping
        let err = TextureData::from_rgba(100_000, 100_000, &[]).unwrap_err();
        match err {
            TextureError::SizeMismatch { expected, actual } => {
                assert_eq!(expected, 40_000_000_000);
                assert_eq!(actual, 0);
            }
            other => panic!("expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn from_rgba_builds_mask() {
        // 1x2: top pixel opaque, bottom transparent
        let rgba = [10, 20, 30, 255, 10, 20, 30, 0];
        let tex = TextureData::from_rgba(1, 2, &rgba).unwrap();
        assert_eq!(tex.width(), 1);
        assert_eq!(tex.height(), 2);
        assert!(tex.mask().is_opaque(0, 0));
        assert!(!tex.mask().is_opaque(0, 1));
    }

    #[test]
    fn error_display_is_readable() {
        let err = TextureError::NotFound("hero".to_string());
        assert_eq!(err.to_string(), "texture not found: hero");
    }
}
