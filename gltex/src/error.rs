//! Error types for texture creation and storage allocation

use thiserror::Error;

/// Errors that can occur while creating or reallocating a texture
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// The backend failed to create a texture object
    #[error("Failed to create texture: {0}")]
    CreateTexture(String),

    /// The backend failed to create a sampler object
    #[error("Failed to create sampler: {0}")]
    CreateSampler(String),

    /// No internal format was given and none can be derived
    #[error("No default internal format for pixel type {pixel_type:#06x} and format {format:#06x}")]
    UnsupportedFormat { pixel_type: u32, format: u32 },

    /// Neither explicit dimensions nor an initial image were supplied
    #[error("Texture width and height must be given explicitly or through an initial image")]
    MissingDimensions,
}

/// Result type for texture operations that touch backend object creation
pub type TextureResult<T> = Result<T, TextureError>;
