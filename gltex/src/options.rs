//! Texture configuration and sampler state

use crate::constants;
use crate::error::{TextureError, TextureResult};
use crate::format_defaults::default_internal_format;

/// Resource kind a texture is bound as. Fixed for the texture's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureTarget {
    Texture2D,
    Texture2DArray,
    Texture3D,
    CubeMap,
}

impl TextureTarget {
    pub fn to_gl(self) -> u32 {
        match self {
            TextureTarget::Texture2D => constants::TEXTURE_2D,
            TextureTarget::Texture2DArray => constants::TEXTURE_2D_ARRAY,
            TextureTarget::Texture3D => constants::TEXTURE_3D,
            TextureTarget::CubeMap => constants::TEXTURE_CUBE_MAP,
        }
    }

    /// Layered targets allocate and upload through the 3D entry points.
    pub fn is_volumetric(self) -> bool {
        matches!(
            self,
            TextureTarget::Texture2DArray | TextureTarget::Texture3D
        )
    }
}

/// Texture filtering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl TextureFilter {
    pub fn to_gl(self) -> u32 {
        match self {
            TextureFilter::Nearest => constants::NEAREST,
            TextureFilter::Linear => constants::LINEAR,
            TextureFilter::NearestMipmapNearest => constants::NEAREST_MIPMAP_NEAREST,
            TextureFilter::LinearMipmapNearest => constants::LINEAR_MIPMAP_NEAREST,
            TextureFilter::NearestMipmapLinear => constants::NEAREST_MIPMAP_LINEAR,
            TextureFilter::LinearMipmapLinear => constants::LINEAR_MIPMAP_LINEAR,
        }
    }

    /// Whether sampling with this filter reads levels beyond the base level
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, TextureFilter::Nearest | TextureFilter::Linear)
    }
}

/// Texture coordinate wrapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

impl WrapMode {
    pub fn to_gl(self) -> u32 {
        match self {
            WrapMode::Repeat => constants::REPEAT,
            WrapMode::ClampToEdge => constants::CLAMP_TO_EDGE,
            WrapMode::MirroredRepeat => constants::MIRRORED_REPEAT,
        }
    }
}

/// Depth comparison mode for shadow samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareMode {
    None,
    CompareRefToTexture,
}

impl CompareMode {
    pub fn to_gl(self) -> u32 {
        match self {
            CompareMode::None => constants::NONE,
            CompareMode::CompareRefToTexture => constants::COMPARE_REF_TO_TEXTURE,
        }
    }
}

/// Depth comparison function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareFunc {
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

impl CompareFunc {
    pub fn to_gl(self) -> u32 {
        match self {
            CompareFunc::Never => constants::NEVER,
            CompareFunc::Less => constants::LESS,
            CompareFunc::Equal => constants::EQUAL,
            CompareFunc::LessOrEqual => constants::LEQUAL,
            CompareFunc::Greater => constants::GREATER,
            CompareFunc::NotEqual => constants::NOTEQUAL,
            CompareFunc::GreaterOrEqual => constants::GEQUAL,
            CompareFunc::Always => constants::ALWAYS,
        }
    }
}

/// Texture configuration
///
/// Every field is optional; unset fields resolve to the defaults documented
/// on [`ResolvedOptions`]. Builder methods are provided for chaining:
///
/// ```rust
/// use gltex::{TextureFilter, TextureOptions, WrapMode};
///
/// let options = TextureOptions::new()
///     .min_filter(TextureFilter::Linear)
///     .wrap(WrapMode::ClampToEdge)
///     .flip_y(true);
/// assert_eq!(options.wrap_s, Some(WrapMode::ClampToEdge));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextureOptions {
    pub format: Option<u32>,
    pub pixel_type: Option<u32>,
    pub internal_format: Option<u32>,
    pub compressed: Option<bool>,
    pub min_filter: Option<TextureFilter>,
    pub mag_filter: Option<TextureFilter>,
    pub wrap_s: Option<WrapMode>,
    pub wrap_t: Option<WrapMode>,
    pub wrap_r: Option<WrapMode>,
    pub compare_mode: Option<CompareMode>,
    pub compare_func: Option<CompareFunc>,
    pub min_lod: Option<f32>,
    pub max_lod: Option<f32>,
    pub flip_y: Option<bool>,
    pub base_level: Option<i32>,
    pub max_level: Option<i32>,
    pub generate_mipmaps: Option<bool>,
}

impl TextureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: u32) -> Self {
        self.format = Some(format);
        self
    }

    pub fn pixel_type(mut self, pixel_type: u32) -> Self {
        self.pixel_type = Some(pixel_type);
        self
    }

    pub fn internal_format(mut self, internal_format: u32) -> Self {
        self.internal_format = Some(internal_format);
        self
    }

    /// Mark the texture as holding compressed data in `format`
    pub fn compressed(mut self, format: u32) -> Self {
        self.compressed = Some(true);
        self.format = Some(format);
        self
    }

    pub fn min_filter(mut self, filter: TextureFilter) -> Self {
        self.min_filter = Some(filter);
        self
    }

    pub fn mag_filter(mut self, filter: TextureFilter) -> Self {
        self.mag_filter = Some(filter);
        self
    }

    /// Set the wrap mode on all three axes
    pub fn wrap(mut self, mode: WrapMode) -> Self {
        self.wrap_s = Some(mode);
        self.wrap_t = Some(mode);
        self.wrap_r = Some(mode);
        self
    }

    pub fn wrap_s(mut self, mode: WrapMode) -> Self {
        self.wrap_s = Some(mode);
        self
    }

    pub fn wrap_t(mut self, mode: WrapMode) -> Self {
        self.wrap_t = Some(mode);
        self
    }

    pub fn wrap_r(mut self, mode: WrapMode) -> Self {
        self.wrap_r = Some(mode);
        self
    }

    pub fn compare_mode(mut self, mode: CompareMode) -> Self {
        self.compare_mode = Some(mode);
        self
    }

    pub fn compare_func(mut self, func: CompareFunc) -> Self {
        self.compare_func = Some(func);
        self
    }

    pub fn lod_range(mut self, min_lod: f32, max_lod: f32) -> Self {
        self.min_lod = Some(min_lod);
        self.max_lod = Some(max_lod);
        self
    }

    pub fn flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = Some(flip_y);
        self
    }

    pub fn level_range(mut self, base_level: i32, max_level: i32) -> Self {
        self.base_level = Some(base_level);
        self.max_level = Some(max_level);
        self
    }

    /// Enable or disable mip chain allocation and generation.
    ///
    /// Only takes effect with a mipmapping `min_filter`. All four
    /// `*_MIPMAP_*` filters count, including the `NEAREST_MIPMAP_*` pair,
    /// since each of them samples below the base level.
    pub fn generate_mipmaps(mut self, generate: bool) -> Self {
        self.generate_mipmaps = Some(generate);
        self
    }

    /// Fill every unset field with its default.
    ///
    /// Fails with [`TextureError::UnsupportedFormat`] when no internal format
    /// was given and the `(pixel_type, format)` pair has no default.
    pub fn resolve(&self) -> TextureResult<ResolvedOptions> {
        let format = self.format.unwrap_or(constants::RGBA);
        let pixel_type = self.pixel_type.unwrap_or(constants::UNSIGNED_BYTE);
        let compressed = self.compressed.unwrap_or(false);

        // Compressed format enums are already sized.
        let internal_format = match self.internal_format {
            Some(internal_format) => internal_format,
            None if compressed => format,
            None => default_internal_format(pixel_type, format)
                .ok_or(TextureError::UnsupportedFormat { pixel_type, format })?,
        };

        let min_filter = self.min_filter.unwrap_or(TextureFilter::LinearMipmapLinear);
        let generate_mipmaps = self.generate_mipmaps != Some(false) && min_filter.uses_mipmaps();

        Ok(ResolvedOptions {
            format,
            pixel_type,
            internal_format,
            compressed,
            sampler: SamplerParams {
                min_filter,
                mag_filter: self.mag_filter.unwrap_or(TextureFilter::Linear),
                wrap_s: self.wrap_s.unwrap_or(WrapMode::Repeat),
                wrap_t: self.wrap_t.unwrap_or(WrapMode::Repeat),
                wrap_r: self.wrap_r.unwrap_or(WrapMode::Repeat),
                compare_mode: self.compare_mode.unwrap_or(CompareMode::None),
                compare_func: self.compare_func.unwrap_or(CompareFunc::LessOrEqual),
                min_lod: self.min_lod,
                max_lod: self.max_lod,
            },
            flip_y: self.flip_y.unwrap_or(false),
            base_level: self.base_level,
            max_level: self.max_level,
            generate_mipmaps,
        })
    }
}

/// Sampler object state applied once at texture construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerParams {
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub wrap_r: WrapMode,
    pub compare_mode: CompareMode,
    pub compare_func: CompareFunc,
    /// Only applied when set
    pub min_lod: Option<f32>,
    /// Only applied when set
    pub max_lod: Option<f32>,
}

/// [`TextureOptions`] with every default filled in
///
/// | field | default |
/// |-------|---------|
/// | `format` | `RGBA` |
/// | `pixel_type` | `UNSIGNED_BYTE` |
/// | `internal_format` | format-defaults lookup, or `format` when compressed |
/// | `min_filter` | `LinearMipmapLinear` |
/// | `mag_filter` | `Linear` |
/// | `wrap_*` | `Repeat` |
/// | `compare_mode` | `None` |
/// | `compare_func` | `LessOrEqual` |
/// | `flip_y` | `false` |
/// | `generate_mipmaps` | `true` when `min_filter` reads mip levels |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub format: u32,
    pub pixel_type: u32,
    pub internal_format: u32,
    pub compressed: bool,
    pub sampler: SamplerParams,
    pub flip_y: bool,
    pub base_level: Option<i32>,
    pub max_level: Option<i32>,
    pub generate_mipmaps: bool,
}
