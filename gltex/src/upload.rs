//! Pixel payloads, mip-chain sizing and the four upload strategies

use crate::backend::TextureBackend;
use crate::constants::CUBE_MAP_FACES;

/// Pixel data for [`Texture::data`](crate::Texture::data)
///
/// Either a single level (level 0) or one payload per mip level, finest
/// level first. Each payload must match the storage extent of its level.
#[derive(Debug, Clone, Copy)]
pub enum TextureData<'a> {
    Level(&'a [u8]),
    Levels(&'a [&'a [u8]]),
}

impl<'a> TextureData<'a> {
    /// Reinterpret typed texels (`f32`, `u16`, ...) as a single level
    #[cfg(feature = "bytemuck")]
    pub fn typed<T: bytemuck::Pod>(texels: &'a [T]) -> Self {
        TextureData::Level(bytemuck::cast_slice(texels))
    }

    pub fn levels(&self) -> &[&'a [u8]] {
        match self {
            TextureData::Level(level) => std::slice::from_ref(level),
            TextureData::Levels(levels) => levels,
        }
    }
}

impl<'a> From<&'a [u8]> for TextureData<'a> {
    fn from(level: &'a [u8]) -> Self {
        TextureData::Level(level)
    }
}

impl<'a> From<&'a Vec<u8>> for TextureData<'a> {
    fn from(level: &'a Vec<u8>) -> Self {
        TextureData::Level(level.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for TextureData<'a> {
    fn from(level: &'a [u8; N]) -> Self {
        TextureData::Level(level.as_slice())
    }
}

impl<'a> From<&'a [&'a [u8]]> for TextureData<'a> {
    fn from(levels: &'a [&'a [u8]]) -> Self {
        TextureData::Levels(levels)
    }
}

impl<'a, const N: usize> From<&'a [&'a [u8]; N]> for TextureData<'a> {
    fn from(levels: &'a [&'a [u8]; N]) -> Self {
        TextureData::Levels(levels.as_slice())
    }
}

/// Width, height and depth of one mip level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipExtent {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl MipExtent {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Extent of the next coarser level: each axis halved, floored at 1.
    /// Depth only shrinks for volumetric textures.
    pub fn next_level(self, volumetric: bool) -> Self {
        Self {
            width: (self.width >> 1).max(1),
            height: (self.height >> 1).max(1),
            depth: if volumetric {
                (self.depth >> 1).max(1)
            } else {
                self.depth
            },
        }
    }
}

/// Number of levels to allocate for immutable storage.
///
/// `floor(log2(max dimension)) + 1` with mipmaps, otherwise 1. Depth only
/// takes part for volumetric textures.
pub fn mip_level_count(extent: MipExtent, volumetric: bool, generate_mipmaps: bool) -> u32 {
    if !generate_mipmaps {
        return 1;
    }

    let mut largest = extent.width.max(extent.height);
    if volumetric {
        largest = largest.max(extent.depth);
    }

    if largest == 0 {
        1
    } else {
        largest.ilog2() + 1
    }
}

/// Upload strategy, fixed at texture construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPath {
    Raw2D,
    Raw3D,
    Compressed2D,
    Compressed3D,
}

impl UploadPath {
    pub fn select(compressed: bool, volumetric: bool) -> Self {
        match (compressed, volumetric) {
            (false, false) => UploadPath::Raw2D,
            (false, true) => UploadPath::Raw3D,
            (true, false) => UploadPath::Compressed2D,
            (true, true) => UploadPath::Compressed3D,
        }
    }

    pub fn is_volumetric(self) -> bool {
        matches!(self, UploadPath::Raw3D | UploadPath::Compressed3D)
    }

    /// Upload one payload per level starting at level 0 with `base` extent.
    ///
    /// Planar strategies on a cube map split each payload into six equal
    /// faces (+X, -X, +Y, -Y, +Z, -Z) and upload each to its face target.
    pub(crate) fn upload<B: TextureBackend>(
        self,
        gl: &B,
        target: UploadTarget,
        base: MipExtent,
        format: u32,
        pixel_type: u32,
        levels: &[&[u8]],
    ) {
        let volumetric = self.is_volumetric();
        let mut extent = base;

        for (level, pixels) in levels.iter().enumerate() {
            let level = level as u32;
            match target {
                UploadTarget::Single(gl_target) => {
                    self.upload_level(gl, gl_target, level, extent, format, pixel_type, pixels);
                }
                UploadTarget::CubeMap => {
                    debug_assert_eq!(
                        pixels.len() % CUBE_MAP_FACES.len(),
                        0,
                        "cube map level {level} payload does not split into six faces"
                    );
                    let face_len = (pixels.len() / CUBE_MAP_FACES.len()).max(1);
                    for (face, face_pixels) in CUBE_MAP_FACES.iter().zip(pixels.chunks(face_len)) {
                        self.upload_level(gl, *face, level, extent, format, pixel_type, face_pixels);
                    }
                }
            }
            extent = extent.next_level(volumetric);
        }
    }

    fn upload_level<B: TextureBackend>(
        self,
        gl: &B,
        target: u32,
        level: u32,
        extent: MipExtent,
        format: u32,
        pixel_type: u32,
        pixels: &[u8],
    ) {
        let MipExtent {
            width,
            height,
            depth,
        } = extent;
        match self {
            UploadPath::Raw2D => {
                gl.tex_sub_image_2d(target, level, width, height, format, pixel_type, pixels)
            }
            UploadPath::Raw3D => gl.tex_sub_image_3d(
                target, level, width, height, depth, format, pixel_type, pixels,
            ),
            UploadPath::Compressed2D => {
                gl.compressed_tex_sub_image_2d(target, level, width, height, format, pixels)
            }
            UploadPath::Compressed3D => {
                gl.compressed_tex_sub_image_3d(target, level, width, height, depth, format, pixels)
            }
        }
    }
}

/// Where sub-image uploads are directed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadTarget {
    Single(u32),
    CubeMap,
}
