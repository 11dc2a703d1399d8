//! GPU texture with sampler state and texture-unit tracking

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::app_state::{AppState, TextureId, UnitCell};
use crate::backend::TextureBackend;
use crate::constants;
use crate::error::{TextureError, TextureResult};
use crate::options::{SamplerParams, TextureOptions, TextureTarget};
use crate::upload::{MipExtent, TextureData, UploadPath, UploadTarget, mip_level_count};

/// Initial pixel data together with its dimensions
#[derive(Debug, Clone, Copy)]
pub struct InitialImage<'a> {
    pub width: u32,
    pub height: u32,
    pub data: TextureData<'a>,
}

impl<'a> InitialImage<'a> {
    pub fn new(width: u32, height: u32, data: impl Into<TextureData<'a>>) -> Self {
        Self {
            width,
            height,
            data: data.into(),
        }
    }
}

#[cfg(feature = "image")]
impl<'a> From<&'a image::RgbaImage> for InitialImage<'a> {
    fn from(image: &'a image::RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: TextureData::Level(image.as_raw().as_slice()),
        }
    }
}

/// Size and optional initial contents of a new texture
///
/// Explicit `width` / `height` take precedence over the image's own size.
/// `depth` is the layer count for array textures and the depth of 3D
/// textures; it stays 0 for planar ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextureInit<'a> {
    pub image: Option<InitialImage<'a>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub depth: Option<u32>,
}

impl<'a> TextureInit<'a> {
    /// Storage of the given size without initial contents
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Layered or 3D storage without initial contents
    pub fn empty_3d(width: u32, height: u32, depth: u32) -> Self {
        Self::empty(width, height).depth(depth)
    }

    /// Storage sized to `image`, filled with its data
    pub fn image(image: impl Into<InitialImage<'a>>) -> Self {
        Self {
            image: Some(image.into()),
            ..Default::default()
        }
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// General-purpose texture: immutable storage, a sampler object and the
/// unit it currently occupies in the shared [`AppState`].
///
/// Methods return `&mut Self` so calls can be chained:
///
/// ```rust,ignore
/// texture.resize(512, 512, None)?.data(&pixels).bind(2);
/// ```
pub struct Texture<B: TextureBackend> {
    gl: Rc<B>,
    app_state: AppState,
    id: TextureId,
    target: TextureTarget,
    texture: Option<B::Texture>,
    sampler: Option<B::Sampler>,
    extent: MipExtent,
    levels: u32,
    format: u32,
    pixel_type: u32,
    internal_format: u32,
    upload_path: UploadPath,
    flip_y: bool,
    base_level: Option<i32>,
    max_level: Option<i32>,
    generate_mipmaps: bool,
    current_unit: UnitCell,
}

impl<B: TextureBackend> Texture<B> {
    /// Create a texture, its sampler and its storage.
    ///
    /// The sampler is configured once from `options`; LOD clamps are only
    /// applied when set. Storage is allocated through [`Texture::resize`] and
    /// the initial image, if any, is uploaded through [`Texture::data`].
    pub fn new(
        gl: Rc<B>,
        app_state: &AppState,
        target: TextureTarget,
        init: TextureInit<'_>,
        options: &TextureOptions,
    ) -> TextureResult<Self> {
        let resolved = options.resolve()?;
        let width = init
            .width
            .or(init.image.map(|image| image.width))
            .ok_or(TextureError::MissingDimensions)?;
        let height = init
            .height
            .or(init.image.map(|image| image.height))
            .ok_or(TextureError::MissingDimensions)?;

        let sampler = gl.create_sampler().map_err(TextureError::CreateSampler)?;
        configure_sampler(&*gl, sampler, &resolved.sampler);

        let mut texture = Self {
            gl,
            app_state: app_state.clone(),
            id: app_state.next_texture_id(),
            target,
            texture: None,
            sampler: Some(sampler),
            extent: MipExtent::new(0, 0, 0),
            levels: 0,
            format: resolved.format,
            pixel_type: resolved.pixel_type,
            internal_format: resolved.internal_format,
            upload_path: UploadPath::select(resolved.compressed, target.is_volumetric()),
            flip_y: resolved.flip_y,
            base_level: resolved.base_level,
            max_level: resolved.max_level,
            generate_mipmaps: resolved.generate_mipmaps,
            current_unit: Rc::new(Cell::new(None)),
        };

        texture.resize(width, height, init.depth)?;

        if let Some(image) = init.image {
            texture.data(image.data);
        }

        Ok(texture)
    }

    /// Re-allocate storage for new dimensions.
    ///
    /// Same-size calls are no-ops. Otherwise previous contents and mip data
    /// are discarded, a fresh handle is created and bound to the texture's
    /// current unit (unit 1 when unbound, never unit 0), and immutable
    /// storage is allocated with a full mip chain when mipmaps are generated.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero, or if `depth` is zero or missing
    /// for an array / 3D texture.
    pub fn resize(&mut self, width: u32, height: u32, depth: Option<u32>) -> TextureResult<&mut Self> {
        let extent = MipExtent::new(width, height, depth.unwrap_or(0));
        let volumetric = self.is_volumetric();
        assert!(
            width > 0 && height > 0 && (!volumetric || extent.depth > 0),
            "invalid texture dimensions {width}x{height}x{}",
            extent.depth
        );

        if extent == self.extent {
            return Ok(self);
        }

        if let Some(old) = self.texture.take() {
            self.gl.delete_texture(old);
        }
        if let Some(unit) = self.current_unit.get() {
            self.app_state.release(unit, self.id);
        }

        let texture = match self.gl.create_texture() {
            Ok(texture) => texture,
            Err(err) => {
                // No storage remains, so the next resize must reallocate.
                self.extent = MipExtent::new(0, 0, 0);
                self.levels = 0;
                self.current_unit.set(None);
                return Err(TextureError::CreateTexture(err));
            }
        };
        self.texture = Some(texture);

        let unit = self.current_unit.get().map_or(1, |unit| unit.max(1));
        self.bind(unit);

        self.extent = extent;
        self.gl.set_unpack_flip_y(self.flip_y);

        let target = self.target.to_gl();
        if let Some(base_level) = self.base_level {
            self.gl
                .tex_parameter_i32(target, constants::TEXTURE_BASE_LEVEL, base_level);
        }
        if let Some(max_level) = self.max_level {
            self.gl
                .tex_parameter_i32(target, constants::TEXTURE_MAX_LEVEL, max_level);
        }

        self.levels = mip_level_count(extent, volumetric, self.generate_mipmaps);
        if volumetric {
            self.gl.tex_storage_3d(
                target,
                self.levels,
                self.internal_format,
                width,
                height,
                extent.depth,
            );
        } else {
            self.gl
                .tex_storage_2d(target, self.levels, self.internal_format, width, height);
        }

        tracing::debug!(
            target: "gltex",
            texture = %self.id,
            width,
            height,
            depth = extent.depth,
            levels = self.levels,
            "allocated texture storage"
        );

        Ok(self)
    }

    /// Upload pixel data, one payload per mip level starting at level 0.
    ///
    /// The texture is bound to its current unit (unit 0 when unbound) before
    /// uploading, so the call is correct regardless of prior binding state;
    /// the bind is visible in the [`AppState`]. Each payload must fit the
    /// allocated storage of its level. When a single level is supplied and
    /// mipmaps are generated, the rest of the chain is generated from it.
    pub fn data<'a>(&mut self, data: impl Into<TextureData<'a>>) -> &mut Self {
        let data = data.into();
        let levels = data.levels();
        debug_assert!(
            levels.len() as u32 <= self.levels,
            "{} levels supplied for storage with {} levels",
            levels.len(),
            self.levels
        );

        let unit = self.current_unit.get().unwrap_or(0);
        self.bind(unit);

        let upload_target = match self.target {
            TextureTarget::CubeMap => UploadTarget::CubeMap,
            target => UploadTarget::Single(target.to_gl()),
        };
        self.upload_path.upload(
            &*self.gl,
            upload_target,
            self.extent,
            self.format,
            self.pixel_type,
            levels,
        );

        let generated = levels.len() == 1 && self.generate_mipmaps;
        if generated {
            self.gl.generate_mipmap(self.target.to_gl());
        }

        tracing::trace!(
            target: "gltex",
            texture = %self.id,
            levels = levels.len(),
            path = ?self.upload_path,
            generated,
            "uploaded texture data"
        );

        self
    }

    /// Bind to texture unit `unit`.
    ///
    /// A no-op when the unit already holds this texture. Otherwise the
    /// previous occupant of `unit` is marked unbound (its GPU objects are
    /// untouched), this texture's old slot is cleared, and the texture and
    /// its sampler are bound to `unit`.
    pub fn bind(&mut self, unit: u32) -> &mut Self {
        debug_assert!(self.texture.is_some(), "bind on deleted texture {}", self.id);

        if self.app_state.occupant(unit) == Some(self.id) {
            return self;
        }

        if let Some(previous) = self.current_unit.get() {
            self.app_state.release(previous, self.id);
        }

        self.gl.active_texture(unit);
        self.gl.bind_texture(self.target.to_gl(), self.texture);
        self.gl.bind_sampler(unit, self.sampler);

        let evicted = self.app_state.claim(unit, self.id, &self.current_unit);
        self.current_unit.set(Some(unit));

        tracing::trace!(
            target: "gltex",
            texture = %self.id,
            unit,
            evicted = ?evicted,
            "bound texture"
        );

        self
    }

    /// Release the texture and sampler objects.
    ///
    /// Safe to call repeatedly; only the first call reaches the backend.
    /// Clears the texture's binding slot. The texture must not be resized,
    /// uploaded to or bound afterwards.
    pub fn delete(&mut self) {
        let had_objects = self.texture.is_some() || self.sampler.is_some();

        if let Some(texture) = self.texture.take() {
            self.gl.delete_texture(texture);
        }
        if let Some(sampler) = self.sampler.take() {
            self.gl.delete_sampler(sampler);
        }
        if let Some(unit) = self.current_unit.take() {
            self.app_state.release(unit, self.id);
        }

        if had_objects {
            tracing::debug!(target: "gltex", texture = %self.id, "deleted texture");
        }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn target(&self) -> TextureTarget {
        self.target
    }

    pub fn width(&self) -> u32 {
        self.extent.width
    }

    pub fn height(&self) -> u32 {
        self.extent.height
    }

    pub fn depth(&self) -> u32 {
        self.extent.depth
    }

    /// Mip levels in the current storage
    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn format(&self) -> u32 {
        self.format
    }

    pub fn pixel_type(&self) -> u32 {
        self.pixel_type
    }

    pub fn internal_format(&self) -> u32 {
        self.internal_format
    }

    pub fn is_volumetric(&self) -> bool {
        self.upload_path.is_volumetric()
    }

    pub fn is_compressed(&self) -> bool {
        matches!(
            self.upload_path,
            UploadPath::Compressed2D | UploadPath::Compressed3D
        )
    }

    pub fn generates_mipmaps(&self) -> bool {
        self.generate_mipmaps
    }

    /// Unit this texture occupies, `None` when unbound or evicted
    pub fn current_unit(&self) -> Option<u32> {
        self.current_unit.get()
    }

    pub fn handle(&self) -> Option<B::Texture> {
        self.texture
    }

    pub fn sampler(&self) -> Option<B::Sampler> {
        self.sampler
    }

    pub fn is_deleted(&self) -> bool {
        self.texture.is_none() && self.sampler.is_none()
    }
}

impl<B: TextureBackend> Drop for Texture<B> {
    fn drop(&mut self) {
        self.delete();
    }
}

impl<B: TextureBackend> fmt::Debug for Texture<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("texture", &self.texture)
            .field("sampler", &self.sampler)
            .field("extent", &self.extent)
            .field("levels", &self.levels)
            .field("internal_format", &format_args!("{:#06x}", self.internal_format))
            .field("upload_path", &self.upload_path)
            .field("current_unit", &self.current_unit.get())
            .finish()
    }
}

fn configure_sampler<B: TextureBackend>(gl: &B, sampler: B::Sampler, params: &SamplerParams) {
    let parameters = [
        (constants::TEXTURE_MIN_FILTER, params.min_filter.to_gl()),
        (constants::TEXTURE_MAG_FILTER, params.mag_filter.to_gl()),
        (constants::TEXTURE_WRAP_S, params.wrap_s.to_gl()),
        (constants::TEXTURE_WRAP_T, params.wrap_t.to_gl()),
        (constants::TEXTURE_WRAP_R, params.wrap_r.to_gl()),
        (constants::TEXTURE_COMPARE_FUNC, params.compare_func.to_gl()),
        (constants::TEXTURE_COMPARE_MODE, params.compare_mode.to_gl()),
    ];
    for (name, value) in parameters {
        gl.sampler_parameter_i32(sampler, name, value as i32);
    }

    if let Some(min_lod) = params.min_lod {
        gl.sampler_parameter_f32(sampler, constants::TEXTURE_MIN_LOD, min_lod);
    }
    if let Some(max_lod) = params.max_lod {
        gl.sampler_parameter_f32(sampler, constants::TEXTURE_MAX_LOD, max_lod);
    }
}
