//! `TextureBackend` implementation over `glow`

use glow::{CompressedPixelUnpackData, Context, HasContext, PixelUnpackData};
use gltex::TextureBackend;
use gltex::constants::{MAX_COMBINED_TEXTURE_IMAGE_UNITS, TEXTURE0, UNPACK_FLIP_Y_WEBGL};

use crate::{GlSampler, GlTexture, GlVersion, InitError, InitResult};

/// A glow context checked for immutable texture storage and sampler objects
pub struct GlowBackend {
    gl: Context,
    version: GlVersion,
}

impl GlowBackend {
    /// Wrap `gl`, rejecting contexts older than OpenGL 4.2 / OpenGL ES 3.0
    pub fn new(gl: Context) -> InitResult<Self> {
        let version = GlVersion::read(&gl);
        if !version.tex_storage_support() || !version.bind_sampler_support() {
            return Err(InitError::UnsupportedVersion(format!(
                "{}.{}{} lacks immutable texture storage or sampler objects",
                version.major,
                version.minor,
                if version.is_es { " ES" } else { "" }
            )));
        }

        tracing::debug!(
            target: "gltex-glow",
            major = version.major,
            minor = version.minor,
            es = version.is_es,
            "glow texture backend initialized"
        );

        Ok(Self { gl, version })
    }

    pub fn gl(&self) -> &Context {
        &self.gl
    }

    pub fn version(&self) -> GlVersion {
        self.version
    }

    pub fn into_inner(self) -> Context {
        self.gl
    }
}

/// Convert a size or level to the signed type GL takes
#[inline]
fn gl_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// A queried unit count, `None` unless positive
fn unit_count(queried: i32) -> Option<u32> {
    u32::try_from(queried).ok().filter(|&units| units > 0)
}

impl TextureBackend for GlowBackend {
    type Texture = GlTexture;
    type Sampler = GlSampler;

    fn create_texture(&self) -> Result<GlTexture, String> {
        unsafe { self.gl.create_texture() }
    }

    fn delete_texture(&self, texture: GlTexture) {
        unsafe { self.gl.delete_texture(texture) };
    }

    fn create_sampler(&self) -> Result<GlSampler, String> {
        unsafe { self.gl.create_sampler() }
    }

    fn delete_sampler(&self, sampler: GlSampler) {
        unsafe { self.gl.delete_sampler(sampler) };
    }

    fn sampler_parameter_i32(&self, sampler: GlSampler, name: u32, value: i32) {
        unsafe { self.gl.sampler_parameter_i32(sampler, name, value) };
    }

    fn sampler_parameter_f32(&self, sampler: GlSampler, name: u32, value: f32) {
        unsafe { self.gl.sampler_parameter_f32(sampler, name, value) };
    }

    fn set_unpack_flip_y(&self, flip_y: bool) {
        // Only WebGL has a pixel-store flag for this.
        if cfg!(target_arch = "wasm32") {
            unsafe { self.gl.pixel_store_bool(UNPACK_FLIP_Y_WEBGL, flip_y) };
        } else if flip_y {
            tracing::debug!(
                target: "gltex-glow",
                "flip_y requested on a native context; rows are uploaded unflipped"
            );
        }
    }

    fn tex_parameter_i32(&self, target: u32, name: u32, value: i32) {
        unsafe { self.gl.tex_parameter_i32(target, name, value) };
    }

    fn tex_storage_2d(&self, target: u32, levels: u32, internal_format: u32, width: u32, height: u32) {
        unsafe {
            self.gl.tex_storage_2d(
                target,
                gl_int(levels),
                internal_format,
                gl_int(width),
                gl_int(height),
            )
        };
    }

    fn tex_storage_3d(
        &self,
        target: u32,
        levels: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        depth: u32,
    ) {
        unsafe {
            self.gl.tex_storage_3d(
                target,
                gl_int(levels),
                internal_format,
                gl_int(width),
                gl_int(height),
                gl_int(depth),
            )
        };
    }

    fn tex_sub_image_2d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        format: u32,
        pixel_type: u32,
        pixels: &[u8],
    ) {
        unsafe {
            self.gl.tex_sub_image_2d(
                target,
                gl_int(level),
                0,
                0,
                gl_int(width),
                gl_int(height),
                format,
                pixel_type,
                PixelUnpackData::Slice(Some(pixels)),
            )
        };
    }

    fn tex_sub_image_3d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        pixel_type: u32,
        pixels: &[u8],
    ) {
        unsafe {
            self.gl.tex_sub_image_3d(
                target,
                gl_int(level),
                0,
                0,
                0,
                gl_int(width),
                gl_int(height),
                gl_int(depth),
                format,
                pixel_type,
                PixelUnpackData::Slice(Some(pixels)),
            )
        };
    }

    fn compressed_tex_sub_image_2d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        format: u32,
        data: &[u8],
    ) {
        unsafe {
            self.gl.compressed_tex_sub_image_2d(
                target,
                gl_int(level),
                0,
                0,
                gl_int(width),
                gl_int(height),
                format,
                CompressedPixelUnpackData::Slice(data),
            )
        };
    }

    fn compressed_tex_sub_image_3d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        data: &[u8],
    ) {
        unsafe {
            self.gl.compressed_tex_sub_image_3d(
                target,
                gl_int(level),
                0,
                0,
                0,
                gl_int(width),
                gl_int(height),
                gl_int(depth),
                format,
                CompressedPixelUnpackData::Slice(data),
            )
        };
    }

    fn generate_mipmap(&self, target: u32) {
        unsafe { self.gl.generate_mipmap(target) };
    }

    fn active_texture(&self, unit: u32) {
        unsafe { self.gl.active_texture(TEXTURE0 + unit) };
    }

    fn bind_texture(&self, target: u32, texture: Option<GlTexture>) {
        unsafe { self.gl.bind_texture(target, texture) };
    }

    fn bind_sampler(&self, unit: u32, sampler: Option<GlSampler>) {
        unsafe { self.gl.bind_sampler(unit, sampler) };
    }

    fn max_texture_units(&self) -> Option<u32> {
        let units = unsafe { self.gl.get_parameter_i32(MAX_COMBINED_TEXTURE_IMAGE_UNITS) };
        unit_count(units)
    }
}
