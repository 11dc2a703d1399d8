//! Graphics backend abstraction consumed by [`Texture`](crate::Texture)

use std::fmt::Debug;

/// The slice of a GL-style graphics context that textures need.
///
/// Methods mirror the OpenGL ES 3.0 / WebGL2 entry points one to one; enum
/// arguments are raw GL values (see [`crate::constants`]). Sizes and levels
/// are unsigned here and converted by the implementation. Implementations
/// are expected to run on the thread that owns the context.
pub trait TextureBackend {
    /// Texture object handle
    type Texture: Copy + Eq + Debug;
    /// Sampler object handle
    type Sampler: Copy + Eq + Debug;

    fn create_texture(&self) -> Result<Self::Texture, String>;
    fn delete_texture(&self, texture: Self::Texture);

    fn create_sampler(&self) -> Result<Self::Sampler, String>;
    fn delete_sampler(&self, sampler: Self::Sampler);
    fn sampler_parameter_i32(&self, sampler: Self::Sampler, name: u32, value: i32);
    fn sampler_parameter_f32(&self, sampler: Self::Sampler, name: u32, value: f32);

    /// Whether row order is flipped when unpacking subsequent uploads
    fn set_unpack_flip_y(&self, flip_y: bool);
    fn tex_parameter_i32(&self, target: u32, name: u32, value: i32);

    fn tex_storage_2d(&self, target: u32, levels: u32, internal_format: u32, width: u32, height: u32);
    fn tex_storage_3d(
        &self,
        target: u32,
        levels: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        depth: u32,
    );

    fn tex_sub_image_2d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        format: u32,
        pixel_type: u32,
        pixels: &[u8],
    );
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
    );
    fn compressed_tex_sub_image_2d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        format: u32,
        data: &[u8],
    );
    fn compressed_tex_sub_image_3d(
        &self,
        target: u32,
        level: u32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        data: &[u8],
    );

    fn generate_mipmap(&self, target: u32);

    /// Make texture unit `unit` (zero based, not `TEXTURE0 + unit`) active
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    fn bind_sampler(&self, unit: u32, sampler: Option<Self::Sampler>);

    /// Number of texture units available to all shader stages combined,
    /// `None` when the context does not report a usable count
    fn max_texture_units(&self) -> Option<u32>;
}
