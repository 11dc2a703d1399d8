#![allow(dead_code)]

//! Recording backend for driving `Texture` without a GL context

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gltex::TextureBackend;

/// One backend call, with payloads reduced to their byte length
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateTexture(u32),
    DeleteTexture(u32),
    CreateSampler(u32),
    DeleteSampler(u32),
    SamplerParameterI32 { sampler: u32, name: u32, value: i32 },
    SamplerParameterF32 { sampler: u32, name: u32, value: f32 },
    UnpackFlipY(bool),
    TexParameterI32 { target: u32, name: u32, value: i32 },
    TexStorage2D { target: u32, levels: u32, internal_format: u32, width: u32, height: u32 },
    TexStorage3D { target: u32, levels: u32, internal_format: u32, width: u32, height: u32, depth: u32 },
    TexSubImage2D { target: u32, level: u32, width: u32, height: u32, format: u32, pixel_type: u32, len: usize },
    TexSubImage3D { target: u32, level: u32, width: u32, height: u32, depth: u32, format: u32, pixel_type: u32, len: usize },
    CompressedTexSubImage2D { target: u32, level: u32, width: u32, height: u32, format: u32, len: usize },
    CompressedTexSubImage3D { target: u32, level: u32, width: u32, height: u32, depth: u32, format: u32, len: usize },
    GenerateMipmap(u32),
    ActiveTexture(u32),
    BindTexture { target: u32, texture: Option<u32> },
    BindSampler { unit: u32, sampler: Option<u32> },
}

pub struct RecordingBackend {
    calls: RefCell<Vec<Call>>,
    next_handle: Cell<u32>,
    fail_texture_creation: Cell<bool>,
    units: u32,
}

impl RecordingBackend {
    pub fn new() -> Rc<Self> {
        Self::with_units(16)
    }

    pub fn with_units(units: u32) -> Rc<Self> {
        Rc::new(Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(0),
            fail_texture_creation: Cell::new(false),
            units,
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Return and forget every call recorded so far
    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn fail_texture_creation(&self, fail: bool) {
        self.fail_texture_creation.set(fail);
    }

    fn next_handle(&self) -> u32 {
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        handle
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl TextureBackend for RecordingBackend {
    type Texture = u32;
    type Sampler = u32;

    fn create_texture(&self) -> Result<u32, String> {
        if self.fail_texture_creation.get() {
            return Err("out of texture names".to_string());
        }
        let handle = self.next_handle();
        self.record(Call::CreateTexture(handle));
        Ok(handle)
    }

    fn delete_texture(&self, texture: u32) {
        self.record(Call::DeleteTexture(texture));
    }

    fn create_sampler(&self) -> Result<u32, String> {
        let handle = self.next_handle();
        self.record(Call::CreateSampler(handle));
        Ok(handle)
    }

    fn delete_sampler(&self, sampler: u32) {
        self.record(Call::DeleteSampler(sampler));
    }

    fn sampler_parameter_i32(&self, sampler: u32, name: u32, value: i32) {
        self.record(Call::SamplerParameterI32 { sampler, name, value });
    }

    fn sampler_parameter_f32(&self, sampler: u32, name: u32, value: f32) {
        self.record(Call::SamplerParameterF32 { sampler, name, value });
    }

    fn set_unpack_flip_y(&self, flip_y: bool) {
        self.record(Call::UnpackFlipY(flip_y));
    }

    fn tex_parameter_i32(&self, target: u32, name: u32, value: i32) {
        self.record(Call::TexParameterI32 { target, name, value });
    }

    fn tex_storage_2d(&self, target: u32, levels: u32, internal_format: u32, width: u32, height: u32) {
        self.record(Call::TexStorage2D {
            target,
            levels,
            internal_format,
            width,
            height,
        });
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
        self.record(Call::TexStorage3D {
            target,
            levels,
            internal_format,
            width,
            height,
            depth,
        });
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
        self.record(Call::TexSubImage2D {
            target,
            level,
            width,
            height,
            format,
            pixel_type,
            len: pixels.len(),
        });
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
        self.record(Call::TexSubImage3D {
            target,
            level,
            width,
            height,
            depth,
            format,
            pixel_type,
            len: pixels.len(),
        });
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
        self.record(Call::CompressedTexSubImage2D {
            target,
            level,
            width,
            height,
            format,
            len: data.len(),
        });
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
        self.record(Call::CompressedTexSubImage3D {
            target,
            level,
            width,
            height,
            depth,
            format,
            len: data.len(),
        });
    }

    fn generate_mipmap(&self, target: u32) {
        self.record(Call::GenerateMipmap(target));
    }

    fn active_texture(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.record(Call::BindTexture { target, texture });
    }

    fn bind_sampler(&self, unit: u32, sampler: Option<u32>) {
        self.record(Call::BindSampler { unit, sampler });
    }

    fn max_texture_units(&self) -> Option<u32> {
        (self.units > 0).then_some(self.units)
    }
}
