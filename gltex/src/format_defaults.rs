//! Default internal formats for `(pixel type, pixel format)` pairs

use crate::constants::*;

/// Look up the sized internal format GL would pick for uploads of `format`
/// data stored as `pixel_type`.
///
/// Returns `None` for combinations that have no canonical sized format
/// (including every compressed format, whose enum is already sized).
pub fn default_internal_format(pixel_type: u32, format: u32) -> Option<u32> {
    let internal = match (pixel_type, format) {
        (UNSIGNED_BYTE, RGBA) => RGBA8,
        (UNSIGNED_BYTE, RGB) => RGB8,
        (UNSIGNED_BYTE, RG) => RG8,
        (UNSIGNED_BYTE, RED) => R8,
        (UNSIGNED_BYTE, RGBA_INTEGER) => RGBA8UI,
        (UNSIGNED_BYTE, RGB_INTEGER) => RGB8UI,
        (UNSIGNED_BYTE, RG_INTEGER) => RG8UI,
        (UNSIGNED_BYTE, RED_INTEGER) => R8UI,

        (BYTE, RGBA) => RGBA8_SNORM,
        (BYTE, RGB) => RGB8_SNORM,
        (BYTE, RG) => RG8_SNORM,
        (BYTE, RED) => R8_SNORM,
        (BYTE, RGBA_INTEGER) => RGBA8I,
        (BYTE, RGB_INTEGER) => RGB8I,
        (BYTE, RG_INTEGER) => RG8I,
        (BYTE, RED_INTEGER) => R8I,

        (UNSIGNED_SHORT, DEPTH_COMPONENT) => DEPTH_COMPONENT16,
        (UNSIGNED_SHORT, RGBA_INTEGER) => RGBA16UI,
        (UNSIGNED_SHORT, RGB_INTEGER) => RGB16UI,
        (UNSIGNED_SHORT, RG_INTEGER) => RG16UI,
        (UNSIGNED_SHORT, RED_INTEGER) => R16UI,

        (SHORT, RGBA_INTEGER) => RGBA16I,
        (SHORT, RGB_INTEGER) => RGB16I,
        (SHORT, RG_INTEGER) => RG16I,
        (SHORT, RED_INTEGER) => R16I,

        (UNSIGNED_INT, DEPTH_COMPONENT) => DEPTH_COMPONENT24,
        (UNSIGNED_INT, RGBA_INTEGER) => RGBA32UI,
        (UNSIGNED_INT, RGB_INTEGER) => RGB32UI,
        (UNSIGNED_INT, RG_INTEGER) => RG32UI,
        (UNSIGNED_INT, RED_INTEGER) => R32UI,

        (INT, RGBA_INTEGER) => RGBA32I,
        (INT, RGB_INTEGER) => RGB32I,
        (INT, RG_INTEGER) => RG32I,
        (INT, RED_INTEGER) => R32I,

        (HALF_FLOAT, RGBA) => RGBA16F,
        (HALF_FLOAT, RGB) => RGB16F,
        (HALF_FLOAT, RG) => RG16F,
        (HALF_FLOAT, RED) => R16F,

        (FLOAT, RGBA) => RGBA32F,
        (FLOAT, RGB) => RGB32F,
        (FLOAT, RG) => RG32F,
        (FLOAT, RED) => R32F,
        (FLOAT, DEPTH_COMPONENT) => DEPTH_COMPONENT32F,

        (UNSIGNED_SHORT_4_4_4_4, RGBA) => RGBA4,
        (UNSIGNED_SHORT_5_5_5_1, RGBA) => RGB5_A1,
        (UNSIGNED_SHORT_5_6_5, RGB) => RGB565,
        (UNSIGNED_INT_2_10_10_10_REV, RGBA) => RGB10_A2,
        (UNSIGNED_INT_2_10_10_10_REV, RGBA_INTEGER) => RGB10_A2UI,
        (UNSIGNED_INT_10F_11F_11F_REV, RGB) => R11F_G11F_B10F,
        (UNSIGNED_INT_5_9_9_9_REV, RGB) => RGB9_E5,

        (UNSIGNED_INT_24_8, DEPTH_STENCIL) => DEPTH24_STENCIL8,
        (FLOAT_32_UNSIGNED_INT_24_8_REV, DEPTH_STENCIL) => DEPTH32F_STENCIL8,

        _ => return None,
    };

    Some(internal)
}
