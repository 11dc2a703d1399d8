//! GPU textures with a texture-unit binding cache
//!
//! This crate wraps a GL-style texture resource: immutable storage
//! allocation, pixel and mip uploads, sampler state, and tracking of which
//! texture unit holds the resource.
//!
//! # Features
//!
//! - **Binding cache**: [`AppState`] records which [`Texture`] occupies each
//!   unit, so repeated binds are free and evicted textures know they are
//!   unbound
//! - **Immutable storage**: 2D, 2D array, 3D and cube map targets with a full
//!   mip chain when the min filter needs one
//! - **Four upload paths**: raw or compressed, planar or volumetric
//! - **Backend agnostic**: everything goes through [`TextureBackend`]; see
//!   the `gltex-glow` crate for the OpenGL / WebGL2 implementation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use gltex::{AppState, Texture, TextureInit, TextureOptions, TextureTarget};
//!
//! let gl = Rc::new(backend);
//! let app_state = AppState::for_backend(&*gl);
//!
//! let mut texture = Texture::new(
//!     gl.clone(),
//!     &app_state,
//!     TextureTarget::Texture2D,
//!     TextureInit::image(gltex::InitialImage::new(64, 64, &pixels)),
//!     &TextureOptions::default(),
//! )?;
//!
//! // Before drawing:
//! texture.bind(0);
//! ```

mod app_state;
mod backend;
pub mod constants;
mod error;
mod format_defaults;
#[cfg(feature = "logging")]
pub mod logging;
mod options;
mod texture;
mod upload;

pub use app_state::*;
pub use backend::*;
pub use error::*;
pub use format_defaults::*;
pub use options::*;
pub use texture::*;
pub use upload::*;
