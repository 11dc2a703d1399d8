//! Glow (OpenGL) backend for gltex
//!
//! Implements [`gltex::TextureBackend`] on top of a [`glow::Context`], so
//! gltex textures can be driven by desktop OpenGL 4.2+, OpenGL ES 3.0+ and
//! WebGL2.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use gltex::{AppState, Texture, TextureInit, TextureOptions, TextureTarget};
//! use gltex_glow::GlowBackend;
//!
//! let gl = unsafe { glow::Context::from_loader_function(|_| std::ptr::null()) };
//! let backend = Rc::new(GlowBackend::new(gl).unwrap());
//! let app_state = AppState::for_backend(&*backend);
//!
//! let mut texture = Texture::new(
//!     backend.clone(),
//!     &app_state,
//!     TextureTarget::Texture2D,
//!     TextureInit::empty(256, 256),
//!     &TextureOptions::default(),
//! )
//! .unwrap();
//! texture.data(&vec![0u8; 256 * 256 * 4]).bind(0);
//! ```

// Re-export glow to make it easier for users to use the correct version.
pub use glow;
use glow::{Context, HasContext};

mod backend;
mod error;
mod versions;

pub use backend::*;
pub use error::*;
pub use versions::*;

pub type GlTexture = <Context as HasContext>::Texture;
pub type GlSampler = <Context as HasContext>::Sampler;
