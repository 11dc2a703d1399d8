//! OpenGL version detection and feature support

use glow::{Context, HasContext};

/// OpenGL version information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
    pub is_es: bool,
}

impl GlVersion {
    /// Read the OpenGL version from the current context
    pub fn read(gl: &Context) -> Self {
        let version_string = unsafe { gl.get_parameter_string(glow::VERSION) };
        Self::parse(&version_string)
    }

    /// Parse OpenGL version from version string
    pub fn parse(version_string: &str) -> Self {
        // Examples:
        // "4.6.0 NVIDIA 460.89"
        // "OpenGL ES 3.0 (OpenGL ES GLSL ES 3.00)"
        // "WebGL 2.0 (OpenGL ES 3.0 Chromium)"

        let is_es = version_string.contains("OpenGL ES") || version_string.contains("WebGL");

        let (major, minor) = if is_es {
            if version_string.contains("WebGL 2.0") {
                (3, 0)
            } else if version_string.contains("WebGL 1.0") {
                (2, 0)
            } else {
                Self::parse_version_numbers(version_string).unwrap_or((2, 0))
            }
        } else {
            Self::parse_version_numbers(version_string).unwrap_or((2, 1))
        };

        Self {
            major,
            minor,
            is_es,
        }
    }

    fn parse_version_numbers(version_string: &str) -> Option<(u32, u32)> {
        // Look for pattern like "3.2" or "4.6.0"
        for word in version_string.split_whitespace() {
            if let Some((major_str, rest)) = word.split_once('.') {
                if let Ok(major) = major_str.parse::<u32>() {
                    let minor_str = rest.split('.').next().unwrap_or(rest);
                    if let Ok(minor) = minor_str.parse::<u32>() {
                        return Some((major, minor));
                    }
                }
            }
        }
        None
    }

    fn at_least(self, major: u32, minor: u32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// Check if this version supports glTexStorage2D / glTexStorage3D
    pub fn tex_storage_support(self) -> bool {
        if self.is_es {
            self.at_least(3, 0) // OpenGL ES 3.0+ / WebGL2
        } else {
            self.at_least(4, 2) // OpenGL 4.2+
        }
    }

    /// Check if this version supports sampler objects
    pub fn bind_sampler_support(self) -> bool {
        if self.is_es {
            self.at_least(3, 0) // OpenGL ES 3.0+
        } else {
            self.at_least(3, 3) // OpenGL 3.3+
        }
    }
}
