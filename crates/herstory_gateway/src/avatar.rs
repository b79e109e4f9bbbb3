//! Persona avatar images.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, Rgb, RgbImage};

use crate::error::{GatewayError, GatewayResult};

pub const PLACEHOLDER_WIDTH: u32 = 256;
pub const PLACEHOLDER_HEIGHT: u32 = 512;
pub const PLACEHOLDER_COLOR: [u8; 3] = [200, 200, 200];

/// Where an avatar came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSource {
    /// Decoded from the image model's response
    Generated,
    /// Fixed gray fill used when generation failed
    Placeholder,
}

/// A rendered avatar for one persona.
#[derive(Clone)]
pub struct Avatar {
    image: DynamicImage,
    source: AvatarSource,
}

impl Avatar {
    pub fn generated(image: DynamicImage) -> Self {
        Self {
            image,
            source: AvatarSource::Generated,
        }
    }

    /// The 256x512 gray fallback image. Always identical.
    pub fn placeholder() -> Self {
        let buffer = RgbImage::from_pixel(
            PLACEHOLDER_WIDTH,
            PLACEHOLDER_HEIGHT,
            Rgb(PLACEHOLDER_COLOR),
        );
        Self {
            image: DynamicImage::ImageRgb8(buffer),
            source: AvatarSource::Placeholder,
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn source(&self) -> AvatarSource {
        self.source
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == AvatarSource::Placeholder
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Write the avatar as a PNG file.
    pub fn save_png(&self, path: &Path) -> GatewayResult<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(io) => GatewayError::Io(io),
                other => GatewayError::Encode(other.to_string()),
            })
    }
}

impl std::fmt::Debug for Avatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("Avatar")
            .field("source", &self.source)
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}
