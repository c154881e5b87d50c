//! Core types for document synthesis.

use thiserror::Error;

/// Error types for building the output document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The input list was empty; nothing is written.
    #[error("No images to convert")]
    EmptyInput,

    /// One image's decoded dimensions were unavailable. That image is
    /// excluded from the document; the remaining images proceed.
    #[error("Image {index}: {reason}")]
    ImageMetadata { index: usize, reason: String },
}

/// One input page: verbatim JPEG bytes plus the image's true decoded pixel
/// dimensions, as supplied by the external decode step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// The JPEG file bytes, embedded into the document unmodified.
    pub jpeg: Vec<u8>,
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
}

impl PageImage {
    pub fn new(jpeg: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            jpeg,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(BuildError::EmptyInput.to_string(), "No images to convert");
        let err = BuildError::ImageMetadata {
            index: 2,
            reason: "unreadable header".to_string(),
        };
        assert_eq!(err.to_string(), "Image 2: unreadable header");
    }

    #[test]
    fn test_page_image_holds_bytes_verbatim() {
        let page = PageImage::new(vec![0xFF, 0xD8, 0xFF, 0xD9], 640, 480);
        assert_eq!(page.jpeg, vec![0xFF, 0xD8, 0xFF, 0xD9]);
        assert_eq!((page.width, page.height), (640, 480));
    }
}
