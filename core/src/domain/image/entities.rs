use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// A user supplied photo, decoded once so that undecodable input is rejected
/// before anything is sent upstream.
#[derive(Debug, Clone)]
pub struct SourceImage {
    format: Option<ImageFormat>,
    decoded: DynamicImage,
    size_bytes: usize,
}

impl SourceImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.is_empty() {
            return Err(CoreError::InvalidImage("image is empty".to_string()));
        }

        if bytes.len() > MAX_IMAGE_SIZE {
            return Err(CoreError::ImageTooLarge {
                size: bytes.len(),
                max: MAX_IMAGE_SIZE,
            });
        }

        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?;
        let format = reader.format();

        let decoded = reader
            .decode()
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?;

        Ok(Self {
            format,
            decoded,
            size_bytes: bytes.len(),
        })
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn decoded(&self) -> &DynamicImage {
        &self.decoded
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.decoded.width(), self.decoded.height())
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}

/// Base64 text of an encoded image together with the content type of the
/// format that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    content_type: String,
    data: String,
}

impl EncodedPayload {
    pub fn new(bytes: &[u8], format: ImageFormat) -> Self {
        Self {
            content_type: format.to_mime_type().to_string(),
            data: general_purpose::STANDARD.encode(bytes),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn as_base64(&self) -> &str {
        &self.data
    }

    pub fn data_uri(&self, mime_type: &str) -> String {
        format!("data:{};base64,{}", mime_type, self.data)
    }
}
