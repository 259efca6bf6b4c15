use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageResult};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::entities::{EncodedPayload, SourceImage},
};

pub const FALLBACK_FORMAT: ImageFormat = ImageFormat::Jpeg;

/// Re-encodes the image in its original format, or JPEG when the original
/// format is unknown or cannot be written. No resizing or quality tuning.
pub fn normalize(image: &SourceImage) -> Result<EncodedPayload, CoreError> {
    encode_with_fallback(image.decoded(), image.format())
}

pub(crate) fn encode_with_fallback(
    image: &DynamicImage,
    format: Option<ImageFormat>,
) -> Result<EncodedPayload, CoreError> {
    if let Some(format) = format.filter(|f| f.writing_enabled()) {
        match encode(image, format) {
            Ok(bytes) => return Ok(EncodedPayload::new(&bytes, format)),
            Err(e) => debug!(?format, error = %e, "re-encoding failed, using fallback format"),
        }
    }

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let bytes = encode(&rgb, FALLBACK_FORMAT).map_err(|e| CoreError::Encoding(e.to_string()))?;

    Ok(EncodedPayload::new(&bytes, FALLBACK_FORMAT))
}

fn encode(image: &DynamicImage, format: ImageFormat) -> ImageResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}
