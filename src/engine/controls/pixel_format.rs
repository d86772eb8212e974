use tracing::debug;

use crate::engine::codecs;
use crate::engine::core::{CodecId, MediaType, QualityMode};

use super::selection::pixel_format_default;

/// Pixel format to select after the quality or media type changes.
///
/// `None` leaves the current selection alone: audio output, an unrecognised
/// media type, or a codec without a default for this quality.
pub fn resolve_pixel_format(
    media_type: Option<MediaType>,
    codec: CodecId,
    quality: &QualityMode,
) -> Option<&'static str> {
    let media_type = media_type.filter(|m| m.has_pixel_format())?;
    let format = pixel_format_default(codecs::descriptor(codec), quality).filter(|f| !f.is_empty());
    if format.is_none() {
        debug!(codec = %codec, media = media_type.label(), quality = %quality, "no default pixel format");
    }
    format
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_is_a_no_op() {
        assert_eq!(
            resolve_pixel_format(Some(MediaType::Audio), CodecId::X264, &QualityMode::Auto),
            None
        );
        assert_eq!(resolve_pixel_format(None, CodecId::X264, &QualityMode::Auto), None);
    }

    #[test]
    fn test_lossless_branch() {
        for media in [MediaType::Video, MediaType::Image, MediaType::Sequence] {
            assert_eq!(
                resolve_pixel_format(Some(media), CodecId::WebP, &QualityMode::Lossless),
                Some("bgra")
            );
            assert_eq!(
                resolve_pixel_format(Some(media), CodecId::WebP, &QualityMode::Custom),
                Some("yuv420p")
            );
        }
    }

    #[test]
    fn test_missing_default_is_skipped() {
        // VP8 has no lossless pixel format
        assert_eq!(
            resolve_pixel_format(Some(MediaType::Video), CodecId::Vp8, &QualityMode::Lossless),
            None
        );
        assert_eq!(
            resolve_pixel_format(Some(MediaType::Video), CodecId::Copy, &QualityMode::Auto),
            None
        );
    }
}
