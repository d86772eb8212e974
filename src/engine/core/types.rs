use serde::{Serialize, Serializer};
use std::fmt;

use super::error::ResolveError;

/// Every codec the front-end can select, in capability-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodecId {
    Vp8,
    Vp9,
    X264,
    H264Amf,
    H264Nvenc,
    H264Qsv,
    X265,
    HevcAmf,
    HevcNvenc,
    HevcQsv,
    Av1,
    Ffv1,
    MagicYuv,
    HuffYuv,
    Theora,
    Mpeg2,
    Mpeg4,
    Jpeg,
    Png,
    WebP,
    Copy,
    None,
}

impl CodecId {
    pub const ALL: [CodecId; 22] = [
        CodecId::Vp8,
        CodecId::Vp9,
        CodecId::X264,
        CodecId::H264Amf,
        CodecId::H264Nvenc,
        CodecId::H264Qsv,
        CodecId::X265,
        CodecId::HevcAmf,
        CodecId::HevcNvenc,
        CodecId::HevcQsv,
        CodecId::Av1,
        CodecId::Ffv1,
        CodecId::MagicYuv,
        CodecId::HuffYuv,
        CodecId::Theora,
        CodecId::Mpeg2,
        CodecId::Mpeg4,
        CodecId::Jpeg,
        CodecId::Png,
        CodecId::WebP,
        CodecId::Copy,
        CodecId::None,
    ];

    /// Label shown in the codec combo box.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vp8 => "VP8",
            Self::Vp9 => "VP9",
            Self::X264 => "x264",
            Self::H264Amf => "H264 AMF",
            Self::H264Nvenc => "H264 NVENC",
            Self::H264Qsv => "H264 QSV",
            Self::X265 => "x265",
            Self::HevcAmf => "HEVC AMF",
            Self::HevcNvenc => "HEVC NVENC",
            Self::HevcQsv => "HEVC QSV",
            Self::Av1 => "AV1",
            Self::Ffv1 => "FFV1",
            Self::MagicYuv => "MagicYUV",
            Self::HuffYuv => "HuffYUV",
            Self::Theora => "Theora",
            Self::Mpeg2 => "MPEG-2",
            Self::Mpeg4 => "MPEG-4",
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::WebP => "WebP",
            Self::Copy => "Copy",
            Self::None => "None",
        }
    }

    /// Parse a combo box label. Surrounding whitespace is ignored, the label
    /// itself must match exactly.
    pub fn parse(label: &str) -> Result<Self, ResolveError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ResolveError::EmptyCodecSelection);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.label() == label)
            .ok_or_else(|| ResolveError::UnknownCodec(label.to_string()))
    }

    /// Copy and None stop the video stream from being re-encoded.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Copy | Self::None)
    }

    /// Still-image encoders. Their quality scale is not a CRF value, so the
    /// CRF field never opens for editing.
    pub fn is_image(self) -> bool {
        matches!(self, Self::Jpeg | Self::Png | Self::WebP)
    }

    /// Whether a named quality preset leaves the VBR toggle usable.
    pub fn supports_preset_vbr(self) -> bool {
        !matches!(
            self,
            Self::Vp8
                | Self::X264
                | Self::H264Amf
                | Self::H264Nvenc
                | Self::H264Qsv
                | Self::Jpeg
                | Self::Av1
                | Self::Ffv1
                | Self::MagicYuv
                | Self::HuffYuv
                | Self::Copy
                | Self::None
        )
    }

    /// H.264/H.265 encoders with editable tune/profile/level.
    pub fn has_optimize_controls(self) -> bool {
        matches!(
            self,
            Self::X264
                | Self::X265
                | Self::H264Amf
                | Self::HevcAmf
                | Self::H264Nvenc
                | Self::HevcNvenc
                | Self::H264Qsv
                | Self::HevcQsv
        )
    }

    /// NVENC exposes lossless as an encoder preset rather than a quality value.
    pub fn has_lossless_preset(self) -> bool {
        matches!(self, Self::H264Nvenc | Self::HevcNvenc)
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CodecId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Quality combo selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityMode {
    Auto,
    Lossless,
    Custom,
    None,
    /// Any preset name from the codec's quality list (Ultra, High, ...).
    Named(String),
}

impl QualityMode {
    pub fn parse(label: &str) -> Self {
        match label {
            "Auto" => Self::Auto,
            "Lossless" => Self::Lossless,
            "Custom" => Self::Custom,
            "None" => Self::None,
            other => Self::Named(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Auto => "Auto",
            Self::Lossless => "Lossless",
            Self::Custom => "Custom",
            Self::None => "None",
            Self::Named(name) => name,
        }
    }

    /// Name of the preset whose bitrates get displayed, if any.
    pub fn preset_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) if !name.trim().is_empty() => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for QualityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encoding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassMode {
    Crf,
    OnePass,
    TwoPass,
    Auto,
    None,
}

impl PassMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Crf => "CRF",
            Self::OnePass => "1 Pass",
            Self::TwoPass => "2 Pass",
            Self::Auto => "auto",
            Self::None => "none",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "CRF" => Some(Self::Crf),
            "1 Pass" => Some(Self::OnePass),
            "2 Pass" => Some(Self::TwoPass),
            "auto" => Some(Self::Auto),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for PassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PassMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Output media type selected in the format panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Video,
    Image,
    Sequence,
    Audio,
}

impl MediaType {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Video" => Some(Self::Video),
            "Image" => Some(Self::Image),
            "Sequence" => Some(Self::Sequence),
            "Audio" => Some(Self::Audio),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Image => "Image",
            Self::Sequence => "Sequence",
            Self::Audio => "Audio",
        }
    }

    /// Audio output has no video stream to describe.
    pub fn has_pixel_format(self) -> bool {
        !matches!(self, Self::Audio)
    }
}
