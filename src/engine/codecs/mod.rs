//! Codec capability table.
//!
//! One `static` descriptor per [`CodecId`], grouped by codec family. Lookup is a
//! plain `match`, so adding a codec without a descriptor fails to compile.

mod av1;
mod h264;
mod hevc;
mod image;
mod intermediate;
mod legacy;
mod passthrough;
mod vpx;

use crate::engine::core::{CapabilityDescriptor, CodecId, EncodeSpeedPreset, PassMode, ResolveError};

// Shared by the families below.

pub(crate) const CRF_ONE_TWO: &[PassMode] = &[PassMode::Crf, PassMode::OnePass, PassMode::TwoPass];
pub(crate) const CRF_ONLY: &[PassMode] = &[PassMode::Crf];
pub(crate) const NO_PASS: &[PassMode] = &[PassMode::None];

/// Placeholder list for encoders without speed presets.
pub(crate) const NO_ENCODE_SPEED: &[EncodeSpeedPreset] = &[EncodeSpeedPreset::new("none", "")];

pub(crate) const X26X_ENCODE_SPEED: &[EncodeSpeedPreset] = &[
    EncodeSpeedPreset::new("none", ""),
    EncodeSpeedPreset::new("Placebo", "-preset placebo"),
    EncodeSpeedPreset::new("Very Slow", "-preset veryslow"),
    EncodeSpeedPreset::new("Slower", "-preset slower"),
    EncodeSpeedPreset::new("Slow", "-preset slow"),
    EncodeSpeedPreset::new("Medium", "-preset medium"),
    EncodeSpeedPreset::new("Fast", "-preset fast"),
    EncodeSpeedPreset::new("Faster", "-preset faster"),
    EncodeSpeedPreset::new("Very Fast", "-preset veryfast"),
    EncodeSpeedPreset::new("Super Fast", "-preset superfast"),
    EncodeSpeedPreset::new("Ultra Fast", "-preset ultrafast"),
];

pub(crate) const NVENC_ENCODE_SPEED: &[EncodeSpeedPreset] = &[
    EncodeSpeedPreset::new("Default", "-preset default"),
    EncodeSpeedPreset::new("Slow", "-preset slow"),
    EncodeSpeedPreset::new("Medium", "-preset medium"),
    EncodeSpeedPreset::new("Fast", "-preset fast"),
    EncodeSpeedPreset::new("HP", "-preset hp"),
    EncodeSpeedPreset::new("HQ", "-preset hq"),
    EncodeSpeedPreset::new("BD", "-preset bd"),
    EncodeSpeedPreset::new("Low Latency", "-preset ll"),
    EncodeSpeedPreset::new("Low Latency HQ", "-preset llhq"),
    EncodeSpeedPreset::new("Low Latency HP", "-preset llhp"),
    EncodeSpeedPreset::new("Lossless", "-preset lossless"),
    EncodeSpeedPreset::new("Lossless HP", "-preset losslesshp"),
];

pub(crate) const NVENC_PIXEL_FORMATS: &[&str] = &[
    "auto",
    "yuv420p",
    "nv12",
    "p010le",
    "yuv444p",
    "p016le",
    "yuv444p16le",
    "bgr0",
    "rgb0",
    "cuda",
    "d3d11",
];

pub(crate) const QSV_ENCODE_SPEED: &[EncodeSpeedPreset] = &[
    EncodeSpeedPreset::new("Very Slow", "-preset veryslow"),
    EncodeSpeedPreset::new("Slower", "-preset slower"),
    EncodeSpeedPreset::new("Slow", "-preset slow"),
    EncodeSpeedPreset::new("Medium", "-preset medium"),
    EncodeSpeedPreset::new("Fast", "-preset fast"),
    EncodeSpeedPreset::new("Faster", "-preset faster"),
    EncodeSpeedPreset::new("Very Fast", "-preset veryfast"),
];

/// Descriptor for a codec id.
pub fn descriptor(id: CodecId) -> &'static CapabilityDescriptor {
    match id {
        CodecId::Vp8 => &vpx::VP8,
        CodecId::Vp9 => &vpx::VP9,
        CodecId::X264 => &h264::X264,
        CodecId::H264Amf => &h264::H264_AMF,
        CodecId::H264Nvenc => &h264::H264_NVENC,
        CodecId::H264Qsv => &h264::H264_QSV,
        CodecId::X265 => &hevc::X265,
        CodecId::HevcAmf => &hevc::HEVC_AMF,
        CodecId::HevcNvenc => &hevc::HEVC_NVENC,
        CodecId::HevcQsv => &hevc::HEVC_QSV,
        CodecId::Av1 => &av1::AV1,
        CodecId::Ffv1 => &intermediate::FFV1,
        CodecId::MagicYuv => &intermediate::MAGICYUV,
        CodecId::HuffYuv => &intermediate::HUFFYUV,
        CodecId::Theora => &legacy::THEORA,
        CodecId::Mpeg2 => &legacy::MPEG2,
        CodecId::Mpeg4 => &legacy::MPEG4,
        CodecId::Jpeg => &image::JPEG,
        CodecId::Png => &image::PNG,
        CodecId::WebP => &image::WEBP,
        CodecId::Copy => &passthrough::COPY,
        CodecId::None => &passthrough::NONE,
    }
}

/// Descriptor for a codec combo label.
pub fn lookup(label: &str) -> Result<&'static CapabilityDescriptor, ResolveError> {
    CodecId::parse(label).map(descriptor)
}

/// Every descriptor in table order.
pub fn all() -> impl Iterator<Item = &'static CapabilityDescriptor> {
    CodecId::ALL.into_iter().map(descriptor)
}
