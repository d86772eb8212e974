//! Still-image encoders (single frames and image sequences).

use super::{CRF_ONLY, NO_ENCODE_SPEED, NO_PASS};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EncodeSpeedPreset,
    EnablementFlags, OptimizePreset, PassMode, PassRule, QualityPreset,
};

const NO_OPTIMIZE: &[OptimizePreset] = &[OptimizePreset::new("None", "", "", "")];

pub static JPEG: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Jpeg,
    command: CodecCommand {
        codec: "mjpeg",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &["auto", "yuvj420p", "yuvj422p", "yuvj444p"],
    // `-q:v` 2 (best) to 31 (worst)
    quality: &[
        QualityPreset::mode("Auto"),
        QualityPreset::row("Ultra", "2", "", "", "", "", "", ""),
        QualityPreset::row("High", "4", "", "", "", "", "", ""),
        QualityPreset::row("Medium", "8", "", "", "", "", "", ""),
        QualityPreset::row("Low", "16", "", "", "", "", "", ""),
        QualityPreset::row("Sub", "31", "", "", "", "", "", ""),
        QualityPreset::mode("Custom"),
    ],
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        pixel_format: Some("yuvj444p"),
        ..DefaultSelections::IMAGE
    },
    enabled: EnablementFlags::IMAGE,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONLY, PassMode::Crf, &[]),
};

pub static PNG: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Png,
    command: CodecCommand {
        codec: "png",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &[
        "auto", "gray", "gray16be", "monob", "pal8", "rgb24", "rgb48be", "rgba", "rgba64be",
        "ya8", "ya16be",
    ],
    quality: &[QualityPreset::mode("Lossless")],
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        pixel_format: Some("rgb24"),
        pixel_format_lossless: Some("rgb24"),
        ..DefaultSelections::IMAGE
    },
    enabled: EnablementFlags::IMAGE,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(NO_PASS, PassMode::None, &[]),
};

pub static WEBP: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::WebP,
    command: CodecCommand {
        codec: "libwebp",
        parameters: "",
    },
    encode_speed: &[
        EncodeSpeedPreset::new("none", ""),
        EncodeSpeedPreset::new("Fastest", "-compression_level 0"),
        EncodeSpeedPreset::new("Fast", "-compression_level 2"),
        EncodeSpeedPreset::new("Medium", "-compression_level 4"),
        EncodeSpeedPreset::new("Slow", "-compression_level 5"),
        EncodeSpeedPreset::new("Slowest", "-compression_level 6"),
    ],
    pixel_formats: &["auto", "bgra", "yuv420p", "yuva420p"],
    // `-q:v` 0 (worst) to 100 (best)
    quality: &[
        QualityPreset::mode("Auto"),
        QualityPreset::mode("Lossless"),
        QualityPreset::row("Ultra", "100", "", "", "", "", "", ""),
        QualityPreset::row("High", "90", "", "", "", "", "", ""),
        QualityPreset::row("Medium", "75", "", "", "", "", "", ""),
        QualityPreset::row("Low", "50", "", "", "", "", "", ""),
        QualityPreset::row("Sub", "25", "", "", "", "", "", ""),
        QualityPreset::mode("Custom"),
    ],
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        encode_speed: Some("Medium"),
        pixel_format: Some("yuv420p"),
        pixel_format_lossless: Some("bgra"),
        ..DefaultSelections::IMAGE
    },
    enabled: EnablementFlags {
        encode_speed: true,
        ..EnablementFlags::IMAGE
    },
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONLY, PassMode::Crf, &[]),
};
