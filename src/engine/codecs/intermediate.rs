//! Lossless intermediate codecs used for editing and archival.

use super::{NO_ENCODE_SPEED, NO_PASS};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EnablementFlags,
    OptimizePreset, PassMode, PassRule, QualityPreset,
};

const LOSSLESS_ONLY: &[QualityPreset] = &[QualityPreset::mode("Lossless")];

const NO_OPTIMIZE: &[OptimizePreset] = &[OptimizePreset::new("None", "", "", "")];

const INTERMEDIATE_ENABLED: EnablementFlags = EnablementFlags {
    encode_speed: false,
    vbr: false,
    optimize: false,
    ..EnablementFlags::ALL
};

pub static FFV1: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Ffv1,
    command: CodecCommand {
        codec: "ffv1",
        parameters: "-level 3",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &[
        "auto",
        "bgr0",
        "bgra",
        "gbrp",
        "gbrp10le",
        "gbrp12le",
        "gbrp16le",
        "gray",
        "gray10le",
        "gray16le",
        "yuv420p",
        "yuv420p10le",
        "yuv422p",
        "yuv422p10le",
        "yuv444p",
        "yuv444p10le",
        "yuv444p16le",
        "yuva444p",
    ],
    quality: LOSSLESS_ONLY,
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        pixel_format_lossless: Some("yuv444p"),
        ..DefaultSelections::VIDEO
    },
    enabled: INTERMEDIATE_ENABLED,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(
        &[PassMode::OnePass, PassMode::TwoPass],
        PassMode::OnePass,
        &[],
    ),
};

pub static MAGICYUV: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::MagicYuv,
    command: CodecCommand {
        codec: "magicyuv",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &[
        "auto", "gbrp", "gbrap", "gray", "yuv420p", "yuv422p", "yuv444p", "yuva444p",
    ],
    quality: LOSSLESS_ONLY,
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        pixel_format_lossless: Some("yuv444p"),
        ..DefaultSelections::VIDEO
    },
    enabled: INTERMEDIATE_ENABLED,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(NO_PASS, PassMode::None, &[]),
};

pub static HUFFYUV: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::HuffYuv,
    command: CodecCommand {
        codec: "huffyuv",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &["auto", "rgb24", "bgra", "yuv422p"],
    quality: LOSSLESS_ONLY,
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        pixel_format: Some("yuv422p"),
        pixel_format_lossless: Some("yuv422p"),
        ..DefaultSelections::VIDEO
    },
    enabled: INTERMEDIATE_ENABLED,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(NO_PASS, PassMode::None, &[]),
};
