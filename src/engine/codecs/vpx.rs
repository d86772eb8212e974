//! libvpx: VP8 and VP9.
//!
//! Both encoders combine `-crf` with a target bitrate, so every preset carries
//! a CRF bitrate next to the CBR/VBR values.

use super::CRF_ONE_TWO;
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EncodeSpeedPreset,
    EnablementFlags, OptimizePreset, PassMode, PassRule, QualityPreset,
};

const VPX_ENCODE_SPEED: &[EncodeSpeedPreset] = &[
    EncodeSpeedPreset::new("none", ""),
    EncodeSpeedPreset::new("Placebo", "-quality best -cpu-used 0"),
    EncodeSpeedPreset::new("Very Slow", "-quality good -cpu-used 0"),
    EncodeSpeedPreset::new("Slower", "-quality good -cpu-used 1"),
    EncodeSpeedPreset::new("Slow", "-quality good -cpu-used 2"),
    EncodeSpeedPreset::new("Medium", "-quality good -cpu-used 3"),
    EncodeSpeedPreset::new("Fast", "-quality good -cpu-used 4"),
    EncodeSpeedPreset::new("Faster", "-quality realtime -cpu-used 5"),
    EncodeSpeedPreset::new("Fastest", "-quality realtime -cpu-used 8"),
];

const VPX_OPTIMIZE: &[OptimizePreset] = &[OptimizePreset::new("None", "", "", "")];

pub static VP8: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Vp8,
    command: CodecCommand {
        codec: "libvpx",
        parameters: "",
    },
    encode_speed: VPX_ENCODE_SPEED,
    pixel_formats: &["auto", "yuv420p", "yuva420p"],
    quality: &[
        QualityPreset::mode("Auto"),
        QualityPreset::row("Ultra", "10", "5000K", "5000K", "5000K", "", "", ""),
        QualityPreset::row("High", "12", "2500K", "2500K", "2500K", "", "", ""),
        QualityPreset::row("Medium", "16", "1300K", "1300K", "1300K", "", "", ""),
        QualityPreset::row("Low", "20", "600K", "600K", "600K", "", "", ""),
        QualityPreset::row("Sub", "28", "250K", "250K", "250K", "", "", ""),
        QualityPreset::mode("Custom"),
    ],
    optimize: VPX_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        encode_speed: Some("Medium"),
        ..DefaultSelections::VIDEO
    },
    enabled: EnablementFlags {
        optimize: false,
        ..EnablementFlags::ALL
    },
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, &[]),
};

pub static VP9: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Vp9,
    command: CodecCommand {
        codec: "libvpx-vp9",
        parameters: "-row-mt 1",
    },
    encode_speed: VPX_ENCODE_SPEED,
    pixel_formats: &[
        "auto",
        "gbrp",
        "gbrp10le",
        "gbrp12le",
        "yuv420p",
        "yuv420p10le",
        "yuv420p12le",
        "yuv422p",
        "yuv422p10le",
        "yuv422p12le",
        "yuv440p",
        "yuv440p10le",
        "yuv440p12le",
        "yuv444p",
        "yuv444p10le",
        "yuv444p12le",
        "yuva420p",
    ],
    quality: &[
        QualityPreset::mode("Auto"),
        QualityPreset::row("Lossless", "", "", "", "", "", "", ""),
        QualityPreset::row("Ultra", "10", "3000K", "3000K", "3500K", "2400K", "4000K", "6000K"),
        QualityPreset::row("High", "16", "1800K", "1800K", "2200K", "1200K", "2600K", "3600K"),
        QualityPreset::row("Medium", "32", "900K", "900K", "1200K", "600K", "1400K", "1800K"),
        QualityPreset::row("Low", "38", "400K", "400K", "600K", "250K", "700K", "800K"),
        QualityPreset::row("Sub", "48", "150K", "150K", "250K", "80K", "300K", "300K"),
        QualityPreset::mode("Custom"),
    ],
    optimize: VPX_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections {
        encode_speed: Some("Medium"),
        pixel_format_lossless: Some("yuv444p"),
        ..DefaultSelections::VIDEO
    },
    enabled: EnablementFlags {
        optimize: false,
        ..EnablementFlags::ALL
    },
    optimize_expanded: false,
    vbr_checked: true,
    pass_rule: PassRule::new(
        CRF_ONE_TWO,
        PassMode::Crf,
        &[PassMode::OnePass, PassMode::TwoPass],
    ),
};
