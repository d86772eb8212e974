//! Older lossy codecs. Their constant-quality scale is `-q:v`, shown in the
//! CRF field.

use super::{CRF_ONE_TWO, NO_ENCODE_SPEED};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EnablementFlags,
    OptimizePreset, PassMode, PassRule, QualityPreset,
};

const NO_OPTIMIZE: &[OptimizePreset] = &[OptimizePreset::new("None", "", "", "")];

const LEGACY_ENABLED: EnablementFlags = EnablementFlags {
    encode_speed: false,
    optimize: false,
    ..EnablementFlags::ALL
};

pub static THEORA: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Theora,
    command: CodecCommand {
        codec: "libtheora",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &["auto", "yuv420p", "yuv422p", "yuv444p"],
    quality: &[
        QualityPreset::mode("Auto"),
        QualityPreset::row("Ultra", "10", "", "5000K", "5000K", "", "", ""),
        QualityPreset::row("High", "8", "", "2500K", "2500K", "", "", ""),
        QualityPreset::row("Medium", "6", "", "1300K", "1300K", "", "", ""),
        QualityPreset::row("Low", "4", "", "600K", "600K", "", "", ""),
        QualityPreset::row("Sub", "2", "", "250K", "250K", "", "", ""),
        QualityPreset::mode("Custom"),
    ],
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections::VIDEO,
    enabled: LEGACY_ENABLED,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, &[]),
};

const MPEG_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::row("Ultra", "2", "", "8000K", "8000K", "", "9000K", "9000K"),
    QualityPreset::row("High", "4", "", "5000K", "5000K", "", "6000K", "6000K"),
    QualityPreset::row("Medium", "8", "", "2500K", "2500K", "", "3000K", "3000K"),
    QualityPreset::row("Low", "16", "", "1300K", "1300K", "", "1500K", "1500K"),
    QualityPreset::row("Sub", "31", "", "600K", "600K", "", "800K", "800K"),
    QualityPreset::mode("Custom"),
];

pub static MPEG2: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Mpeg2,
    command: CodecCommand {
        codec: "mpeg2video",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &["auto", "yuv420p", "yuv422p"],
    quality: MPEG_QUALITY,
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections::VIDEO,
    enabled: LEGACY_ENABLED,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, &[]),
};

pub static MPEG4: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Mpeg4,
    command: CodecCommand {
        codec: "mpeg4",
        parameters: "-vtag xvid",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &["auto", "yuv420p"],
    quality: MPEG_QUALITY,
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections::VIDEO,
    enabled: LEGACY_ENABLED,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, &[]),
};
