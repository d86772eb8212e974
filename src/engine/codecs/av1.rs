use super::{CRF_ONE_TWO, CRF_ONLY};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EncodeSpeedPreset,
    EnablementFlags, OptimizePreset, PassMode, PassRule, QualityPreset,
};

pub static AV1: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Av1,
    command: CodecCommand {
        codec: "libaom-av1",
        parameters: "-row-mt 1",
    },
    encode_speed: &[
        EncodeSpeedPreset::new("none", ""),
        EncodeSpeedPreset::new("Placebo", "-cpu-used 0"),
        EncodeSpeedPreset::new("Very Slow", "-cpu-used 1"),
        EncodeSpeedPreset::new("Slower", "-cpu-used 2"),
        EncodeSpeedPreset::new("Slow", "-cpu-used 3"),
        EncodeSpeedPreset::new("Medium", "-cpu-used 4"),
        EncodeSpeedPreset::new("Fast", "-cpu-used 5"),
        EncodeSpeedPreset::new("Faster", "-cpu-used 6"),
        EncodeSpeedPreset::new("Very Fast", "-cpu-used 7"),
        EncodeSpeedPreset::new("Ultra Fast", "-cpu-used 8"),
    ],
    pixel_formats: &[
        "auto",
        "gbrp",
        "gbrp10le",
        "gbrp12le",
        "gray",
        "gray10le",
        "gray12le",
        "yuv420p",
        "yuv420p10le",
        "yuv420p12le",
        "yuv422p",
        "yuv422p10le",
        "yuv422p12le",
        "yuv444p",
        "yuv444p10le",
        "yuv444p12le",
    ],
    quality: &[
        QualityPreset::mode("Auto"),
        QualityPreset::row("Lossless", "0", "", "", "", "", "", ""),
        QualityPreset::row("Ultra", "16", "0", "3000K", "3000K", "", "", ""),
        QualityPreset::row("High", "24", "0", "1500K", "1500K", "", "", ""),
        QualityPreset::row("Medium", "30", "0", "900K", "900K", "", "", ""),
        QualityPreset::row("Low", "38", "0", "400K", "400K", "", "", ""),
        QualityPreset::row("Sub", "50", "0", "150K", "150K", "", "", ""),
        QualityPreset::mode("Custom"),
    ],
    optimize: &[OptimizePreset::new("None", "", "", "")],
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
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, CRF_ONLY),
};
