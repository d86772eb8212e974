//! H.265: libx265 plus AMF, NVENC and QSV.

use super::{
    CRF_ONE_TWO, CRF_ONLY, NVENC_ENCODE_SPEED, NVENC_PIXEL_FORMATS, QSV_ENCODE_SPEED,
    X26X_ENCODE_SPEED,
};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EncodeSpeedPreset,
    EnablementFlags, OptimizePreset, PassMode, PassRule, QualityPreset,
};

const X265_PIXEL_FORMATS: &[&str] = &[
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
];

const X265_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::mode("Lossless"),
    QualityPreset::row("Ultra", "16", "", "3000K", "3000K", "", "", ""),
    QualityPreset::row("High", "20", "", "1500K", "1500K", "", "", ""),
    QualityPreset::row("Medium", "26", "", "900K", "900K", "", "", ""),
    QualityPreset::row("Low", "30", "", "400K", "400K", "", "", ""),
    QualityPreset::row("Sub", "38", "", "150K", "150K", "", "", ""),
    QualityPreset::mode("Custom"),
];

const X265_OPTIMIZE: &[OptimizePreset] = &[
    OptimizePreset::new("None", "none", "none", "none"),
    OptimizePreset::new("Custom", "", "", ""),
    OptimizePreset::new("Web", "fastdecode", "main", "3.1"),
    OptimizePreset::new("Animation", "animation", "main", "4"),
    OptimizePreset::new("Film", "none", "main", "4.1"),
    OptimizePreset::new("Grain", "grain", "main", "4.1"),
    OptimizePreset::new("PC HD", "none", "main", "5"),
    OptimizePreset::new("UHD HDR", "none", "main10", "5.1"),
];

const HEVC_LEVEL: &[&str] = &[
    "none", "1", "2", "2.1", "3", "3.1", "4", "4.1", "5", "5.1", "5.2", "6", "6.1", "6.2",
];

pub static X265: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::X265,
    command: CodecCommand {
        codec: "libx265",
        parameters: "",
    },
    encode_speed: X26X_ENCODE_SPEED,
    pixel_formats: X265_PIXEL_FORMATS,
    quality: X265_QUALITY,
    optimize: X265_OPTIMIZE,
    tune: &[
        "none",
        "psnr",
        "ssim",
        "grain",
        "animation",
        "fastdecode",
        "zerolatency",
    ],
    profile: &[
        "none",
        "main",
        "main10",
        "main12",
        "main422-10",
        "main444-8",
        "main444-10",
    ],
    level: HEVC_LEVEL,
    selections: DefaultSelections {
        encode_speed: Some("Medium"),
        pixel_format_lossless: Some("yuv444p"),
        ..DefaultSelections::VIDEO
    },
    enabled: EnablementFlags::ALL,
    optimize_expanded: true,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, CRF_ONLY),
};

const HEVC_HW_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::row("Ultra", "16", "", "3000K", "3000K", "", "", ""),
    QualityPreset::row("High", "20", "", "1500K", "1500K", "", "", ""),
    QualityPreset::row("Medium", "26", "", "900K", "900K", "", "", ""),
    QualityPreset::row("Low", "30", "", "400K", "400K", "", "", ""),
    QualityPreset::row("Sub", "38", "", "150K", "150K", "", "", ""),
    QualityPreset::mode("Custom"),
];

const HEVC_HW_OPTIMIZE: &[OptimizePreset] = &[
    OptimizePreset::new("None", "none", "none", "none"),
    OptimizePreset::new("Custom", "", "", ""),
    OptimizePreset::new("Web", "none", "main", "3.1"),
    OptimizePreset::new("PC HD", "none", "main", "5"),
    OptimizePreset::new("UHD HDR", "none", "main10", "5.1"),
];

const HEVC_HW_PROFILE: &[&str] = &["none", "main", "main10"];

pub static HEVC_AMF: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::HevcAmf,
    command: CodecCommand {
        codec: "hevc_amf",
        parameters: "",
    },
    encode_speed: &[
        EncodeSpeedPreset::new("Quality", "-quality quality"),
        EncodeSpeedPreset::new("Balanced", "-quality balanced"),
        EncodeSpeedPreset::new("Speed", "-quality speed"),
    ],
    pixel_formats: &["auto", "nv12", "yuv420p", "p010le", "d3d11", "dxva2_vld"],
    quality: HEVC_HW_QUALITY,
    optimize: HEVC_HW_OPTIMIZE,
    tune: &["none"],
    profile: HEVC_HW_PROFILE,
    level: HEVC_LEVEL,
    selections: DefaultSelections {
        encode_speed: Some("Balanced"),
        hw_accel: Some("dxva2"),
        pixel_format: Some("nv12"),
        ..DefaultSelections::VIDEO
    },
    enabled: EnablementFlags::ALL,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(&[PassMode::Crf, PassMode::OnePass], PassMode::Crf, &[]),
};

const HEVC_NVENC_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::mode("Lossless"),
    QualityPreset::row("Ultra", "16", "", "3000K", "3000K", "", "", ""),
    QualityPreset::row("High", "20", "", "1500K", "1500K", "", "", ""),
    QualityPreset::row("Medium", "26", "", "900K", "900K", "", "", ""),
    QualityPreset::row("Low", "30", "", "400K", "400K", "", "", ""),
    QualityPreset::row("Sub", "38", "", "150K", "150K", "", "", ""),
    QualityPreset::mode("Custom"),
];

pub static HEVC_NVENC: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::HevcNvenc,
    command: CodecCommand {
        codec: "hevc_nvenc",
        parameters: "",
    },
    encode_speed: NVENC_ENCODE_SPEED,
    pixel_formats: NVENC_PIXEL_FORMATS,
    quality: HEVC_NVENC_QUALITY,
    optimize: HEVC_HW_OPTIMIZE,
    tune: &["none", "hq", "ll", "ull", "lossless"],
    profile: &["none", "main", "main10", "rext"],
    level: HEVC_LEVEL,
    selections: DefaultSelections {
        encode_speed: Some("Medium"),
        hw_accel: Some("cuvid"),
        pixel_format_lossless: Some("yuv444p"),
        ..DefaultSelections::VIDEO
    },
    enabled: EnablementFlags::ALL,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(CRF_ONE_TWO, PassMode::Crf, &[PassMode::OnePass]),
};

pub static HEVC_QSV: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::HevcQsv,
    command: CodecCommand {
        codec: "hevc_qsv",
        parameters: "-load_plugin hevc_hw",
    },
    encode_speed: QSV_ENCODE_SPEED,
    pixel_formats: &["auto", "nv12", "p010le", "qsv"],
    quality: HEVC_HW_QUALITY,
    optimize: HEVC_HW_OPTIMIZE,
    tune: &["none"],
    profile: HEVC_HW_PROFILE,
    level: HEVC_LEVEL,
    selections: DefaultSelections {
        encode_speed: Some("Medium"),
        hw_accel: Some("qsv"),
        pixel_format: Some("nv12"),
        ..DefaultSelections::VIDEO
    },
    enabled: EnablementFlags::ALL,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(&[PassMode::Crf, PassMode::OnePass], PassMode::Crf, &[]),
};
