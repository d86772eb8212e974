//! H.264: libx264 plus the AMF, NVENC and QSV hardware encoders.

use super::{
    CRF_ONE_TWO, CRF_ONLY, NVENC_ENCODE_SPEED, NVENC_PIXEL_FORMATS, QSV_ENCODE_SPEED,
    X26X_ENCODE_SPEED,
};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EncodeSpeedPreset,
    EnablementFlags, OptimizePreset, PassMode, PassRule, QualityPreset,
};

const X264_PIXEL_FORMATS: &[&str] = &[
    "auto",
    "gray",
    "gray10le",
    "nv12",
    "nv16",
    "nv20le",
    "nv21",
    "yuv420p",
    "yuv420p10le",
    "yuv422p",
    "yuv422p10le",
    "yuv444p",
    "yuv444p10le",
    "yuvj420p",
    "yuvj422p",
    "yuvj444p",
];

const X264_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::row("Lossless", "0", "", "", "", "", "", ""),
    QualityPreset::row("Ultra", "16", "", "5000K", "5000K", "", "", ""),
    QualityPreset::row("High", "20", "", "2500K", "2500K", "", "", ""),
    QualityPreset::row("Medium", "23", "", "1300K", "1300K", "", "", ""),
    QualityPreset::row("Low", "28", "", "600K", "600K", "", "", ""),
    QualityPreset::row("Sub", "35", "", "250K", "250K", "", "", ""),
    QualityPreset::mode("Custom"),
];

const X264_OPTIMIZE: &[OptimizePreset] = &[
    OptimizePreset::new("None", "none", "none", "none"),
    OptimizePreset::new("Custom", "", "", ""),
    OptimizePreset::new("Web", "fastdecode", "baseline", "3.0"),
    OptimizePreset::new("Animation", "animation", "main", "4.0"),
    OptimizePreset::new("Film", "film", "high", "4.1"),
    OptimizePreset::new("Grain", "grain", "high", "4.1"),
    OptimizePreset::new("PC HD", "film", "high", "4.2"),
    OptimizePreset::new("Blu-ray", "film", "high", "4.1"),
    OptimizePreset::new("Apple", "none", "main", "3.1"),
    OptimizePreset::new("Android", "none", "baseline", "3.0"),
    OptimizePreset::new("PS4", "none", "high", "4.2"),
    OptimizePreset::new("Xbox One", "none", "high", "4.2"),
];

const X264_TUNE: &[&str] = &[
    "none",
    "film",
    "animation",
    "grain",
    "stillimage",
    "fastdecode",
    "zerolatency",
];

const X264_PROFILE: &[&str] = &[
    "none", "baseline", "main", "high", "high10", "high422", "high444",
];

const H264_LEVEL: &[&str] = &[
    "none", "1", "1b", "1.1", "1.2", "1.3", "2.0", "2.1", "2.2", "3.0", "3.1", "3.2", "4.0",
    "4.1", "4.2", "5.0", "5.1", "5.2",
];

pub static X264: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::X264,
    command: CodecCommand {
        codec: "libx264",
        parameters: "",
    },
    encode_speed: X26X_ENCODE_SPEED,
    pixel_formats: X264_PIXEL_FORMATS,
    quality: X264_QUALITY,
    optimize: X264_OPTIMIZE,
    tune: X264_TUNE,
    profile: X264_PROFILE,
    level: H264_LEVEL,
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

// AMF has no lossless mode and no two-pass rate control.
const AMF_ENCODE_SPEED: &[EncodeSpeedPreset] = &[
    EncodeSpeedPreset::new("Quality", "-quality quality"),
    EncodeSpeedPreset::new("Balanced", "-quality balanced"),
    EncodeSpeedPreset::new("Speed", "-quality speed"),
];

const AMF_PIXEL_FORMATS: &[&str] = &["auto", "nv12", "yuv420p", "d3d11", "dxva2_vld"];

const H264_HW_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::row("Ultra", "16", "", "5000K", "5000K", "", "", ""),
    QualityPreset::row("High", "20", "", "2500K", "2500K", "", "", ""),
    QualityPreset::row("Medium", "24", "", "1300K", "1300K", "", "", ""),
    QualityPreset::row("Low", "28", "", "600K", "600K", "", "", ""),
    QualityPreset::row("Sub", "35", "", "250K", "250K", "", "", ""),
    QualityPreset::mode("Custom"),
];

const H264_HW_OPTIMIZE: &[OptimizePreset] = &[
    OptimizePreset::new("None", "none", "none", "none"),
    OptimizePreset::new("Custom", "", "", ""),
    OptimizePreset::new("Web", "none", "baseline", "3.0"),
    OptimizePreset::new("PC HD", "none", "high", "4.2"),
    OptimizePreset::new("Apple", "none", "main", "3.1"),
    OptimizePreset::new("Android", "none", "baseline", "3.0"),
];

const H264_HW_PROFILE: &[&str] = &["none", "baseline", "main", "high"];

pub static H264_AMF: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::H264Amf,
    command: CodecCommand {
        codec: "h264_amf",
        parameters: "",
    },
    encode_speed: AMF_ENCODE_SPEED,
    pixel_formats: AMF_PIXEL_FORMATS,
    quality: H264_HW_QUALITY,
    optimize: H264_HW_OPTIMIZE,
    tune: &["none"],
    profile: H264_HW_PROFILE,
    level: H264_LEVEL,
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

const H264_NVENC_QUALITY: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::mode("Lossless"),
    QualityPreset::row("Ultra", "16", "", "5000K", "5000K", "", "", ""),
    QualityPreset::row("High", "20", "", "2500K", "2500K", "", "", ""),
    QualityPreset::row("Medium", "24", "", "1300K", "1300K", "", "", ""),
    QualityPreset::row("Low", "28", "", "600K", "600K", "", "", ""),
    QualityPreset::row("Sub", "35", "", "250K", "250K", "", "", ""),
    QualityPreset::mode("Custom"),
];

const NVENC_TUNE: &[&str] = &["none", "hq", "ll", "ull", "lossless"];

pub static H264_NVENC: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::H264Nvenc,
    command: CodecCommand {
        codec: "h264_nvenc",
        parameters: "",
    },
    encode_speed: NVENC_ENCODE_SPEED,
    pixel_formats: NVENC_PIXEL_FORMATS,
    quality: H264_NVENC_QUALITY,
    optimize: H264_HW_OPTIMIZE,
    tune: NVENC_TUNE,
    profile: &["none", "baseline", "main", "high", "high444p"],
    level: H264_LEVEL,
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

pub static H264_QSV: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::H264Qsv,
    command: CodecCommand {
        codec: "h264_qsv",
        parameters: "",
    },
    encode_speed: QSV_ENCODE_SPEED,
    pixel_formats: &["auto", "nv12", "p010le", "qsv"],
    quality: H264_HW_QUALITY,
    optimize: H264_HW_OPTIMIZE,
    tune: &["none"],
    profile: H264_HW_PROFILE,
    level: H264_LEVEL,
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
