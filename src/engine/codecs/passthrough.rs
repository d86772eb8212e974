//! Copy (stream passthrough) and None (drop the video stream).
//!
//! Neither re-encodes, so neither has defaults: selecting them leaves every
//! dependent control as it was.

use super::{NO_ENCODE_SPEED, NO_PASS};
use crate::engine::core::{
    CapabilityDescriptor, CodecCommand, CodecId, DefaultSelections, EnablementFlags,
    OptimizePreset, PassMode, PassRule, QualityPreset,
};

const NO_OPTIMIZE: &[OptimizePreset] = &[OptimizePreset::new("None", "", "", "")];

pub static COPY: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::Copy,
    command: CodecCommand {
        codec: "copy",
        parameters: "",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &[],
    quality: &[QualityPreset::mode("Auto")],
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections::EMPTY,
    // Subtitles can still be copied or burned alongside a copied video stream.
    enabled: EnablementFlags {
        subtitle_codec: true,
        subtitle_stream: true,
        ..EnablementFlags::CODEC_ONLY
    },
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(NO_PASS, PassMode::None, &[]),
};

pub static NONE: CapabilityDescriptor = CapabilityDescriptor {
    id: CodecId::None,
    command: CodecCommand {
        codec: "",
        parameters: "-vn",
    },
    encode_speed: NO_ENCODE_SPEED,
    pixel_formats: &[],
    quality: &[QualityPreset::mode("None")],
    optimize: NO_OPTIMIZE,
    tune: &[],
    profile: &[],
    level: &[],
    selections: DefaultSelections::EMPTY,
    enabled: EnablementFlags::CODEC_ONLY,
    optimize_expanded: false,
    vbr_checked: false,
    pass_rule: PassRule::new(NO_PASS, PassMode::None, &[]),
};
