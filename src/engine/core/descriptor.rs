//! Static per-codec capability data.
//!
//! Every field is `'static` so the whole table lives in read-only memory and
//! can be shared across threads without synchronisation.

use serde::Serialize;

use super::error::ResolveError;
use super::types::{CodecId, PassMode, QualityMode};

/// Maps `""` to `None` so preset tables can be written as plain string rows.
pub const fn opt(value: &'static str) -> Option<&'static str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Encoder name plus fixed parameters, e.g. `libvpx-vp9` / `-row-mt 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodecCommand {
    pub codec: &'static str,
    pub parameters: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodeSpeedPreset {
    pub name: &'static str,
    pub command: &'static str,
}

impl EncodeSpeedPreset {
    pub const fn new(name: &'static str, command: &'static str) -> Self {
        Self { name, command }
    }
}

/// One row of the quality combo. `None` values are not applicable to the
/// preset (the field is blanked when the preset is displayed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityPreset {
    pub name: &'static str,
    pub crf: Option<&'static str>,
    /// Bitrate paired with CRF (VP8/VP9 encode `-b:v` alongside `-crf`).
    pub crf_bitrate: Option<&'static str>,
    pub cbr: Option<&'static str>,
    pub vbr: Option<&'static str>,
    pub min_rate: Option<&'static str>,
    pub max_rate: Option<&'static str>,
    pub buf_size: Option<&'static str>,
}

impl QualityPreset {
    /// Preset row without any values (Auto, Lossless, Custom, None).
    pub const fn mode(name: &'static str) -> Self {
        Self {
            name,
            crf: None,
            crf_bitrate: None,
            cbr: None,
            vbr: None,
            min_rate: None,
            max_rate: None,
            buf_size: None,
        }
    }

    /// Preset row in column order: crf, crf bitrate, cbr, vbr, min, max, buffer.
    #[allow(clippy::too_many_arguments)]
    pub const fn row(
        name: &'static str,
        crf: &'static str,
        crf_bitrate: &'static str,
        cbr: &'static str,
        vbr: &'static str,
        min_rate: &'static str,
        max_rate: &'static str,
        buf_size: &'static str,
    ) -> Self {
        Self {
            name,
            crf: opt(crf),
            crf_bitrate: opt(crf_bitrate),
            cbr: opt(cbr),
            vbr: opt(vbr),
            min_rate: opt(min_rate),
            max_rate: opt(max_rate),
            buf_size: opt(buf_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimizePreset {
    pub name: &'static str,
    pub tune: Option<&'static str>,
    pub profile: Option<&'static str>,
    pub level: Option<&'static str>,
}

impl OptimizePreset {
    pub const fn new(
        name: &'static str,
        tune: &'static str,
        profile: &'static str,
        level: &'static str,
    ) -> Self {
        Self {
            name,
            tune: opt(tune),
            profile: opt(profile),
            level: opt(level),
        }
    }
}

/// Default value of each dependent control. `None` means the codec has no
/// opinion and the control keeps its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefaultSelections {
    pub encode_speed: Option<&'static str>,
    pub hw_accel: Option<&'static str>,
    pub pixel_format: Option<&'static str>,
    pub pixel_format_lossless: Option<&'static str>,
    pub fps: Option<&'static str>,
    pub speed: Option<&'static str>,
    pub vsync: Option<&'static str>,
    pub scale: Option<&'static str>,
    pub color_range: Option<&'static str>,
    pub color_space: Option<&'static str>,
    pub color_primaries: Option<&'static str>,
    pub color_transfer_char: Option<&'static str>,
    pub color_matrix: Option<&'static str>,
}

impl DefaultSelections {
    pub const EMPTY: Self = Self {
        encode_speed: None,
        hw_accel: None,
        pixel_format: None,
        pixel_format_lossless: None,
        fps: None,
        speed: None,
        vsync: None,
        scale: None,
        color_range: None,
        color_space: None,
        color_primaries: None,
        color_transfer_char: None,
        color_matrix: None,
    };

    /// Software video encoder baseline: no hardware decode, source timing and
    /// size, color metadata passed through.
    pub const VIDEO: Self = Self {
        hw_accel: Some("off"),
        pixel_format: Some("yuv420p"),
        fps: Some("auto"),
        speed: Some("auto"),
        vsync: Some("off"),
        scale: Some("Source"),
        color_range: Some("auto"),
        color_space: Some("auto"),
        color_primaries: Some("auto"),
        color_transfer_char: Some("auto"),
        color_matrix: Some("auto"),
        ..Self::EMPTY
    };

    /// Still images have no frame rate or timing controls.
    pub const IMAGE: Self = Self {
        scale: Some("Source"),
        color_range: Some("auto"),
        color_space: Some("auto"),
        color_primaries: Some("auto"),
        color_transfer_char: Some("auto"),
        color_matrix: Some("auto"),
        ..Self::EMPTY
    };
}

/// Enabled state of each codec-dependent control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnablementFlags {
    pub encode_speed: bool,
    pub codec: bool,
    pub hw_accel: bool,
    pub quality: bool,
    pub vbr: bool,
    pub pixel_format: bool,
    pub fps: bool,
    pub speed: bool,
    pub vsync: bool,
    pub optimize: bool,
    pub scale: bool,
    pub scaling: bool,
    pub crop: bool,
    pub color_range: bool,
    pub color_space: bool,
    pub color_primaries: bool,
    pub color_transfer_char: bool,
    pub color_matrix: bool,
    pub subtitle_codec: bool,
    pub subtitle_stream: bool,
}

impl EnablementFlags {
    pub const ALL: Self = Self {
        encode_speed: true,
        codec: true,
        hw_accel: true,
        quality: true,
        vbr: true,
        pixel_format: true,
        fps: true,
        speed: true,
        vsync: true,
        optimize: true,
        scale: true,
        scaling: true,
        crop: true,
        color_range: true,
        color_space: true,
        color_primaries: true,
        color_transfer_char: true,
        color_matrix: true,
        subtitle_codec: true,
        subtitle_stream: true,
    };

    /// Only the codec combo stays usable so the user can switch away.
    pub const CODEC_ONLY: Self = Self {
        encode_speed: false,
        codec: true,
        hw_accel: false,
        quality: false,
        vbr: false,
        pixel_format: false,
        fps: false,
        speed: false,
        vsync: false,
        optimize: false,
        scale: false,
        scaling: false,
        crop: false,
        color_range: false,
        color_space: false,
        color_primaries: false,
        color_transfer_char: false,
        color_matrix: false,
        subtitle_codec: false,
        subtitle_stream: false,
    };

    /// Image encoders: geometry and color only.
    pub const IMAGE: Self = Self {
        encode_speed: false,
        hw_accel: false,
        vbr: false,
        fps: false,
        speed: false,
        vsync: false,
        optimize: false,
        subtitle_codec: false,
        subtitle_stream: false,
        ..Self::ALL
    };
}

/// Which passes a codec offers and which one is picked by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassRule {
    /// Offered for named presets and Custom.
    pub passes: &'static [PassMode],
    pub default: PassMode,
    /// Offered while Lossless is selected; empty falls back to `passes`.
    pub lossless: &'static [PassMode],
}

impl PassRule {
    pub const fn new(
        passes: &'static [PassMode],
        default: PassMode,
        lossless: &'static [PassMode],
    ) -> Self {
        Self {
            passes,
            default,
            lossless,
        }
    }

    pub fn items(&self, quality: &QualityMode) -> &'static [PassMode] {
        match quality {
            QualityMode::Auto => &[PassMode::Auto],
            QualityMode::None => &[PassMode::None],
            QualityMode::Lossless if !self.lossless.is_empty() => self.lossless,
            _ => self.passes,
        }
    }

    /// Pick the pass for `quality`. An explicit user choice survives as long
    /// as the new item list still offers it.
    pub fn select(
        &self,
        quality: &QualityMode,
        current: Option<PassMode>,
        user_selected: bool,
    ) -> Option<PassMode> {
        let items = self.items(quality);
        if user_selected {
            if let Some(pass) = current.filter(|p| items.contains(p)) {
                return Some(pass);
            }
        }
        if items.contains(&self.default) {
            return Some(self.default);
        }
        items.first().copied()
    }
}

/// Everything the controls need to know about one codec.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CapabilityDescriptor {
    pub id: CodecId,
    pub command: CodecCommand,
    pub encode_speed: &'static [EncodeSpeedPreset],
    pub pixel_formats: &'static [&'static str],
    pub quality: &'static [QualityPreset],
    pub optimize: &'static [OptimizePreset],
    pub tune: &'static [&'static str],
    pub profile: &'static [&'static str],
    pub level: &'static [&'static str],
    pub selections: DefaultSelections,
    pub enabled: EnablementFlags,
    pub optimize_expanded: bool,
    pub vbr_checked: bool,
    pub pass_rule: PassRule,
}

impl CapabilityDescriptor {
    pub fn quality_preset(&self, name: &str) -> Result<&'static QualityPreset, ResolveError> {
        self.quality
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| self.missing("quality", name))
    }

    pub fn optimize_preset(&self, name: &str) -> Result<&'static OptimizePreset, ResolveError> {
        self.optimize
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| self.missing("optimize", name))
    }

    pub fn encode_speed_preset(
        &self,
        name: &str,
    ) -> Result<&'static EncodeSpeedPreset, ResolveError> {
        self.encode_speed
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| self.missing("encode speed", name))
    }

    pub fn encode_speed_names(&self) -> Vec<String> {
        self.encode_speed.iter().map(|p| p.name.to_string()).collect()
    }

    pub fn quality_names(&self) -> Vec<String> {
        self.quality.iter().map(|p| p.name.to_string()).collect()
    }

    pub fn optimize_names(&self) -> Vec<String> {
        self.optimize.iter().map(|p| p.name.to_string()).collect()
    }

    fn missing(&self, control: &'static str, name: &str) -> ResolveError {
        ResolveError::MissingPresetMatch {
            codec: self.id,
            control,
            name: name.to_string(),
        }
    }
}
