use crate::engine::core::{CodecId, QualityMode};
use crate::ui::state::UiState;

use super::FieldControl;

/// Enable/clear policy for the rate controls under one quality mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityControls {
    pub pass_enabled: bool,
    pub crf: FieldControl,
    pub bitrate: FieldControl,
    pub vbr_enabled: bool,
    /// `Some(false)` unchecks VBR; `None` leaves the checkbox alone.
    pub vbr_checked: Option<bool>,
    pub min_rate: FieldControl,
    pub max_rate: FieldControl,
    pub buf_size: FieldControl,
    pub scale_enabled: bool,
    /// Forced encode speed (NVENC lossless is an encoder preset).
    pub encode_speed: Option<&'static str>,
}

pub fn resolve_quality(codec: CodecId, quality: &QualityMode) -> QualityControls {
    match quality {
        QualityMode::Auto => QualityControls {
            pass_enabled: false,
            crf: FieldControl::clear(false),
            bitrate: FieldControl::clear(false),
            vbr_enabled: false,
            vbr_checked: Some(false),
            min_rate: FieldControl::clear(false),
            max_rate: FieldControl::clear(false),
            buf_size: FieldControl::clear(false),
            scale_enabled: true,
            encode_speed: None,
        },
        QualityMode::Lossless => QualityControls {
            encode_speed: codec.has_lossless_preset().then_some("Lossless"),
            ..locked(true)
        },
        QualityMode::Custom => QualityControls {
            pass_enabled: true,
            crf: FieldControl::clear(!codec.is_image()),
            bitrate: FieldControl::clear(true),
            vbr_enabled: true,
            vbr_checked: None,
            min_rate: FieldControl::clear(true),
            max_rate: FieldControl::clear(true),
            buf_size: FieldControl::clear(true),
            scale_enabled: true,
            encode_speed: None,
        },
        QualityMode::None => locked(false),
        // Preset values are written by the bitrate display.
        QualityMode::Named(_) => QualityControls {
            pass_enabled: true,
            vbr_enabled: codec.supports_preset_vbr(),
            ..locked(true)
        },
    }
}

/// Everything disabled with displayed values kept.
fn locked(scale_enabled: bool) -> QualityControls {
    QualityControls {
        pass_enabled: false,
        crf: FieldControl::keep(false),
        bitrate: FieldControl::keep(false),
        vbr_enabled: false,
        vbr_checked: None,
        min_rate: FieldControl::keep(false),
        max_rate: FieldControl::keep(false),
        buf_size: FieldControl::keep(false),
        scale_enabled,
        encode_speed: None,
    }
}

impl QualityControls {
    pub fn apply_to(&self, state: &mut UiState) {
        state.pass_enabled = self.pass_enabled;
        self.crf.apply(&mut state.crf_enabled, &mut state.crf_text);
        self.bitrate
            .apply(&mut state.bitrate_enabled, &mut state.bitrate_text);
        state.vbr_enabled = self.vbr_enabled;
        if let Some(checked) = self.vbr_checked {
            state.vbr_checked = checked;
        }
        self.min_rate
            .apply(&mut state.min_rate_enabled, &mut state.min_rate_text);
        self.max_rate
            .apply(&mut state.max_rate_enabled, &mut state.max_rate_text);
        self.buf_size
            .apply(&mut state.buf_size_enabled, &mut state.buf_size_text);
        state.scale_enabled = self.scale_enabled;
        if let Some(speed) = self.encode_speed {
            speed.clone_into(&mut state.encode_speed_selected);
        }
    }
}
