use tracing::debug;

use crate::engine::core::{CapabilityDescriptor, PassMode, QualityMode};
use crate::ui::state::UiState;

use super::TextUpdate;

/// Text writes for the rate fields of a named quality preset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayValues {
    pub crf: TextUpdate,
    pub bitrate: TextUpdate,
    pub min_rate: TextUpdate,
    pub max_rate: TextUpdate,
    pub buf_size: TextUpdate,
}

/// Display values for `quality` under `pass`, read from the descriptor's
/// quality presets. Only named presets display anything. A preset missing
/// from the table keeps every field except the CRF box, which a bitrate pass
/// always clears.
pub fn resolve_bitrate_display(
    descriptor: &CapabilityDescriptor,
    quality: &str,
    pass: &str,
    vbr_checked: bool,
) -> DisplayValues {
    let parsed = QualityMode::parse(quality);
    let Some(name) = parsed.preset_name() else {
        return DisplayValues::default();
    };

    let pass = PassMode::parse(pass);
    let bitrate_pass = matches!(pass, Some(PassMode::OnePass | PassMode::TwoPass));
    if pass == Some(PassMode::Auto) {
        return DisplayValues {
            crf: TextUpdate::Clear,
            bitrate: TextUpdate::Clear,
            min_rate: TextUpdate::Clear,
            max_rate: TextUpdate::Clear,
            buf_size: TextUpdate::Clear,
        };
    }

    let preset = match descriptor.quality_preset(name) {
        Ok(preset) => preset,
        Err(err) => {
            debug!(error = %err, "quality preset not displayed");
            return DisplayValues {
                crf: if bitrate_pass {
                    TextUpdate::Clear
                } else {
                    TextUpdate::Keep
                },
                ..DisplayValues::default()
            };
        }
    };

    let (crf, bitrate) = match pass {
        Some(PassMode::Crf) => (
            TextUpdate::from_preset(preset.crf),
            TextUpdate::from_preset(preset.crf_bitrate),
        ),
        _ if bitrate_pass => {
            let rate = if vbr_checked { preset.vbr } else { preset.cbr };
            (TextUpdate::Clear, TextUpdate::from_preset(rate))
        }
        _ => return DisplayValues::default(),
    };

    DisplayValues {
        crf,
        bitrate,
        min_rate: TextUpdate::from_preset(preset.min_rate),
        max_rate: TextUpdate::from_preset(preset.max_rate),
        buf_size: TextUpdate::from_preset(preset.buf_size),
    }
}

impl DisplayValues {
    pub fn apply_to(&self, state: &mut UiState) {
        self.crf.apply(&mut state.crf_text);
        self.bitrate.apply(&mut state.bitrate_text);
        self.min_rate.apply(&mut state.min_rate_text);
        self.max_rate.apply(&mut state.max_rate_text);
        self.buf_size.apply(&mut state.buf_size_text);
    }
}
