use tracing::debug;

use crate::engine::codecs;
use crate::engine::core::CodecId;
use crate::ui::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptimizeControls {
    /// Tune, Profile and Level open for editing.
    pub editable: bool,
    pub tune: Option<&'static str>,
    pub profile: Option<&'static str>,
    pub level: Option<&'static str>,
}

/// Tune/Profile/Level for an optimize selection. Only `Custom` on an
/// H.264/HEVC encoder is editable; every other preset just shows its values.
pub fn resolve_optimize(codec: CodecId, selection: &str) -> OptimizeControls {
    let editable = codec.has_optimize_controls() && selection == "Custom";
    match codecs::descriptor(codec).optimize_preset(selection) {
        Ok(preset) => OptimizeControls {
            editable,
            tune: preset.tune,
            profile: preset.profile,
            level: preset.level,
        },
        Err(err) => {
            debug!(error = %err, "optimize preset skipped");
            OptimizeControls {
                editable,
                ..OptimizeControls::default()
            }
        }
    }
}

impl OptimizeControls {
    pub fn apply_to(&self, state: &mut UiState) {
        state.tune_enabled = self.editable;
        state.profile_enabled = self.editable;
        state.level_enabled = self.editable;
        if let Some(tune) = self.tune {
            tune.clone_into(&mut state.tune_selected);
        }
        if let Some(profile) = self.profile {
            profile.clone_into(&mut state.profile_selected);
        }
        if let Some(level) = self.level {
            level.clone_into(&mut state.level_selected);
        }
    }
}
