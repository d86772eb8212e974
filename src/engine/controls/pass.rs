use crate::engine::codecs;
use crate::engine::core::{CodecId, PassMode, QualityMode};
use crate::ui::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassControls {
    pub items: &'static [PassMode],
    pub selected: Option<PassMode>,
    /// Set only under Custom quality; otherwise the quality mode owns CRF.
    pub crf_enabled: Option<bool>,
}

pub fn resolve_pass(
    codec: CodecId,
    quality: &QualityMode,
    pass_selection: &str,
    user_selected: bool,
) -> PassControls {
    let rule = codecs::descriptor(codec).pass_rule;
    let items = rule.items(quality);
    let selected = rule.select(quality, PassMode::parse(pass_selection), user_selected);
    // Under CRF the rate comes from the pass itself.
    let crf_enabled = matches!(quality, QualityMode::Custom)
        .then(|| !codec.is_image() && selected != Some(PassMode::Crf));
    PassControls {
        items,
        selected,
        crf_enabled,
    }
}

impl PassControls {
    pub fn apply_to(&self, state: &mut UiState) {
        state.pass_items = self.items.iter().map(|p| p.label().to_string()).collect();
        match self.selected {
            Some(pass) => pass.label().clone_into(&mut state.pass_selected),
            None => state.pass_selected.clear(),
        }
        if let Some(enabled) = self.crf_enabled {
            state.crf_enabled = enabled;
        }
    }
}
