use crate::engine::codecs;
use crate::engine::core::{CodecId, EnablementFlags};
use crate::ui::filters::VideoFilters;
use crate::ui::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    EnableAll,
    DisableAll,
}

/// Enabled flags for every codec-dependent control plus the filter panel
/// verbs to trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnablementSet {
    pub flags: EnablementFlags,
    pub optimize_expanded: bool,
    pub vbr_checked: bool,
    pub filters: FilterAction,
    pub select_defaults: bool,
}

pub fn resolve_enablement(codec: CodecId) -> EnablementSet {
    let descriptor = codecs::descriptor(codec);
    let terminal = codec.is_terminal();
    EnablementSet {
        flags: descriptor.enabled,
        optimize_expanded: descriptor.optimize_expanded,
        vbr_checked: descriptor.vbr_checked,
        filters: if terminal {
            FilterAction::DisableAll
        } else {
            FilterAction::EnableAll
        },
        select_defaults: terminal,
    }
}

impl EnablementSet {
    pub fn apply_to(&self, state: &mut UiState) {
        let f = &self.flags;
        state.encode_speed_enabled = f.encode_speed;
        state.codec_enabled = f.codec;
        state.hw_accel_enabled = f.hw_accel;
        state.quality_enabled = f.quality;
        state.vbr_enabled = f.vbr;
        state.pixel_format_enabled = f.pixel_format;
        state.fps_enabled = f.fps;
        state.speed_enabled = f.speed;
        state.vsync_enabled = f.vsync;
        state.optimize_enabled = f.optimize;
        state.scale_enabled = f.scale;
        state.scaling_enabled = f.scaling;
        state.crop_enabled = f.crop;
        state.color_range_enabled = f.color_range;
        state.color_space_enabled = f.color_space;
        state.color_primaries_enabled = f.color_primaries;
        state.color_transfer_char_enabled = f.color_transfer_char;
        state.color_matrix_enabled = f.color_matrix;
        state.subtitle_codec_enabled = f.subtitle_codec;
        state.subtitle_stream_enabled = f.subtitle_stream;

        state.optimize_expanded = self.optimize_expanded;
        state.vbr_checked = self.vbr_checked;
    }

    /// Trigger the filter panel verbs. Defaults are selected before the panel
    /// is disabled.
    pub fn dispatch<F: VideoFilters + ?Sized>(&self, filters: &mut F) {
        if self.select_defaults {
            filters.select_defaults();
        }
        match self.filters {
            FilterAction::EnableAll => filters.enable_all(),
            FilterAction::DisableAll => filters.disable_all(),
        }
    }
}
