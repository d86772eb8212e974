//! Control session: owns the UI state and runs the resolvers in order.
//!
//! Every entry point recomputes the controls that depend on the changed
//! selection. Later stages read what earlier stages wrote, so the order is
//! fixed: codec → quality → pass → bitrate display → optimize.

use tracing::debug;

use super::codecs;
use super::controls::{
    EncodeSpeedMemory, resolve_bitrate_display, resolve_enablement, resolve_optimize,
    resolve_pass, resolve_pixel_format, resolve_quality, resolve_selections,
};
use super::core::{
    CapabilityDescriptor, CodecId, MediaType, QualityMode, ResolveError, codec_fragment,
    video_args,
};
use crate::ui::filters::VideoFilters;
use crate::ui::state::UiState;

/// A full set of front-end selections, replayed in event order by
/// [`ControlSession::select`]. Blank fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub media_type: String,
    pub codec: String,
    pub quality: String,
    pub optimize: String,
    pub pass: String,
    pub vbr: bool,
}

pub struct ControlSession<F: VideoFilters> {
    state: UiState,
    filters: F,
    memory: EncodeSpeedMemory,
    codec: Option<CodecId>,
    media_type: Option<MediaType>,
    pass_user_selected: bool,
}

impl<F: VideoFilters> ControlSession<F> {
    pub fn new(filters: F) -> Self {
        Self::with_state(UiState::default(), filters)
    }

    /// Resume from an existing state. No codec is active until
    /// [`codec_changed`](Self::codec_changed) runs.
    pub fn with_state(state: UiState, filters: F) -> Self {
        Self {
            state,
            filters,
            memory: EncodeSpeedMemory::default(),
            codec: None,
            media_type: Some(MediaType::Video),
            pass_user_selected: false,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn codec(&self) -> Option<CodecId> {
        self.codec
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    pub fn encode_speed_memory(&self) -> &EncodeSpeedMemory {
        &self.memory
    }

    /// `-c:v ...` plus encode speed and pixel format for the active codec.
    pub fn video_args(&self) -> Option<String> {
        let descriptor = codecs::descriptor(self.codec?);
        Some(video_args(
            descriptor,
            &self.state.encode_speed_selected,
            &self.state.pixel_format_selected,
        ))
    }

    pub fn select(&mut self, selection: &Selection) -> Result<(), ResolveError> {
        if !selection.media_type.trim().is_empty() {
            self.pixel_format_recompute(selection.media_type.trim());
        }
        self.codec_changed(&selection.codec)?;
        let steps: [(&str, fn(&mut Self, &str)); 3] = [
            (selection.quality.as_str(), Self::quality_changed),
            (selection.optimize.as_str(), Self::optimize_changed),
            (selection.pass.as_str(), Self::pass_changed),
        ];
        for (value, step) in steps {
            if !value.trim().is_empty() {
                step(self, value.trim());
            }
        }
        if selection.vbr {
            self.vbr_toggled(true);
        }
        Ok(())
    }

    /// Switch the active codec and recompute every dependent control.
    ///
    /// A blank label is ignored; a label outside the table is an error and
    /// leaves the state untouched.
    pub fn codec_changed(&mut self, label: &str) -> Result<(), ResolveError> {
        let id = match CodecId::parse(label) {
            Ok(id) => id,
            Err(ResolveError::EmptyCodecSelection) => {
                debug!("codec selection cleared, nothing to resolve");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let descriptor = codecs::descriptor(id);
        debug!(codec = %id, encoder = descriptor.command.codec, "codec changed");

        self.memory.remember(&self.state.encode_speed_selected);
        self.codec = Some(id);

        let state = &mut self.state;
        id.label().clone_into(&mut state.codec_selected);
        state.codec = codec_fragment(descriptor);
        load_items(descriptor, state);

        if !offered(&state.quality_items, &state.quality_selected) {
            state.quality_selected = state.quality_items.first().cloned().unwrap_or_default();
        }
        if !offered(&state.optimize_items, &state.optimize_selected) {
            state.optimize_selected = state.optimize_items.first().cloned().unwrap_or_default();
        }

        let quality = QualityMode::parse(&state.quality_selected);
        resolve_selections(id, &quality).apply_to(state);

        let enablement = resolve_enablement(id);
        enablement.apply_to(state);
        enablement.dispatch(&mut self.filters);

        self.state.encode_speed_selected = self
            .memory
            .restore(&self.state.encode_speed_items, descriptor.selections.encode_speed);

        self.refresh_quality(id);
        self.refresh_optimize(id);
        Ok(())
    }

    pub fn quality_changed(&mut self, label: &str) {
        let Some(id) = self.codec else {
            debug!(quality = label, "no codec selected, quality ignored");
            return;
        };
        label.clone_into(&mut self.state.quality_selected);
        self.refresh_quality(id);
    }

    /// Re-select the pixel format after the output media type changes.
    /// Unrecognised media types behave like audio and change nothing.
    pub fn pixel_format_recompute(&mut self, media_type: &str) {
        self.media_type = MediaType::parse(media_type);
        if let Some(id) = self.codec {
            self.refresh_pixel_format(id);
        }
    }

    pub fn optimize_changed(&mut self, label: &str) {
        let Some(id) = self.codec else {
            return;
        };
        label.clone_into(&mut self.state.optimize_selected);
        self.refresh_optimize(id);
    }

    /// An explicit pass choice survives later quality changes while the codec
    /// still offers it.
    pub fn pass_changed(&mut self, label: &str) {
        let Some(id) = self.codec else {
            return;
        };
        label.clone_into(&mut self.state.pass_selected);
        self.pass_user_selected = true;
        self.refresh_pass(id);
        self.refresh_bitrate(id);
    }

    pub fn vbr_toggled(&mut self, checked: bool) {
        let Some(id) = self.codec else {
            return;
        };
        self.state.vbr_checked = checked;
        self.refresh_bitrate(id);
    }

    fn refresh_quality(&mut self, id: CodecId) {
        self.refresh_pixel_format(id);

        let quality = QualityMode::parse(&self.state.quality_selected);
        debug!(codec = %id, quality = %quality, "applying quality mode");
        resolve_quality(id, &quality).apply_to(&mut self.state);

        self.refresh_pass(id);
        self.refresh_bitrate(id);
    }

    fn refresh_pixel_format(&mut self, id: CodecId) {
        let quality = QualityMode::parse(&self.state.quality_selected);
        if let Some(format) = resolve_pixel_format(self.media_type, id, &quality) {
            format.clone_into(&mut self.state.pixel_format_selected);
        }
    }

    /// Pass items and selection. The Custom CRF toggle follows the pass once
    /// the user has picked one; until then the quality mode owns it.
    fn refresh_pass(&mut self, id: CodecId) {
        let quality = QualityMode::parse(&self.state.quality_selected);
        let mut controls = resolve_pass(
            id,
            &quality,
            &self.state.pass_selected,
            self.pass_user_selected,
        );
        if !self.pass_user_selected {
            controls.crf_enabled = None;
        }
        controls.apply_to(&mut self.state);
    }

    fn refresh_bitrate(&mut self, id: CodecId) {
        let state = &self.state;
        let display = resolve_bitrate_display(
            codecs::descriptor(id),
            &state.quality_selected,
            &state.pass_selected,
            state.vbr_checked,
        );
        display.apply_to(&mut self.state);
    }

    fn refresh_optimize(&mut self, id: CodecId) {
        resolve_optimize(id, &self.state.optimize_selected).apply_to(&mut self.state);
    }
}

fn load_items(descriptor: &CapabilityDescriptor, state: &mut UiState) {
    state.encode_speed_items = descriptor.encode_speed_names();
    state.pixel_format_items = to_strings(descriptor.pixel_formats);
    state.quality_items = descriptor.quality_names();
    state.optimize_items = descriptor.optimize_names();
    state.tune_items = to_strings(descriptor.tune);
    state.profile_items = to_strings(descriptor.profile);
    state.level_items = to_strings(descriptor.level);
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn offered(items: &[String], selected: &str) -> bool {
    !selected.trim().is_empty() && items.iter().any(|item| item == selected)
}
