use crate::engine::codecs;
use crate::engine::core::{CapabilityDescriptor, CodecId, QualityMode};
use crate::ui::state::UiState;

/// Default selections for a codec. Only defaults the codec declares are
/// present, so applying the set never blanks a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSet {
    pub encode_speed: Option<&'static str>,
    pub hw_accel: Option<&'static str>,
    pub pixel_format: Option<&'static str>,
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

pub fn resolve_selections(codec: CodecId, quality: &QualityMode) -> SelectionSet {
    let descriptor = codecs::descriptor(codec);
    let defaults = descriptor.selections;
    SelectionSet {
        encode_speed: defaults.encode_speed,
        hw_accel: defaults.hw_accel,
        pixel_format: pixel_format_default(descriptor, quality),
        fps: defaults.fps,
        speed: defaults.speed,
        vsync: defaults.vsync,
        scale: defaults.scale,
        color_range: defaults.color_range,
        color_space: defaults.color_space,
        color_primaries: defaults.color_primaries,
        color_transfer_char: defaults.color_transfer_char,
        color_matrix: defaults.color_matrix,
    }
}

/// Lossless quality switches to the codec's lossless pixel format.
pub(super) fn pixel_format_default(
    descriptor: &CapabilityDescriptor,
    quality: &QualityMode,
) -> Option<&'static str> {
    match quality {
        QualityMode::Lossless => descriptor.selections.pixel_format_lossless,
        _ => descriptor.selections.pixel_format,
    }
}

impl SelectionSet {
    /// Overwrite only the controls this set has a value for.
    pub fn apply_to(&self, state: &mut UiState) {
        let fields: [(Option<&'static str>, &mut String); 12] = [
            (self.encode_speed, &mut state.encode_speed_selected),
            (self.hw_accel, &mut state.hw_accel_selected),
            (self.pixel_format, &mut state.pixel_format_selected),
            (self.fps, &mut state.fps_selected),
            (self.speed, &mut state.speed_selected),
            (self.vsync, &mut state.vsync_selected),
            (self.scale, &mut state.scale_selected),
            (self.color_range, &mut state.color_range_selected),
            (self.color_space, &mut state.color_space_selected),
            (self.color_primaries, &mut state.color_primaries_selected),
            (self.color_transfer_char, &mut state.color_transfer_char_selected),
            (self.color_matrix, &mut state.color_matrix_selected),
        ];
        for (value, field) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                value.clone_into(field);
            }
        }
    }
}

/// Encode speed carried across codec switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeSpeedMemory {
    previous: Option<String>,
}

impl EncodeSpeedMemory {
    /// Record the speed selected for the outgoing codec. Blank, `auto` and
    /// `none` are placeholders and never replace a remembered speed.
    pub fn remember(&mut self, selected: &str) {
        let selected = selected.trim();
        if selected.is_empty()
            || selected.eq_ignore_ascii_case("auto")
            || selected.eq_ignore_ascii_case("none")
        {
            return;
        }
        self.previous = Some(selected.to_string());
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Speed to select from the new codec's `items`: the remembered one when
    /// offered, then the codec default when offered, then the first item.
    pub fn restore(&self, items: &[String], codec_default: Option<&str>) -> String {
        let offered = |name: &str| items.iter().any(|item| item == name);
        self.previous()
            .filter(|name| offered(name))
            .or_else(|| codec_default.filter(|name| offered(name)))
            .or_else(|| items.first().map(String::as_str))
            .unwrap_or_default()
            .to_string()
    }
}
