#![allow(dead_code)] // Not every integration module uses every helper

use vidctl::engine::ControlSession;
use vidctl::ui::filters::FilterToggles;
use vidctl::ui::state::UiState;

pub type TestSession = ControlSession<FilterToggles>;

pub fn session() -> TestSession {
    ControlSession::new(FilterToggles::default())
}

/// Session with `codec` selected, then `quality`.
pub fn session_with(codec: &str, quality: &str) -> TestSession {
    let mut session = session();
    session
        .codec_changed(codec)
        .unwrap_or_else(|e| panic!("codec '{}' should resolve: {}", codec, e));
    session.quality_changed(quality);
    session
}

/// Enabled flags of the rate controls driven by the quality mode, in order:
/// pass, crf, bitrate, vbr, min rate, max rate, buffer size.
pub fn rate_flags(state: &UiState) -> [bool; 7] {
    [
        state.pass_enabled,
        state.crf_enabled,
        state.bitrate_enabled,
        state.vbr_enabled,
        state.min_rate_enabled,
        state.max_rate_enabled,
        state.buf_size_enabled,
    ]
}

/// Every enabled flag except the codec combo.
pub fn dependent_flags(state: &UiState) -> Vec<(&'static str, bool)> {
    vec![
        ("encode_speed", state.encode_speed_enabled),
        ("hw_accel", state.hw_accel_enabled),
        ("quality", state.quality_enabled),
        ("pass", state.pass_enabled),
        ("crf", state.crf_enabled),
        ("bitrate", state.bitrate_enabled),
        ("vbr", state.vbr_enabled),
        ("min_rate", state.min_rate_enabled),
        ("max_rate", state.max_rate_enabled),
        ("buf_size", state.buf_size_enabled),
        ("pixel_format", state.pixel_format_enabled),
        ("fps", state.fps_enabled),
        ("speed", state.speed_enabled),
        ("vsync", state.vsync_enabled),
        ("optimize", state.optimize_enabled),
        ("tune", state.tune_enabled),
        ("profile", state.profile_enabled),
        ("level", state.level_enabled),
        ("scale", state.scale_enabled),
        ("scaling", state.scaling_enabled),
        ("crop", state.crop_enabled),
        ("color_range", state.color_range_enabled),
        ("color_space", state.color_space_enabled),
        ("color_primaries", state.color_primaries_enabled),
        ("color_transfer_char", state.color_transfer_char_enabled),
        ("color_matrix", state.color_matrix_enabled),
        ("subtitle_codec", state.subtitle_codec_enabled),
        ("subtitle_stream", state.subtitle_stream_enabled),
    ]
}

/// Names of the dependent controls that are enabled.
pub fn enabled_controls(state: &UiState) -> Vec<&'static str> {
    dependent_flags(state)
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| name)
        .collect()
}
