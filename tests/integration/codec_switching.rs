use crate::common::helpers::*;
use vidctl::engine::{CodecId, ControlSession, ResolveError, codecs};
use vidctl::ui::filters::{FilterToggles, FilterVerb};
use vidctl::ui::state::UiState;

#[test]
fn test_codec_change_loads_descriptor_items() {
    let mut s = session();
    s.codec_changed("HEVC NVENC").unwrap();
    let state = s.state();
    let descriptor = codecs::descriptor(CodecId::HevcNvenc);

    assert_eq!(state.codec_selected, "HEVC NVENC");
    assert_eq!(state.codec, "-c:v hevc_nvenc");
    assert_eq!(state.encode_speed_items, descriptor.encode_speed_names());
    assert_eq!(state.quality_items, descriptor.quality_names());
    assert_eq!(state.optimize_items, descriptor.optimize_names());
    assert_eq!(state.pixel_format_items.len(), descriptor.pixel_formats.len());
    assert_eq!(state.level_items.first().map(String::as_str), Some("none"));
    assert_eq!(state.hw_accel_selected, "cuvid");
}

#[test]
fn test_none_codec_disables_everything() {
    let mut s = session();
    s.codec_changed("None").unwrap();
    let state = s.state();

    assert_eq!(state.codec, "-vn");
    assert_eq!(state.quality_selected, "None");
    assert_eq!(state.pass_selected, "none");
    assert!(state.codec_enabled);
    assert!(
        enabled_controls(state).is_empty(),
        "still enabled: {:?}",
        enabled_controls(state)
    );
    assert_eq!(
        s.filters().history,
        vec![FilterVerb::SelectDefaults, FilterVerb::DisableAll]
    );
}

#[test]
fn test_switching_back_to_an_encoder_reenables_filters() {
    let mut s = session();
    s.codec_changed("Copy").unwrap();
    assert!(!s.filters().enabled);
    s.codec_changed("VP9").unwrap();
    assert!(s.filters().enabled);
    assert_eq!(s.filters().last(), Some(FilterVerb::EnableAll));
}

#[test]
fn test_terminal_codec_keeps_prior_selections() {
    let mut s = session();
    s.codec_changed("x264").unwrap();
    let before = s.state().clone();

    s.codec_changed("Copy").unwrap();
    let state = s.state();
    // Copy declares no defaults: nothing is blanked
    assert_eq!(state.fps_selected, before.fps_selected);
    assert_eq!(state.hw_accel_selected, before.hw_accel_selected);
    assert_eq!(state.pixel_format_selected, before.pixel_format_selected);
    assert_eq!(state.color_matrix_selected, before.color_matrix_selected);
    assert!(state.subtitle_codec_enabled);
    assert!(state.subtitle_stream_enabled);
}

#[test]
fn test_image_codec_leaves_timing_untouched() {
    let state = UiState {
        fps_selected: "29.97".to_string(),
        vsync_selected: "cfr".to_string(),
        ..UiState::default()
    };
    let mut s = ControlSession::with_state(state, FilterToggles::default());
    s.codec_changed("PNG").unwrap();

    let state = s.state();
    assert_eq!(state.fps_selected, "29.97");
    assert_eq!(state.vsync_selected, "cfr");
    assert_eq!(state.pixel_format_selected, "rgb24");
    assert_eq!(state.quality_selected, "Lossless");
    assert!(!state.fps_enabled);
}

#[test]
fn test_quality_selection_survives_when_offered() {
    let mut s = session_with("x264", "High");
    s.codec_changed("x265").unwrap();
    assert_eq!(s.state().quality_selected, "High");

    // FFV1 only offers Lossless
    s.codec_changed("FFV1").unwrap();
    assert_eq!(s.state().quality_selected, "Lossless");
    assert_eq!(s.state().pixel_format_selected, "yuv444p");
}

#[test]
fn test_encode_speed_memory_skips_placeholders() {
    let mut s = session();
    s.codec_changed("VP9").unwrap();
    assert_eq!(s.state().encode_speed_selected, "Medium");

    // the remembered speed wins over the codec default
    s.codec_changed("HEVC AMF").unwrap();
    assert_eq!(s.state().encode_speed_selected, "Balanced");
    s.codec_changed("x264").unwrap();
    assert_eq!(s.state().encode_speed_selected, "Medium");

    s.codec_changed("None").unwrap();
    assert_eq!(s.state().encode_speed_selected, "none");
    s.codec_changed("AV1").unwrap();
    assert_eq!(s.state().encode_speed_selected, "Medium");
}

#[test]
fn test_unknown_and_blank_labels() {
    let mut s = session();
    assert!(s.codec_changed("").is_ok());
    assert_eq!(s.codec(), None);
    assert_eq!(
        s.codec_changed("DNxHD"),
        Err(ResolveError::UnknownCodec("DNxHD".to_string()))
    );
    assert_eq!(s.codec(), None);
}

#[test]
fn test_codec_change_is_idempotent() {
    for id in CodecId::ALL {
        let mut s = session();
        s.codec_changed(id.label()).unwrap();
        let first = s.state().clone();
        s.codec_changed(id.label()).unwrap();
        assert_eq!(s.state(), &first, "{} changed on reselect", id);
    }
}

#[test]
fn test_ui_state_json_uses_control_names() {
    let s = session_with("VP9", "High");
    let value: serde_json::Value = serde_json::from_str(&s.state().to_json().unwrap()).unwrap();
    assert_eq!(value["Video_Codec"], "-c:v libvpx-vp9 -row-mt 1");
    assert_eq!(value["Video_Quality_SelectedItem"], "High");
    assert_eq!(value["Video_Pass_SelectedItem"], "CRF");
    assert_eq!(value["Video_CRF_Text"], "16");
}
