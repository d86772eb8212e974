use crate::common::helpers::*;
use vidctl::engine::controls::resolve_quality;
use vidctl::engine::{CodecId, QualityMode};

const ALL_RATE_CONTROLS: [bool; 7] = [true; 7];
const NO_RATE_CONTROLS: [bool; 7] = [false; 7];

#[test]
fn test_x264_custom_opens_rate_controls() {
    let s = session_with("x264", "Custom");
    let state = s.state();
    assert_eq!(rate_flags(state), ALL_RATE_CONTROLS);
    assert!(state.scale_enabled);
    assert_eq!(state.pass_selected, "CRF");
    assert_eq!(state.crf_text, "");
    assert_eq!(state.bitrate_text, "");
}

#[test]
fn test_custom_pass_choice_drives_crf() {
    let mut s = session_with("x264", "Custom");
    s.pass_changed("CRF");
    assert!(!s.state().crf_enabled);
    s.pass_changed("2 Pass");
    assert!(s.state().crf_enabled);
    assert_eq!(s.state().pass_selected, "2 Pass");

    // the user's pass survives a round trip through another quality
    s.quality_changed("High");
    s.quality_changed("Custom");
    assert_eq!(s.state().pass_selected, "2 Pass");
    assert!(s.state().crf_enabled);

    // and so does the CRF rule for an explicit CRF pass
    s.pass_changed("CRF");
    s.quality_changed("High");
    s.quality_changed("Custom");
    assert_eq!(s.state().pass_selected, "CRF");
    assert!(!s.state().crf_enabled);
}

#[test]
fn test_custom_enables_vbr_for_every_codec() {
    for id in CodecId::ALL {
        let mut s = session();
        s.codec_changed(id.label()).unwrap();
        s.quality_changed("Custom");
        assert!(s.state().vbr_enabled, "{}", id);
        assert!(s.state().bitrate_enabled, "{}", id);
    }
    assert!(session_with("JPEG", "Custom").state().vbr_enabled);
    assert!(session_with("WebP", "Custom").state().vbr_enabled);
}

#[test]
fn test_scale_follows_quality_for_every_offered_quality() {
    for id in CodecId::ALL {
        let mut s = session();
        s.codec_changed(id.label()).unwrap();
        for quality in s.state().quality_items.clone() {
            s.quality_changed(&quality);
            assert_eq!(
                s.state().scale_enabled,
                quality != "None",
                "{} {}",
                id,
                quality
            );
        }
    }
    let copy = session_with("Copy", "Auto");
    assert!(copy.state().scale_enabled);
}

#[test]
fn test_image_codecs_never_open_crf() {
    for codec in ["JPEG", "WebP"] {
        let mut s = session_with(codec, "Custom");
        assert!(!s.state().crf_enabled, "{}", codec);
        s.pass_changed("CRF");
        assert!(!s.state().crf_enabled, "{}", codec);
    }
}

#[test]
fn test_nvenc_lossless_switches_encode_speed() {
    for codec in ["H264 NVENC", "HEVC NVENC"] {
        let s = session_with(codec, "Lossless");
        let state = s.state();
        assert_eq!(state.encode_speed_selected, "Lossless");
        assert_eq!(state.pixel_format_selected, "yuv444p");
        assert_eq!(rate_flags(state), NO_RATE_CONTROLS);
        assert!(state.scale_enabled);
        assert_eq!(state.pass_items, vec!["1 Pass"]);
    }
}

#[test]
fn test_lossless_keeps_displayed_values() {
    let mut s = session_with("x265", "High");
    assert_eq!(s.state().crf_text, "20");
    s.quality_changed("Lossless");
    assert_eq!(s.state().crf_text, "20");
    assert!(!s.state().crf_enabled);
    assert_eq!(s.state().pixel_format_selected, "yuv444p");
}

#[test]
fn test_auto_clears_and_unchecks() {
    let mut s = session_with("VP9", "High");
    s.vbr_toggled(true);
    s.quality_changed("Auto");
    let state = s.state();
    assert!(!state.vbr_checked);
    assert_eq!(state.crf_text, "");
    assert_eq!(state.bitrate_text, "");
    assert_eq!(state.pass_items, vec!["auto"]);
    assert_eq!(rate_flags(state), NO_RATE_CONTROLS);
    assert!(state.scale_enabled);
}

#[test]
fn test_named_preset_vbr_exclusions() {
    let excluded = [
        CodecId::Vp8,
        CodecId::X264,
        CodecId::H264Amf,
        CodecId::H264Nvenc,
        CodecId::H264Qsv,
        CodecId::Jpeg,
        CodecId::Av1,
        CodecId::Ffv1,
        CodecId::MagicYuv,
        CodecId::HuffYuv,
        CodecId::Copy,
        CodecId::None,
    ];
    let high = QualityMode::Named("High".to_string());
    for id in CodecId::ALL {
        let controls = resolve_quality(id, &high);
        assert_eq!(controls.vbr_enabled, !excluded.contains(&id), "{}", id);
        assert!(controls.pass_enabled);
        assert!(controls.scale_enabled);
    }
}

#[test]
fn test_named_preset_in_session() {
    let s = session_with("HEVC QSV", "Medium");
    let state = s.state();
    assert!(state.pass_enabled);
    assert!(state.vbr_enabled);
    assert!(!state.crf_enabled);
    assert!(!state.bitrate_enabled);

    let s = session_with("H264 QSV", "Medium");
    assert!(!s.state().vbr_enabled);
}

#[test]
fn test_exactly_one_scale_rule_per_mode() {
    let modes = [
        (QualityMode::Auto, true),
        (QualityMode::Lossless, true),
        (QualityMode::Custom, true),
        (QualityMode::None, false),
        (QualityMode::Named("Low".to_string()), true),
    ];
    for id in CodecId::ALL {
        for (mode, scale) in &modes {
            assert_eq!(resolve_quality(id, mode).scale_enabled, *scale, "{} {}", id, mode);
        }
    }
}
