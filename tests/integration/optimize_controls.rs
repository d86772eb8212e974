use crate::common::helpers::*;

fn optimize_flags(s: &TestSession) -> [bool; 3] {
    let state = s.state();
    [state.tune_enabled, state.profile_enabled, state.level_enabled]
}

#[test]
fn test_custom_opens_tune_profile_level() {
    for codec in ["x264", "x265", "H264 NVENC", "HEVC QSV"] {
        let mut s = session();
        s.codec_changed(codec).unwrap();
        s.optimize_changed("Custom");
        assert_eq!(optimize_flags(&s), [true; 3], "{}", codec);
    }
}

#[test]
fn test_named_preset_shows_values_read_only() {
    let mut s = session();
    s.codec_changed("x264").unwrap();
    s.optimize_changed("Custom");
    s.optimize_changed("Web");

    let state = s.state();
    assert_eq!(optimize_flags(&s), [false; 3]);
    assert_eq!(state.tune_selected, "fastdecode");
    assert_eq!(state.profile_selected, "baseline");
    assert_eq!(state.level_selected, "3.0");

    // Custom keeps whatever was shown last
    s.optimize_changed("Custom");
    assert_eq!(s.state().profile_selected, "baseline");
}

#[test]
fn test_x265_web_preset() {
    let mut s = session();
    s.codec_changed("x265").unwrap();
    s.optimize_changed("Web");
    assert_eq!(s.state().profile_selected, "main");
    assert_eq!(s.state().level_selected, "3.1");
}

#[test]
fn test_codecs_without_optimize_controls_stay_locked() {
    for codec in ["VP9", "AV1", "MPEG-4"] {
        let mut s = session();
        s.codec_changed(codec).unwrap();
        s.optimize_changed("Custom");
        assert_eq!(optimize_flags(&s), [false; 3], "{}", codec);
    }
}

#[test]
fn test_unknown_optimize_preset_changes_no_values() {
    let mut s = session();
    s.codec_changed("x264").unwrap();
    s.optimize_changed("Web");
    s.optimize_changed("Broadcast");
    assert_eq!(optimize_flags(&s), [false; 3]);
    assert_eq!(s.state().tune_selected, "fastdecode");
}
