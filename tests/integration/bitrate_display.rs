use crate::common::helpers::*;
use vidctl::engine::controls::{DisplayValues, TextUpdate, resolve_bitrate_display};
use vidctl::engine::{CapabilityDescriptor, CodecId, QualityPreset, codecs};

const PRESETS: &[QualityPreset] = &[
    QualityPreset::mode("Auto"),
    QualityPreset::row("High", "18", "2000K", "2000K", "2500K", "", "", ""),
    QualityPreset::mode("Custom"),
];

fn resolve(quality: &str, pass: &str, vbr_checked: bool) -> DisplayValues {
    let descriptor = CapabilityDescriptor {
        quality: PRESETS,
        ..*codecs::descriptor(CodecId::HevcQsv)
    };
    resolve_bitrate_display(&descriptor, quality, pass, vbr_checked)
}

fn set(value: &str) -> TextUpdate {
    TextUpdate::Set(value.to_string())
}

#[test]
fn test_one_pass_shows_cbr_or_vbr() {
    let cbr = resolve("High", "1 Pass", false);
    assert_eq!(cbr.crf, TextUpdate::Clear);
    assert_eq!(cbr.bitrate, set("2000K"));

    let vbr = resolve("High", "1 Pass", true);
    assert_eq!(vbr.bitrate, set("2500K"));
    assert_eq!(vbr.min_rate, TextUpdate::Clear);
}

#[test]
fn test_crf_shows_crf_and_its_bitrate() {
    let display = resolve("High", "CRF", true);
    assert_eq!(display.crf, set("18"));
    assert_eq!(display.bitrate, set("2000K"));
}

#[test]
fn test_auto_pass_clears_all_fields() {
    let display = resolve("High", "auto", false);
    assert_eq!(
        display,
        DisplayValues {
            crf: TextUpdate::Clear,
            bitrate: TextUpdate::Clear,
            min_rate: TextUpdate::Clear,
            max_rate: TextUpdate::Clear,
            buf_size: TextUpdate::Clear,
        }
    );
}

#[test]
fn test_non_preset_qualities_keep_fields() {
    for quality in ["Auto", "Lossless", "Custom", "None", ""] {
        assert_eq!(
            resolve(quality, "CRF", false),
            DisplayValues::default(),
            "{}",
            quality
        );
    }
    // "Ultra" is not in the table
    assert_eq!(
        resolve("Ultra", "CRF", false),
        DisplayValues::default()
    );
}

#[test]
fn test_vp9_high_through_the_session() {
    let mut s = session_with("VP9", "High");
    {
        let state = s.state();
        assert_eq!(state.pass_selected, "CRF");
        assert_eq!(state.crf_text, "16");
        assert_eq!(state.bitrate_text, "1800K");
        assert_eq!(state.min_rate_text, "1200K");
        assert_eq!(state.max_rate_text, "2600K");
        assert_eq!(state.buf_size_text, "3600K");
    }

    // The codec lands on Auto first, which unchecks VBR
    s.pass_changed("1 Pass");
    assert!(!s.state().vbr_checked);
    assert_eq!(s.state().crf_text, "");
    assert_eq!(s.state().bitrate_text, "1800K");

    s.vbr_toggled(true);
    assert_eq!(s.state().bitrate_text, "2200K");
    assert_eq!(s.state().min_rate_text, "1200K");
}

#[test]
fn test_unknown_preset_under_bitrate_pass_clears_crf_only() {
    let x265 = codecs::descriptor(CodecId::X265);
    let display = resolve_bitrate_display(x265, "Extreme", "1 Pass", false);
    assert_eq!(
        display,
        DisplayValues {
            crf: TextUpdate::Clear,
            ..DisplayValues::default()
        }
    );
    assert_eq!(
        resolve_bitrate_display(x265, "Extreme", "CRF", false),
        DisplayValues::default()
    );
}

#[test]
fn test_switching_presets_overwrites_previous_values() {
    let mut s = session_with("VP9", "High");
    s.quality_changed("Medium");
    let state = s.state();
    assert_eq!(state.crf_text, "32");
    assert_eq!(state.bitrate_text, "900K");
    assert_eq!(state.buf_size_text, "1800K");

    // VP8 presets carry no min/max/buffer values
    let s = session_with("VP8", "High");
    assert_eq!(s.state().crf_text, "12");
    assert_eq!(s.state().min_rate_text, "");
    assert_eq!(s.state().buf_size_text, "");
}
