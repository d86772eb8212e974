use proptest::prelude::*;
use vidctl::engine::{CodecId, ControlSession, codecs};
use vidctl::ui::filters::FilterToggles;
use vidctl::ui::state::UiState;

use crate::common::helpers::*;

fn codec_strategy() -> impl Strategy<Value = CodecId> {
    (0..CodecId::ALL.len()).prop_map(|i| CodecId::ALL[i])
}

/// Flags written only by the codec's enablement set.
fn codec_driven_flags(state: &UiState) -> [bool; 16] {
    [
        state.encode_speed_enabled,
        state.hw_accel_enabled,
        state.quality_enabled,
        state.pixel_format_enabled,
        state.fps_enabled,
        state.speed_enabled,
        state.vsync_enabled,
        state.optimize_enabled,
        state.scaling_enabled,
        state.crop_enabled,
        state.color_range_enabled,
        state.color_space_enabled,
        state.color_primaries_enabled,
        state.color_transfer_char_enabled,
        state.color_matrix_enabled,
        state.subtitle_codec_enabled,
    ]
}

fn expected_flags(id: CodecId) -> [bool; 16] {
    let e = codecs::descriptor(id).enabled;
    [
        e.encode_speed,
        e.hw_accel,
        e.quality,
        e.pixel_format,
        e.fps,
        e.speed,
        e.vsync,
        e.optimize,
        e.scaling,
        e.crop,
        e.color_range,
        e.color_space,
        e.color_primaries,
        e.color_transfer_char,
        e.color_matrix,
        e.subtitle_codec,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn codec_change_is_idempotent(from in codec_strategy(), to in codec_strategy()) {
        let mut s = session();
        s.codec_changed(from.label()).unwrap();
        s.codec_changed(to.label()).unwrap();
        let once = s.state().clone();
        s.codec_changed(to.label()).unwrap();
        prop_assert_eq!(s.state(), &once);
    }

    #[test]
    fn enablement_depends_only_on_the_new_codec(from in codec_strategy(), to in codec_strategy()) {
        let mut s = session();
        s.codec_changed(from.label()).unwrap();
        s.codec_changed(to.label()).unwrap();
        prop_assert_eq!(codec_driven_flags(s.state()), expected_flags(to));
        prop_assert!(s.state().codec_enabled);
    }

    #[test]
    fn absent_defaults_never_blank_a_selection(to in codec_strategy(), fps in "[0-9]{2}") {
        let state = UiState { fps_selected: fps.clone(), ..UiState::default() };
        let mut s = ControlSession::with_state(state, FilterToggles::default());
        s.codec_changed(to.label()).unwrap();
        let expected = codecs::descriptor(to).selections.fps.map(str::to_string).unwrap_or(fps);
        prop_assert_eq!(&s.state().fps_selected, &expected);
    }

    #[test]
    fn selected_pass_is_always_offered(
        codec in codec_strategy(),
        quality_index in 0usize..8,
        pass in prop::sample::select(vec!["CRF", "1 Pass", "2 Pass", "auto", "none"]),
    ) {
        let mut s = session();
        s.codec_changed(codec.label()).unwrap();
        let items = s.state().quality_items.clone();
        let quality = items[quality_index % items.len()].clone();
        s.quality_changed(&quality);
        s.pass_changed(pass);
        s.quality_changed(&quality);

        let state = s.state();
        prop_assert!(
            state.pass_items.contains(&state.pass_selected),
            "{} {}: {:?} not in {:?}",
            codec,
            quality,
            state.pass_selected,
            state.pass_items
        );
    }
}
