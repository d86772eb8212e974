// Video panel state shared with the front-end

use serde::Serialize;

/// Flat record of every control the resolvers drive. Field names serialize to
/// the front-end's control names; an empty string is a blank control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    // Codec
    #[serde(rename = "Video_Codec")]
    pub codec: String, // resolved `-c:v ...` fragment
    #[serde(rename = "Video_Codec_Items")]
    pub codec_items: Vec<String>,
    #[serde(rename = "Video_Codec_SelectedItem")]
    pub codec_selected: String,
    #[serde(rename = "Video_Codec_IsEnabled")]
    pub codec_enabled: bool,

    // Encode speed
    #[serde(rename = "Video_EncodeSpeed_Items")]
    pub encode_speed_items: Vec<String>,
    #[serde(rename = "Video_EncodeSpeed_SelectedItem")]
    pub encode_speed_selected: String,
    #[serde(rename = "Video_EncodeSpeed_IsEnabled")]
    pub encode_speed_enabled: bool,

    #[serde(rename = "Video_HWAccel_SelectedItem")]
    pub hw_accel_selected: String,
    #[serde(rename = "Video_HWAccel_IsEnabled")]
    pub hw_accel_enabled: bool,

    // Quality
    #[serde(rename = "Video_Quality_Items")]
    pub quality_items: Vec<String>,
    #[serde(rename = "Video_Quality_SelectedItem")]
    pub quality_selected: String,
    #[serde(rename = "Video_Quality_IsEnabled")]
    pub quality_enabled: bool,

    // Pass
    #[serde(rename = "Video_Pass_Items")]
    pub pass_items: Vec<String>,
    #[serde(rename = "Video_Pass_SelectedItem")]
    pub pass_selected: String,
    #[serde(rename = "Video_Pass_IsEnabled")]
    pub pass_enabled: bool,

    // Rate fields
    #[serde(rename = "Video_CRF_Text")]
    pub crf_text: String,
    #[serde(rename = "Video_CRF_IsEnabled")]
    pub crf_enabled: bool,
    #[serde(rename = "Video_BitRate_Text")]
    pub bitrate_text: String,
    #[serde(rename = "Video_BitRate_IsEnabled")]
    pub bitrate_enabled: bool,
    #[serde(rename = "Video_MinRate_Text")]
    pub min_rate_text: String,
    #[serde(rename = "Video_MinRate_IsEnabled")]
    pub min_rate_enabled: bool,
    #[serde(rename = "Video_MaxRate_Text")]
    pub max_rate_text: String,
    #[serde(rename = "Video_MaxRate_IsEnabled")]
    pub max_rate_enabled: bool,
    #[serde(rename = "Video_BufSize_Text")]
    pub buf_size_text: String,
    #[serde(rename = "Video_BufSize_IsEnabled")]
    pub buf_size_enabled: bool,

    #[serde(rename = "Video_VBR_IsChecked")]
    pub vbr_checked: bool,
    #[serde(rename = "Video_VBR_IsEnabled")]
    pub vbr_enabled: bool,

    // Pixel format
    #[serde(rename = "Video_PixelFormat_Items")]
    pub pixel_format_items: Vec<String>,
    #[serde(rename = "Video_PixelFormat_SelectedItem")]
    pub pixel_format_selected: String,
    #[serde(rename = "Video_PixelFormat_IsEnabled")]
    pub pixel_format_enabled: bool,

    // Timing
    #[serde(rename = "Video_FPS_SelectedItem")]
    pub fps_selected: String,
    #[serde(rename = "Video_FPS_IsEnabled")]
    pub fps_enabled: bool,
    #[serde(rename = "Video_Speed_SelectedItem")]
    pub speed_selected: String,
    #[serde(rename = "Video_Speed_IsEnabled")]
    pub speed_enabled: bool,
    #[serde(rename = "Video_Vsync_SelectedItem")]
    pub vsync_selected: String,
    #[serde(rename = "Video_Vsync_IsEnabled")]
    pub vsync_enabled: bool,

    // Optimize
    #[serde(rename = "Video_Optimize_Items")]
    pub optimize_items: Vec<String>,
    #[serde(rename = "Video_Optimize_SelectedItem")]
    pub optimize_selected: String,
    #[serde(rename = "Video_Optimize_IsEnabled")]
    pub optimize_enabled: bool,
    #[serde(rename = "Video_Optimize_IsExpanded")]
    pub optimize_expanded: bool,
    #[serde(rename = "Video_Optimize_Tune_Items")]
    pub tune_items: Vec<String>,
    #[serde(rename = "Video_Optimize_Tune_SelectedItem")]
    pub tune_selected: String,
    #[serde(rename = "Video_Optimize_Tune_IsEnabled")]
    pub tune_enabled: bool,
    #[serde(rename = "Video_Optimize_Profile_Items")]
    pub profile_items: Vec<String>,
    #[serde(rename = "Video_Optimize_Profile_SelectedItem")]
    pub profile_selected: String,
    #[serde(rename = "Video_Optimize_Profile_IsEnabled")]
    pub profile_enabled: bool,
    #[serde(rename = "Video_Optimize_Level_Items")]
    pub level_items: Vec<String>,
    #[serde(rename = "Video_Optimize_Level_SelectedItem")]
    pub level_selected: String,
    #[serde(rename = "Video_Optimize_Level_IsEnabled")]
    pub level_enabled: bool,

    // Geometry
    #[serde(rename = "Video_Scale_SelectedItem")]
    pub scale_selected: String,
    #[serde(rename = "Video_Scale_IsEnabled")]
    pub scale_enabled: bool,
    #[serde(rename = "Video_ScalingAlgorithm_IsEnabled")]
    pub scaling_enabled: bool,
    #[serde(rename = "Video_Crop_IsEnabled")]
    pub crop_enabled: bool,

    // Color metadata
    #[serde(rename = "Video_Color_Range_SelectedItem")]
    pub color_range_selected: String,
    #[serde(rename = "Video_Color_Range_IsEnabled")]
    pub color_range_enabled: bool,
    #[serde(rename = "Video_Color_Space_SelectedItem")]
    pub color_space_selected: String,
    #[serde(rename = "Video_Color_Space_IsEnabled")]
    pub color_space_enabled: bool,
    #[serde(rename = "Video_Color_Primaries_SelectedItem")]
    pub color_primaries_selected: String,
    #[serde(rename = "Video_Color_Primaries_IsEnabled")]
    pub color_primaries_enabled: bool,
    #[serde(rename = "Video_Color_TransferCharacteristics_SelectedItem")]
    pub color_transfer_char_selected: String,
    #[serde(rename = "Video_Color_TransferCharacteristics_IsEnabled")]
    pub color_transfer_char_enabled: bool,
    #[serde(rename = "Video_Color_Matrix_SelectedItem")]
    pub color_matrix_selected: String,
    #[serde(rename = "Video_Color_Matrix_IsEnabled")]
    pub color_matrix_enabled: bool,

    // Subtitles (owned by the subtitle panel, enabled from here)
    #[serde(rename = "Subtitle_Codec_IsEnabled")]
    pub subtitle_codec_enabled: bool,
    #[serde(rename = "Subtitle_Stream_IsEnabled")]
    pub subtitle_stream_enabled: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            codec: String::new(),
            codec_items: crate::engine::CodecId::ALL
                .iter()
                .map(|id| id.label().to_string())
                .collect(),
            codec_selected: String::new(),
            codec_enabled: true, // the codec combo is always usable before a selection

            encode_speed_items: Vec::new(),
            encode_speed_selected: String::new(),
            encode_speed_enabled: false,
            hw_accel_selected: String::new(),
            hw_accel_enabled: false,

            quality_items: Vec::new(),
            quality_selected: String::new(),
            quality_enabled: false,
            pass_items: Vec::new(),
            pass_selected: String::new(),
            pass_enabled: false,

            crf_text: String::new(),
            crf_enabled: false,
            bitrate_text: String::new(),
            bitrate_enabled: false,
            min_rate_text: String::new(),
            min_rate_enabled: false,
            max_rate_text: String::new(),
            max_rate_enabled: false,
            buf_size_text: String::new(),
            buf_size_enabled: false,
            vbr_checked: false,
            vbr_enabled: false,

            pixel_format_items: Vec::new(),
            pixel_format_selected: String::new(),
            pixel_format_enabled: false,

            fps_selected: String::new(),
            fps_enabled: false,
            speed_selected: String::new(),
            speed_enabled: false,
            vsync_selected: String::new(),
            vsync_enabled: false,

            optimize_items: Vec::new(),
            optimize_selected: String::new(),
            optimize_enabled: false,
            optimize_expanded: false,
            tune_items: Vec::new(),
            tune_selected: String::new(),
            tune_enabled: false,
            profile_items: Vec::new(),
            profile_selected: String::new(),
            profile_enabled: false,
            level_items: Vec::new(),
            level_selected: String::new(),
            level_enabled: false,

            scale_selected: String::new(),
            scale_enabled: false,
            scaling_enabled: false,
            crop_enabled: false,

            color_range_selected: String::new(),
            color_range_enabled: false,
            color_space_selected: String::new(),
            color_space_enabled: false,
            color_primaries_selected: String::new(),
            color_primaries_enabled: false,
            color_transfer_char_selected: String::new(),
            color_transfer_char_enabled: false,
            color_matrix_selected: String::new(),
            color_matrix_enabled: false,

            subtitle_codec_enabled: false,
            subtitle_stream_enabled: false,
        }
    }
}

impl UiState {
    /// State serialized as a JSON object keyed by control name.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_every_codec() {
        let state = UiState::default();
        assert_eq!(state.codec_items.len(), 22);
        assert_eq!(state.codec_items[2], "x264");
        assert!(state.codec_enabled);
        assert!(!state.quality_enabled);
    }

    #[test]
    fn test_serializes_with_control_names() {
        let state = UiState {
            crf_text: "23".to_string(),
            vbr_checked: true,
            ..UiState::default()
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["Video_CRF_Text"], "23");
        assert_eq!(value["Video_VBR_IsChecked"], true);
        assert_eq!(value["Subtitle_Stream_IsEnabled"], false);
        assert!(value["Video_Codec_Items"].is_array());
        assert!(value.get("crf_text").is_none());
    }
}
