//! Resolvers for codec-dependent controls.
//!
//! Each resolver is a pure function of the capability table and the current
//! selections. It returns a patch that the session applies to [`UiState`]
//! with `apply_to`.
//!
//! [`UiState`]: crate::ui::state::UiState

mod bitrate;
mod enablement;
mod optimize;
mod pass;
mod pixel_format;
mod quality;
mod selection;

pub use bitrate::{DisplayValues, resolve_bitrate_display};
pub use enablement::{EnablementSet, FilterAction, resolve_enablement};
pub use optimize::{OptimizeControls, resolve_optimize};
pub use pass::{PassControls, resolve_pass};
pub use pixel_format::resolve_pixel_format;
pub use quality::{QualityControls, resolve_quality};
pub use selection::{EncodeSpeedMemory, SelectionSet, resolve_selections};

/// Write applied to a text field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextUpdate {
    /// Leave the displayed value as it is.
    #[default]
    Keep,
    Clear,
    Set(String),
}

impl TextUpdate {
    /// `Set` for an applicable preset value, `Clear` otherwise.
    pub fn from_preset(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::Set(v.to_string()),
            None => Self::Clear,
        }
    }

    pub fn apply(&self, field: &mut String) {
        match self {
            Self::Keep => {}
            Self::Clear => field.clear(),
            Self::Set(value) => value.clone_into(field),
        }
    }
}

/// Enabled state plus text write for one text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldControl {
    pub enabled: bool,
    pub text: TextUpdate,
}

impl FieldControl {
    pub const fn new(enabled: bool, text: TextUpdate) -> Self {
        Self { enabled, text }
    }

    pub const fn keep(enabled: bool) -> Self {
        Self::new(enabled, TextUpdate::Keep)
    }

    pub const fn clear(enabled: bool) -> Self {
        Self::new(enabled, TextUpdate::Clear)
    }

    pub fn apply(&self, enabled: &mut bool, text: &mut String) {
        *enabled = self.enabled;
        self.text.apply(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_update_apply() {
        let mut field = "2000K".to_string();
        TextUpdate::Keep.apply(&mut field);
        assert_eq!(field, "2000K");
        TextUpdate::Set("2500K".to_string()).apply(&mut field);
        assert_eq!(field, "2500K");
        TextUpdate::Clear.apply(&mut field);
        assert_eq!(field, "");
    }

    #[test]
    fn test_from_preset_clears_missing_values() {
        assert_eq!(TextUpdate::from_preset(None), TextUpdate::Clear);
        assert_eq!(
            TextUpdate::from_preset(Some("18")),
            TextUpdate::Set("18".to_string())
        );
    }
}
