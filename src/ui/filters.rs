// Video filter panel collaborator

use serde::Serialize;

/// Verbs the session triggers on the filter panel (deblock, deband, ...).
/// The panel itself is owned by the front-end.
pub trait VideoFilters {
    fn enable_all(&mut self);
    fn disable_all(&mut self);
    /// Reset every filter to its default selection.
    fn select_defaults(&mut self);
}

/// Last verb applied to the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterVerb {
    EnableAll,
    DisableAll,
    SelectDefaults,
}

/// In-memory filter panel: tracks whether filters are usable and records every
/// verb it receives. Used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterToggles {
    pub enabled: bool,
    pub defaults_selected: bool,
    pub history: Vec<FilterVerb>,
}

impl VideoFilters for FilterToggles {
    fn enable_all(&mut self) {
        self.enabled = true;
        self.history.push(FilterVerb::EnableAll);
    }

    fn disable_all(&mut self) {
        self.enabled = false;
        self.history.push(FilterVerb::DisableAll);
    }

    fn select_defaults(&mut self) {
        self.defaults_selected = true;
        self.history.push(FilterVerb::SelectDefaults);
    }
}

impl FilterToggles {
    pub fn last(&self) -> Option<FilterVerb> {
        self.history.last().copied()
    }
}
