// Front-end facing state and collaborators

pub mod filters;
pub mod state;

pub use filters::{FilterToggles, FilterVerb, VideoFilters};
pub use state::UiState;
