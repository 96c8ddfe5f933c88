//! # Top-Level Application State
//!
//! Owns the per-concern stores and is passed by `&mut` into screens and form
//! controllers. Nothing in this crate reaches for a global; a test (or a
//! second window) can build as many independent `AppState`s as it likes.

use crate::ui::state::kid_profile_state::KidProfileState;
use crate::ui::state::profile_state::ProfileState;

/// All store state for one running app instance.
#[derive(Debug, Default)]
pub struct AppState {
    pub profile: ProfileState,
    pub kids: KidProfileState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
