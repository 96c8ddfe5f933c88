//! # UI State Containers
//!
//! One container per store, plus the top-level [`AppState`] that owns them.
//! Containers hold committed records and screen-level flags only; draft field
//! values and validation errors live in the form controllers under
//! [`crate::ui::forms`].
//!
//! Stores are never module-level singletons. `AppState` is constructed once
//! and passed by `&mut` into whatever controller needs it.

pub mod app_state;
pub mod kid_profile_state;
pub mod profile_state;

pub use app_state::AppState;
pub use kid_profile_state::KidProfileState;
pub use profile_state::{ProfileMode, ProfileState};
