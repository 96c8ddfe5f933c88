//! # Form Controllers
//!
//! Behavioral halves of the form screens: draft fields bound to inputs,
//! entry-time filtering, pure validation, and the commit step that writes a
//! validated draft into its store. Rendering is out of scope; screens call
//! into these controllers from their event handlers.

pub mod kid_profile_form;
pub mod profile_form;
pub mod tag_selector;
pub mod validation;

pub use kid_profile_form::{KidProfileFormController, KidSaveOutcome};
pub use profile_form::{BackAction, ProfileFormController, SubmitOutcome};
pub use tag_selector::{TagListKind, TagSelectorSession, ToggleOutcome};
pub use validation::{FieldError, ProfileField, ValidationErrors};
