//! Validation error plumbing shared by the profile form.
//!
//! Validation is a pure function from draft state to an error map; the map
//! drives per-field highlighting while the fixed-bottom banner shows only the
//! highest-priority message. No error here ever crosses a component boundary
//! as a panic.

use std::collections::BTreeMap;
use thiserror::Error;

/// Profile form fields, declared in banner priority order (name first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Email,
    Mobile,
    Relation,
}

/// A single field's validation failure, with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Enter name")]
    NameMissing,
    #[error("Enter valid name")]
    NameInvalid,
    #[error("Enter email")]
    EmailMissing,
    #[error("Enter valid email")]
    EmailInvalid,
    #[error("Enter phone number")]
    MobileMissing,
    #[error("Enter valid phone number")]
    MobileInvalid,
    #[error("Select relation")]
    RelationMissing,
}

/// Field-to-error map produced by a validation pass.
///
/// Keyed by [`ProfileField`] in declaration order, so iteration yields the
/// banner priority ordering for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ProfileField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProfileField, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether this field should render with an error border.
    pub fn contains(&self, field: ProfileField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn get(&self, field: ProfileField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Drop one field's error (called when the user edits that field).
    pub fn clear_field(&mut self, field: ProfileField) {
        self.errors.remove(&field);
    }

    /// The one message the fixed-bottom banner shows: first failing field in
    /// priority order.
    pub fn banner_message(&self) -> Option<String> {
        self.errors.values().next().map(|e| e.to_string())
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.errors.keys().copied()
    }
}
