//! Presentation-layer core for the Wippi kids content app.
//!
//! Screens and visual styling live elsewhere; this crate owns the state the
//! screens render from: profile and kid-profile stores, form controllers with
//! client-side validation, preference tag selection, and the mocked service
//! layer behind the profile screen.

pub mod services;
pub mod ui;
