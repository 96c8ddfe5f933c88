//! # Profile Store
//!
//! Single source of truth for the parent/guardian profile: at most one
//! committed record, the screen's tri-state mode, and the dirty/confirm-modal
//! flags the back guard drives.

use log::info;
use shared::ProfileRecord;

/// Which rendition of the profile screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    /// No record exists yet; all fields start empty.
    Create,
    /// A record exists and is shown read-only.
    View,
    /// Fields are pre-populated from the record and editable.
    Edit,
}

/// Profile store. Commits always replace the record wholesale; the form
/// controller validates before calling in, so the store never holds a
/// partially valid record.
#[derive(Debug)]
pub struct ProfileState {
    pub profile: Option<ProfileRecord>,
    pub mode: ProfileMode,
    pub is_dirty: bool,
    pub show_confirm_modal: bool,
}

impl ProfileState {
    pub fn new() -> Self {
        Self {
            profile: None,
            mode: ProfileMode::Create,
            is_dirty: false,
            show_confirm_modal: false,
        }
    }

    /// Commit the first profile. Input is pre-validated by the caller; this
    /// always succeeds.
    pub fn create_profile(&mut self, data: ProfileRecord) {
        info!("Creating profile for {}", data.name);
        self.profile = Some(data);
        self.mode = ProfileMode::View;
        self.is_dirty = false;
    }

    /// Replace an existing profile. Identical contract to
    /// [`create_profile`](Self::create_profile); the split only records
    /// caller intent.
    pub fn update_profile(&mut self, data: ProfileRecord) {
        info!("Updating profile for {}", data.name);
        self.profile = Some(data);
        self.mode = ProfileMode::View;
        self.is_dirty = false;
    }

    /// Set the screen mode. Legal transition sequencing is the form
    /// controller's job, not the store's.
    pub fn set_mode(&mut self, mode: ProfileMode) {
        self.mode = mode;
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.is_dirty = dirty;
    }

    pub fn open_confirm_modal(&mut self) {
        self.show_confirm_modal = true;
    }

    pub fn close_confirm_modal(&mut self) {
        self.show_confirm_modal = false;
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Relation;

    fn sample_record() -> ProfileRecord {
        ProfileRecord {
            name: "Riya Sharma".to_string(),
            email: "riyasharma@gmail.com".to_string(),
            mobile: "9999988888".to_string(),
            relation: Relation::Mom,
        }
    }

    #[test]
    fn test_new_store_has_no_record_and_create_mode() {
        let state = ProfileState::new();
        assert!(state.profile.is_none());
        assert_eq!(state.mode, ProfileMode::Create);
        assert!(!state.is_dirty);
        assert!(!state.show_confirm_modal);
    }

    #[test]
    fn test_create_profile_commits_and_returns_to_view() {
        let mut state = ProfileState::new();
        state.set_mode(ProfileMode::Create);
        state.set_dirty(true);

        state.create_profile(sample_record());

        assert_eq!(state.profile, Some(sample_record()));
        assert_eq!(state.mode, ProfileMode::View);
        assert!(!state.is_dirty);
    }

    #[test]
    fn test_update_replaces_record_wholesale() {
        let mut state = ProfileState::new();
        state.create_profile(sample_record());

        let replacement = ProfileRecord {
            name: "Arjun Sharma".to_string(),
            email: "arjun@example.com".to_string(),
            mobile: "8888877777".to_string(),
            relation: Relation::Dad,
        };
        state.set_mode(ProfileMode::Edit);
        state.update_profile(replacement.clone());

        assert_eq!(state.profile, Some(replacement));
        assert_eq!(state.mode, ProfileMode::View);
    }

    #[test]
    fn test_modal_flags_are_independent() {
        let mut state = ProfileState::new();
        state.open_confirm_modal();
        assert!(state.show_confirm_modal);
        assert!(!state.is_dirty);
        state.close_confirm_modal();
        assert!(!state.show_confirm_modal);
    }
}
