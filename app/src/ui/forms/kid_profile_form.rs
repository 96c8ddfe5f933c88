//! # Kid Profile Form Controller
//!
//! Create/edit flow for the child profile screen. Name and date of birth are
//! required; gender and language fall back to defaults instead. Saving in
//! edit mode with an unchanged draft is a plain return with no prompt; any
//! real change routes through the confirm dialog before the commit lands.

use chrono::NaiveDate;
use shared::{Gender, KidProfileRecord, Language};
use thiserror::Error;

use crate::ui::state::kid_profile_state::KidProfileState;

/// In-progress field values for the kid profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KidProfileDraft {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub language: Language,
}

impl Default for KidProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: None,
            gender: Gender::default(),
            language: Language::default(),
        }
    }
}

impl KidProfileDraft {
    fn from_record(record: &KidProfileRecord) -> Self {
        Self {
            name: record.name.clone(),
            date_of_birth: Some(record.date_of_birth),
            gender: record.gender,
            language: record.language,
        }
    }
}

/// Single banner message for the kid form; worst case first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KidFormError {
    #[error("Enter name and select date")]
    NameAndDateMissing,
    #[error("Enter name")]
    NameMissing,
    #[error("Select date")]
    DateMissing,
}

/// Outcome of pressing save on the kid profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KidSaveOutcome {
    /// Validation failed; the error banner is populated, nothing mutated.
    Invalid,
    /// Edit-mode draft is identical to the edit-entry snapshot; nothing to
    /// save and no prompt shown.
    Unchanged,
    /// Valid and changed; the confirm prompt is now showing.
    ConfirmRequested,
}

/// Controller for the kid profile form screen.
#[derive(Debug)]
pub struct KidProfileFormController {
    draft: KidProfileDraft,
    snapshot: KidProfileDraft,
    pub error: Option<KidFormError>,
    pub show_confirm_modal: bool,
}

impl KidProfileFormController {
    /// Open the screen. In edit mode the draft is seeded from the committed
    /// record and a snapshot of it is kept for the unchanged-save
    /// short-circuit; otherwise everything starts at defaults.
    pub fn open(store: &KidProfileState) -> Self {
        let draft = if store.edit_mode {
            store
                .kid_profile
                .as_ref()
                .map(KidProfileDraft::from_record)
                .unwrap_or_default()
        } else {
            KidProfileDraft::default()
        };

        Self {
            snapshot: draft.clone(),
            draft,
            error: None,
            show_confirm_modal: false,
        }
    }

    pub fn draft(&self) -> &KidProfileDraft {
        &self.draft
    }

    /// Name input, filtered to letters and whitespace as typed.
    pub fn set_name(&mut self, input: &str) {
        self.draft.name = input
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();
    }

    /// Date handed over by the picker widget, already a calendar date.
    pub fn set_date_of_birth(&mut self, date: NaiveDate) {
        self.draft.date_of_birth = Some(date);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    pub fn set_language(&mut self, language: Language) {
        self.draft.language = language;
    }

    fn validate(&self) -> Option<KidFormError> {
        let name_missing = self.draft.name.trim().is_empty();
        let date_missing = self.draft.date_of_birth.is_none();
        match (name_missing, date_missing) {
            (true, true) => Some(KidFormError::NameAndDateMissing),
            (true, false) => Some(KidFormError::NameMissing),
            (false, true) => Some(KidFormError::DateMissing),
            (false, false) => None,
        }
    }

    /// Save button. Validates, short-circuits unchanged edit-mode drafts,
    /// and otherwise raises the confirm prompt. The store is untouched until
    /// [`confirm_save`](Self::confirm_save).
    pub fn save(&mut self, store: &KidProfileState) -> KidSaveOutcome {
        if let Some(error) = self.validate() {
            self.error = Some(error);
            return KidSaveOutcome::Invalid;
        }
        self.error = None;

        if store.edit_mode && self.draft == self.snapshot {
            return KidSaveOutcome::Unchanged;
        }

        self.show_confirm_modal = true;
        KidSaveOutcome::ConfirmRequested
    }

    /// "No" on the confirm dialog.
    pub fn cancel_confirm(&mut self) {
        self.show_confirm_modal = false;
    }

    /// "Yes" on the confirm dialog: commit the draft wholesale and leave
    /// edit mode. Returns the committed record for the view screen.
    pub fn confirm_save(&mut self, store: &mut KidProfileState) -> Option<KidProfileRecord> {
        let date_of_birth = self.draft.date_of_birth?;
        let record = KidProfileRecord {
            name: self.draft.name.trim().to_string(),
            date_of_birth,
            gender: self.draft.gender,
            language: self.draft.language,
        };

        store.set_kid_profile(record.clone());
        store.set_edit_mode(false);
        self.show_confirm_modal = false;
        self.snapshot = self.draft.clone();

        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed_store() -> KidProfileState {
        let mut store = KidProfileState::new();
        store.set_kid_profile(KidProfileRecord {
            name: "Aarav".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
            gender: Gender::Boy,
            language: Language::Hinglish,
        });
        store
    }

    #[test]
    fn test_create_flow_commits_through_confirm() {
        let mut store = KidProfileState::new();
        let mut form = KidProfileFormController::open(&store);

        form.set_name("Aarav");
        form.set_date_of_birth(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap());
        form.set_gender(Gender::Boy);

        assert_eq!(form.save(&store), KidSaveOutcome::ConfirmRequested);
        assert!(form.show_confirm_modal);
        assert!(store.kid_profile.is_none());

        let record = form.confirm_save(&mut store).unwrap();
        assert_eq!(record.name, "Aarav");
        assert_eq!(record.language, Language::English);
        assert_eq!(store.kid_profile, Some(record));
        assert!(!form.show_confirm_modal);
    }

    #[test]
    fn test_validation_message_precedence() {
        let store = KidProfileState::new();
        let mut form = KidProfileFormController::open(&store);

        assert_eq!(form.save(&store), KidSaveOutcome::Invalid);
        assert_eq!(form.error, Some(KidFormError::NameAndDateMissing));

        form.set_name("Aarav");
        assert_eq!(form.save(&store), KidSaveOutcome::Invalid);
        assert_eq!(form.error, Some(KidFormError::DateMissing));

        form.set_name("");
        form.set_date_of_birth(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(form.save(&store), KidSaveOutcome::Invalid);
        assert_eq!(form.error, Some(KidFormError::NameMissing));
    }

    #[test]
    fn test_unchanged_edit_draft_short_circuits() {
        let mut store = committed_store();
        store.set_edit_mode(true);
        let mut form = KidProfileFormController::open(&store);

        let before = store.kid_profile.clone();
        assert_eq!(form.save(&store), KidSaveOutcome::Unchanged);
        assert!(!form.show_confirm_modal);
        assert_eq!(store.kid_profile, before);
        assert!(store.edit_mode);
    }

    #[test]
    fn test_changed_edit_draft_prompts_before_mutation() {
        let mut store = committed_store();
        store.set_edit_mode(true);
        let mut form = KidProfileFormController::open(&store);

        form.set_language(Language::English);
        assert_eq!(form.save(&store), KidSaveOutcome::ConfirmRequested);
        // nothing mutated until confirmation
        assert_eq!(store.kid_profile.as_ref().unwrap().language, Language::Hinglish);

        form.confirm_save(&mut store).unwrap();
        assert_eq!(store.kid_profile.as_ref().unwrap().language, Language::English);
        assert!(!store.edit_mode);
    }

    #[test]
    fn test_cancel_confirm_keeps_store_untouched() {
        let mut store = committed_store();
        store.set_edit_mode(true);
        let mut form = KidProfileFormController::open(&store);

        form.set_name("Anaya");
        form.save(&store);
        form.cancel_confirm();

        assert!(!form.show_confirm_modal);
        assert_eq!(store.kid_profile.as_ref().unwrap().name, "Aarav");
    }

    #[test]
    fn test_name_filtered_as_typed() {
        let store = KidProfileState::new();
        let mut form = KidProfileFormController::open(&store);
        form.set_name("Aarav 2.0!");
        assert_eq!(form.draft().name, "Aarav ");
    }
}
