//! # Profile Form Controller
//!
//! Create/view/edit lifecycle for the parent profile screen. The controller
//! owns the transient screen state (drafts, error map, focused field) and
//! talks to [`ProfileState`] for everything committed.
//!
//! Dirtiness is a pure comparison between the current draft and the snapshot
//! taken when the drafts were last seeded or committed. The store's
//! `is_dirty` flag is only mirrored from that comparison at navigation time.

use shared::{ProfileRecord, Relation};

use crate::ui::forms::validation::{FieldError, ProfileField, ValidationErrors};
use crate::ui::state::profile_state::{ProfileMode, ProfileState};

/// In-progress, possibly invalid field values for one screen visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    /// Bare digits, at most 10. Entry-time filtering keeps it that way.
    pub mobile: String,
    pub relation: Option<Relation>,
}

impl ProfileDraft {
    fn from_record(record: &ProfileRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            // Remote records carry display formatting ("99999 88888");
            // drafts hold what the filtered input would, bare digits.
            mobile: record
                .mobile
                .chars()
                .filter(|c| c.is_ascii_digit())
                .take(10)
                .collect(),
            relation: Some(record.relation),
        }
    }
}

/// What an attempted back-navigation should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Nothing unsaved; let the navigation happen.
    Proceed,
    /// Unsaved edits; the confirm modal is now open and navigation is
    /// cancelled until the user picks discard or save.
    Confirm,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft validated and was committed; the store is back in view mode.
    Saved,
    /// Validation failed; the error map is populated and no store mutation
    /// happened.
    Invalid,
}

/// Controller for the profile form screen.
#[derive(Debug)]
pub struct ProfileFormController {
    draft: ProfileDraft,
    snapshot: ProfileDraft,
    pub errors: ValidationErrors,
    pub focused_field: Option<ProfileField>,
}

impl ProfileFormController {
    /// Open the profile screen: seed drafts from the committed record (if
    /// any) and sequence the store into its initial mode.
    pub fn open(store: &mut ProfileState) -> Self {
        let draft = store
            .profile
            .as_ref()
            .map(ProfileDraft::from_record)
            .unwrap_or_default();
        let mode = if store.profile.is_some() {
            ProfileMode::View
        } else {
            ProfileMode::Create
        };
        store.set_mode(mode);

        Self {
            snapshot: draft.clone(),
            draft,
            errors: ValidationErrors::new(),
            focused_field: None,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Name input: letters and whitespace only, filtered as typed.
    pub fn set_name(&mut self, input: &str) {
        self.draft.name = input
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();
        self.errors.clear_field(ProfileField::Name);
    }

    /// Email input: limited to the characters a well-formed address uses.
    pub fn set_email(&mut self, input: &str) {
        self.draft.email = input
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '-'))
            .collect();
        self.errors.clear_field(ProfileField::Email);
    }

    /// Mobile input: digits only, truncated to 10 as typed.
    pub fn set_mobile(&mut self, input: &str) {
        self.draft.mobile = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(10)
            .collect();
        self.errors.clear_field(ProfileField::Mobile);
    }

    pub fn set_relation(&mut self, relation: Relation) {
        self.draft.relation = Some(relation);
        self.errors.clear_field(ProfileField::Relation);
    }

    pub fn set_focused_field(&mut self, field: Option<ProfileField>) {
        self.focused_field = field;
    }

    /// Unsaved edits exist. Pure draft-vs-snapshot comparison, evaluated on
    /// demand rather than flagged on every keystroke.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.snapshot
    }

    /// "Edit Profile" pressed while viewing.
    pub fn begin_edit(&self, store: &mut ProfileState) {
        store.set_mode(ProfileMode::Edit);
    }

    /// Validate the draft and, on success, commit it to the store.
    pub fn submit(&mut self, store: &mut ProfileState) -> SubmitOutcome {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors = ValidationErrors::new();

        let relation = match self.draft.relation {
            Some(relation) => relation,
            None => return SubmitOutcome::Invalid,
        };
        let record = ProfileRecord {
            name: self.draft.name.clone(),
            email: self.draft.email.clone(),
            mobile: self.draft.mobile.clone(),
            relation,
        };

        if store.profile.is_some() {
            store.update_profile(record);
        } else {
            store.create_profile(record);
        }
        store.close_confirm_modal();
        self.snapshot = self.draft.clone();

        SubmitOutcome::Saved
    }

    /// Back guard: cancel the navigation and open the confirm modal when
    /// there are unsaved edits outside view mode.
    pub fn request_back(&self, store: &mut ProfileState) -> BackAction {
        if store.mode == ProfileMode::View || !self.is_dirty() {
            return BackAction::Proceed;
        }
        store.set_dirty(true);
        store.open_confirm_modal();
        BackAction::Confirm
    }

    /// "No" on the confirm dialog: drop the edits and let navigation
    /// proceed.
    pub fn discard_and_leave(&mut self, store: &mut ProfileState) {
        store.close_confirm_modal();
        store.set_dirty(false);
        self.draft = self.snapshot.clone();
    }

    /// "Yes" on the confirm dialog: same validate-then-commit path as the
    /// save button.
    pub fn save_and_leave(&mut self, store: &mut ProfileState) -> SubmitOutcome {
        self.submit(store)
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Pure validation pass over a draft. All four fields are checked
/// independently; the result is the union of the failing ones.
pub fn validate(draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(ProfileField::Name, FieldError::NameMissing);
    } else if !name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        errors.insert(ProfileField::Name, FieldError::NameInvalid);
    }

    if draft.email.trim().is_empty() {
        errors.insert(ProfileField::Email, FieldError::EmailMissing);
    } else if !is_valid_email(&draft.email) {
        errors.insert(ProfileField::Email, FieldError::EmailInvalid);
    }

    if draft.mobile.trim().is_empty() {
        errors.insert(ProfileField::Mobile, FieldError::MobileMissing);
    } else if draft.mobile.len() != 10 || !draft.mobile.chars().all(|c| c.is_ascii_digit()) {
        errors.insert(ProfileField::Mobile, FieldError::MobileInvalid);
    }

    if draft.relation.is_none() {
        errors.insert(ProfileField::Relation, FieldError::RelationMissing);
    }

    errors
}
