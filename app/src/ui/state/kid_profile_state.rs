//! # Kid Profile Store
//!
//! Holds the committed child profile, the edit-mode flag, and the two
//! preference tag lists (content safety and parenting values), plus the
//! static restricted-word deny-list seeded at store creation.

use log::info;
use shared::KidProfileRecord;

/// Tags the platform never allows into a selection. Seeded into the store on
/// creation and left untouched for the life of the process.
const RESTRICTED_WORDS: [&str; 2] = ["Adult Content", "Amazing experience"];

/// Kid profile store. All setters replace their field wholesale; list
/// contents (toggling, de-duplication) are computed by the caller before the
/// write lands here.
#[derive(Debug)]
pub struct KidProfileState {
    pub kid_profile: Option<KidProfileRecord>,
    /// Distinct from record presence: the view screen raises this before
    /// routing back into the form.
    pub edit_mode: bool,
    pub content_safety: Vec<String>,
    pub parenting: Vec<String>,
    pub restricted_words: Vec<String>,
}

impl KidProfileState {
    pub fn new() -> Self {
        Self {
            kid_profile: None,
            edit_mode: false,
            content_safety: Vec::new(),
            parenting: Vec::new(),
            restricted_words: RESTRICTED_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Unconditional wholesale replace of the committed record.
    pub fn set_kid_profile(&mut self, profile: KidProfileRecord) {
        info!("Committing kid profile for {}", profile.name);
        self.kid_profile = Some(profile);
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
    }

    pub fn set_content_safety(&mut self, tags: Vec<String>) {
        info!("Content safety selection updated: {} tags", tags.len());
        self.content_safety = tags;
    }

    pub fn set_parenting(&mut self, tags: Vec<String>) {
        info!("Parenting selection updated: {} tags", tags.len());
        self.parenting = tags;
    }

    pub fn set_restricted_words(&mut self, words: Vec<String>) {
        self.restricted_words = words;
    }
}

impl Default for KidProfileState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Gender, Language};

    #[test]
    fn test_new_store_seeds_restricted_words() {
        let state = KidProfileState::new();
        assert!(state.kid_profile.is_none());
        assert!(!state.edit_mode);
        assert_eq!(
            state.restricted_words,
            vec!["Adult Content".to_string(), "Amazing experience".to_string()]
        );
    }

    #[test]
    fn test_set_kid_profile_replaces_record() {
        let mut state = KidProfileState::new();
        let record = KidProfileRecord {
            name: "Aarav".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
            gender: Gender::Boy,
            language: Language::English,
        };

        state.set_kid_profile(record.clone());
        assert_eq!(state.kid_profile, Some(record));
    }

    #[test]
    fn test_tag_lists_replace_wholesale() {
        let mut state = KidProfileState::new();
        state.set_content_safety(vec!["Violence".to_string(), "Racism".to_string()]);
        state.set_parenting(vec!["Comedy".to_string()]);

        assert_eq!(state.content_safety.len(), 2);
        assert_eq!(state.parenting, vec!["Comedy".to_string()]);

        state.set_content_safety(Vec::new());
        assert!(state.content_safety.is_empty());
    }
}
