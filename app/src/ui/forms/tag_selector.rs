//! # Preference Tag Selector
//!
//! Behavioral core of the content-safety and parenting screens: a searchable,
//! toggleable list of free-text tags. The session owns the working selection
//! for the duration of one screen visit and flushes it into the store exactly
//! once, when the screen is torn down. Rapid toggling never touches the
//! store.

use log::{info, warn};

use crate::ui::state::kid_profile_state::KidProfileState;

/// Static tag catalog for the content safety screen (content team copy).
pub const CONTENT_SAFETY_CATALOG: [&str; 15] = [
    "Amazing experience",
    "Adult Content",
    "Racism",
    "Vulgar Language",
    "Violence",
    "Works fine, but could use more",
    "Great content",
    "Too slow — needs better performance",
    "A search bar would be really helpful.",
    "Notifications need more control",
    "Comedy",
    "Cool Jazz",
    "Co worker",
    "Conspiracy",
    "Cozy Mystery",
];

/// Static tag catalog for the parenting values screen.
pub const PARENTING_CATALOG: [&str; 11] = [
    "Amazing experience",
    "Works fine, but could use more",
    "Great content",
    "Too slow — needs better performance",
    "A search bar would be really helpful.",
    "Notifications need more control",
    "Comedy",
    "Cool Jazz",
    "Co worker",
    "Conspiracy",
    "Cozy Mystery",
];

/// Which tag list a selector session reads from and writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagListKind {
    ContentSafety,
    Parenting,
}

/// What a tag press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Membership flipped in the working selection.
    Toggled,
    /// Tag is on the deny-list; selection untouched, warning raised.
    Restricted,
}

/// One screen visit's worth of tag selection state.
///
/// Committing consumes the session, which is what makes the
/// write-exactly-once-on-exit contract hard to get wrong at the call site.
#[derive(Debug)]
pub struct TagSelectorSession {
    kind: TagListKind,
    catalog: Vec<String>,
    restricted: Vec<String>,
    query: String,
    selection: Vec<String>,
    restricted_warning: bool,
}

impl TagSelectorSession {
    /// Open a selector screen, seeding the working selection from the store.
    pub fn open(kind: TagListKind, store: &KidProfileState) -> Self {
        let (catalog, selection): (Vec<String>, Vec<String>) = match kind {
            TagListKind::ContentSafety => (
                CONTENT_SAFETY_CATALOG.iter().map(|s| s.to_string()).collect(),
                store.content_safety.clone(),
            ),
            TagListKind::Parenting => (
                PARENTING_CATALOG.iter().map(|s| s.to_string()).collect(),
                store.parenting.clone(),
            ),
        };

        Self {
            kind,
            catalog,
            restricted: store.restricted_words.clone(),
            query: String::new(),
            selection,
            restricted_warning: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Live search input. Changing the query clears any restricted warning.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.restricted_warning = false;
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selection.iter().any(|t| t == tag)
    }

    pub fn is_restricted(&self, tag: &str) -> bool {
        self.restricted.iter().any(|t| t == tag)
    }

    /// Whether the restricted-word warning banner is showing.
    pub fn restricted_warning(&self) -> bool {
        self.restricted_warning
    }

    /// Press a tag. Restricted tags warn instead of toggling; anything else
    /// flips membership in the working selection (and clears the warning).
    pub fn toggle(&mut self, tag: &str) -> ToggleOutcome {
        if self.is_restricted(tag) {
            warn!("Attempt to select restricted tag: {}", tag);
            self.restricted_warning = true;
            return ToggleOutcome::Restricted;
        }

        self.restricted_warning = false;
        if let Some(pos) = self.selection.iter().position(|t| t == tag) {
            self.selection.remove(pos);
        } else {
            self.selection.push(tag.to_string());
        }
        ToggleOutcome::Toggled
    }

    /// Rows to render: case-insensitive substring match against the catalog
    /// (empty query passes everything), duplicates suppressed, selected tags
    /// ahead of unselected ones. Ordering within each group follows the
    /// catalog, so re-renders are stable while the selection is unchanged.
    pub fn filtered_items(&self) -> Vec<&str> {
        let needle = self.query.trim().to_lowercase();
        let mut seen: Vec<&str> = Vec::new();
        for tag in &self.catalog {
            if !needle.is_empty() && !tag.to_lowercase().contains(&needle) {
                continue;
            }
            if !seen.iter().any(|t| *t == tag.as_str()) {
                seen.push(tag.as_str());
            }
        }

        let mut items: Vec<&str> = seen
            .iter()
            .copied()
            .filter(|tag| self.is_selected(tag))
            .collect();
        items.extend(seen.iter().copied().filter(|tag| !self.is_selected(tag)));
        items
    }

    pub fn is_empty_result(&self) -> bool {
        self.filtered_items().is_empty()
    }

    /// Flush the working selection into the store. Called exactly once by
    /// the screen when it is left; consuming `self` keeps it that way.
    pub fn commit(self, store: &mut KidProfileState) {
        info!(
            "Committing {:?} selection: {} tags",
            self.kind,
            self.selection.len()
        );
        match self.kind {
            TagListKind::ContentSafety => store.set_content_safety(self.selection),
            TagListKind::Parenting => store.set_parenting(self.selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (KidProfileState, TagSelectorSession) {
        let store = KidProfileState::new();
        let session = TagSelectorSession::open(TagListKind::ContentSafety, &store);
        (store, session)
    }

    #[test]
    fn test_empty_query_yields_full_catalog() {
        let (_store, session) = session();
        assert_eq!(session.filtered_items().len(), CONTENT_SAFETY_CATALOG.len());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let (_store, mut session) = session();
        session.set_query("co");
        let items = session.filtered_items();
        assert!(items.contains(&"Comedy"));
        assert!(items.contains(&"Cool Jazz"));
        assert!(items.contains(&"Co worker"));
        assert!(items.contains(&"Adult Content"));
        assert!(!items.contains(&"Violence"));

        session.set_query("COZY");
        assert_eq!(session.filtered_items(), vec!["Cozy Mystery"]);
    }

    #[test]
    fn test_no_results_state() {
        let (_store, mut session) = session();
        session.set_query("zzzzz");
        assert!(session.is_empty_result());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let (_store, mut session) = session();
        let before: Vec<String> = session.selection().to_vec();

        assert_eq!(session.toggle("Violence"), ToggleOutcome::Toggled);
        assert!(session.is_selected("Violence"));
        assert_eq!(session.toggle("Violence"), ToggleOutcome::Toggled);
        assert_eq!(session.selection(), before.as_slice());
    }

    #[test]
    fn test_selected_tags_listed_first_and_stable() {
        let (_store, mut session) = session();
        session.toggle("Comedy");
        session.toggle("Violence");

        let items = session.filtered_items();
        // selected group first, in catalog order
        assert_eq!(&items[..2], &["Violence", "Comedy"]);
        assert!(items[2..].iter().all(|tag| !session.is_selected(tag)));

        // unchanged selection renders identically on the next pass
        assert_eq!(session.filtered_items(), items);

        session.set_query("c");
        let filtered = session.filtered_items();
        let selected_count = filtered
            .iter()
            .take_while(|tag| session.is_selected(tag))
            .count();
        assert!(filtered[selected_count..]
            .iter()
            .all(|tag| !session.is_selected(tag)));
    }

    #[test]
    fn test_restricted_tag_never_enters_selection() {
        let (mut store, mut session) = session();

        assert_eq!(session.toggle("Adult Content"), ToggleOutcome::Restricted);
        assert!(session.restricted_warning());
        assert_eq!(session.toggle("Adult Content"), ToggleOutcome::Restricted);
        assert_eq!(session.toggle("Amazing experience"), ToggleOutcome::Restricted);

        session.toggle("Racism");
        session.commit(&mut store);
        assert_eq!(store.content_safety, vec!["Racism".to_string()]);
    }

    #[test]
    fn test_warning_clears_on_toggle_or_query_change() {
        let (_store, mut session) = session();

        session.toggle("Adult Content");
        assert!(session.restricted_warning());
        session.toggle("Comedy");
        assert!(!session.restricted_warning());

        session.toggle("Adult Content");
        assert!(session.restricted_warning());
        session.set_query("jazz");
        assert!(!session.restricted_warning());
    }

    #[test]
    fn test_commit_writes_store_once_on_exit() {
        let mut store = KidProfileState::new();
        let mut session = TagSelectorSession::open(TagListKind::Parenting, &store);

        session.toggle("Comedy");
        session.toggle("Cool Jazz");
        session.toggle("Comedy");
        // store untouched while toggling
        assert!(store.parenting.is_empty());

        session.commit(&mut store);
        assert_eq!(store.parenting, vec!["Cool Jazz".to_string()]);
    }

    #[test]
    fn test_reopening_seeds_from_store() {
        let mut store = KidProfileState::new();
        let mut session = TagSelectorSession::open(TagListKind::ContentSafety, &store);
        session.toggle("Violence");
        session.commit(&mut store);

        let session = TagSelectorSession::open(TagListKind::ContentSafety, &store);
        assert!(session.is_selected("Violence"));
        assert_eq!(session.filtered_items()[0], "Violence");
    }
}
