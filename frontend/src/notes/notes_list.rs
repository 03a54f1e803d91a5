use futures_signals::signal_vec::{MutableVec, SignalVec};

use crate::types::{NoteEntry, NoteKey};

/// Rendered entries in display order. Index 0 is the anchor: the slot right after the input row.
pub struct NotesList {
    entries: MutableVec<NoteEntry>,
}

impl Default for NotesList {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesList {
    pub fn new() -> Self {
        Self {
            entries: MutableVec::new(),
        }
    }

    /// Keys are unique: an entry whose key is already listed is not inserted again.
    pub fn insert_at_anchor(&self, entry: NoteEntry) -> bool {
        let mut entries = self.entries.lock_mut();
        if entries.iter().any(|row| row.key == entry.key) {
            return false;
        }
        entries.insert_cloned(0, entry);
        true
    }

    pub fn remove(&self, key: NoteKey) -> Option<NoteEntry> {
        let ind = self.entries.lock_ref().iter().position(|row| row.key == key)?;
        Some(self.entries.lock_mut().remove(ind))
    }

    pub fn find(&self, key: NoteKey) -> Option<NoteEntry> {
        self.entries.lock_ref().iter().find(|row| row.key == key).cloned()
    }

    pub fn clear(&self) {
        self.entries.lock_mut().clear();
    }

    /// Drops server-backed entries, keeping pending and failed drafts.
    pub fn retain_drafts(&self) {
        self.entries.lock_mut().retain(|row| matches!(row.key, NoteKey::Draft(_)));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock_ref().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn keys(&self) -> Vec<NoteKey> {
        self.entries.lock_ref().iter().map(|row| row.key).collect()
    }

    #[cfg(test)]
    pub fn entries(&self) -> Vec<NoteEntry> {
        self.entries.lock_ref().to_vec()
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = NoteEntry> {
        self.entries.signal_vec_cloned()
    }
}

#[cfg(test)]
mod tests {
    use shared::types::Note;

    use super::*;
    use crate::types::DraftToken;

    fn saved(id: i64) -> NoteEntry {
        NoteEntry::from_note(Note { id: Some(id), text: format!("note {id}"), date: Some(0) }).unwrap()
    }

    #[test]
    fn test_insert_at_anchor_reverses() {
        let list = NotesList::new();
        list.insert_at_anchor(saved(1));
        list.insert_at_anchor(saved(2));
        list.insert_at_anchor(saved(3));
        assert_eq!(list.keys(), vec![NoteKey::Saved(3), NoteKey::Saved(2), NoteKey::Saved(1)]);
    }

    #[test]
    fn test_insert_existing_key_is_skipped() {
        let list = NotesList::new();
        assert!(list.insert_at_anchor(saved(1)));
        assert!(list.insert_at_anchor(saved(2)));
        assert!(!list.insert_at_anchor(saved(1)));
        assert_eq!(list.keys(), vec![NoteKey::Saved(2), NoteKey::Saved(1)]);
    }

    #[test]
    fn test_remove_only_matching() {
        let list = NotesList::new();
        list.insert_at_anchor(saved(1));
        list.insert_at_anchor(saved(2));
        let removed = list.remove(NoteKey::Saved(1)).unwrap();
        assert_eq!(removed.text, "note 1");
        assert_eq!(list.keys(), vec![NoteKey::Saved(2)]);
        assert!(list.remove(NoteKey::Saved(1)).is_none());
    }

    #[test]
    fn test_retain_drafts() {
        let list = NotesList::new();
        list.insert_at_anchor(saved(1));
        list.insert_at_anchor(NoteEntry::pending(DraftToken(0), "draft"));
        list.insert_at_anchor(saved(2));
        list.retain_drafts();
        assert_eq!(list.keys(), vec![NoteKey::Draft(DraftToken(0))]);
    }

    #[test]
    fn test_find_shares_state() {
        let list = NotesList::new();
        list.insert_at_anchor(NoteEntry::pending(DraftToken(1), "draft"));
        let found = list.find(NoteKey::Draft(DraftToken(1))).unwrap();
        found.state.set(crate::types::EntryState::Failed("500".to_string()));
        assert_eq!(list.entries()[0].state.get_cloned(), crate::types::EntryState::Failed("500".to_string()));
    }
}
