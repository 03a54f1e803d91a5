use futures_signals::signal::Mutable;

use shared::types::{Note, NoteId, Timestamp};

/// Local identity of a submission until the server assigns an id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DraftToken(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NoteKey {
    Draft(DraftToken),
    Saved(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    Pending,
    Confirmed { id: NoteId, date: Timestamp },
    Removing { id: NoteId, date: Timestamp },
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct NoteEntry {
    pub key: NoteKey,
    pub text: String,
    pub state: Mutable<EntryState>,
}

impl NoteEntry {
    pub fn pending(token: DraftToken, text: &str) -> Self {
        Self {
            key: NoteKey::Draft(token),
            text: text.to_string(),
            state: Mutable::new(EntryState::Pending),
        }
    }

    /// Server notes without an id cannot be reconciled or deleted.
    pub fn from_note(note: Note) -> Option<Self> {
        let id = note.id?;
        let date = note.date.unwrap_or_default();
        Some(Self {
            key: NoteKey::Saved(id),
            text: note.text,
            state: Mutable::new(EntryState::Confirmed { id, date }),
        })
    }
}

impl PartialEq<NoteEntry> for NoteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
