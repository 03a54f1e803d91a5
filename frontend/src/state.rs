use futures_signals::signal::{Mutable, Signal, SignalExt};

use shared::types::Session;

use crate::notes::notes_list::NotesList;

/// Observable state, mutated only by the sync controller.
pub struct NotesState {
    pub session: Mutable<Option<Session>>,
    pub notes: NotesList,
    pub draft: Mutable<String>,
    /// Shown once after account creation, the user has no other way to learn it.
    pub issued_passkey: Mutable<Option<String>>,
    pub login_error: Mutable<Option<String>>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesState {
    pub fn new() -> Self {
        Self {
            session: Mutable::new(None),
            notes: NotesList::new(),
            draft: Mutable::new(String::new()),
            issued_passkey: Mutable::new(None),
            login_error: Mutable::new(None),
        }
    }

    pub fn passkey(&self) -> Option<String> {
        self.session.lock_ref().as_ref().map(|session| session.passkey.clone())
    }

    pub fn logged_in_signal(&self) -> impl Signal<Item = bool> {
        self.session.signal_ref(|session| session.is_some()).dedupe()
    }

    pub fn user_name_signal(&self) -> impl Signal<Item = String> {
        self.session.signal_ref(|session| session.as_ref().map(|s| s.name.clone()).unwrap_or_default())
    }
}
