use std::cell::Cell;

use shared::types::{Note, NoteId, Session};

use crate::api::{check_identity, fetch_notes, NotesApi};
use crate::session::{SessionStore, StorageBackend};
use crate::state::NotesState;
use crate::sync::command::Command;
use crate::types::{DraftToken, EntryState, NoteEntry, NoteKey};

pub const ERR_INVALID_USERNAME: &str = "invalid username";
pub const ERR_INVALID_PASSKEY: &str = "invalid passkey";

const LABEL_BAD_RESPONSE: &str = "bad response";

pub struct SyncController<A, B> {
    api: A,
    store: SessionStore<B>,
    state: NotesState,
    next_token: Cell<u64>,
    /// Bumped by every login, account creation, restore and logout.
    epoch: Cell<u64>,
}

impl<A: NotesApi, B: StorageBackend> SyncController<A, B> {
    pub fn new(api: A, store: SessionStore<B>) -> Self {
        Self {
            api,
            store,
            state: NotesState::new(),
            next_token: Cell::new(0),
            epoch: Cell::new(0),
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }

    pub async fn dispatch(&self, command: Command) {
        log::info!("dispatch: {}", command.name());
        match command {
            Command::SubmitNote(text) => self.submit_note(&text).await,
            Command::DeleteNote(id) => self.delete_note(id).await,
            Command::DismissNote(key) => self.dismiss_note(key),
            Command::CreateAccount(name) => self.create_account(&name).await,
            Command::Login(passkey) => self.login(&passkey).await,
            Command::Logout => self.logout(),
            Command::Refresh => self.refresh().await,
            Command::Restore => self.restore().await,
        }
    }

    fn next_draft_token(&self) -> DraftToken {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        DraftToken(token)
    }

    fn next_epoch(&self) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        epoch
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    // ===

    async fn submit_note(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let Some(passkey) = self.state.passkey() else {
            log::warn!("submit_note: no session");
            return;
        };

        let token = self.next_draft_token();
        let key = NoteKey::Draft(token);
        self.state.notes.insert_at_anchor(NoteEntry::pending(token, text));

        match self.api.add_note(&passkey, text).await {
            Ok(note) => match NoteEntry::from_note(note) {
                Some(entry) => {
                    if self.state.notes.remove(key).is_some() {
                        log::info!("note {:?} confirmed as {:?}", token, entry.key);
                        if !self.state.notes.insert_at_anchor(entry) {
                            log::info!("note {:?} was already listed by a fetch", token);
                        }
                        self.state.draft.set(String::new());
                    } else {
                        log::info!("note {:?} confirmed after its draft was discarded", token);
                    }
                }
                None => {
                    log::warn!("add_note: response without id");
                    self.mark_failed(key, LABEL_BAD_RESPONSE.to_string());
                }
            },
            Err(err) => {
                log::warn!("add_note: {err}");
                self.mark_failed(key, err.label());
            }
        }
    }

    fn mark_failed(&self, key: NoteKey, label: String) {
        if let Some(entry) = self.state.notes.find(key) {
            entry.state.set(EntryState::Failed(label));
        }
    }

    async fn delete_note(&self, id: NoteId) {
        let Some(passkey) = self.state.passkey() else {
            log::warn!("delete_note: no session");
            return;
        };
        let key = NoteKey::Saved(id);
        let Some(entry) = self.state.notes.find(key) else {
            return;
        };
        let EntryState::Confirmed { id, date } = entry.state.get_cloned() else {
            return;
        };

        entry.state.set(EntryState::Removing { id, date });
        match self.api.delete_note(&passkey, id).await {
            Ok(()) => {
                self.state.notes.remove(key);
            }
            Err(err) => {
                match err.status() {
                    Some(status) => log::warn!("delete_note {id}: rejected with status {status}"),
                    None => log::warn!("delete_note {id}: {err}"),
                }
                entry.state.set(EntryState::Confirmed { id, date });
            }
        }
    }

    fn dismiss_note(&self, key: NoteKey) {
        let failed = self.state.notes.find(key)
            .map(|entry| matches!(entry.state.get_cloned(), EntryState::Failed(_)))
            .unwrap_or(false);
        if failed {
            self.state.notes.remove(key);
        }
    }

    // ===

    async fn create_account(&self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.state.login_error.set(None);
        let epoch = self.next_epoch();
        let result = self.api.create_account(name).await;
        if !self.is_current(epoch) {
            log::info!("create_account: superseded, result dropped");
            return;
        }
        match result {
            Ok(data) => {
                let session = self.store.save(name, &data.passkey);
                self.state.issued_passkey.set(Some(data.passkey));
                self.start_session(session).await;
            }
            Err(err) => {
                log::warn!("create_account: {err}");
                self.state.login_error.set(Some(ERR_INVALID_USERNAME.to_string()));
            }
        }
    }

    async fn login(&self, passkey: &str) {
        let passkey = passkey.trim();
        if passkey.is_empty() {
            return;
        }
        self.state.login_error.set(None);
        let epoch = self.next_epoch();
        let identity = check_identity(&self.api, passkey).await;
        if !self.is_current(epoch) {
            log::info!("login: superseded, result dropped");
            return;
        }
        if !identity.authenticated {
            self.state.login_error.set(Some(ERR_INVALID_PASSKEY.to_string()));
            return;
        }
        let session = self.store.save(&identity.username.unwrap_or_default(), passkey);
        self.state.issued_passkey.set(None);
        self.start_session(session).await;
    }

    async fn start_session(&self, session: Session) {
        log::info!("session started for {}", session.name);
        self.state.notes.clear();
        self.state.session.set(Some(session));
        self.render_notes().await;
    }

    fn logout(&self) {
        self.next_epoch();
        self.state.notes.clear();
        self.store.clear();
        self.state.session.set(None);
        self.state.issued_passkey.set(None);
        self.state.draft.set(String::new());
        self.state.login_error.set(None);
    }

    async fn restore(&self) {
        let Some(session) = self.store.load() else {
            return;
        };
        let epoch = self.next_epoch();
        self.state.session.set(Some(session.clone()));

        let identity = self.api.who_am_i(&session.passkey).await;
        if !self.is_current(epoch) {
            log::info!("restore: session changed during identity check");
            return;
        }
        match identity {
            Ok(identity) if identity.authenticated => {
                let name = identity.username.unwrap_or_default();
                if !name.is_empty() && name != session.name {
                    let session = self.store.save(&name, &session.passkey);
                    self.state.session.set(Some(session));
                }
            }
            Ok(_) => {
                log::warn!("restore: stored passkey is no longer valid");
                self.logout();
                return;
            }
            Err(err) => {
                log::warn!("restore: identity check failed, keeping session: {err}");
            }
        }
        self.render_notes().await;
    }

    async fn refresh(&self) {
        let Some(passkey) = self.state.passkey() else {
            return;
        };
        let notes = fetch_notes(&self.api, Some(&passkey)).await;
        if self.state.passkey().as_deref() != Some(passkey.as_str()) {
            log::info!("refresh: session changed, notes dropped");
            return;
        }
        self.state.notes.retain_drafts();
        self.insert_notes(notes);
    }

    async fn render_notes(&self) {
        let passkey = self.state.passkey();
        let notes = fetch_notes(&self.api, passkey.as_deref()).await;
        if self.state.passkey() != passkey {
            log::info!("render_notes: session changed, notes dropped");
            return;
        }
        self.insert_notes(notes);
    }

    fn insert_notes(&self, notes: Vec<Note>) {
        for note in notes {
            match NoteEntry::from_note(note) {
                Some(entry) => {
                    self.state.notes.insert_at_anchor(entry);
                }
                None => log::warn!("skipping note without id"),
            }
        }
    }
}
