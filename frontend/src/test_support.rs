use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use shared::types::{CreateAccountResponse, Note, NoteId, WhoAmIResponse};

use crate::api::NotesApi;
use crate::error::ApiError;

type Reply<T> = Result<T, ApiError>;

/// Queue of replies for one endpoint; a gated reply stays pending until its sender fires.
pub struct Scripted<T> {
    replies: RefCell<VecDeque<oneshot::Receiver<Reply<T>>>>,
}

impl<T> Default for Scripted<T> {
    fn default() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
        }
    }
}

impl<T> Scripted<T> {
    pub fn reply(&self, value: Reply<T>) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        self.replies.borrow_mut().push_back(rx);
    }

    pub fn gate(&self) -> oneshot::Sender<Reply<T>> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    async fn next(&self) -> Reply<T> {
        let rx = self.replies.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(ApiError::Transport("reply dropped".to_string()))),
            None => Err(ApiError::Transport("unscripted call".to_string())),
        }
    }
}

#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<String>>,
    pub create_account: Scripted<CreateAccountResponse>,
    pub who_am_i: Scripted<WhoAmIResponse>,
    pub list_notes: Scripted<Vec<Note>>,
    pub add_note: Scripted<Note>,
    pub delete_note: Scripted<()>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl NotesApi for MockApi {
    async fn create_account(&self, name: &str) -> Result<CreateAccountResponse, ApiError> {
        self.record(format!("create_account:{name}"));
        self.create_account.next().await
    }

    async fn who_am_i(&self, passkey: &str) -> Result<WhoAmIResponse, ApiError> {
        self.record(format!("who_am_i:{passkey}"));
        self.who_am_i.next().await
    }

    async fn list_notes(&self, passkey: &str) -> Result<Vec<Note>, ApiError> {
        self.record(format!("list_notes:{passkey}"));
        self.list_notes.next().await
    }

    async fn add_note(&self, passkey: &str, text: &str) -> Result<Note, ApiError> {
        self.record(format!("add_note:{passkey}:{text}"));
        self.add_note.next().await
    }

    async fn delete_note(&self, passkey: &str, id: NoteId) -> Result<(), ApiError> {
        self.record(format!("delete_note:{passkey}:{id}"));
        self.delete_note.next().await
    }
}

pub fn note(id: NoteId, text: &str, date: i64) -> Note {
    Note {
        id: Some(id),
        text: text.to_string(),
        date: Some(date),
    }
}
