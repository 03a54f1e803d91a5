use shared::types::{CreateAccountResponse, Note, NoteId, WhoAmIResponse};

use crate::error::ApiError;

/// Remote operations of the notes backend. One attempt per call, no retries.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    async fn create_account(&self, name: &str) -> Result<CreateAccountResponse, ApiError>;

    async fn who_am_i(&self, passkey: &str) -> Result<WhoAmIResponse, ApiError>;

    async fn list_notes(&self, passkey: &str) -> Result<Vec<Note>, ApiError>;

    async fn add_note(&self, passkey: &str, text: &str) -> Result<Note, ApiError>;

    async fn delete_note(&self, passkey: &str, id: NoteId) -> Result<(), ApiError>;
}

/// Empty on any failure; without a passkey the network is not touched.
pub async fn fetch_notes<A: NotesApi>(api: &A, passkey: Option<&str>) -> Vec<Note> {
    let Some(passkey) = passkey else {
        return Vec::new();
    };
    match api.list_notes(passkey).await {
        Ok(notes) => notes,
        Err(err) => {
            log::warn!("fetch_notes: {err}");
            Vec::new()
        }
    }
}

pub async fn check_identity<A: NotesApi>(api: &A, passkey: &str) -> WhoAmIResponse {
    match api.who_am_i(passkey).await {
        Ok(identity) => identity,
        Err(err) => {
            log::warn!("check_identity: {err}");
            WhoAmIResponse::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::test_support::{note, MockApi};

    #[test]
    fn test_fetch_notes_without_passkey() {
        let api = MockApi::default();
        assert!(block_on(fetch_notes(&api, None)).is_empty());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_fetch_notes_failure_is_empty() {
        let api = MockApi::default();
        api.list_notes.reply(Err(ApiError::Status(401)));
        assert!(block_on(fetch_notes(&api, Some("key"))).is_empty());
        assert_eq!(api.calls(), vec!["list_notes:key".to_string()]);
    }

    #[test]
    fn test_fetch_notes() {
        let api = MockApi::default();
        api.list_notes.reply(Ok(vec![note(1, "a", 10), note(2, "b", 20)]));
        let notes = block_on(fetch_notes(&api, Some("key")));
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].text, "b");
    }

    #[test]
    fn test_check_identity_failure() {
        let api = MockApi::default();
        api.who_am_i.reply(Err(ApiError::Status(500)));
        let identity = block_on(check_identity(&api, "key"));
        assert!(!identity.authenticated);
        assert_eq!(identity.username, None);
    }
}
