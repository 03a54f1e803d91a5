use serde::{Deserialize, Serialize};

pub type NoteId = i64;

/// Epoch milliseconds as issued by the server.
pub type Timestamp = i64;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
}

/// Credential persisted on the client between page loads.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub passkey: String,
}

// ===

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreateAccountResponse {
    pub passkey: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AddNoteRequest {
    pub note: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DeleteNoteRequest {
    pub id: NoteId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_from_server() {
        let note: Note = serde_json::from_str(r#"{"id":7,"text":"buy milk","date":1700000000000}"#).unwrap();
        assert_eq!(note, Note { id: Some(7), text: "buy milk".to_string(), date: Some(1700000000000) });
    }

    #[test]
    fn test_note_without_identity() {
        let note: Note = serde_json::from_str(r#"{"text":"draft"}"#).unwrap();
        assert_eq!(note.id, None);
        assert_eq!(note.date, None);
    }

    #[test]
    fn test_who_am_i_anonymous() {
        let resp: WhoAmIResponse = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
        assert!(!resp.authenticated);
        assert_eq!(resp.username, None);

        let resp: WhoAmIResponse = serde_json::from_str(r#"{"authenticated":true,"username":"ann"}"#).unwrap();
        assert_eq!(resp.username.as_deref(), Some("ann"));
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_string(&AddNoteRequest { note: "hi".to_string() }).unwrap();
        assert_eq!(body, r#"{"note":"hi"}"#);
        let body = serde_json::to_string(&DeleteNoteRequest { id: 3 }).unwrap();
        assert_eq!(body, r#"{"id":3}"#);
        let body = serde_json::to_string(&CreateAccountRequest { name: "ann".to_string() }).unwrap();
        assert_eq!(body, r#"{"name":"ann"}"#);
    }

    #[test]
    fn test_session_record() {
        let session = Session { name: "ann".to_string(), passkey: "a2V5".to_string() };
        let text = serde_json::to_string(&session).unwrap();
        assert_eq!(text, r#"{"name":"ann","passkey":"a2V5"}"#);
    }
}
