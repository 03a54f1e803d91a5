use shared::types::NoteId;

use crate::types::NoteKey;

/// One variant per UI control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SubmitNote(String),
    DeleteNote(NoteId),
    DismissNote(NoteKey),
    CreateAccount(String),
    Login(String),
    Logout,
    Refresh,
    Restore,
}

impl Command {
    /// Safe to log, never carries user text or credentials.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SubmitNote(_) => "submit-note",
            Command::DeleteNote(_) => "delete-note",
            Command::DismissNote(_) => "dismiss-note",
            Command::CreateAccount(_) => "create-account",
            Command::Login(_) => "login",
            Command::Logout => "logout",
            Command::Refresh => "refresh",
            Command::Restore => "restore",
        }
    }
}
