pub static ROOT_API: &'static str = "api";
pub static API_CREATE_ACCOUNT: &'static str = "create-account";
pub static API_WHO_AM_I: &'static str = "who-am-i";
pub static API_GET_NOTES: &'static str = "get-notes";
pub static API_ADD_NOTE: &'static str = "add-note";
pub static API_DELETE_NOTE: &'static str = "delete-note";

pub static HEADER_PASSKEY: &'static str = "passkey";

pub static STORAGE_SESSION_KEY: &'static str = "notes-session";

pub const STATUS_OK: u16 = 200;
