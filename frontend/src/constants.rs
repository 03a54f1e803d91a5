pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_ID: &'static str = "id";
pub static PROP_DISABLED: &'static str = "disabled";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";

pub static KEY_ENTER: &'static str = "Enter";

pub static ID_NOTE_STRUCTURE: &'static str = "note-structure";
pub static ID_ADD_NOTE_INPUT: &'static str = "add-note-input";
pub static ID_ADD_NOTE_SUBMIT: &'static str = "add-note-submit";
pub static ID_CREATE_ACCOUNT_NAME: &'static str = "create-account-name";
pub static ID_CREATE_ACCOUNT_SUBMIT: &'static str = "create-account-submit";
pub static ID_LOGIN_PASSKEY: &'static str = "login-passkey";
pub static ID_LOGIN_SUBMIT: &'static str = "login-submit";
pub static ID_LOGOUT: &'static str = "logout";
pub static ID_LOGGED_IN: &'static str = "logged-in";
pub static ID_LOGGED_OUT: &'static str = "logged-out";

// dataset keys of `data-api-root` / `data-storage-key`
pub static DATA_API_ROOT: &'static str = "apiRoot";
pub static DATA_STORAGE_KEY: &'static str = "storageKey";
