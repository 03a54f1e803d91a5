pub mod app_header;
pub mod app_login;
pub mod app_root;
