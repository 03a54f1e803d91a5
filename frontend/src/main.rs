use std::rc::Rc;

use crate::config::ClientConfig;
use crate::connect_fetch::FetchApi;
use crate::elements::app_root::app_root;
use crate::session::{BrowserStorage, SessionStore};
use crate::sync::command::Command;
use crate::sync::controller::SyncController;
use crate::sync::spawn_command;

mod api;
mod config;
mod connect_fetch;
mod constants;
mod elements;
mod error;
mod notes;
mod session;
mod state;
mod sync;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub type App = SyncController<FetchApi, BrowserStorage>;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = ClientConfig::from_document();
    log::info!("notes client: api root /{}", config.api_root);

    let store = SessionStore::new(BrowserStorage::open(), &config.storage_key);
    let app = Rc::new(App::new(FetchApi::new(&config), store));
    spawn_command(&app, Command::Restore);

    dominator::append_dom(&dominator::body(), app_root(app));
}
