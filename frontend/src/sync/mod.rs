use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::api::NotesApi;
use crate::session::StorageBackend;
use crate::sync::command::Command;
use crate::sync::controller::SyncController;

pub mod command;
pub mod controller;


/// Runs a command to completion on the page's event loop.
pub fn spawn_command<A, B>(app: &Rc<SyncController<A, B>>, command: Command)
    where
        A: NotesApi + 'static,
        B: StorageBackend + 'static
{
    let app = app.clone();
    spawn_local(async move {
        app.dispatch(command).await;
    });
}
