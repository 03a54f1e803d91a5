use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal_vec::SignalVecExt;

use crate::constants::{ID_ADD_NOTE_INPUT, ID_ADD_NOTE_SUBMIT, ID_NOTE_STRUCTURE, KEY_ENTER, PROP_ID, PROP_PLACEHOLDER, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::notes::note_view::note_view;
use crate::sync::command::Command;
use crate::sync::spawn_command;
use crate::utils::value_from_target;
use crate::App;

fn css_class(label: &str) -> String {
    format!("app-notes__{label}")
}

/// Input row first, entries after it in `NotesList` order.
pub fn app_notes(app: &Rc<App>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .attr(PROP_ID, ID_NOTE_STRUCTURE)
        .children([
            input_row(app),
            html!(TAG_DIV, {
                .class(css_class("list"))
                .children_signal_vec(app.state().notes.signal_vec().map(clone!(app => move |entry| note_view(&app, entry))))
            }),
        ])
    })
}

fn input_row(app: &Rc<App>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("top"))
        .children([
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_ID, ID_ADD_NOTE_INPUT)
                .attr(PROP_TYPE, "text")
                .attr(PROP_PLACEHOLDER, "new note")
                .prop_signal(PROP_VALUE, app.state().draft.signal_cloned())
                .event(clone!(app => move |ev: events::Input| {
                    app.state().draft.set_neq(value_from_target(ev.target()));
                }))
                .event(clone!(app => move |ev: events::KeyDown| {
                    if ev.key() == KEY_ENTER {
                        submit(&app);
                    }
                }))
            }),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .attr(PROP_ID, ID_ADD_NOTE_SUBMIT)
                .text("add")
                .event(clone!(app => move |_: events::Click| submit(&app)))
            }),
        ])
    })
}

fn submit(app: &Rc<App>) {
    let text = app.state().draft.get_cloned();
    spawn_command(app, Command::SubmitNote(text));
}
