use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::SignalExt;

use crate::constants::{ID_LOGOUT, PROP_ID, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::sync::command::Command;
use crate::sync::spawn_command;
use crate::App;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header(app: &Rc<App>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("user"))
                .text_signal(app.state().user_name_signal().map(|name| format!("notes of {name}")))
            }),
            button(app, "refresh", None, Command::Refresh),
            button(app, "log out", Some(ID_LOGOUT), Command::Logout),
        ])
        .child_signal(app.state().issued_passkey.signal_cloned().map(|passkey| passkey.map(passkey_notice)))
    })
}

fn passkey_notice(passkey: String) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("passkey"))
        .text("your passkey, keep it to log in again: ")
        .child(html!("code", {
            .text(&passkey)
        }))
    })
}

fn button(app: &Rc<App>, label: &str, id: Option<&str>, command: Command) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .apply(|dom| match id {
            Some(id) => dom.attr(PROP_ID, id),
            None => dom,
        })
        .text(label)
        .event(clone!(app => move |_: events::Click| spawn_command(&app, command.clone())))
    })
}
