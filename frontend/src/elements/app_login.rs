use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::SignalExt;

use crate::constants::{ID_CREATE_ACCOUNT_NAME, ID_CREATE_ACCOUNT_SUBMIT, ID_LOGGED_OUT, ID_LOGIN_PASSKEY, ID_LOGIN_SUBMIT, KEY_ENTER, PROP_ID, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::sync::command::Command;
use crate::sync::spawn_command;
use crate::utils::{clear_input_value, get_input_value, set_title};
use crate::App;

fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

pub fn app_login(app: &Rc<App>) -> Dom {
    set_title("Notes: sign in");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .attr(PROP_ID, ID_LOGGED_OUT)
        .children([
            html!(TAG_DIV, {
                .class(css_class("form"))
                .children([
                    input_field(ID_CREATE_ACCOUNT_NAME, "text", "Name", clone!(app => move || create_account(&app))),
                    html!(TAG_BUTTON, {
                        .class(css_class("button"))
                        .attr(PROP_ID, ID_CREATE_ACCOUNT_SUBMIT)
                        .text("create account")
                        .event(clone!(app => move |_: events::Click| create_account(&app)))
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("form"))
                .children([
                    input_field(ID_LOGIN_PASSKEY, "password", "Passkey", clone!(app => move || login(&app))),
                    html!(TAG_BUTTON, {
                        .class(css_class("button"))
                        .attr(PROP_ID, ID_LOGIN_SUBMIT)
                        .text("log in")
                        .event(clone!(app => move |_: events::Click| login(&app)))
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("message"))
                .text_signal(app.state().login_error.signal_cloned().map(|err| err.map(|err| format!("...{err}...")).unwrap_or_default()))
            }),
        ])
    })
}

fn input_field<F>(id: &str, type_: &str, title: &str, on_enter: F) -> Dom
    where F: Fn() + 'static
{
    html!(TAG_INPUT, {
        .class(css_class("input"))
        .attr(PROP_ID, id)
        .attr(PROP_TYPE, type_)
        .attr(PROP_TITLE, title)
        .attr(PROP_PLACEHOLDER, title)
        .event(move |ev: events::KeyDown| {
            if ev.key() == KEY_ENTER {
                on_enter();
            }
        })
    })
}

fn create_account(app: &Rc<App>) {
    let name = get_input_value(ID_CREATE_ACCOUNT_NAME).trim().to_string();
    spawn_command(app, Command::CreateAccount(name));
}

fn login(app: &Rc<App>) {
    let passkey = get_input_value(ID_LOGIN_PASSKEY).trim().to_string();
    clear_input_value(ID_LOGIN_PASSKEY);
    spawn_command(app, Command::Login(passkey));
}
