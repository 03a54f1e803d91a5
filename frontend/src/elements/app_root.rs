use std::rc::Rc;

use dominator::{clone, Dom, html};
use futures_signals::signal::SignalExt;

use crate::constants::{ID_LOGGED_IN, PROP_ID, TAG_DIV};
use crate::elements::app_header::app_header;
use crate::elements::app_login::app_login;
use crate::notes::app_notes::app_notes;
use crate::utils::set_title;
use crate::App;

pub fn app_root(app: Rc<App>) -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .child_signal(app.state().logged_in_signal().map(clone!(app => move |logged_in| {
            if logged_in {
                Some(logged_in_page(&app))
            } else {
                Some(app_login(&app))
            }
        })))
    })
}

fn logged_in_page(app: &Rc<App>) -> Dom {
    set_title("Notes");
    html!(TAG_DIV, {
        .attr(PROP_ID, ID_LOGGED_IN)
        .children([app_header(app), app_notes(app)])
    })
}
