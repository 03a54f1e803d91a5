use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::SignalExt;

use shared::types::{NoteId, Timestamp};

use crate::constants::{PROP_DISABLED, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::sync::command::Command;
use crate::sync::spawn_command;
use crate::types::{EntryState, NoteEntry, NoteKey};
use crate::utils::local_date_time;
use crate::App;

const LABEL_SUBMITTING: &str = "submitting...";

fn css_class(label: &str) -> String {
    format!("note__{label}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteHeader {
    /// No delete control until the server has assigned an id.
    Submitting,
    Posted { id: NoteId, date: Timestamp, removing: bool },
    Failed { label: String },
}

impl NoteHeader {
    pub fn for_state(state: &EntryState) -> Self {
        match state {
            EntryState::Pending => NoteHeader::Submitting,
            EntryState::Confirmed { id, date } => NoteHeader::Posted { id: *id, date: *date, removing: false },
            EntryState::Removing { id, date } => NoteHeader::Posted { id: *id, date: *date, removing: true },
            EntryState::Failed(reason) => NoteHeader::Failed { label: format!("FAILED: {reason}") },
        }
    }
}

pub fn note_view(app: &Rc<App>, entry: NoteEntry) -> Dom {
    let key = entry.key;
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child_signal(entry.state.signal_cloned().map(clone!(app => move |state| {
            Some(note_header(&app, key, NoteHeader::for_state(&state)))
        })))
        .child(html!(TAG_DIV, {
            .class(css_class("text"))
            .text(&entry.text)
        }))
    })
}

fn note_header(app: &Rc<App>, key: NoteKey, header: NoteHeader) -> Dom {
    match header {
        NoteHeader::Submitting => html!(TAG_DIV, {
            .class(css_class("header"))
            .class(css_class("pending"))
            .child(html!(TAG_SPAN, {
                .text(LABEL_SUBMITTING)
            }))
        }),
        NoteHeader::Posted { id, date, removing } => html!(TAG_DIV, {
            .class(css_class("header"))
            .children([
                html!(TAG_SPAN, {
                    .class(css_class("date"))
                    .text(&local_date_time(date))
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("button"))
                    .attr(PROP_TITLE, "delete")
                    .text("delete")
                    .apply_if(removing, |dom| dom.attr(PROP_DISABLED, ""))
                    .event(clone!(app => move |_: events::Click| {
                        spawn_command(&app, Command::DeleteNote(id));
                    }))
                }),
            ])
        }),
        NoteHeader::Failed { label } => html!(TAG_DIV, {
            .class(css_class("header"))
            .class(css_class("failed"))
            .children([
                html!(TAG_SPAN, {
                    .text(&label)
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("button"))
                    .attr(PROP_TITLE, "dismiss")
                    .text("dismiss")
                    .event(clone!(app => move |_: events::Click| {
                        spawn_command(&app, Command::DismissNote(key));
                    }))
                }),
            ])
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_header() {
        assert_eq!(NoteHeader::for_state(&EntryState::Pending), NoteHeader::Submitting);
    }

    #[test]
    fn test_posted_header() {
        assert_eq!(
            NoteHeader::for_state(&EntryState::Confirmed { id: 7, date: 1700000000000 }),
            NoteHeader::Posted { id: 7, date: 1700000000000, removing: false }
        );
        assert_eq!(
            NoteHeader::for_state(&EntryState::Removing { id: 7, date: 1 }),
            NoteHeader::Posted { id: 7, date: 1, removing: true }
        );
    }

    #[test]
    fn test_failed_label() {
        assert_eq!(
            NoteHeader::for_state(&EntryState::Failed("500".to_string())),
            NoteHeader::Failed { label: "FAILED: 500".to_string() }
        );
    }
}
