pub mod app_notes;
pub mod note_view;
pub mod notes_list;
