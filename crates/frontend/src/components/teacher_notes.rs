//! Teacher notes tab: text notes, voice memos, inline editing.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use core_types::{Note, NoteBook, NotesEvent, NotesPanel, format_duration};
use tracing::{error, info};
use yew::prelude::*;

use crate::context::use_app;

/// Reducer state wrapping [`NotesPanel`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesState(pub NotesPanel);

impl NotesState {
    pub fn new(book: NoteBook) -> Self {
        Self(NotesPanel::new(book))
    }
}

impl Reducible for NotesState {
    type Action = NotesEvent;

    fn reduce(self: Rc<Self>, action: NotesEvent) -> Rc<Self> {
        let NotesState(panel) = Rc::unwrap_or_clone(self);
        Rc::new(NotesState(panel.apply(action)))
    }
}

/// Properties for TeacherNotes component.
#[derive(Properties, PartialEq)]
pub struct TeacherNotesProps {
    /// Owned by the portfolio page so notes survive tab switches.
    pub notes: UseReducerHandle<NotesState>,
}

#[function_component(TeacherNotes)]
pub fn teacher_notes(props: &TeacherNotesProps) -> Html {
    let app = use_app();
    let notes = props.notes.clone();
    let panel = &notes.0;
    let started_at = use_mut_ref(|| None::<DateTime<Utc>>);

    let on_record = {
        let notes = notes.clone();
        let transcriber = app.services.transcriber.clone();
        let started_at = started_at.clone();
        let recording = panel.is_recording();
        Callback::from(move |_: MouseEvent| {
            if !recording {
                *started_at.borrow_mut() = Some(Utc::now());
                notes.dispatch(NotesEvent::StartRecording);
                return;
            }
            let stopped_at = Utc::now();
            let started = started_at.borrow_mut().take().unwrap_or(stopped_at);
            match services::finish_recording(&*transcriber, started, stopped_at) {
                Ok(event) => notes.dispatch(event),
                Err(err) => error!(%err, "voice note could not be transcribed"),
            }
        })
    };

    let on_draft = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            notes.dispatch(NotesEvent::DraftChanged(input.value()));
        })
    };

    let on_add = {
        let notes = notes.clone();
        Callback::from(move |_: MouseEvent| notes.dispatch(NotesEvent::SubmitDraft { at: Utc::now() }))
    };

    let record_label = if panel.is_recording() {
        "⏹ Stop Recording"
    } else {
        "🎤 Record Voice Note"
    };

    html! {
        <div class="teacher-notes">
            <button onclick={on_record}>{ record_label }</button>

            <div class="card">
                <textarea
                    rows="3"
                    placeholder="Write a note..."
                    value={panel.draft.clone()}
                    oninput={on_draft}
                />
                <button onclick={on_add} disabled={!panel.can_submit()}>{"Add Note"}</button>
            </div>

            { for panel.book.notes().iter().map(|note| {
                let editing = panel.editing.as_ref() == Some(&note.id);
                html! { <NoteItem key={note.id.to_string()} note={note.clone()} {editing} notes={notes.clone()} /> }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NoteItemProps {
    note: Note,
    editing: bool,
    notes: UseReducerHandle<NotesState>,
}

#[function_component(NoteItem)]
fn note_item(props: &NoteItemProps) -> Html {
    let note = &props.note;

    let on_edit = {
        let notes = props.notes.clone();
        let id = note.id.clone();
        Callback::from(move |_: MouseEvent| notes.dispatch(NotesEvent::BeginEdit(id.clone())))
    };
    let on_change = {
        let notes = props.notes.clone();
        let id = note.id.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            notes.dispatch(NotesEvent::EditContent {
                id: id.clone(),
                content: input.value(),
            });
        })
    };
    let on_blur = {
        let notes = props.notes.clone();
        Callback::from(move |_: FocusEvent| notes.dispatch(NotesEvent::FinishEdit))
    };
    let on_delete = {
        let notes = props.notes.clone();
        let id = note.id.clone();
        Callback::from(move |_: MouseEvent| notes.dispatch(NotesEvent::Delete(id.clone())))
    };
    let on_play = {
        let id = note.id.clone();
        Callback::from(move |_: MouseEvent| info!(id = %id, "voice playback requested"))
    };

    let body = if props.editing {
        html! { <textarea rows="3" value={note.content.clone()} oninput={on_change} onblur={on_blur} /> }
    } else if let Some(duration) = note.duration_secs {
        html! {
            <div>
                <button class="link" onclick={on_play}>{"▶"}</button>
                <span>{ format!(" Voice Memo ({})", format_duration(duration)) }</span>
            </div>
        }
    } else {
        html! { <p>{ &note.content }</p> }
    };

    html! {
        <div class="card note">
            { body }
            <span class="meta">{ note.display_date() }</span>
            if note.is_editable() && !props.editing {
                <button class="link" onclick={on_edit}>{"✎ Edit"}</button>
            }
            <button class="link" onclick={on_delete}>{"🗑 Delete"}</button>
        </div>
    }
}
