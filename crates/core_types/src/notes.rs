//! Teacher notes on a student's portfolio.
//!
//! [`NoteBook`] is the note collection and [`NotesPanel`] wraps it with the
//! draft text, the edit cursor and the voice recording toggle. Both are
//! value-in, value-out: every operation consumes the old state and returns
//! the new one.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::VoicePlaceholder;

/// Identifier of a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Written or spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Text,
    Voice,
}

/// A single teacher note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub kind: NoteKind,
    /// Note text, or a caption for voice memos
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Voice memo length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
}

impl Note {
    /// A text note.
    pub fn text(id: NoteId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: NoteKind::Text,
            content: content.into(),
            created_at,
            duration_secs: None,
        }
    }

    /// A voice memo of `duration_secs` seconds.
    pub fn voice(
        id: NoteId,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id,
            kind: NoteKind::Voice,
            content: content.into(),
            created_at,
            duration_secs: Some(duration_secs),
        }
    }

    /// Only text notes get an edit button.
    pub fn is_editable(&self) -> bool {
        self.kind == NoteKind::Text
    }

    /// Date in the `Mar 15, 2024` style.
    pub fn display_date(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// Format seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Newest-first collection of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    /// Book holding `notes`, newest first.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// All notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the book has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by id.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Add a text note. Whitespace-only content is ignored.
    pub fn add_text(self, content: &str, at: DateTime<Utc>) -> Self {
        if content.trim().is_empty() {
            tracing::debug!("ignoring empty note");
            return self;
        }
        let id = self.next_id(at);
        self.prepend(Note::text(id, content, at))
    }

    /// Add a voice memo.
    pub fn add_voice(self, content: impl Into<String>, duration_secs: u32, at: DateTime<Utc>) -> Self {
        let id = self.next_id(at);
        self.prepend(Note::voice(id, content, at, duration_secs))
    }

    /// Replace the content of a note, keeping its id and timestamp.
    pub fn edit(mut self, id: &NoteId, content: impl Into<String>) -> Self {
        match self.notes.iter_mut().find(|n| &n.id == id) {
            Some(note) => note.content = content.into(),
            None => tracing::debug!(id = %id, "edit of unknown note ignored"),
        }
        self
    }

    /// Remove a note. Unknown ids are ignored.
    pub fn delete(mut self, id: &NoteId) -> Self {
        if let Some(pos) = self.notes.iter().position(|n| &n.id == id) {
            self.notes.remove(pos);
        }
        self
    }

    fn prepend(mut self, note: Note) -> Self {
        tracing::debug!(id = %note.id, kind = ?note.kind, "note added");
        self.notes.insert(0, note);
        self
    }

    // Millisecond timestamp, bumped past any id already in the book.
    fn next_id(&self, at: DateTime<Utc>) -> NoteId {
        let mut millis = at.timestamp_millis();
        while self.notes.iter().any(|n| n.id.0 == millis.to_string()) {
            millis += 1;
        }
        NoteId(millis.to_string())
    }
}

/// Voice recorder toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

/// User actions on the notes panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesEvent {
    /// Draft textarea changed.
    DraftChanged(String),
    /// "Add Note" pressed.
    SubmitDraft { at: DateTime<Utc> },
    StartRecording,
    /// Recorder stopped; the clip became `content` lasting `duration_secs`.
    StopRecording {
        at: DateTime<Utc>,
        content: String,
        duration_secs: u32,
    },
    BeginEdit(NoteId),
    EditContent { id: NoteId, content: String },
    FinishEdit,
    Delete(NoteId),
}

impl NotesEvent {
    /// Stop event using the configured stand-in clip.
    pub fn stop_with_placeholder(at: DateTime<Utc>, placeholder: &VoicePlaceholder) -> Self {
        NotesEvent::StopRecording {
            at,
            content: placeholder.content.clone(),
            duration_secs: placeholder.duration_secs,
        }
    }
}

/// State behind the teacher notes tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesPanel {
    pub book: NoteBook,
    pub recording: RecordingState,
    pub draft: String,
    pub editing: Option<NoteId>,
}

impl NotesPanel {
    /// Idle panel over `book` with an empty draft.
    pub fn new(book: NoteBook) -> Self {
        Self {
            book,
            ..Self::default()
        }
    }

    /// Whether "Add Note" is enabled.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Whether a voice memo is being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording == RecordingState::Recording
    }

    /// Apply one panel event.
    pub fn apply(mut self, event: NotesEvent) -> Self {
        match event {
            NotesEvent::DraftChanged(text) => self.draft = text,
            NotesEvent::SubmitDraft { at } => {
                if self.can_submit() {
                    let draft = std::mem::take(&mut self.draft);
                    self.book = self.book.add_text(&draft, at);
                }
            }
            NotesEvent::StartRecording => {
                if self.recording == RecordingState::Idle {
                    tracing::debug!("recording started");
                }
                self.recording = RecordingState::Recording;
            }
            NotesEvent::StopRecording {
                at,
                content,
                duration_secs,
            } => {
                if self.recording == RecordingState::Recording {
                    tracing::debug!(duration_secs, "recording stopped");
                    self.recording = RecordingState::Idle;
                    self.book = self.book.add_voice(content, duration_secs, at);
                }
            }
            NotesEvent::BeginEdit(id) => {
                if self.book.get(&id).is_some() {
                    self.editing = Some(id);
                }
            }
            NotesEvent::EditContent { id, content } => {
                self.book = self.book.edit(&id, content);
            }
            NotesEvent::FinishEdit => self.editing = None,
            NotesEvent::Delete(id) => {
                if self.editing.as_ref() == Some(&id) {
                    self.editing = None;
                }
                self.book = self.book.delete(&id);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_710_498_600 + secs, 0).unwrap()
    }

    fn sample_book() -> NoteBook {
        NoteBook::new(vec![
            Note::text(NoteId::new("1"), "First", at(0)),
            Note::voice(NoteId::new("2"), "Reading memo", at(-60), 45),
            Note::text(NoteId::new("3"), "Third", at(-120)),
        ])
    }

    fn ids(book: &NoteBook) -> Vec<&str> {
        book.notes().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_add_text_to_empty_book() {
        let book = NoteBook::default().add_text("Great day!", at(0));

        assert_eq!(book.len(), 1);
        let note = &book.notes()[0];
        assert_eq!(note.content, "Great day!");
        assert_eq!(note.kind, NoteKind::Text);
        assert!(!note.id.as_str().is_empty());
        assert_eq!(note.created_at, at(0));
    }

    #[test]
    fn test_add_blank_text_is_rejected() {
        let book = sample_book();
        assert_eq!(book.clone().add_text("   ", at(5)), book);
        assert_eq!(NoteBook::default().add_text("", at(5)), NoteBook::default());
    }

    #[test]
    fn test_add_prepends() {
        let book = sample_book().add_text("Newest", at(10));
        assert_eq!(book.notes()[0].content, "Newest");
        assert_eq!(&ids(&book)[1..], &["1", "2", "3"]);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let book = NoteBook::default()
            .add_text("a", at(0))
            .add_text("b", at(0))
            .add_voice("c", 30, at(0));
        let mut seen = ids(&book);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_edit_replaces_content_only() {
        let before = sample_book();
        let after = before.clone().edit(&NoteId::new("3"), "Rewritten");

        let note = after.get(&NoteId::new("3")).unwrap();
        assert_eq!(note.content, "Rewritten");
        assert_eq!(note.created_at, at(-120));
        assert_eq!(ids(&after), ids(&before));
    }

    #[test]
    fn test_edit_is_not_kind_restricted() {
        let book = sample_book().edit(&NoteId::new("2"), "Caption");
        assert_eq!(book.get(&NoteId::new("2")).unwrap().content, "Caption");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let book = sample_book();
        assert_eq!(book.clone().edit(&NoteId::new("missing"), "x"), book);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let book = sample_book().delete(&NoteId::new("2"));
        assert_eq!(ids(&book), vec!["1", "3"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let book = sample_book();
        assert_eq!(book.clone().delete(&NoteId::new("9")), book);
    }

    #[test]
    fn test_start_then_stop_appends_one_voice_note() {
        let placeholder = VoicePlaceholder::default();
        let panel = NotesPanel::default()
            .apply(NotesEvent::StartRecording)
            .apply(NotesEvent::stop_with_placeholder(at(0), &placeholder));

        assert_eq!(panel.recording, RecordingState::Idle);
        assert_eq!(panel.book.len(), 1);
        let note = &panel.book.notes()[0];
        assert_eq!(note.kind, NoteKind::Voice);
        assert_eq!(note.duration_secs, Some(30));
        assert_eq!(note.content, "Voice memo recording");
    }

    #[test]
    fn test_start_twice_keeps_recording_without_note() {
        let panel = NotesPanel::default()
            .apply(NotesEvent::StartRecording)
            .apply(NotesEvent::StartRecording);

        assert!(panel.is_recording());
        assert!(panel.book.is_empty());
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let panel = NotesPanel::default()
            .apply(NotesEvent::stop_with_placeholder(at(0), &VoicePlaceholder::default()));
        assert_eq!(panel, NotesPanel::default());
    }

    #[test]
    fn test_submit_draft_clears_it() {
        let panel = NotesPanel::default()
            .apply(NotesEvent::DraftChanged("  Painted a sheep  ".to_string()));
        assert!(panel.can_submit());

        let panel = panel.apply(NotesEvent::SubmitDraft { at: at(0) });
        assert_eq!(panel.draft, "");
        assert_eq!(panel.book.notes()[0].content, "  Painted a sheep  ");
    }

    #[test]
    fn test_submit_blank_draft_is_noop() {
        let panel = NotesPanel::default().apply(NotesEvent::DraftChanged("\n\t ".to_string()));
        assert!(!panel.can_submit());

        let after = panel.clone().apply(NotesEvent::SubmitDraft { at: at(0) });
        assert_eq!(after, panel);
    }

    #[test]
    fn test_edit_cycle() {
        let panel = NotesPanel::new(sample_book())
            .apply(NotesEvent::BeginEdit(NoteId::new("1")))
            .apply(NotesEvent::EditContent {
                id: NoteId::new("1"),
                content: "Edited".to_string(),
            });
        assert_eq!(panel.editing, Some(NoteId::new("1")));

        let panel = panel.apply(NotesEvent::FinishEdit);
        assert_eq!(panel.editing, None);
        assert_eq!(panel.book.get(&NoteId::new("1")).unwrap().content, "Edited");
    }

    #[test]
    fn test_begin_edit_unknown_note_ignored() {
        let panel = NotesPanel::new(sample_book()).apply(NotesEvent::BeginEdit(NoteId::new("x")));
        assert_eq!(panel.editing, None);
    }

    #[test]
    fn test_deleting_note_under_edit_clears_cursor() {
        let panel = NotesPanel::new(sample_book())
            .apply(NotesEvent::BeginEdit(NoteId::new("3")))
            .apply(NotesEvent::Delete(NoteId::new("3")));
        assert_eq!(panel.editing, None);
        assert_eq!(ids(&panel.book), vec!["1", "2"]);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(30), "0:30");
        assert_eq!(format_duration(45), "0:45");
        assert_eq!(format_duration(125), "2:05");
    }

    #[test]
    fn test_display_date_and_editability() {
        let note = Note::text(
            NoteId::new("1"),
            "x",
            Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
        );
        assert_eq!(note.display_date(), "Mar 15, 2024");
        assert!(note.is_editable());
        assert!(!Note::voice(NoteId::new("2"), "y", at(0), 3).is_editable());
    }
}
