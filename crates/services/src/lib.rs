//! Collaborator seams for WeeWoolies.
//!
//! This crate provides:
//! - ArtifactStore, Transcriber, MessageDelivery: the side effects the UI
//!   triggers but does not own
//! - Placeholder implementations that only log
//! - Workflows that validate form state before calling a collaborator

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use core_types::{
    AppConfig, ArtworkDraft, ArtworkSubmission, MessageDraft, NotesEvent, OutgoingMessage,
    ShowAndTellDraft, VoicePlaceholder,
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from service operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("{0} is unavailable")]
    Unavailable(&'static str),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Stores uploaded artwork and assignments.
pub trait ArtifactStore {
    fn persist(&self, submission: &ArtworkSubmission) -> Result<()>;
}

/// Text produced from a voice clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub content: String,
    pub duration_secs: u32,
}

/// Turns a finished voice clip into note content.
pub trait Transcriber {
    fn transcribe(&self, started_at: DateTime<Utc>, stopped_at: DateTime<Utc>) -> Result<Transcript>;
}

/// Sends parent messages to the teacher.
pub trait MessageDelivery {
    fn deliver(&self, message: &OutgoingMessage) -> Result<()>;
}

/// Store that logs the upload and keeps nothing.
#[derive(Debug, Default)]
pub struct LoggingArtifactStore;

impl ArtifactStore for LoggingArtifactStore {
    fn persist(&self, submission: &ArtworkSubmission) -> Result<()> {
        info!(
            title = %submission.title,
            kind = submission.kind.label(),
            file = %submission.file.name,
            bytes = submission.file.size,
            "artwork upload accepted"
        );
        Ok(())
    }
}

/// Transcriber that ignores the clip and returns a fixed memo.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTranscriber {
    placeholder: VoicePlaceholder,
}

impl PlaceholderTranscriber {
    /// Transcriber returning `placeholder` for every clip.
    pub fn new(placeholder: VoicePlaceholder) -> Self {
        Self { placeholder }
    }
}

impl Transcriber for PlaceholderTranscriber {
    fn transcribe(&self, started_at: DateTime<Utc>, stopped_at: DateTime<Utc>) -> Result<Transcript> {
        let recorded = (stopped_at - started_at).num_seconds();
        info!(recorded, "voice clip transcribed with placeholder");
        Ok(Transcript {
            content: self.placeholder.content.clone(),
            duration_secs: self.placeholder.duration_secs,
        })
    }
}

/// Delivery that logs the message and sends nothing.
#[derive(Debug, Default)]
pub struct LoggingDelivery;

impl MessageDelivery for LoggingDelivery {
    fn deliver(&self, message: &OutgoingMessage) -> Result<()> {
        info!(
            language = %message.language,
            chars = message.content.chars().count(),
            "message to teacher accepted"
        );
        Ok(())
    }
}

/// Stand-in for every collaborator when none has been provided.
///
/// Each call fails with [`ServiceError::Unavailable`] naming the seam.
#[derive(Debug, Default)]
pub struct Unwired;

impl ArtifactStore for Unwired {
    fn persist(&self, _submission: &ArtworkSubmission) -> Result<()> {
        Err(ServiceError::Unavailable("artifact store"))
    }
}

impl Transcriber for Unwired {
    fn transcribe(&self, _started_at: DateTime<Utc>, _stopped_at: DateTime<Utc>) -> Result<Transcript> {
        Err(ServiceError::Unavailable("transcriber"))
    }
}

impl MessageDelivery for Unwired {
    fn deliver(&self, _message: &OutgoingMessage) -> Result<()> {
        Err(ServiceError::Unavailable("message delivery"))
    }
}

/// The collaborators the UI talks to.
#[derive(Clone)]
pub struct Services {
    pub artifacts: Rc<dyn ArtifactStore>,
    pub transcriber: Rc<dyn Transcriber>,
    pub delivery: Rc<dyn MessageDelivery>,
}

impl Services {
    /// Placeholder collaborators configured from `config`.
    pub fn placeholder(config: &AppConfig) -> Self {
        Self {
            artifacts: Rc::new(LoggingArtifactStore),
            transcriber: Rc::new(PlaceholderTranscriber::new(config.voice_placeholder.clone())),
            delivery: Rc::new(LoggingDelivery),
        }
    }
}

impl Services {
    /// Collaborators that refuse every call.
    pub fn unwired() -> Self {
        let unwired = Rc::new(Unwired);
        Self {
            artifacts: unwired.clone(),
            transcriber: unwired.clone(),
            delivery: unwired,
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::placeholder(&AppConfig::default())
    }
}

// Same bundle only when every collaborator is the same instance.
impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.artifacts, &other.artifacts)
            && Rc::ptr_eq(&self.transcriber, &other.transcriber)
            && Rc::ptr_eq(&self.delivery, &other.delivery)
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Submit the upload dialog.
///
/// The store is called once with the completed form. On success the caller
/// resets its form with [`ArtworkEvent::Reset`](core_types::ArtworkEvent::Reset);
/// on failure it keeps its draft.
pub fn submit_artwork(store: &dyn ArtifactStore, draft: &ArtworkDraft) -> Result<()> {
    let Some(submission) = draft.submission() else {
        warn!("upload submitted without a file or title");
        return Err(ServiceError::Rejected(
            "a file and a title are required".to_string(),
        ));
    };
    store.persist(&submission)?;
    Ok(())
}

/// Send the composer's message.
///
/// Whitespace-only text is a no-op and returns the draft unchanged.
pub fn send_message(delivery: &dyn MessageDelivery, draft: &MessageDraft) -> Result<MessageDraft> {
    let Some(message) = draft.outgoing() else {
        return Ok(draft.clone());
    };
    delivery.deliver(&message)?;
    Ok(draft.clone().cleared())
}

/// Turn a finished recording into the event that appends the voice note.
pub fn finish_recording(
    transcriber: &dyn Transcriber,
    started_at: DateTime<Utc>,
    stopped_at: DateTime<Utc>,
) -> Result<NotesEvent> {
    let transcript = transcriber.transcribe(started_at, stopped_at)?;
    Ok(NotesEvent::StopRecording {
        at: stopped_at,
        content: transcript.content,
        duration_secs: transcript.duration_secs,
    })
}

/// Close the share dialog. Shared items are not added to the gallery.
pub fn close_show_and_tell(draft: ShowAndTellDraft) -> ShowAndTellDraft {
    if !draft.is_blank() {
        info!(title = %draft.title, "show and tell draft discarded");
    }
    ShowAndTellDraft::default()
}
