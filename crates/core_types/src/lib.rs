//! Core types for the WeeWoolies classroom app.
//!
//! This crate defines the shared data structures and the small pieces of
//! state logic used by the frontend and the CLI: roles and who may see
//! what, navigation payloads, the game catalog filter, the teacher notes
//! reducer, and form state for the upload and messaging dialogs.

mod auth;
mod catalog;
mod classroom;
mod config;
mod family;
mod feed;
mod forms;
mod navigation;
mod notes;
mod portfolio;
mod role;

pub use auth::{Credentials, LoginState, infer_role};
pub use catalog::{CategoryFilter, Difficulty, Game, GameCategory, filter_by_category};
pub use classroom::{Assessment, AssessmentStatus, Behavior, RosterEntry};
pub use config::{AppConfig, RoleResolution, VoicePlaceholder};
pub use family::{Activity, ActivityCategory, GoalStatus, Language, LearningGoal, Message, WeeklySummary};
pub use feed::{Announcement, Badge, Event, EventKind, ShowAndTell};
pub use forms::{
    ArtworkDraft, ArtworkEvent, ArtworkKind, ArtworkSubmission, MessageDraft, OutgoingMessage,
    PreviewTicket, PreviewTracker, SelectedFile, ShowAndTellDraft,
};
pub use navigation::{
    LANDING_MODULES, NavModule, Page, SHELL_MODULES, TransitionPayload, landing_grid, resolve_role,
    shell_menu,
};
pub use notes::{
    Note, NoteBook, NoteId, NoteKind, NotesEvent, NotesPanel, RecordingState, format_duration,
};
pub use portfolio::{Milestone, ProgressRecord, Student, Trend};
pub use role::{Applicability, Role, RoleHolder, RoleScoped, filter_by_role, require_role_scope};

use thiserror::Error;

/// Errors from the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(
        "role holder read outside its provider; wrap the component tree in a RoleProvider before reading the role"
    )]
    OutsideRoleScope,

    #[error("unknown role: {0} (expected teacher or parent)")]
    UnknownRole(String),

    #[error("unknown game category: {0} (expected all, reading, math or cognitive)")]
    UnknownCategory(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
