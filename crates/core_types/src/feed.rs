//! WhatsUp! feed items and landing announcements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Birthday,
    Event,
}

/// Calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub kind: EventKind,
    pub description: Option<String>,
    /// Student whose birthday it is
    pub student_name: Option<String>,
}

impl Event {
    /// Emoji shown before the title.
    pub fn icon(&self) -> &'static str {
        match self.kind {
            EventKind::Birthday => "🎂",
            EventKind::Event => "🏫",
        }
    }
}

/// A show & tell post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowAndTell {
    pub id: String,
    pub student_name: String,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub date: NaiveDate,
    pub likes: u32,
}

/// Recognition badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Emoji shown on the badge
    pub icon: String,
    pub student_name: String,
    pub date: NaiveDate,
}

/// Landing page announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
}
