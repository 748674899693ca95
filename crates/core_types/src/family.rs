//! Parent portal records.

use serde::{Deserialize, Serialize};

/// Progress on a weekly learning goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Achieved,
    InProgress,
    NotStarted,
}

impl GoalStatus {
    /// Status glyph and its color.
    pub fn marker(self) -> (&'static str, &'static str) {
        match self {
            GoalStatus::Achieved => ("✔", "#81C784"),
            GoalStatus::InProgress => ("⚠", "#FFB74D"),
            GoalStatus::NotStarted => ("★", "#E3F2FD"),
        }
    }
}

/// A goal in the weekly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoal {
    pub title: String,
    pub status: GoalStatus,
}

/// What happened in class this week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Week label, e.g. "March 11-15, 2024"
    pub date_range: String,
    pub learning_goals: Vec<LearningGoal>,
    pub behavior_notes: Vec<String>,
    pub highlights: Vec<String>,
}

/// A message in the parent inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from: String,
    pub content: String,
    /// Display timestamp, e.g. "2024-03-15 2:30 PM"
    pub timestamp: String,
    /// Whether the content was machine translated
    #[serde(default)]
    pub translated: bool,
}

/// Subject of an at-home activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Reading,
    Math,
    Art,
    Science,
}

impl ActivityCategory {
    /// Chip text.
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Reading => "reading",
            ActivityCategory::Math => "math",
            ActivityCategory::Art => "art",
            ActivityCategory::Science => "science",
        }
    }
}

/// Suggested at-home activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
    /// Time needed, e.g. "15-20 minutes"
    pub duration: String,
    pub materials: Vec<String>,
    /// Learning goal the activity reinforces
    pub related_to: String,
}

/// Language offered for message translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}
