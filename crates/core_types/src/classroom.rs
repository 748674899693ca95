//! Class roster shown on the teacher dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Behavior rating for the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    Excellent,
    Good,
    NeedsAttention,
}

impl Behavior {
    /// Chip text.
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Excellent => "excellent",
            Behavior::Good => "good",
            Behavior::NeedsAttention => "needs_attention",
        }
    }

    /// Chip background color.
    pub fn color(self) -> &'static str {
        match self {
            Behavior::Excellent => "#81C784",
            Behavior::Good => "#FFB74D",
            Behavior::NeedsAttention => "#E57373",
        }
    }
}

/// Whether an assessment has been done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Completed,
    Pending,
}

/// A recent assessment of one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// What was assessed, e.g. "Reading Progress"
    pub kind: String,
    pub date: NaiveDate,
    pub status: AssessmentStatus,
}

/// One student in the class overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub avatar: String,
    /// Participation score, 0-100
    pub participation: u8,
    pub behavior: Behavior,
    pub recent_assessments: Vec<Assessment>,
}

impl RosterEntry {
    /// Assessments still waiting on the teacher.
    pub fn pending_assessments(&self) -> usize {
        self.recent_assessments
            .iter()
            .filter(|a| a.status == AssessmentStatus::Pending)
            .count()
    }
}
