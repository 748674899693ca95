//! Student portfolio records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student whose portfolio is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Age in years
    pub age: u8,
    pub grade: String,
    /// Avatar image URL
    pub avatar: Option<String>,
}

impl Student {
    /// First letter of the name, for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Direction of recent progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Arrow shown next to the category, none when stable.
    pub fn arrow(self) -> Option<(&'static str, &'static str)> {
        match self {
            Trend::Up => Some(("↗", "#4CAF50")),
            Trend::Down => Some(("↘", "#F44336")),
            Trend::Stable => None,
        }
    }
}

/// A developmental milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub achieved: bool,
}

impl Milestone {
    /// A milestone, reached or not.
    pub fn new(title: impl Into<String>, achieved: bool) -> Self {
        Self {
            title: title.into(),
            achieved,
        }
    }
}

/// Progress in one learning area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub category: String,
    pub current_level: u32,
    pub max_level: u32,
    pub trend: Trend,
    pub last_updated: NaiveDate,
    pub milestones: Vec<Milestone>,
}

impl ProgressRecord {
    /// Completion percentage, 0 when there are no levels.
    pub fn percent(&self) -> f64 {
        if self.max_level == 0 {
            return 0.0;
        }
        f64::from(self.current_level) / f64::from(self.max_level) * 100.0
    }

    /// Progress bar color: green from 80%, amber from 60%, red below.
    pub fn bar_color(&self) -> &'static str {
        let percent = self.percent();
        if percent >= 80.0 {
            "#4CAF50"
        } else if percent >= 60.0 {
            "#FFC107"
        } else {
            "#F44336"
        }
    }
}
