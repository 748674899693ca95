//! Built-in sample data for WeeWoolies.
//!
//! Every page renders hard-coded records until a backend exists. They live
//! here so the frontend and the CLI show the same class.

use std::path::Path;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_types::{
    Activity, ActivityCategory, Announcement, Assessment, AssessmentStatus, Badge, Behavior,
    Difficulty, Event, EventKind, Game, GameCategory, GoalStatus, Language, LearningGoal, Message,
    Milestone, Note, NoteBook, NoteId, ProgressRecord, RosterEntry, ShowAndTell, Student, Trend,
    WeeklySummary,
};
use thiserror::Error;

/// Errors from loading sample data.
#[derive(Error, Debug)]
pub enum MockDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sample data operations.
pub type Result<T> = std::result::Result<T, MockDataError>;

const AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1516627145497-ae6968895b74?w=200&h=200&fit=crop&auto=format";

/// Languages offered by the message composer.
pub const LANGUAGES: [Language; 4] = [
    Language {
        code: "en",
        name: "English",
    },
    Language {
        code: "es",
        name: "Español",
    },
    Language {
        code: "fr",
        name: "Français",
    },
    Language {
        code: "zh",
        name: "中文",
    },
];

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The student shown on the portfolio page.
pub fn load_student() -> Student {
    Student {
        id: "1".into(),
        name: "Emma Thompson".into(),
        age: 5,
        grade: "Kindergarten".into(),
        avatar: Some(AVATAR_URL.into()),
    }
}

/// Reading, math and social skills progress.
pub fn load_progress() -> Vec<ProgressRecord> {
    vec![
        ProgressRecord {
            category: "Reading".into(),
            current_level: 3,
            max_level: 5,
            trend: Trend::Up,
            last_updated: day(2024, 3, 15),
            milestones: vec![
                Milestone::new("Recognizes all letters", true),
                Milestone::new("Reads simple words", true),
                Milestone::new("Reads short sentences", false),
            ],
        },
        ProgressRecord {
            category: "Math".into(),
            current_level: 2,
            max_level: 5,
            trend: Trend::Stable,
            last_updated: day(2024, 3, 14),
            milestones: vec![
                Milestone::new("Counts to 20", true),
                Milestone::new("Recognizes numbers 1-10", true),
                Milestone::new("Simple addition", false),
            ],
        },
        ProgressRecord {
            category: "Social Skills".into(),
            current_level: 4,
            max_level: 5,
            trend: Trend::Up,
            last_updated: day(2024, 3, 13),
            milestones: vec![
                Milestone::new("Shares with others", true),
                Milestone::new("Takes turns", true),
                Milestone::new("Expresses feelings", true),
            ],
        },
    ]
}

/// Notes the portfolio page starts with.
pub fn load_notes() -> NoteBook {
    NoteBook::new(vec![
        Note::text(
            NoteId::new("1"),
            "Emma showed great enthusiasm during the art project today!",
            instant(2024, 3, 15, 10, 30),
        ),
        Note::voice(
            NoteId::new("2"),
            "Voice memo about reading progress",
            instant(2024, 3, 14, 14, 20),
            45,
        ),
    ])
}

/// The Game Central catalog.
pub fn load_games() -> Vec<Game> {
    vec![
        Game::new(
            "phonics-fun".into(),
            "Phonics Fun".into(),
            "Learn letter sounds and build words through interactive games".into(),
            GameCategory::Reading,
            Difficulty::Beginner,
            "/games/phonics".into(),
            strings(&[
                "Letter sound recognition",
                "Basic word building",
                "Phonemic awareness",
            ]),
        ),
        Game::new(
            "number-adventure".into(),
            "Number Adventure".into(),
            "Explore numbers and basic math concepts through fun activities".into(),
            GameCategory::Math,
            Difficulty::Beginner,
            "/games/numbers".into(),
            strings(&["Number recognition", "Basic counting", "Simple addition"]),
        ),
        Game::new(
            "pattern-play".into(),
            "Pattern Play".into(),
            "Develop pattern recognition and logical thinking skills".into(),
            GameCategory::Cognitive,
            Difficulty::Intermediate,
            "/games/patterns".into(),
            strings(&[
                "Pattern recognition",
                "Logical thinking",
                "Visual discrimination",
            ]),
        ),
    ]
}

/// Load a game catalog from a JSON string.
pub fn load_games_from_json(json: &str) -> Result<Vec<Game>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a game catalog from a JSON file.
pub fn load_games_from_file(path: &Path) -> Result<Vec<Game>> {
    let content = std::fs::read_to_string(path)?;
    load_games_from_json(&content)
}

/// Students in the teacher's class overview.
pub fn load_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            id: "1".into(),
            name: "Emma Thompson".into(),
            avatar: AVATAR_URL.into(),
            participation: 85,
            behavior: Behavior::Excellent,
            recent_assessments: vec![
                Assessment {
                    kind: "Reading Progress".into(),
                    date: day(2024, 3, 15),
                    status: AssessmentStatus::Completed,
                },
                Assessment {
                    kind: "Math Skills".into(),
                    date: day(2024, 3, 14),
                    status: AssessmentStatus::Pending,
                },
            ],
        },
        RosterEntry {
            id: "2".into(),
            name: "Liam Johnson".into(),
            avatar: AVATAR_URL.into(),
            participation: 70,
            behavior: Behavior::Good,
            recent_assessments: vec![
                Assessment {
                    kind: "Social Skills".into(),
                    date: day(2024, 3, 15),
                    status: AssessmentStatus::Completed,
                },
                Assessment {
                    kind: "Art Project".into(),
                    date: day(2024, 3, 14),
                    status: AssessmentStatus::Completed,
                },
            ],
        },
    ]
}

/// This week's summary on the parent portal.
pub fn load_weekly_summary() -> WeeklySummary {
    WeeklySummary {
        date_range: "March 11-15, 2024".into(),
        learning_goals: vec![
            LearningGoal {
                title: "Letter Recognition (A-E)".into(),
                status: GoalStatus::Achieved,
            },
            LearningGoal {
                title: "Counting to 10".into(),
                status: GoalStatus::Achieved,
            },
            LearningGoal {
                title: "Sharing with Peers".into(),
                status: GoalStatus::InProgress,
            },
        ],
        behavior_notes: strings(&[
            "Great participation in group activities",
            "Showed kindness by helping a friend",
            "Working on raising hand before speaking",
        ]),
        highlights: strings(&[
            "Created a beautiful art project",
            "Read first complete sentence",
            "Led the morning circle time",
        ]),
    }
}

/// Parent inbox.
pub fn load_messages() -> Vec<Message> {
    vec![
        Message {
            id: "1".into(),
            from: "Ms. Johnson".into(),
            content: "Emma had a wonderful day today! She showed great enthusiasm in our art project."
                .into(),
            timestamp: "2024-03-15 2:30 PM".into(),
            translated: false,
        },
        Message {
            id: "2".into(),
            from: "School Nurse".into(),
            content: "Reminder: Please bring updated immunization records.".into(),
            timestamp: "2024-03-14 10:15 AM".into(),
            translated: false,
        },
    ]
}

/// Suggested at-home activities.
pub fn load_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".into(),
            title: "Letter Hunt".into(),
            description: "Find objects around the house that start with letters A-E".into(),
            category: ActivityCategory::Reading,
            duration: "15-20 minutes".into(),
            materials: strings(&["Paper", "Pencil", "Objects around the house"]),
            related_to: "Letter Recognition (A-E)".into(),
        },
        Activity {
            id: "2".into(),
            title: "Counting Collection".into(),
            description: "Collect and count small items (buttons, coins, etc.)".into(),
            category: ActivityCategory::Math,
            duration: "10-15 minutes".into(),
            materials: strings(&["Small items", "Counting mat (optional)"]),
            related_to: "Counting to 10".into(),
        },
    ]
}

/// Upcoming calendar events.
pub fn load_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Emma's Birthday".into(),
            date: day(2024, 3, 20),
            kind: EventKind::Birthday,
            description: None,
            student_name: Some("Emma Thompson".into()),
        },
        Event {
            id: "2".into(),
            title: "Spring Show".into(),
            date: day(2024, 3, 25),
            kind: EventKind::Event,
            description: Some("Annual spring performance by our talented students".into()),
            student_name: None,
        },
        Event {
            id: "3".into(),
            title: "Liam's Birthday".into(),
            date: day(2024, 3, 28),
            kind: EventKind::Birthday,
            description: None,
            student_name: Some("Liam Johnson".into()),
        },
    ]
}

/// Show & tell gallery.
pub fn load_show_and_tell() -> Vec<ShowAndTell> {
    vec![
        ShowAndTell {
            id: "1".into(),
            student_name: "Emma Thompson".into(),
            title: "My Pet Turtle".into(),
            description: "This is my pet turtle, Speedy! He loves to eat lettuce.".into(),
            media_url: "https://example.com/turtle.jpg".into(),
            date: day(2024, 3, 15),
            likes: 12,
        },
        ShowAndTell {
            id: "2".into(),
            student_name: "Liam Johnson".into(),
            title: "My Art Project".into(),
            description: "I made this painting of a rainbow!".into(),
            media_url: "https://example.com/art.jpg".into(),
            date: day(2024, 3, 14),
            likes: 8,
        },
    ]
}

/// Recognition badges.
pub fn load_badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "1".into(),
            title: "Kind Friend".into(),
            description: "Always helps others and shares with classmates".into(),
            icon: "🤗".into(),
            student_name: "Emma Thompson".into(),
            date: day(2024, 3, 15),
        },
        Badge {
            id: "2".into(),
            title: "Math Star".into(),
            description: "Excellent work in counting and number recognition".into(),
            icon: "⭐".into(),
            student_name: "Liam Johnson".into(),
            date: day(2024, 3, 14),
        },
    ]
}

/// Announcements on the landing page.
pub fn load_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            title: "Welcome Back!".into(),
            content: "School starts on September 1st. Get ready for an exciting year!".into(),
            date: day(2024, 8, 25),
        },
        Announcement {
            title: "Parent-Teacher Conference".into(),
            content: "Sign up for our upcoming parent-teacher conferences.".into(),
            date: day(2024, 8, 28),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{CategoryFilter, NoteKind, filter_by_category};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_games() {
        let games = load_games();
        assert_eq!(games.len(), 3);

        for game in &games {
            assert!(!game.id.is_empty());
            assert!(!game.title.is_empty());
            assert!(game.path.starts_with("/games/"));
            assert_eq!(game.learning_goals.len(), 3);
        }
    }

    #[test]
    fn test_all_filter_keeps_catalog_order() {
        let games = load_games();
        assert_eq!(filter_by_category(&games, CategoryFilter::All), games);
    }

    #[test]
    fn test_math_filter_finds_number_adventure() {
        let math = filter_by_category(&load_games(), "math".parse().unwrap());
        let titles: Vec<&str> = math.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Number Adventure"]);
    }

    #[test]
    fn test_load_games_from_json() {
        let json = r#"[
            {
                "id": "shape-sorter",
                "title": "Shape Sorter",
                "description": "Match shapes to their holes",
                "category": "cognitive",
                "difficulty": "beginner",
                "path": "/games/shapes",
                "learning_goals": ["Shape names"]
            }
        ]"#;

        let games = load_games_from_json(json).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].category, GameCategory::Cognitive);
    }

    #[test]
    fn test_load_games_from_bad_json() {
        assert!(matches!(
            load_games_from_json("{\"id\": 1}"),
            Err(MockDataError::Json(_))
        ));
    }

    #[test]
    fn test_load_games_from_missing_file() {
        let result = load_games_from_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(MockDataError::Io(_))));
    }

    #[test]
    fn test_seed_notes() {
        let notes = load_notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.notes()[0].kind, NoteKind::Text);
        assert_eq!(notes.notes()[0].display_date(), "Mar 15, 2024");
        assert_eq!(notes.notes()[1].duration_secs, Some(45));
    }

    #[test]
    fn test_dates_are_real() {
        let epoch = NaiveDate::default();
        assert!(load_progress().iter().all(|p| p.last_updated != epoch));
        assert!(load_events().iter().all(|e| e.date != epoch));
        assert!(load_badges().iter().all(|b| b.date != epoch));
        assert!(load_announcements().iter().all(|a| a.date != epoch));
    }

    #[test]
    fn test_birthdays_name_a_student() {
        for event in load_events() {
            match event.kind {
                EventKind::Birthday => assert!(event.student_name.is_some()),
                EventKind::Event => assert!(event.description.is_some()),
            }
        }
    }

    #[test]
    fn test_roster_and_summary() {
        let roster = load_roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].pending_assessments(), 1);
        assert_eq!(roster[1].pending_assessments(), 0);

        let summary = load_weekly_summary();
        assert_eq!(summary.learning_goals.len(), 3);
        assert_eq!(summary.highlights.len(), 3);
    }

    #[test]
    fn test_languages() {
        let codes: Vec<&str> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "zh"]);
    }

    #[test]
    fn test_progress_colors_span_thresholds() {
        let colors: Vec<&str> = load_progress().iter().map(|p| p.bar_color()).collect();
        assert_eq!(colors, vec!["#FFC107", "#F44336", "#4CAF50"]);
    }

    #[test]
    fn test_student() {
        let student = load_student();
        assert_eq!(student.name, "Emma Thompson");
        assert_eq!(student.age, 5);
        assert!(!load_messages().is_empty());
        assert_eq!(load_activities().len(), 2);
        assert_eq!(load_show_and_tell().len(), 2);
    }
}
