//! Game Central catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// Learning area a game targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    /// Phonics and early literacy
    Reading,
    /// Numbers and counting
    Math,
    /// Patterns and logic
    Cognitive,
}

impl GameCategory {
    /// Every category, in chip order.
    pub const ALL: [GameCategory; 3] = [
        GameCategory::Reading,
        GameCategory::Math,
        GameCategory::Cognitive,
    ];

    /// Lowercase name used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            GameCategory::Reading => "reading",
            GameCategory::Math => "math",
            GameCategory::Cognitive => "cognitive",
        }
    }

    /// Chip label.
    pub fn label(self) -> &'static str {
        match self {
            GameCategory::Reading => "Reading",
            GameCategory::Math => "Math",
            GameCategory::Cognitive => "Cognitive",
        }
    }
}

/// How hard a game is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Lowercase name shown on the difficulty chip.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Chip color.
    pub fn color(self) -> &'static str {
        match self {
            Difficulty::Beginner => "#81C784",
            Difficulty::Intermediate => "#FFB74D",
            Difficulty::Advanced => "#E57373",
        }
    }
}

/// An educational game in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique slug
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GameCategory,
    pub difficulty: Difficulty,
    /// Where the game would be played
    pub path: String,
    /// Skills the game practices
    pub learning_goals: Vec<String>,
}

impl Game {
    /// Build a catalog entry.
    pub fn new(
        id: String,
        title: String,
        description: String,
        category: GameCategory,
        difficulty: Difficulty,
        path: String,
        learning_goals: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            difficulty,
            path,
            learning_goals,
        }
    }
}

/// Category chip selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// "All Games"
    #[default]
    All,
    Only(GameCategory),
}

impl CategoryFilter {
    /// Whether `game` passes this filter.
    pub fn matches(self, game: &Game) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => game.category == category,
        }
    }

    /// Chip text.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Games",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Chips in display order.
    pub fn chips() -> [CategoryFilter; 4] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(GameCategory::Reading),
            CategoryFilter::Only(GameCategory::Math),
            CategoryFilter::Only(GameCategory::Cognitive),
        ]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        if key == "all" {
            return Ok(CategoryFilter::All);
        }
        GameCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Games matching `filter`, in catalog order.
pub fn filter_by_category(games: &[Game], filter: CategoryFilter) -> Vec<Game> {
    games.iter().filter(|g| filter.matches(g)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn game(id: &str, category: GameCategory) -> Game {
        Game::new(
            id.to_string(),
            id.to_uppercase(),
            String::new(),
            category,
            Difficulty::Beginner,
            format!("/games/{id}"),
            vec![],
        )
    }

    fn catalog() -> Vec<Game> {
        vec![
            game("phonics", GameCategory::Reading),
            game("numbers", GameCategory::Math),
            game("patterns", GameCategory::Cognitive),
            game("rhymes", GameCategory::Reading),
        ]
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        assert_eq!(filter_by_category(&catalog(), CategoryFilter::All), catalog());
    }

    #[test]
    fn test_single_category() {
        let reading = filter_by_category(&catalog(), CategoryFilter::Only(GameCategory::Reading));
        let ids: Vec<&str> = reading.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["phonics", "rhymes"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let games = vec![game("phonics", GameCategory::Reading)];
        assert!(filter_by_category(&games, CategoryFilter::Only(GameCategory::Math)).is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Math".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(GameCategory::Math)
        );
        assert!(matches!(
            "art".parse::<CategoryFilter>(),
            Err(CoreError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_chip_labels() {
        let labels: Vec<&str> = CategoryFilter::chips().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All Games", "Reading", "Math", "Cognitive"]);
    }

    #[test]
    fn test_difficulty_colors_are_distinct() {
        assert_ne!(Difficulty::Beginner.color(), Difficulty::Intermediate.color());
        assert_ne!(Difficulty::Intermediate.color(), Difficulty::Advanced.color());
    }
}
