//! Activity catalog model.

use serde::{Deserialize, Serialize};

/// Activity family shown on the activities page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Hiking,
    Camping,
    Csr,
    Training,
    Special,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 5] = [
        ActivityCategory::Hiking,
        ActivityCategory::Camping,
        ActivityCategory::Csr,
        ActivityCategory::Training,
        ActivityCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Hiking => "hiking",
            ActivityCategory::Camping => "camping",
            ActivityCategory::Csr => "csr",
            ActivityCategory::Training => "training",
            ActivityCategory::Special => "special",
        }
    }
}

/// Expected experience level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner Friendly",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A recurring club activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub category: ActivityCategory,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub location: String,
    #[serde(default)]
    pub season: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub image: String,
}
