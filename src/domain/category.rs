//! Domain types representing budget category types and their display colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color used when a category label names no known type.
pub const NEUTRAL_COLOR: &str = "#cccccc";

/// Keyword groups tried in order; the first group with a matching keyword wins.
///
/// "gas" sits in both the transportation and utilities groups, so any name
/// containing it resolves to transportation.
const KEYWORD_GROUPS: &[(CategoryType, &[&str])] = &[
    (CategoryType::Housing, &["hous", "rent", "mortgage"]),
    (CategoryType::Food, &["food", "grocer", "restaurant"]),
    (
        CategoryType::Transportation,
        &["transport", "gas", "car", "bus"],
    ),
    (CategoryType::Entertainment, &["entertain", "movie", "leisure"]),
    (CategoryType::Utilities, &["util", "electric", "water", "gas"]),
    (CategoryType::Shopping, &["shop", "cloth", "retail"]),
    (CategoryType::Healthcare, &["health", "medical", "doctor"]),
];

/// Fixed set of spending buckets used for grouping and coloring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Housing,
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Shopping,
    Healthcare,
    #[default]
    Other,
}

impl CategoryType {
    pub const ALL: [CategoryType; 8] = [
        CategoryType::Housing,
        CategoryType::Food,
        CategoryType::Transportation,
        CategoryType::Entertainment,
        CategoryType::Utilities,
        CategoryType::Shopping,
        CategoryType::Healthcare,
        CategoryType::Other,
    ];

    /// Infers a type from a free-text category name. Never fails: names that
    /// match no keyword are `Other`.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(*kw)))
            .map(|(kind, _)| *kind)
            .unwrap_or(CategoryType::Other)
    }

    /// Parses a canonical type label such as `"food"` (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Housing => "housing",
            CategoryType::Food => "food",
            CategoryType::Transportation => "transportation",
            CategoryType::Entertainment => "entertainment",
            CategoryType::Utilities => "utilities",
            CategoryType::Shopping => "shopping",
            CategoryType::Healthcare => "healthcare",
            CategoryType::Other => "other",
        }
    }

    /// Hex display color for the type.
    pub fn color(&self) -> &'static str {
        match self {
            CategoryType::Housing => "#4361ee",
            CategoryType::Food => "#f72585",
            CategoryType::Transportation => "#560bad",
            CategoryType::Entertainment => "#7209b7",
            CategoryType::Utilities => "#3a0ca3",
            CategoryType::Shopping => "#f94144",
            CategoryType::Healthcare => "#4cc9f0",
            CategoryType::Other => "#4f5d75",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
