use crate::domain::category::{CategoryType, NEUTRAL_COLOR};

/// Resolves category types and display colors for budget records.
pub struct CategoryService;

impl CategoryService {
    /// Classifies a free-text category name. Total: unmatched names are `Other`.
    pub fn classify(name: &str) -> CategoryType {
        CategoryType::from_name(name)
    }

    /// Picks the type for a record: a recognized upstream label wins, an
    /// unrecognized one degrades to `Other`, and a missing one is inferred
    /// from the name.
    pub fn resolve_type(supplied: Option<&str>, name: &str) -> CategoryType {
        match supplied.map(str::trim).filter(|label| !label.is_empty()) {
            Some(label) => CategoryType::from_label(label).unwrap_or_else(|| {
                tracing::debug!(label, name, "unrecognized category type label");
                CategoryType::Other
            }),
            None => Self::classify(name),
        }
    }

    /// Looks a type label up in the color table, falling back to the neutral color.
    pub fn color_for_label(label: &str) -> &'static str {
        CategoryType::from_label(label)
            .map(|kind| kind.color())
            .unwrap_or(NEUTRAL_COLOR)
    }

    /// Picks the color for a record: a non-empty upstream color wins, otherwise
    /// the color of the supplied type label (or the resolved type when none was
    /// supplied).
    pub fn resolve_color(
        supplied_color: Option<&str>,
        supplied_type: Option<&str>,
        resolved: CategoryType,
    ) -> String {
        if let Some(color) = supplied_color.map(str::trim).filter(|c| !c.is_empty()) {
            return color.to_string();
        }
        match supplied_type.map(str::trim).filter(|label| !label.is_empty()) {
            Some(label) => Self::color_for_label(label).to_string(),
            None => resolved.color().to_string(),
        }
    }
}
