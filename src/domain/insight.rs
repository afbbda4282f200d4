use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsightKind::Warning => "warning",
            InsightKind::Success => "success",
            InsightKind::Info => "info",
        };
        f.write_str(label)
    }
}

/// One advisory message about a budget period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Info,
            message: message.into(),
        }
    }
}
