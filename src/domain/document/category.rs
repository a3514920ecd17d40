use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Life-domain label under which documents and cached content are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Financial,
    Health,
    Relationships,
    Growth,
    Purpose,
}

impl Category {
    /// All categories in their fixed display order
    pub const ALL: [Category; 5] = [
        Category::Financial,
        Category::Health,
        Category::Relationships,
        Category::Growth,
        Category::Purpose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Relationships => "relationships",
            Category::Growth => "growth",
            Category::Purpose => "purpose",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "financial" => Ok(Category::Financial),
            "health" => Ok(Category::Health),
            "relationships" => Ok(Category::Relationships),
            "growth" => Ok(Category::Growth),
            "purpose" => Ok(Category::Purpose),
            other => Err(DomainError::validation(format!(
                "Unknown category '{}'",
                other
            ))),
        }
    }
}
