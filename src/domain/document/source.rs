use serde::{Deserialize, Serialize};

use super::Category;

/// One external document configured under a category
///
/// Immutable once built from configuration. Whether a source is actually
/// usable is decided here, at construction time, and carried as an
/// explicit flag rather than re-inferred from the identifier later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSource {
    pub category: Category,
    pub document_id: String,
    /// False when the configured identifier is empty or a placeholder;
    /// unconfigured sources are skipped during refresh.
    pub configured: bool,
}

impl DocumentSource {
    pub fn new(category: Category, document_id: impl Into<String>) -> Self {
        let document_id = document_id.into();
        let configured = !is_placeholder(&document_id);

        Self {
            category,
            document_id,
            configured,
        }
    }
}

/// Identifiers that look like unreplaced template values
fn is_placeholder(id: &str) -> bool {
    let id = id.trim();

    id.is_empty()
        || id.contains("YOUR_")
        || (id.starts_with('<') && id.ends_with('>'))
        || id.eq_ignore_ascii_case("replace-me")
}
