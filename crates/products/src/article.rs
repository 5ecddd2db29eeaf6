use serde::{Deserialize, Serialize};

use depot_core::{ArticleId, Entity};

/// Catalog metadata identifying a kind of good, independent of quantity or price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    name: String,
    description: String,
}

impl Article {
    /// A brand new article with a freshly generated id.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(ArticleId::new(), name, description)
    }

    /// Article information for an id that already exists (e.g. corrected name/description).
    pub fn with_id(id: ArticleId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id_typed(&self) -> ArticleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Article {
    type Id = ArticleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Article {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "article: {}", self.id)?;
        writeln!(f, "  name: {}", self.name)?;
        write!(f, "  description: {}", self.description)
    }
}
