use serde::{Deserialize, Serialize};

use depot_core::{ArticleId, DomainError, DomainResult, Entity};

use crate::Article;

/// A quantity/price snapshot tied to one article.
///
/// The same type is used for an inventory line and for an order line. For
/// inventory purposes a product's identity is its article's id: two products
/// with the same article id describe the same stock line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    count: u64,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    article: Article,
}

impl Product {
    pub fn new(count: u64, unit_price: u64, article: Article) -> Self {
        Self {
            count,
            unit_price,
            article,
        }
    }

    pub fn article_id(&self) -> ArticleId {
        self.article.id_typed()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Same line with a different count.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = count;
    }

    /// `unit_price × count`, rejecting overflow.
    pub fn line_total(&self) -> DomainResult<u64> {
        self.unit_price.checked_mul(self.count).ok_or_else(|| {
            DomainError::validation(format!(
                "line total overflows for article {} ({} x {})",
                self.article_id(),
                self.count,
                self.unit_price
            ))
        })
    }
}

impl Entity for Product {
    type Id = ArticleId;

    fn id(&self) -> &Self::Id {
        self.article.id()
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.article)?;
        writeln!(f, "  count: {}", self.count)?;
        write!(f, "  unit price: {}", self.unit_price)
    }
}
