use std::collections::HashMap;

use serde::Serialize;

use depot_core::{ArticleId, DomainError, DomainResult};
use depot_products::Product;

/// Outcome of a reception: the line before and after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub previous: Option<Product>,
    pub current: Product,
}

/// Stock lines keyed by article id.
///
/// Lines are created on first reception and never removed.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    lines: HashMap<ArticleId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, article: &ArticleId) -> Option<&Product> {
        self.lines.get(article)
    }

    pub fn contains(&self, article: &ArticleId) -> bool {
        self.lines.contains_key(article)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines, sorted by article id.
    pub fn snapshot(&self) -> Vec<Product> {
        let mut lines: Vec<Product> = self.lines.values().cloned().collect();
        lines.sort_by_key(|p| p.article_id());
        lines
    }

    /// Take goods into stock.
    ///
    /// A known article has its count increased by the incoming count and every
    /// other field (price, article name/description) overwritten by the
    /// incoming values. An unknown article is stored verbatim.
    pub fn receive(&mut self, incoming: Product) -> DomainResult<Receipt> {
        let id = incoming.article_id();

        let previous = self.lines.get(&id).cloned();
        let current = match &previous {
            Some(existing) => {
                let count = existing.count().checked_add(incoming.count()).ok_or_else(|| {
                    DomainError::validation(format!("stock count overflows for article {id}"))
                })?;
                incoming.with_count(count)
            }
            None => incoming,
        };

        self.lines.insert(id, current.clone());
        Ok(Receipt { previous, current })
    }

    /// Replace an existing line wholesale (count included). Returns the old line.
    ///
    /// Never creates a line: updating an unknown article is `NotFound`.
    pub fn update(&mut self, replacement: Product) -> DomainResult<Product> {
        let id = replacement.article_id();
        match self.lines.get_mut(&id) {
            Some(line) => Ok(core::mem::replace(line, replacement)),
            None => Err(DomainError::not_found(format!("article {id} is not stocked"))),
        }
    }

    /// Check that every `(article, quantity)` can be taken from stock.
    ///
    /// An article that has never been received counts as zero available.
    pub fn check_available(&self, demand: &[(ArticleId, u64)]) -> DomainResult<()> {
        for (article, requested) in demand {
            let available = self.lines.get(article).map(Product::count).unwrap_or(0);
            if available < *requested {
                return Err(DomainError::InsufficientStock {
                    article: *article,
                    requested: *requested,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Remove `demand` from stock, all or nothing.
    ///
    /// Every line is checked before any count is touched; one short line
    /// rejects the whole reservation with stock unchanged.
    pub fn reserve(&mut self, demand: &[(ArticleId, u64)]) -> DomainResult<()> {
        self.check_available(demand)?;

        for (article, requested) in demand {
            if let Some(line) = self.lines.get_mut(article) {
                line.set_count(line.count() - requested);
            }
        }

        tracing::debug!(lines = demand.len(), "stock reserved");
        Ok(())
    }

    /// Put `demand` back into stock, all or nothing.
    pub fn release(&mut self, demand: &[(ArticleId, u64)]) -> DomainResult<()> {
        for (article, quantity) in demand {
            let line = self.lines.get(article).ok_or_else(|| {
                DomainError::not_found(format!("article {article} is not stocked"))
            })?;
            if line.count().checked_add(*quantity).is_none() {
                return Err(DomainError::validation(format!(
                    "stock count overflows for article {article}"
                )));
            }
        }

        for (article, quantity) in demand {
            if let Some(line) = self.lines.get_mut(article) {
                line.set_count(line.count() + quantity);
            }
        }

        tracing::debug!(lines = demand.len(), "stock released");
        Ok(())
    }
}
