use serde::{Deserialize, Serialize};

use depot_core::{ArticleId, DomainError, DomainResult, Entity, OrderId};
use depot_parties::Client;
use depot_products::Product;

/// Where a live order currently sits.
///
/// Canceled and delivered orders are dropped from tracking altogether, so there
/// is no terminal variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted by the warehouse, waiting for a courier.
    Pending,
    /// Held by a courier.
    Delivering,
}

/// A customer order.
///
/// `lines` is a snapshot taken when the order was built, not a live view into
/// inventory. `total_price` is computed once at construction and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<Product>,
    client: Client,
    /// Price in smallest currency unit (e.g., cents).
    total_price: u64,
}

impl Order {
    /// Build an order with a freshly generated id.
    pub fn new(lines: Vec<Product>, client: Client) -> DomainResult<Self> {
        Self::with_id(OrderId::new(), lines, client)
    }

    pub fn with_id(id: OrderId, lines: Vec<Product>, client: Client) -> DomainResult<Self> {
        let mut total_price: u64 = 0;
        for line in &lines {
            total_price = total_price
                .checked_add(line.line_total()?)
                .ok_or_else(|| DomainError::validation("order total overflows"))?;
        }

        Ok(Self {
            id,
            lines,
            client,
            total_price,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Requested quantity per article, summed across lines.
    ///
    /// Articles appear in first-seen line order. An order may list the same
    /// article more than once; stock checks must look at the sum.
    pub fn demand(&self) -> DomainResult<Vec<(ArticleId, u64)>> {
        let mut demand: Vec<(ArticleId, u64)> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let article = line.article_id();
            match demand.iter_mut().find(|(id, _)| *id == article) {
                Some((_, qty)) => {
                    *qty = qty.checked_add(line.count()).ok_or_else(|| {
                        DomainError::validation(format!(
                            "requested quantity overflows for article {article}"
                        ))
                    })?;
                }
                None => demand.push((article, line.count())),
            }
        }
        Ok(demand)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "order: {}", self.id)?;
        writeln!(f, "  total price: {}", self.total_price)?;
        writeln!(f, "{}", self.client)?;
        write!(f, "lines: {}", self.lines.len())?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
