use std::collections::HashMap;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use super::model::CartLine;
use crate::domain::catalog::model::Product;

/// A cart line joined with the product data it was priced against.
#[derive(Debug, Clone)]
pub struct SnapshotLine {
    pub line: CartLine,
    pub product: Product,
    pub subtotal: BigDecimal,
}

impl SnapshotLine {
    /// Stock may have dropped since the line was written.
    pub fn exceeds_stock(&self) -> bool {
        !self.product.has_stock_for(self.line.quantity)
    }
}

/// Freshly computed view of an owner's cart. Never persisted.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub lines: Vec<SnapshotLine>,
    pub total_items: u64,
    pub total_price: BigDecimal,
}

impl CartSnapshot {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total_items: 0,
            total_price: BigDecimal::zero(),
        }
    }

    /// Joins `lines` with `products`, keeping the order of `lines`.
    ///
    /// Lines whose product is not in `products` are left out.
    pub fn compute(lines: Vec<CartLine>, products: Vec<Product>) -> Self {
        let by_id: HashMap<Uuid, Product> =
            products.into_iter().map(|p| (p.id, p)).collect();

        let mut snapshot = Self::empty();
        for line in lines {
            let product = match by_id.get(&line.product_id) {
                Some(product) => product.clone(),
                None => continue,
            };
            let subtotal = &product.price * BigDecimal::from(line.quantity);
            snapshot.total_items += u64::from(line.quantity);
            snapshot.total_price += &subtotal;
            snapshot.lines.push(SnapshotLine {
                line,
                product,
                subtotal,
            });
        }
        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_for(&self, product_id: Uuid) -> Option<&SnapshotLine> {
        self.lines.iter().find(|l| l.line.product_id == product_id)
    }
}
