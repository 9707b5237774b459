use serde::{Deserialize, Serialize};

use openpim_core::{CategoryId, Entity, ProductId};

/// A product classified into zero or more categories.
///
/// Only the classification side matters here: attribute values, families and
/// completeness live elsewhere in the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    categories: Vec<CategoryId>,
}

impl Product {
    pub fn new(id: ProductId, sku: impl Into<String>) -> Self {
        Self {
            id,
            sku: sku.into(),
            categories: Vec::new(),
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Classify the product into `category`. Idempotent.
    pub fn add_category(&mut self, category: CategoryId) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Drop the back-reference to `category`. No-op if absent.
    pub fn remove_category(&mut self, category: &CategoryId) {
        self.categories.retain(|c| c != category);
    }

    pub fn is_classified_in(&self, category: &CategoryId) -> bool {
        self.categories.contains(category)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
