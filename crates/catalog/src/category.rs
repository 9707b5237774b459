use std::cell::RefCell;
use std::rc::Rc;

use openpim_core::{CategoryId, Entity};

use crate::product::Product;

/// Shared handle to a product inside a request-scoped object graph.
///
/// Categories and the products classified into them reference each other, so
/// the graph is held behind `Rc<RefCell<_>>`. All of this is single-threaded,
/// request-scoped state; nothing here crosses a thread boundary.
pub type ProductHandle = Rc<RefCell<Product>>;

/// A category node: either the root of a tree or an ordinary (leaf) member.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    code: String,
    parent: Option<CategoryId>,
    products: Vec<ProductHandle>,
}

impl Category {
    /// Create a tree root (no parent).
    pub fn root(id: CategoryId, code: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            parent: None,
            products: Vec::new(),
        }
    }

    /// Create a child category under `parent`.
    pub fn child_of(id: CategoryId, code: impl Into<String>, parent: CategoryId) -> Self {
        Self {
            id,
            code: code.into(),
            parent: Some(parent),
            products: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn parent(&self) -> Option<CategoryId> {
        self.parent
    }

    /// Whether this category is the root of a tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Products classified into this category (back-references included).
    pub fn products(&self) -> &[ProductHandle] {
        &self.products
    }

    /// Attach a product to this category, keeping both sides in sync.
    pub fn add_product(&mut self, product: ProductHandle) {
        product.borrow_mut().add_category(self.id);
        self.products.push(product);
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Capability query for objects that can be handed to a remover.
///
/// Removers are typed per entity: the category remover only accepts
/// categories and reports anything else as a contract violation, naming the
/// actual type. Implementors opt in by overriding the capability accessor.
pub trait RemovableObject {
    /// Human-readable type name used in error messages.
    fn object_type(&self) -> &'static str;

    /// Downcast hook for the category remover.
    fn as_category(&self) -> Option<&Category> {
        None
    }
}

impl RemovableObject for Category {
    fn object_type(&self) -> &'static str {
        "Category"
    }

    fn as_category(&self) -> Option<&Category> {
        Some(self)
    }
}

impl RemovableObject for Product {
    fn object_type(&self) -> &'static str {
        "Product"
    }
}
