//! `openpim-catalog` — category/product model and the category remover.
//!
//! Thin orchestration over collaborators: persistence is an [`ObjectManager`]
//! seam, notifications go through `openpim-events`. No storage, no IO here.

pub mod category;
pub mod product;
pub mod remover;

pub use category::{Category, ProductHandle, RemovableObject};
pub use product::Product;
pub use remover::{CategoryRemover, ObjectManager, RemoveOptions, RemoveOptionsResolver, Remover};
