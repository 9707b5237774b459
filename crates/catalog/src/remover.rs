//! Category removal: validation, pre-remove notifications, persistence hand-off.

use serde_json::{Map, Value};

use openpim_core::{DomainError, DomainResult, Entity};
use openpim_events::{EventDispatcher, GenericEvent, category_events};

use crate::category::{Category, RemovableObject};

/// Resolved removal options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Commit the persistence unit of work immediately after staging the
    /// deletion. When false the caller owns the later flush.
    pub flush: bool,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self { flush: true }
    }
}

/// Resolves a raw options map into [`RemoveOptions`].
///
/// Unknown keys are rejected rather than ignored: a typo'd option silently
/// falling back to a default would change commit behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveOptionsResolver;

impl RemoveOptionsResolver {
    pub fn resolve(&self, options: &Map<String, Value>) -> DomainResult<RemoveOptions> {
        let mut resolved = RemoveOptions::default();
        for (key, value) in options {
            match key.as_str() {
                "flush" => {
                    resolved.flush = value.as_bool().ok_or_else(|| {
                        DomainError::validation(format!(
                            "option \"flush\" expects a boolean, got {value}"
                        ))
                    })?;
                }
                other => {
                    return Err(DomainError::validation(format!(
                        "unrecognized removal option \"{other}\""
                    )));
                }
            }
        }
        Ok(resolved)
    }
}

/// Persistence collaborator: stages deletions and commits the unit of work.
pub trait ObjectManager {
    /// Stage `category` for deletion.
    fn remove(&mut self, category: &Category);

    /// Commit all pending changes.
    fn flush(&mut self);
}

/// Remover seam: takes any removable object plus a raw options map.
pub trait Remover {
    fn remove(&mut self, object: &dyn RemovableObject, options: &Map<String, Value>)
    -> DomainResult<()>;
}

/// Removes categories, notifying subscribers before the deletion is staged.
///
/// Leaf removal detaches every classified product first (the products keep a
/// back-reference that would otherwise dangle), then dispatches
/// `PRE_REMOVE_CATEGORY`. Root removal dispatches `PRE_REMOVE_TREE` and
/// leaves classification alone: subscribers own tree-wide cleanup.
pub struct CategoryRemover<M, D> {
    object_manager: M,
    event_dispatcher: D,
    options_resolver: RemoveOptionsResolver,
}

impl<M, D> CategoryRemover<M, D>
where
    M: ObjectManager,
    D: EventDispatcher,
{
    pub fn new(object_manager: M, event_dispatcher: D) -> Self {
        Self {
            object_manager,
            event_dispatcher,
            options_resolver: RemoveOptionsResolver,
        }
    }

    fn remove_category(&mut self, category: &Category, options: RemoveOptions) {
        if category.is_root() {
            tracing::info!(category = %category.id(), code = category.code(), "removing tree");
            self.event_dispatcher.dispatch(
                category_events::PRE_REMOVE_TREE,
                GenericEvent::new(category.id().to_string(), category.object_type()),
            );
        } else {
            tracing::info!(category = %category.id(), code = category.code(), "removing category");
            for product in category.products() {
                product.borrow_mut().remove_category(category.id());
            }
            self.event_dispatcher.dispatch(
                category_events::PRE_REMOVE_CATEGORY,
                GenericEvent::new(category.id().to_string(), category.object_type()),
            );
        }

        self.object_manager.remove(category);
        if options.flush {
            self.object_manager.flush();
        }
    }
}

impl<M, D> Remover for CategoryRemover<M, D>
where
    M: ObjectManager,
    D: EventDispatcher,
{
    fn remove(
        &mut self,
        object: &dyn RemovableObject,
        options: &Map<String, Value>,
    ) -> DomainResult<()> {
        let options = self.options_resolver.resolve(options)?;
        let category = object
            .as_category()
            .ok_or_else(|| DomainError::invalid_argument("Category", object.object_type()))?;

        self.remove_category(category, options);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use openpim_core::{CategoryId, ProductId};
    use openpim_events::RecordingEventDispatcher;
    use serde_json::json;

    use super::*;
    use crate::category::ProductHandle;
    use crate::product::Product;

    /// Records staged deletions and flushes; state is shared so a clone can
    /// be inspected after the remover consumed the original.
    #[derive(Default, Clone)]
    struct RecordingObjectManager {
        removed: Rc<RefCell<Vec<CategoryId>>>,
        flushes: Rc<RefCell<usize>>,
    }

    impl ObjectManager for RecordingObjectManager {
        fn remove(&mut self, category: &Category) {
            self.removed.borrow_mut().push(*category.id());
        }

        fn flush(&mut self) {
            *self.flushes.borrow_mut() += 1;
        }
    }

    fn product(sku: &str) -> ProductHandle {
        Rc::new(RefCell::new(Product::new(ProductId::new(), sku)))
    }

    fn options(flush: bool) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("flush".into(), json!(flush));
        map
    }

    #[test]
    fn removing_a_leaf_detaches_products_and_dispatches_category_event() {
        let manager = RecordingObjectManager::default();
        let dispatcher = Arc::new(RecordingEventDispatcher::new());
        let mut remover = CategoryRemover::new(manager.clone(), Arc::clone(&dispatcher));

        let mut category = Category::child_of(CategoryId::new(), "shoes", CategoryId::new());
        let (p1, p2) = (product("SKU-1"), product("SKU-2"));
        category.add_product(Rc::clone(&p1));
        category.add_product(Rc::clone(&p2));

        remover.remove(&category, &options(false)).unwrap();

        assert!(!p1.borrow().is_classified_in(category.id()));
        assert!(!p2.borrow().is_classified_in(category.id()));
        assert_eq!(
            dispatcher.dispatched_names(),
            vec![category_events::PRE_REMOVE_CATEGORY]
        );
        assert_eq!(*manager.removed.borrow(), vec![*category.id()]);
        assert_eq!(*manager.flushes.borrow(), 0);
    }

    #[test]
    fn removing_a_tree_dispatches_tree_event_without_detaching() {
        let manager = RecordingObjectManager::default();
        let dispatcher = Arc::new(RecordingEventDispatcher::new());
        let mut remover = CategoryRemover::new(manager.clone(), Arc::clone(&dispatcher));

        let tree = Category::root(CategoryId::new(), "master");

        remover.remove(&tree, &options(false)).unwrap();

        assert_eq!(
            dispatcher.dispatched_names(),
            vec![category_events::PRE_REMOVE_TREE]
        );
        let (_, event) = &dispatcher.dispatched()[0];
        assert_eq!(event.subject_id(), tree.id().to_string());
        assert_eq!(*manager.removed.borrow(), vec![*tree.id()]);
        assert_eq!(*manager.flushes.borrow(), 0);
    }

    #[test]
    fn flush_defaults_to_true() {
        let manager = RecordingObjectManager::default();
        let dispatcher = Arc::new(RecordingEventDispatcher::new());
        let mut remover = CategoryRemover::new(manager.clone(), dispatcher);

        let tree = Category::root(CategoryId::new(), "master");
        remover.remove(&tree, &Map::new()).unwrap();

        assert_eq!(*manager.flushes.borrow(), 1);
    }

    #[test]
    fn rejects_anything_that_is_not_a_category() {
        let mut remover = CategoryRemover::new(
            RecordingObjectManager::default(),
            Arc::new(RecordingEventDispatcher::new()),
        );

        let not_a_category = Product::new(ProductId::new(), "SKU-1");
        let err = remover.remove(&not_a_category, &Map::new()).unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidArgument {
                expected: "Category",
                actual: "Product",
            }
        );
        assert_eq!(
            err.to_string(),
            "expects a \"Category\", \"Product\" provided"
        );
    }

    #[test]
    fn rejects_unrecognized_options() {
        let mut remover = CategoryRemover::new(
            RecordingObjectManager::default(),
            Arc::new(RecordingEventDispatcher::new()),
        );

        let tree = Category::root(CategoryId::new(), "master");
        let mut opts = Map::new();
        opts.insert("recursive".into(), json!(true));

        let err = remover.remove(&tree, &opts).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_non_boolean_flush() {
        let mut remover = CategoryRemover::new(
            RecordingObjectManager::default(),
            Arc::new(RecordingEventDispatcher::new()),
        );

        let tree = Category::root(CategoryId::new(), "master");
        let mut opts = Map::new();
        opts.insert("flush".into(), json!("yes"));

        let err = remover.remove(&tree, &opts).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
