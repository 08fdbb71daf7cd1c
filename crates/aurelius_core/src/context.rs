//! Scoped composition context
//!
//! A [`Composition`] is the explicit replacement for implicit, dynamically-scoped
//! context propagation. Each [`ContextSlot`] names one value type and the default
//! that readers observe when nothing has been provided above them.
//!
//! Values are provided with stack discipline:
//!
//! - [`Composition::provide`] pushes a value and returns a [`ProvideGuard`]
//! - Dropping the guard restores whatever was visible before the push, including
//!   when the subtree unwinds
//! - The innermost provided value wins
//!
//! ```ignore
//! static LOCAL_COLORS: ContextSlot<Colors> = ContextSlot::new("colors", || Colors::UNSPECIFIED);
//!
//! let _colors = composition.provide(&LOCAL_COLORS, Colors::dark());
//! render_children(&composition);
//! // `_colors` dropped here, outer colors visible again
//! ```
//!
//! A composition belongs to one render tree and is used from the thread that owns it;
//! it is intentionally `!Sync`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

type SlotValue = Arc<dyn Any + Send + Sync>;

/// Provided values for one slot, outermost first
type SlotStack = SmallVec<[SlotValue; 2]>;

/// Declaration of a context slot
///
/// Slots are keyed by their value type, so each value type has exactly one slot.
/// Declare them as `static`s next to the type they carry.
pub struct ContextSlot<T: 'static> {
    name: &'static str,
    default: fn() -> T,
}

impl<T: 'static> ContextSlot<T> {
    /// Declare a slot with a diagnostic name and the value read when nothing is provided
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default }
    }

    /// Diagnostic name of this slot
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn key(&self) -> TypeId {
        TypeId::of::<T>()
    }
}

impl<T: 'static> fmt::Debug for ContextSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextSlot")
            .field("name", &self.name)
            .finish()
    }
}

/// Per-render-tree context holding the provided value of every slot
#[derive(Default)]
pub struct Composition {
    stacks: RefCell<FxHashMap<TypeId, SlotStack>>,
    /// Slot defaults, built lazily once per composition
    defaults: RefCell<FxHashMap<TypeId, SlotValue>>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `slot`: the innermost provided value, or the slot default
    pub fn current<T: Send + Sync + 'static>(&self, slot: &ContextSlot<T>) -> Arc<T> {
        let key = slot.key();

        let provided = self
            .stacks
            .borrow()
            .get(&key)
            .and_then(|stack| stack.last().cloned());

        let value = match provided {
            Some(value) => value,
            None => self.default_value(slot),
        };

        downcast(slot, value)
    }

    /// Whether any value is currently provided for `slot`
    pub fn is_provided<T: 'static>(&self, slot: &ContextSlot<T>) -> bool {
        self.depth(slot) > 0
    }

    /// Number of nested values currently provided for `slot`
    pub fn depth<T: 'static>(&self, slot: &ContextSlot<T>) -> usize {
        self.stacks
            .borrow()
            .get(&slot.key())
            .map_or(0, |stack| stack.len())
    }

    /// Provide `value` for `slot` until the returned guard is dropped
    #[must_use = "the value is unprovided as soon as the guard is dropped"]
    pub fn provide<T, V>(&self, slot: &ContextSlot<T>, value: V) -> ProvideGuard<'_>
    where
        T: Send + Sync + 'static,
        V: Into<Arc<T>>,
    {
        let key = slot.key();
        let value: Arc<T> = value.into();

        let mut stacks = self.stacks.borrow_mut();
        let stack = stacks.entry(key).or_default();
        let depth = stack.len();
        stack.push(value);

        tracing::trace!("provide {} at depth {}", slot.name, depth);

        ProvideGuard {
            composition: self,
            key,
            depth,
            name: slot.name,
            _not_send: PhantomData,
        }
    }

    /// Provide `value` for `slot` while running `content`
    pub fn provide_scoped<T, V, R>(
        &self,
        slot: &ContextSlot<T>,
        value: V,
        content: impl FnOnce(&Composition) -> R,
    ) -> R
    where
        T: Send + Sync + 'static,
        V: Into<Arc<T>>,
    {
        let _guard = self.provide(slot, value);
        content(self)
    }

    fn default_value<T: Send + Sync + 'static>(&self, slot: &ContextSlot<T>) -> SlotValue {
        if let Some(value) = self.defaults.borrow().get(&slot.key()) {
            return Arc::clone(value);
        }

        let value: SlotValue = Arc::new((slot.default)());
        self.defaults
            .borrow_mut()
            .insert(slot.key(), Arc::clone(&value));
        value
    }

    fn restore(&self, key: TypeId, depth: usize, name: &'static str) {
        let mut stacks = self.stacks.borrow_mut();
        if let Some(stack) = stacks.get_mut(&key) {
            if stack.len() > depth + 1 {
                tracing::debug!(
                    "{} guard dropped before {} inner guard(s); restoring depth {}",
                    name,
                    stack.len() - depth - 1,
                    depth
                );
            }
            stack.truncate(depth);
        }
    }
}

impl fmt::Debug for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("slots", &self.stacks.borrow().len())
            .finish()
    }
}

fn downcast<T: Send + Sync + 'static>(slot: &ContextSlot<T>, value: SlotValue) -> Arc<T> {
    match value.downcast::<T>() {
        Ok(value) => value,
        Err(_) => unreachable!("slot {} is keyed by its own TypeId", slot.name),
    }
}

/// Keeps a provided value visible until dropped
///
/// Dropping restores the slot to the depth it had when the value was provided, so a
/// guard dropped out of order also removes the values provided inside it.
pub struct ProvideGuard<'c> {
    composition: &'c Composition,
    key: TypeId,
    depth: usize,
    name: &'static str,
    _not_send: PhantomData<*const ()>,
}

impl ProvideGuard<'_> {
    /// Depth at which the value was provided (0 = outermost)
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ProvideGuard<'_> {
    fn drop(&mut self) {
        tracing::trace!("unprovide {} at depth {}", self.name, self.depth);
        self.composition.restore(self.key, self.depth, self.name);
    }
}

impl fmt::Debug for ProvideGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideGuard")
            .field("slot", &self.name)
            .field("depth", &self.depth)
            .finish()
    }
}
