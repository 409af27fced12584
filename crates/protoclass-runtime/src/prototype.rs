//! Instance-member sets (prototypes).
//!
//! Each prototype owns its own member mapping and holds at most one link to a
//! parent prototype used for fallback lookup. Chains are acyclic: a parent must
//! be fully built before a child can link to it.
//!
//! The constructor-identity link is weak so that a type and its prototype do
//! not keep each other alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::class_type::{ClassData, ClassType};
use crate::value::{Members, Value};

#[derive(Clone)]
pub struct Prototype(Rc<RefCell<PrototypeData>>);

struct PrototypeData {
    constructor: Weak<ClassData>,
    own: Members,
    parent: Option<Prototype>,
}

impl Prototype {
    /// An ownerless root prototype.
    pub fn new() -> Self {
        Self::root(Weak::new())
    }

    /// A root prototype owned by `constructor`.
    pub(crate) fn root(constructor: Weak<ClassData>) -> Self {
        Prototype(Rc::new(RefCell::new(PrototypeData {
            constructor,
            own: Members::default(),
            parent: None,
        })))
    }

    /// A fresh, empty prototype delegating to `parent`, owned by `constructor`.
    ///
    /// Nothing on the parent side runs; this only links.
    pub(crate) fn derived(parent: &Prototype, constructor: &ClassType) -> Self {
        Prototype(Rc::new(RefCell::new(PrototypeData {
            constructor: constructor.downgrade(),
            own: Members::default(),
            parent: Some(parent.clone()),
        })))
    }

    pub fn parent(&self) -> Option<Prototype> {
        self.0.borrow().parent.clone()
    }

    /// The type this prototype belongs to, if it is still alive.
    pub fn constructor(&self) -> Option<ClassType> {
        self.0
            .borrow()
            .constructor
            .upgrade()
            .map(ClassType::from_data)
    }

    /// Textual form of the owning type, used as the owner in diagnostic names.
    pub fn owner_label(&self) -> String {
        self.constructor()
            .map(|ty| ty.label())
            .unwrap_or_else(|| "Object".to_string())
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().own.contains_key(name)
    }

    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.0.borrow().own.get(name).cloned()
    }

    /// Resolve `name` along the delegate chain, nearest declaration first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.lookup_with_owner(name).map(|(value, _)| value)
    }

    /// Like [`Prototype::lookup`] but also returns the prototype that declares it.
    pub fn lookup_with_owner(&self, name: &str) -> Option<(Value, Prototype)> {
        for prototype in self.chain() {
            if let Some(value) = prototype.get_own(name) {
                return Some((value, prototype));
            }
        }
        None
    }

    /// Returns true if `name` resolves anywhere along the chain.
    pub fn has(&self, name: &str) -> bool {
        self.chain().any(|prototype| prototype.has_own(name))
    }

    /// Declare (or replace) an own member. Returns the replaced value.
    pub fn define(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().own.insert(name.into(), value.into())
    }

    /// Remove an own member. Inherited members are untouched.
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.0.borrow_mut().own.shift_remove(name)
    }

    /// Snapshot of the own members, in declaration order.
    pub fn own_members(&self) -> Members {
        self.0.borrow().own.clone()
    }

    pub fn own_names(&self) -> Vec<String> {
        self.0.borrow().own.keys().cloned().collect()
    }

    pub fn own_len(&self) -> usize {
        self.0.borrow().own.len()
    }

    /// This prototype followed by its ancestors.
    pub fn chain(&self) -> PrototypeChain {
        PrototypeChain {
            next: Some(self.clone()),
        }
    }

    /// Returns true if `other` is this prototype or one of its ancestors.
    pub fn delegates_to(&self, other: &Prototype) -> bool {
        self.chain().any(|prototype| prototype.ptr_eq(other))
    }

    pub fn ptr_eq(&self, other: &Prototype) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn with_own_mut<R>(&self, f: impl FnOnce(&mut Members) -> R) -> R {
        f(&mut self.0.borrow_mut().own)
    }
}

impl PartialEq for Prototype {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prototype")
            .field("owner", &self.owner_label())
            .field("own", &self.own_names())
            .field("has_parent", &self.parent().is_some())
            .finish()
    }
}

/// Iterator over a prototype and its ancestors.
pub struct PrototypeChain {
    next: Option<Prototype>,
}

impl Iterator for PrototypeChain {
    type Item = Prototype;

    fn next(&mut self) -> Option<Prototype> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
#[path = "../tests/prototype_tests.rs"]
mod tests;
