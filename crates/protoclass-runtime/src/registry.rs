//! Namespace registry.
//!
//! A tree of containers rooted at a single anchor. Registering `a.b.C` walks
//! `a` -> `b`, creating empty containers for missing segments (existing
//! containers are reused, never replaced), and binds the value at leaf `C`,
//! replacing whatever was bound there. Siblings are untouched.
//!
//! A segment bound to a published type is walked into as well: names below
//! it live in the type's class-level members, so `ui.Widget.Button` becomes
//! the `Button` static of `ui.Widget`. A segment bound to any other value
//! blocks registration.
//!
//! A detached registry has no anchor and ignores registrations; exposure is
//! then the caller's responsibility. The process-wide registry is created on
//! first use (one per thread, values are single-threaded).

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, warn};

use protoclass_common::ClassPath;

use crate::class_type::ClassType;
use crate::value::Value;

thread_local! {
    static GLOBAL_REGISTRY: NamespaceRegistry = NamespaceRegistry::anchored();
}

/// A node of the namespace tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Container(Container),
    Value(Value),
}

impl Binding {
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Binding::Container(container) => Some(container),
            Binding::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Binding::Value(value) => Some(value),
            Binding::Container(_) => None,
        }
    }

    pub fn as_type(&self) -> Option<&ClassType> {
        self.as_value().and_then(Value::as_type)
    }
}

/// A shared container node. Identity is preserved across registrations.
#[derive(Clone, Default)]
pub struct Container(Rc<RefCell<IndexMap<String, Binding, FxBuildHasher>>>);

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Binding> {
        self.0.borrow().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    pub fn entries(&self) -> Vec<(String, Binding)> {
        self.0
            .borrow()
            .iter()
            .map(|(name, binding)| (name.clone(), binding.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn ptr_eq(&self, other: &Container) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Step into `name`, creating an empty container when nothing is bound
    /// there. `None` when `name` is bound to a value that is not a type.
    fn child_scope(&self, name: &str) -> Option<Scope> {
        let mut children = self.0.borrow_mut();
        match children.get(name) {
            Some(Binding::Container(container)) => Some(Scope::Container(container.clone())),
            Some(Binding::Value(Value::Type(ty))) => Some(Scope::Type(ty.clone())),
            Some(Binding::Value(_)) => None,
            None => {
                let container = Container::new();
                children.insert(name.to_string(), Binding::Container(container.clone()));
                Some(Scope::Container(container))
            }
        }
    }

    fn bind(&self, name: &str, value: Value) -> Option<Binding> {
        self.0
            .borrow_mut()
            .insert(name.to_string(), Binding::Value(value))
    }
}

/// Position of a registration walk.
enum Scope {
    Container(Container),
    /// Nested names are class-level members of the type.
    Type(ClassType),
}

impl Scope {
    fn enter(&self, name: &str) -> Option<Scope> {
        match self {
            Scope::Container(container) => container.child_scope(name),
            Scope::Type(ty) => match ty.static_member(name)? {
                Value::Type(nested) => Some(Scope::Type(nested)),
                _ => None,
            },
        }
    }

    /// Bind the leaf. Returns true if something was replaced.
    fn bind(&self, name: &str, value: Value) -> bool {
        match self {
            Scope::Container(container) => container.bind(name, value).is_some(),
            Scope::Type(ty) => ty.set_static(name, value).is_some(),
        }
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Handle to a namespace tree (or to nothing, when detached).
#[derive(Clone, Debug, Default)]
pub struct NamespaceRegistry {
    root: Option<Container>,
}

impl NamespaceRegistry {
    /// A registry with a fresh root anchor.
    pub fn anchored() -> Self {
        Self {
            root: Some(Container::new()),
        }
    }

    /// A registry without an anchor; every registration is a no-op.
    pub fn detached() -> Self {
        Self { root: None }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> Self {
        GLOBAL_REGISTRY.with(Clone::clone)
    }

    pub fn root(&self) -> Option<&Container> {
        self.root.as_ref()
    }

    pub fn is_anchored(&self) -> bool {
        self.root.is_some()
    }

    /// Bind `value` at `path`. Returns false when nothing was bound: the
    /// registry is detached, or a segment is bound to a value that is neither
    /// a container nor a type, or a type has no nested type of that name.
    pub fn namespace(&self, path: &ClassPath, value: Value) -> bool {
        let Some(root) = &self.root else {
            return false;
        };

        let mut scope = Scope::Container(root.clone());
        for segment in path.containers() {
            match scope.enter(segment) {
                Some(child) => scope = child,
                None => {
                    warn!(
                        path = %path,
                        segment,
                        "segment is neither a container nor a type; registration skipped"
                    );
                    return false;
                }
            }
        }

        let nested = matches!(scope, Scope::Type(_));
        if scope.bind(path.name(), value) {
            debug!(path = %path, nested, "replaced existing binding");
        } else {
            debug!(path = %path, nested, "registered");
        }
        true
    }

    /// Walk `path` from the root, descending into the class-level members of
    /// types met on the way.
    pub fn lookup(&self, path: &str) -> Option<Binding> {
        let root = self.root.as_ref()?;
        let mut segments = path.split('.');
        let mut binding = root.get(segments.next()?)?;
        for segment in segments {
            binding = match binding {
                Binding::Container(container) => container.get(segment)?,
                Binding::Value(Value::Type(ty)) => Binding::Value(ty.static_member(segment)?),
                Binding::Value(_) => return None,
            };
        }
        Some(binding)
    }

    pub fn lookup_value(&self, path: &str) -> Option<Value> {
        match self.lookup(path)? {
            Binding::Value(value) => Some(value),
            Binding::Container(_) => None,
        }
    }

    pub fn lookup_type(&self, path: &str) -> Option<ClassType> {
        self.lookup_value(path)?.as_type().cloned()
    }

    pub fn container(&self, path: &str) -> Option<Container> {
        match self.lookup(path)? {
            Binding::Container(container) => Some(container),
            Binding::Value(_) => None,
        }
    }

    /// Every value binding as `(dotted path, value)`, depth first.
    pub fn bindings(&self) -> Vec<(String, Value)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_bindings(root, "", &mut out);
        }
        out
    }
}

fn collect_bindings(container: &Container, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (name, binding) in container.entries() {
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };
        match binding {
            Binding::Container(child) => collect_bindings(&child, &path, out),
            Binding::Value(value) => out.push((path, value)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
