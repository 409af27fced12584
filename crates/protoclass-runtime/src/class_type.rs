//! Constructed types.
//!
//! A `ClassType` is the synthesized constructor: an initializer, an
//! instance-member set (prototype), a class-level member set, an optional
//! supertype and the `_STATIC_` snapshot handed down to further subtypes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use protoclass_common::{ClassError, ClassPath, ClassResult, TypeKind};

use crate::function::Function;
use crate::instance::Instance;
use crate::prototype::Prototype;
use crate::value::{Members, Value};

#[derive(Clone)]
pub struct ClassType(Rc<ClassData>);

pub(crate) struct ClassData {
    kind: TypeKind,
    path: ClassPath,
    label: RefCell<String>,
    initializer: Function,
    prototype: RefCell<Prototype>,
    super_type: RefCell<Option<ClassType>>,
    statics: RefCell<Members>,
    /// Last applied `STATIC` set (`_STATIC_`); only read when building subtypes.
    static_snapshot: RefCell<Option<Members>>,
}

/// A member visible to instances together with the type that declares it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedMember {
    pub name: String,
    pub value: Value,
    pub owner: Option<ClassType>,
}

impl ClassType {
    /// A bare type with an empty root prototype and no supertype.
    pub(crate) fn new(kind: TypeKind, path: ClassPath, initializer: Function) -> Self {
        let label = path.as_str().to_string();
        ClassType(Rc::new_cyclic(|weak| ClassData {
            kind,
            path,
            label: RefCell::new(label),
            initializer,
            prototype: RefCell::new(Prototype::root(weak.clone())),
            super_type: RefCell::new(None),
            statics: RefCell::new(Members::default()),
            static_snapshot: RefCell::new(None),
        }))
    }

    pub(crate) fn from_data(data: Rc<ClassData>) -> Self {
        ClassType(data)
    }

    pub(crate) fn downgrade(&self) -> Weak<ClassData> {
        Rc::downgrade(&self.0)
    }

    pub fn kind(&self) -> TypeKind {
        self.0.kind
    }

    pub fn path(&self) -> &ClassPath {
        &self.0.path
    }

    /// Introspection name: the final path segment.
    pub fn name(&self) -> &str {
        self.0.path.name()
    }

    /// Public textual representation.
    pub fn label(&self) -> String {
        self.0.label.borrow().clone()
    }

    pub(crate) fn set_label(&self, label: impl Into<String>) {
        *self.0.label.borrow_mut() = label.into();
    }

    pub fn initializer(&self) -> Function {
        self.0.initializer.clone()
    }

    pub fn prototype(&self) -> Prototype {
        self.0.prototype.borrow().clone()
    }

    pub(crate) fn replace_prototype(&self, prototype: Prototype) {
        *self.0.prototype.borrow_mut() = prototype;
    }

    /// The supertype (`Super`), absent for root types.
    pub fn super_type(&self) -> Option<ClassType> {
        self.0.super_type.borrow().clone()
    }

    pub(crate) fn set_super_type(&self, super_type: ClassType) {
        *self.0.super_type.borrow_mut() = Some(super_type);
    }

    /// Every supertype, nearest first.
    pub fn ancestors(&self) -> Vec<ClassType> {
        let mut ancestors = Vec::new();
        let mut current = self.super_type();
        while let Some(ty) = current {
            current = ty.super_type();
            ancestors.push(ty);
        }
        ancestors
    }

    /// Returns true if `other` is this type or one of its supertypes.
    pub fn is_subtype_of(&self, other: &ClassType) -> bool {
        self.ptr_eq(other) || self.ancestors().iter().any(|ty| ty.ptr_eq(other))
    }

    pub fn static_member(&self, name: &str) -> Option<Value> {
        self.0.statics.borrow().get(name).cloned()
    }

    /// Snapshot of the class-level member set.
    pub fn statics(&self) -> Members {
        self.0.statics.borrow().clone()
    }

    /// Set a class-level member after the fact. Subtypes built earlier keep
    /// the value they snapshotted.
    pub fn set_static(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.statics.borrow_mut().insert(name.into(), value.into())
    }

    pub(crate) fn with_statics_mut<R>(&self, f: impl FnOnce(&mut Members) -> R) -> R {
        f(&mut self.0.statics.borrow_mut())
    }

    /// The `_STATIC_` slot: the most recently applied `STATIC` set.
    pub fn static_snapshot(&self) -> Option<Members> {
        self.0.static_snapshot.borrow().clone()
    }

    pub(crate) fn set_static_snapshot(&self, snapshot: Members) {
        *self.0.static_snapshot.borrow_mut() = Some(snapshot);
    }

    /// Create an instance and run the initializer on it.
    pub fn new_instance(&self, args: &[Value]) -> ClassResult<Instance> {
        let instance = Instance::allocate(self);
        self.0
            .initializer
            .call(&Value::Object(instance.clone()), args)?;
        Ok(instance)
    }

    /// Invoke a class-level function with the type itself as receiver.
    pub fn call_static(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        match self.static_member(name) {
            Some(Value::Function(function)) => function.call(&Value::Type(self.clone()), args),
            Some(_) => Err(ClassError::NotCallable {
                receiver: self.label(),
                member: name.to_string(),
            }),
            None => Err(ClassError::MissingMember {
                receiver: self.label(),
                member: name.to_string(),
            }),
        }
    }

    /// Every member instances can resolve, nearest declaration first, each
    /// name listed once.
    pub fn resolved_members(&self) -> Vec<ResolvedMember> {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut resolved = Vec::new();
        for prototype in self.prototype().chain() {
            let owner = prototype.constructor();
            for (name, value) in prototype.own_members() {
                if seen.insert(name.clone()) {
                    resolved.push(ResolvedMember {
                        name,
                        value,
                        owner: owner.clone(),
                    });
                }
            }
        }
        resolved
    }

    pub fn ptr_eq(&self, other: &ClassType) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.label.borrow())
    }
}

impl std::fmt::Debug for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClassType({} {})", self.0.kind, self.0.path)
    }
}

#[cfg(test)]
#[path = "../tests/class_type_tests.rs"]
mod tests;
