//! Instances of constructed types.
//!
//! Own fields shadow the prototype chain. Member dispatch passes the instance
//! itself as the receiver.

use std::cell::RefCell;
use std::rc::Rc;

use protoclass_common::names::TO_STRING;
use protoclass_common::{ClassError, ClassResult};

use crate::class_type::ClassType;
use crate::prototype::Prototype;
use crate::value::{Members, Value};

#[derive(Clone)]
pub struct Instance(Rc<InstanceData>);

struct InstanceData {
    class: ClassType,
    prototype: Prototype,
    fields: RefCell<Members>,
}

impl Instance {
    /// Allocate without running any initializer.
    pub(crate) fn allocate(class: &ClassType) -> Self {
        Instance(Rc::new(InstanceData {
            class: class.clone(),
            prototype: class.prototype(),
            fields: RefCell::new(Members::default()),
        }))
    }

    pub fn class(&self) -> ClassType {
        self.0.class.clone()
    }

    pub fn prototype(&self) -> Prototype {
        self.0.prototype.clone()
    }

    /// Own field first, then the prototype chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.0.fields.borrow().get(name) {
            return Some(value.clone());
        }
        self.0.prototype.lookup(name)
    }

    /// Set an own field, shadowing any prototype member of the same name.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.fields.borrow_mut().insert(name.into(), value.into())
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.0.fields.borrow().contains_key(name)
    }

    pub fn fields(&self) -> Members {
        self.0.fields.borrow().clone()
    }

    /// Dispatch `name` as a method with this instance as receiver.
    pub fn call(&self, name: &str, args: &[Value]) -> ClassResult<Value> {
        match self.get(name) {
            Some(Value::Function(function)) => function.call(&Value::Object(self.clone()), args),
            Some(_) => Err(ClassError::NotCallable {
                receiver: self.to_string(),
                member: name.to_string(),
            }),
            None => Err(ClassError::MissingMember {
                receiver: self.to_string(),
                member: name.to_string(),
            }),
        }
    }

    /// Returns true if `ty`'s prototype is on this instance's delegate chain.
    pub fn is_instance_of(&self, ty: &ClassType) -> bool {
        self.0.prototype.delegates_to(&ty.prototype())
    }

    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Textual form: the resolved `toString` member, or `[object Name]`.
    fn render(&self) -> String {
        if let Some(Value::Function(to_string)) = self.get(TO_STRING) {
            if let Ok(text) = to_string.call(&Value::Object(self.clone()), &[]) {
                return match text {
                    Value::Str(text) => text,
                    Value::Object(_) => format!("[object {}]", self.0.class.name()),
                    other => other.to_string(),
                };
            }
        }
        format!("[object {}]", self.0.class.name())
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.0.class.path().as_str())
            .field("fields", &self.0.fields.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/instance_tests.rs"]
mod tests;
