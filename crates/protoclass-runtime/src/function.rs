//! Callable member values.
//!
//! A `Function` is a shared handle around a native closure. Copying a member
//! copies the handle, so every type a function was mixed into sees the same
//! callable. The diagnostic display name (`Owner::member`) is metadata on the
//! handle: it is rewritten on each composition copy and the last copy wins.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use protoclass_common::{ClassError, ClassResult};

use crate::instance::Instance;
use crate::value::Value;

/// Native signature: receiver (`this`) and arguments.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> ClassResult<Value>;

#[derive(Clone)]
pub struct Function(Rc<FunctionData>);

struct FunctionData {
    body: Box<NativeFn>,
    display_name: RefCell<Option<String>>,
}

impl Function {
    pub fn new(body: impl Fn(&Value, &[Value]) -> ClassResult<Value> + 'static) -> Self {
        Function(Rc::new(FunctionData {
            body: Box::new(body),
            display_name: RefCell::new(None),
        }))
    }

    /// A function that requires an instance receiver.
    pub fn method(body: impl Fn(&Instance, &[Value]) -> ClassResult<Value> + 'static) -> Self {
        Function(Rc::new_cyclic(|handle: &Weak<FunctionData>| {
            let handle = handle.clone();
            FunctionData {
                body: Box::new(move |this: &Value, args: &[Value]| match this {
                    Value::Object(instance) => body(instance, args),
                    other => Err(ClassError::InvalidReceiver {
                        member: handle
                            .upgrade()
                            .and_then(|data| data.display_name.borrow().clone())
                            .unwrap_or_else(|| "method".to_string()),
                        found: other.kind_name().to_string(),
                    }),
                }),
                display_name: RefCell::new(None),
            }
        }))
    }

    /// A function that ignores its receiver and arguments and returns `undefined`.
    pub fn noop() -> Self {
        Function::new(|_, _| Ok(Value::Undefined))
    }

    /// A function returning a fixed value.
    pub fn constant(value: Value) -> Self {
        Function::new(move |_, _| Ok(value.clone()))
    }

    pub fn call(&self, this: &Value, args: &[Value]) -> ClassResult<Value> {
        (self.0.body)(this, args)
    }

    pub fn display_name(&self) -> Option<String> {
        self.0.display_name.borrow().clone()
    }

    pub(crate) fn set_display_name(&self, name: String) {
        *self.0.display_name.borrow_mut() = Some(name);
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.display_name.borrow().as_deref() {
            Some(name) => f.write_str(name),
            None => f.write_str("function"),
        }
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function({self})")
    }
}

#[cfg(test)]
#[path = "../tests/function_tests.rs"]
mod tests;
