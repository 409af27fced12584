//! Interface contracts.
//!
//! An interface is a stub type whose prototype holds one thrower per declared
//! method. Mixing it into a class (via `Implements`) provides the throwers as
//! fallbacks; a class that defines the method itself replaces the thrower.
//! Nothing is checked at build time; the error is raised when a stub runs.

use protoclass_common::names::TO_STRING;
use protoclass_common::{ClassPath, ClassResult, ImplementationMissingError, TypeKind};
use tracing::debug;

use crate::class_type::ClassType;
use crate::function::Function;
use crate::registry::NamespaceRegistry;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct InterfaceFactory {
    registry: NamespaceRegistry,
    publish: bool,
}

impl InterfaceFactory {
    pub fn new(registry: &NamespaceRegistry) -> Self {
        Self {
            registry: registry.clone(),
            publish: true,
        }
    }

    pub fn global() -> Self {
        Self::new(&NamespaceRegistry::global())
    }

    pub fn local(mut self) -> Self {
        self.publish = false;
        self
    }

    pub fn design<I, S>(&self, path: &str, methods: I) -> ClassResult<ClassType>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = ClassPath::parse(path, TypeKind::Interface)?;
        Ok(self.compose(path, methods))
    }

    pub fn design_optional<I, S>(&self, path: Option<&str>, methods: I) -> ClassResult<ClassType>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = ClassPath::parse_optional(path, TypeKind::Interface)?;
        Ok(self.compose(path, methods))
    }

    fn compose<I, S>(&self, path: ClassPath, methods: I) -> ClassType
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let interface = ClassType::new(TypeKind::Interface, path.clone(), Function::noop());
        interface.set_label(path.name());

        let prototype = interface.prototype();
        for method in methods {
            let method = method.as_ref();
            prototype.define(method, missing_implementation(path.as_str(), method));
        }

        if self.publish {
            self.registry.namespace(&path, Value::Type(interface.clone()));
        }
        debug!(path = %path, methods = prototype.own_len(), "designed interface");
        interface
    }
}

/// A stub that fails with `ImplementationMissingError` naming its receiver.
fn missing_implementation(interface: &str, method: &str) -> Function {
    let interface = interface.to_string();
    let method = method.to_string();
    Function::new(move |this, _args| {
        // A stubbed toString cannot render its own receiver.
        let receiver = match this {
            Value::Object(instance) if method == TO_STRING => {
                format!("[object {}]", instance.class().name())
            }
            other => other.to_string(),
        };
        Err(ImplementationMissingError::new(receiver, method.as_str(), interface.as_str()).into())
    })
}

#[cfg(test)]
#[path = "../tests/interface_tests.rs"]
mod tests;
