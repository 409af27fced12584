//! Class builder.
//!
//! Turns a path and a [`ClassDefinition`] into a finished [`ClassType`]:
//!
//! 1. validate the path (a name is mandatory)
//! 2. extract `Extends`, `Implements`, `initialize`
//! 3. pick the initializer (explicit, forwarding to the supertype, or no-op)
//! 4. link the supertype
//! 5. mix in traits (no override)
//! 6. install the textual representation
//! 7. apply the own definition and `STATIC` (override)
//! 8. publish in the namespace registry, unless the build is local

use protoclass_common::names::{ANONYMOUS_CLASS, EXTENDS, IMPLEMENTS, INITIALIZE, TO_STRING};
use protoclass_common::{ClassPath, ClassResult, TypeKind};
use tracing::{debug, warn};

use crate::class_type::ClassType;
use crate::definition::ClassDefinition;
use crate::function::Function;
use crate::inherit::inherit;
use crate::mixin::{implement, normalize_traits};
use crate::registry::NamespaceRegistry;
use crate::statics::extend;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct ClassBuilder {
    registry: NamespaceRegistry,
    publish: bool,
}

impl ClassBuilder {
    /// A builder publishing into `registry`.
    pub fn new(registry: &NamespaceRegistry) -> Self {
        Self {
            registry: registry.clone(),
            publish: true,
        }
    }

    /// A builder publishing into the process-wide registry.
    pub fn global() -> Self {
        Self::new(&NamespaceRegistry::global())
    }

    /// Skip namespace registration for builds made through this builder.
    pub fn local(mut self) -> Self {
        self.publish = false;
        self
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    pub fn design(&self, path: &str, definition: ClassDefinition) -> ClassResult<ClassType> {
        let path = ClassPath::parse(path, TypeKind::Class)?;
        Ok(self.compose(path, definition, self.publish))
    }

    /// Like [`ClassBuilder::design`] for an optional path; `None` is rejected.
    pub fn design_optional(
        &self,
        path: Option<&str>,
        definition: ClassDefinition,
    ) -> ClassResult<ClassType> {
        let path = ClassPath::parse_optional(path, TypeKind::Class)?;
        Ok(self.compose(path, definition, self.publish))
    }

    /// Build a type named `AnonymousClass`. It is never registered.
    pub fn design_anonymous(&self, definition: ClassDefinition) -> ClassResult<ClassType> {
        let path = ClassPath::parse(ANONYMOUS_CLASS, TypeKind::Class)?;
        Ok(self.compose(path, definition, false))
    }

    fn compose(
        &self,
        path: ClassPath,
        mut definition: ClassDefinition,
        publish: bool,
    ) -> ClassType {
        let super_type = take_super_type(&mut definition);
        let traits = definition
            .take(IMPLEMENTS)
            .map(normalize_traits)
            .unwrap_or_default();
        let initializer = match definition.take(INITIALIZE) {
            Some(Value::Function(initializer)) => initializer,
            Some(other) => {
                warn!(
                    path = %path,
                    kind = other.kind_name(),
                    "ignoring non-function initialize"
                );
                default_initializer(super_type.as_ref())
            }
            None => default_initializer(super_type.as_ref()),
        };

        let class = ClassType::new(TypeKind::Class, path.clone(), initializer);
        inherit(&class, super_type.as_ref());
        implement(&class, &traits);
        apply_label(&class, path.as_str());
        extend(&class, definition.members_mut(), true);

        if publish && self.registry.namespace(&path, Value::Type(class.clone())) {
            debug!(path = %path, "published class");
        }
        debug!(
            path = %path,
            super_type = ?class.super_type().map(|ty| ty.path().to_string()),
            traits = traits.len(),
            "designed class"
        );
        class
    }
}

fn take_super_type(definition: &mut ClassDefinition) -> Option<ClassType> {
    match definition.take(EXTENDS)? {
        Value::Type(ty) => Some(ty),
        Value::Undefined | Value::Null => None,
        other => {
            warn!(kind = other.kind_name(), "ignoring non-type Extends");
            None
        }
    }
}

/// Forward to the supertype's initializer with the same receiver and
/// arguments, or do nothing for root types.
fn default_initializer(super_type: Option<&ClassType>) -> Function {
    match super_type {
        Some(parent) => {
            let parent_initializer = parent.initializer();
            Function::new(move |this, args| parent_initializer.call(this, args))
        }
        None => Function::noop(),
    }
}

/// The type renders as `label`; so do its instances, through a `toString`
/// prototype member that the own definition may still replace.
fn apply_label(class: &ClassType, label: &str) {
    class.set_label(label);
    class
        .prototype()
        .define(TO_STRING, Function::constant(Value::from(label)));
}

/// Extend an already built type (class-level and instance members) with
/// `extension`.
pub fn extend_class(class: &ClassType, extension: ClassDefinition, should_override: bool) -> usize {
    let mut members = extension.into_members();
    extend(class, &mut members, should_override)
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
