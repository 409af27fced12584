//! Class Composition Engine
//!
//! Builds constructible types from declarative definitions:
//!
//! - **Prototypes**: explicit delegate chains (own members + one parent link)
//! - **Single inheritance**: `Extends` links prototypes without running the
//!   supertype's initializer and snapshots its class-level members
//! - **Traits**: `Implements` copies donor members without override, earliest
//!   donor first
//! - **Statics**: `STATIC` members, inherited as a composition-time snapshot
//! - **Interfaces**: stub types whose methods fail with
//!   `ImplementationMissingError` until implemented
//! - **Namespace registry**: dotted-path publication of built types
//!
//! Precedence, lowest to highest: supertype, traits (in order), own definition.

pub mod builder;
pub mod class_type;
pub mod compose;
pub mod definition;
pub mod function;
pub mod inherit;
pub mod instance;
pub mod interface;
pub mod mixin;
pub mod prototype;
pub mod registry;
pub mod statics;
pub mod value;

pub use builder::{ClassBuilder, extend_class};
pub use class_type::{ClassType, ResolvedMember};
pub use compose::{Extension, augment};
pub use definition::ClassDefinition;
pub use function::Function;
pub use instance::Instance;
pub use interface::InterfaceFactory;
pub use prototype::Prototype;
pub use registry::{Binding, Container, NamespaceRegistry};
pub use value::{Members, Value, members};

pub use protoclass_common::{
    ClassError, ClassPath, ClassResult, ConfigurationError, ImplementationMissingError, TypeKind,
};

/// Build and publish a class in the process-wide registry.
pub fn design(path: &str, definition: ClassDefinition) -> ClassResult<ClassType> {
    ClassBuilder::global().design(path, definition)
}

/// Build a class without publishing it.
pub fn design_local(path: &str, definition: ClassDefinition) -> ClassResult<ClassType> {
    ClassBuilder::global().local().design(path, definition)
}

/// Build and publish an interface in the process-wide registry.
pub fn interface<I, S>(path: &str, methods: I) -> ClassResult<ClassType>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    InterfaceFactory::global().design(path, methods)
}

/// Bind `value` at `path` in the process-wide registry.
pub fn namespace(path: &str, value: impl Into<Value>) -> ClassResult<bool> {
    let path = ClassPath::parse(path, TypeKind::Class)?;
    Ok(NamespaceRegistry::global().namespace(&path, value.into()))
}

/// Resolve `path` in the process-wide registry.
pub fn lookup(path: &str) -> Option<Binding> {
    NamespaceRegistry::global().lookup(path)
}

#[cfg(test)]
#[path = "../tests/global_tests.rs"]
mod global_tests;
