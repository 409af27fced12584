//! Prototype-style class composition.
//!
//! The engine lives in `protoclass-runtime`; this crate re-exports it and
//! adds JSON manifests, tracing setup and the `protoclass` command-line tool.

pub mod cli;
pub mod manifest;
pub mod tracing_config;

pub use protoclass_runtime::{
    Binding, ClassBuilder, ClassDefinition, ClassType, Container, Extension, Function, Instance,
    InterfaceFactory, Members, NamespaceRegistry, Prototype, ResolvedMember, Value, augment,
    design, design_local, extend_class, interface, lookup, members, namespace,
};

pub use protoclass_common::{
    ClassError, ClassPath, ClassResult, ConfigurationError, ImplementationMissingError, TypeKind,
};
