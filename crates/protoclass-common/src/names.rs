//! Reserved definition keys and well-known member names.
//!
//! Directive keys are matched exactly (case-sensitive).

/// Supertype directive: a previously built type.
pub const EXTENDS: &str = "Extends";

/// Trait directive: a single type or an ordered list of types.
pub const IMPLEMENTS: &str = "Implements";

/// Initializer directive: the function run on every new instance.
pub const INITIALIZE: &str = "initialize";

/// Class-level member directive: a nested mapping.
pub const STATIC: &str = "STATIC";

/// Every directive key consumed before composition, in extraction order.
pub const DIRECTIVES: [&str; 4] = [EXTENDS, IMPLEMENTS, INITIALIZE, STATIC];

/// Prototype member used to render instances as text.
pub const TO_STRING: &str = "toString";

/// Name given to types built without a path.
pub const ANONYMOUS_CLASS: &str = "AnonymousClass";

/// Returns true if `name` is consumed by the builder instead of becoming a member.
pub fn is_directive(name: &str) -> bool {
    DIRECTIVES.contains(&name)
}

/// What a constructed type was built as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Built from a class definition.
    Class,
    /// Built from a method-name list; every method is a thrower stub.
    Interface,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
