//! Error kinds raised while composing types and dispatching members.
//!
//! Only two kinds belong to the composition contract itself:
//! `ConfigurationError` (a build was requested without a usable name) and
//! `ImplementationMissingError` (a declared capability was never implemented).
//! `ClassError` wraps both together with the dispatch failures of the
//! dynamic member model.

use thiserror::Error;

use crate::names::TypeKind;

/// A build call was rejected before any composition happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigurationError {
    message: String,
}

impl ConfigurationError {
    /// The caller passed no path (or an empty one).
    pub fn missing_name(kind: TypeKind) -> Self {
        Self {
            message: format!(
                "Please give your {kind} a name. Use a local build to avoid global namespace pollution"
            ),
        }
    }

    /// The path was present but not a dotted identifier path.
    pub fn invalid_path(kind: TypeKind, path: &str, reason: &str) -> Self {
        Self {
            message: format!("Invalid {kind} path '{path}': {reason}"),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An interface method was invoked on a receiver that never implemented it.
///
/// Raised lazily at call time, never when the type is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing implementation for <{receiver}::{method}> defined by interface {interface}")]
pub struct ImplementationMissingError {
    /// Textual representation of the receiver.
    pub receiver: String,
    /// The declared method name.
    pub method: String,
    /// Full path of the declaring interface.
    pub interface: String,
}

impl ImplementationMissingError {
    pub const NAME: &'static str = "ImplementationMissingError";

    pub fn new(
        receiver: impl Into<String>,
        method: impl Into<String>,
        interface: impl Into<String>,
    ) -> Self {
        Self {
            receiver: receiver.into(),
            method: method.into(),
            interface: interface.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Umbrella error for every fallible operation of the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    ImplementationMissing(#[from] ImplementationMissingError),

    /// A member was dispatched as a method but holds data.
    #[error("<{receiver}::{member}> is not a function")]
    NotCallable { receiver: String, member: String },

    /// A member was dispatched but nothing on the delegate chain declares it.
    #[error("<{receiver}> has no member '{member}'")]
    MissingMember { receiver: String, member: String },

    /// A method expected an instance receiver.
    #[error("{member} requires an instance receiver, got {found}")]
    InvalidReceiver { member: String, found: String },

    /// Failure raised by a user-supplied function.
    #[error("{0}")]
    Raised(String),
}

impl ClassError {
    pub fn raised(message: impl Into<String>) -> Self {
        ClassError::Raised(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ClassError::Configuration(_))
    }

    pub fn is_implementation_missing(&self) -> bool {
        matches!(self, ClassError::ImplementationMissing(_))
    }

    pub fn as_implementation_missing(&self) -> Option<&ImplementationMissingError> {
        match self {
            ClassError::ImplementationMissing(err) => Some(err),
            _ => None,
        }
    }
}

pub type ClassResult<T> = Result<T, ClassError>;

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
