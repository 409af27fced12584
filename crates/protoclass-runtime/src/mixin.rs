//! Trait mixing.
//!
//! Traits are donor types: only the members their own prototype declares are
//! read, never their class-level members or initializer. Copies never
//! override, so the earliest trait to declare a name wins, and the type's own
//! definition (applied afterwards with override) wins over every trait.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::class_type::ClassType;
use crate::compose::{Extension, augment_prototype};
use crate::value::Value;

/// An ordered trait list. Most types mix in one or two.
pub type Traits = SmallVec<[ClassType; 2]>;

/// Normalize an `Implements` value: a single type becomes a one-element list,
/// a list keeps its order. Entries that are not types are skipped.
pub fn normalize_traits(value: Value) -> Traits {
    match value {
        Value::Type(ty) => smallvec::smallvec![ty],
        Value::List(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Type(ty) => Some(ty),
                other => {
                    warn!(kind = other.kind_name(), "ignoring non-type entry in Implements");
                    None
                }
            })
            .collect(),
        Value::Undefined | Value::Null => Traits::new(),
        other => {
            warn!(kind = other.kind_name(), "ignoring non-type Implements value");
            Traits::new()
        }
    }
}

/// Copy each trait's own prototype members onto `target`, in order, without
/// override. Returns the number of members copied.
pub fn implement(target: &ClassType, traits: &[ClassType]) -> usize {
    let prototype = target.prototype();
    let mut copied = 0;
    for donor in traits {
        let donor_prototype = donor.prototype();
        let count = augment_prototype(&prototype, Extension::Prototype(&donor_prototype), false);
        debug!(
            target = %target.path(),
            donor = %donor.path(),
            members = count,
            "mixed in trait"
        );
        copied += count;
    }
    copied
}

#[cfg(test)]
#[path = "../tests/mixin_tests.rs"]
mod tests;
