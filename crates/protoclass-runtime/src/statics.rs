//! Class-level ("static") members and definition application.
//!
//! Static inheritance is a snapshot taken at composition time: statics added
//! to a supertype afterwards are not seen by subtypes already built.

use protoclass_common::names::STATIC;
use tracing::{debug, warn};

use crate::class_type::ClassType;
use crate::compose::{Extension, augment_prototype, augment_statics};
use crate::value::{Members, Value};

/// Apply `extension` to `target`.
///
/// When `extension` declares `STATIC`:
/// 1. the supertype's `_STATIC_` snapshot is force-copied onto `target`,
/// 2. the new set is force-copied onto `target`,
/// 3. the new set becomes `target`'s `_STATIC_` and is removed from `extension`.
///
/// The remaining members are then copied onto `target`'s prototype with the
/// given override policy. Returns the number of prototype members copied.
pub fn extend(target: &ClassType, extension: &mut Members, should_override: bool) -> usize {
    if let Some(statics) = extension.shift_remove(STATIC) {
        match statics {
            Value::Map(statics) => apply_statics(target, statics),
            other => warn!(
                target = %target.path(),
                kind = other.kind_name(),
                "ignoring STATIC that is not a map"
            ),
        }
    }

    let copied = augment_prototype(
        &target.prototype(),
        Extension::Data(&*extension),
        should_override,
    );
    debug!(target = %target.path(), members = copied, should_override, "applied definition");
    copied
}

fn apply_statics(target: &ClassType, statics: Members) {
    if let Some(inherited) = target.super_type().and_then(|parent| parent.static_snapshot()) {
        augment_statics(target, Extension::Data(&inherited), true);
    }
    let copied = augment_statics(target, Extension::Data(&statics), true);
    debug!(target = %target.path(), statics = copied, "applied STATIC");
    target.set_static_snapshot(statics);
}

#[cfg(test)]
#[path = "../tests/statics_tests.rs"]
mod tests;
