//! Single inheritance.
//!
//! Linking never runs the supertype's initializer: the subtype gets a fresh,
//! empty prototype that delegates to the supertype's prototype.

use tracing::debug;

use crate::class_type::ClassType;
use crate::compose::{Extension, augment_statics};
use crate::prototype::Prototype;

/// Make `sub` delegate to `super_type`. No-op when `super_type` is `None`.
///
/// 1. `sub` gets a new prototype whose parent is the supertype's prototype and
///    whose constructor link points back at `sub`.
/// 2. `sub.Super` is recorded.
/// 3. The supertype's class-level members are copied onto `sub` without
///    override, and its `_STATIC_` snapshot is inherited when `sub` has none.
pub fn inherit(sub: &ClassType, super_type: Option<&ClassType>) {
    let Some(parent) = super_type else {
        return;
    };

    sub.replace_prototype(Prototype::derived(&parent.prototype(), sub));
    sub.set_super_type(parent.clone());

    let statics = parent.statics();
    let copied = augment_statics(sub, Extension::Data(&statics), false);
    if sub.static_snapshot().is_none() {
        if let Some(snapshot) = parent.static_snapshot() {
            sub.set_static_snapshot(snapshot);
        }
    }

    debug!(
        sub = %sub.path(),
        super_type = %parent.path(),
        statics = copied,
        "linked supertype"
    );
}

#[cfg(test)]
#[path = "../tests/inherit_tests.rs"]
mod tests;
