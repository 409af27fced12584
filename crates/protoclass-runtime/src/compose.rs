//! Property composition.
//!
//! `augment` copies the members an extension declares itself (never those it
//! inherits through its own delegate chain) into a target set. With
//! `should_override == false` a member the target already declares is kept;
//! with `true` it is replaced.
//!
//! Copied functions are tagged with a diagnostic name `<Owner>::<member>`.
//! The owner depends on where the members come from:
//! - a plain data mapping (definition body, static set): the destination's owner
//! - a constructed type's prototype (trait mixing): the source's owner

use tracing::trace;

use crate::class_type::ClassType;
use crate::prototype::Prototype;
use crate::value::{Members, Value};

/// The source of an `augment` call.
#[derive(Clone, Copy, Debug)]
pub enum Extension<'a> {
    /// A plain name -> value mapping.
    Data(&'a Members),
    /// The own members of a constructed type's instance-member set.
    Prototype(&'a Prototype),
}

impl Extension<'_> {
    /// Own entries, copied out so the source is never borrowed while the
    /// target is written (they may share storage).
    fn entries(&self) -> Vec<(String, Value)> {
        match self {
            Extension::Data(members) => members
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            Extension::Prototype(prototype) => prototype.own_members().into_iter().collect(),
        }
    }

    fn owner_label(&self, target_owner: &str) -> String {
        match self {
            Extension::Data(_) => target_owner.to_string(),
            Extension::Prototype(prototype) => prototype.owner_label(),
        }
    }
}

/// Copy `extension` into `target`. `target_owner` is the textual form of the
/// type owning `target`. Returns the number of members copied.
pub fn augment(
    target: &mut Members,
    target_owner: &str,
    extension: Extension<'_>,
    should_override: bool,
) -> usize {
    let owner = extension.owner_label(target_owner);
    copy_entries(target, &owner, extension.entries(), should_override)
}

/// [`augment`] onto a prototype's own members.
pub fn augment_prototype(
    target: &Prototype,
    extension: Extension<'_>,
    should_override: bool,
) -> usize {
    let owner = extension.owner_label(&target.owner_label());
    let entries = extension.entries();
    target.with_own_mut(|own| copy_entries(own, &owner, entries, should_override))
}

/// [`augment`] onto a type's class-level members.
pub fn augment_statics(target: &ClassType, extension: Extension<'_>, should_override: bool) -> usize {
    let owner = extension.owner_label(&target.label());
    let entries = extension.entries();
    target.with_statics_mut(|statics| copy_entries(statics, &owner, entries, should_override))
}

fn copy_entries(
    target: &mut Members,
    owner: &str,
    entries: Vec<(String, Value)>,
    should_override: bool,
) -> usize {
    let mut copied = 0;
    for (name, value) in entries {
        if !should_override && target.contains_key(&name) {
            trace!(member = %name, owner, "kept existing member");
            continue;
        }
        if let Value::Function(function) = &value {
            function.set_display_name(format!("{owner}::{name}"));
        }
        target.insert(name, value);
        copied += 1;
    }
    copied
}

#[cfg(test)]
#[path = "../tests/compose_tests.rs"]
mod tests;
