//! Class definitions.
//!
//! A definition is an ordered name -> value mapping. The reserved keys
//! `Extends`, `Implements`, `initialize` and `STATIC` are consumed by the
//! builder; everything else becomes an instance member.

use protoclass_common::ClassResult;
use protoclass_common::names::{EXTENDS, IMPLEMENTS, INITIALIZE, STATIC};

use crate::class_type::ClassType;
use crate::function::Function;
use crate::instance::Instance;
use crate::value::{Members, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassDefinition {
    members: Members,
}

impl ClassDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Members) -> Self {
        Self { members }
    }

    /// Set `name` to `value` (builder form).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Add an instance method that requires an instance receiver.
    pub fn method(
        self,
        name: impl Into<String>,
        body: impl Fn(&Instance, &[Value]) -> ClassResult<Value> + 'static,
    ) -> Self {
        self.with(name, Function::method(body))
    }

    pub fn extends(self, super_type: &ClassType) -> Self {
        self.with(EXTENDS, super_type)
    }

    /// Mix in traits; earlier traits win conflicts.
    pub fn implements<'a>(self, traits: impl IntoIterator<Item = &'a ClassType>) -> Self {
        let traits: Vec<Value> = traits.into_iter().map(Value::from).collect();
        self.with(IMPLEMENTS, traits)
    }

    pub fn initialize(
        self,
        body: impl Fn(&Instance, &[Value]) -> ClassResult<Value> + 'static,
    ) -> Self {
        self.with(INITIALIZE, Function::method(body))
    }

    /// Replace the `STATIC` set.
    pub fn statics(self, statics: Members) -> Self {
        self.with(STATIC, statics)
    }

    /// Add one member to the `STATIC` set, creating the set if needed.
    pub fn static_member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let entry = self
            .members
            .entry(STATIC.to_string())
            .or_insert_with(|| Value::Map(Members::default()));
        if !matches!(entry, Value::Map(_)) {
            *entry = Value::Map(Members::default());
        }
        if let Value::Map(statics) = entry {
            statics.insert(name.into(), value.into());
        }
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.members.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Remove and return `name`, keeping the order of the rest.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.members.shift_remove(name)
    }

    pub fn members(&self) -> &Members {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut Members {
        &mut self.members
    }

    pub fn into_members(self) -> Members {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<Members> for ClassDefinition {
    fn from(members: Members) -> Self {
        Self::from_members(members)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClassDefinition {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_members(crate::value::members(iter))
    }
}
