//! JSON manifests describing classes and interfaces declaratively.
//!
//! ```json
//! {
//!   "interfaces": [{ "path": "zoo.Speaker", "methods": ["speak"] }],
//!   "classes": [
//!     { "path": "zoo.Animal", "static": { "kingdom": "animalia" }, "members": { "legs": 4 } },
//!     { "path": "zoo.Dog", "extends": "zoo.Animal", "implements": "zoo.Speaker",
//!       "methods": { "speak": "woof" } }
//!   ]
//! }
//! ```
//!
//! Interfaces are built first, then classes in declaration order. `extends`
//! and `implements` name types declared earlier in the same manifest.
//! `methods` entries become methods returning the given value.

use anyhow::{Context, Result, anyhow, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Map;
use std::path::Path;

use protoclass_common::names::STATIC;
use protoclass_runtime::{
    ClassBuilder, ClassDefinition, ClassType, Function, InterfaceFactory, Members,
    NamespaceRegistry, Value,
};

/// Accept either a single path or a list of paths.
fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(OneOrMany::One(path)) => Ok(vec![path]),
        Some(OneOrMany::Many(paths)) => Ok(paths),
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub interfaces: Vec<InterfaceManifest>,
    #[serde(default)]
    pub classes: Vec<ClassManifest>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterfaceManifest {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    /// Build without publishing in the namespace registry.
    #[serde(default)]
    pub local: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassManifest {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub implements: Vec<String>,
    #[serde(default, rename = "static")]
    pub statics: Map<String, serde_json::Value>,
    #[serde(default)]
    pub members: Map<String, serde_json::Value>,
    /// Methods returning a fixed value.
    #[serde(default)]
    pub methods: Map<String, serde_json::Value>,
    #[serde(default)]
    pub local: bool,
}

pub fn parse_manifest(source: &str) -> Result<Manifest> {
    let manifest = serde_json::from_str(source).context("failed to parse manifest JSON")?;
    Ok(manifest)
}

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    parse_manifest(&source).with_context(|| format!("failed to load manifest: {}", path.display()))
}

/// The types built from a manifest, keyed by path in build order.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    registry: NamespaceRegistry,
    types: IndexMap<String, ClassType>,
}

impl LoadedManifest {
    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    pub fn get(&self, path: &str) -> Option<&ClassType> {
        self.types.get(path)
    }

    pub fn types(&self) -> impl Iterator<Item = &ClassType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Manifest {
    /// Build every entry, publishing non-local ones into `registry`.
    pub fn build(&self, registry: &NamespaceRegistry) -> Result<LoadedManifest> {
        let mut types: IndexMap<String, ClassType> = IndexMap::new();

        for (index, entry) in self.interfaces.iter().enumerate() {
            let factory = InterfaceFactory::new(registry);
            let factory = if entry.local { factory.local() } else { factory };
            let interface = factory
                .design_optional(entry.path.as_deref(), &entry.methods)
                .with_context(|| format!("failed to build interface #{index}"))?;
            types.insert(interface.path().to_string(), interface);
        }

        for (index, entry) in self.classes.iter().enumerate() {
            let definition = entry
                .definition(&types)
                .with_context(|| describe_entry(entry, index))?;
            let builder = ClassBuilder::new(registry);
            let builder = if entry.local { builder.local() } else { builder };
            let class = builder
                .design_optional(entry.path.as_deref(), definition)
                .with_context(|| describe_entry(entry, index))?;
            types.insert(class.path().to_string(), class);
        }

        Ok(LoadedManifest {
            registry: registry.clone(),
            types,
        })
    }
}

fn describe_entry(entry: &ClassManifest, index: usize) -> String {
    match &entry.path {
        Some(path) => format!("failed to build class '{path}'"),
        None => format!("failed to build class #{index}"),
    }
}

impl ClassManifest {
    fn definition(&self, known: &IndexMap<String, ClassType>) -> Result<ClassDefinition> {
        let resolve = |path: &str, role: &str| {
            known
                .get(path)
                .ok_or_else(|| anyhow!("{role} '{path}' is not declared earlier in the manifest"))
        };

        let mut definition = ClassDefinition::new();
        if let Some(extends) = &self.extends {
            definition = definition.extends(resolve(extends, "supertype")?);
        }
        if !self.implements.is_empty() {
            let traits = self
                .implements
                .iter()
                .map(|path| resolve(path, "trait"))
                .collect::<Result<Vec<_>>>()?;
            definition = definition.implements(traits);
        }
        if !self.statics.is_empty() {
            definition = definition.statics(json_members(&self.statics));
        }

        for (name, value) in &self.members {
            if name == STATIC {
                bail!("use the \"static\" field instead of a \"{STATIC}\" member");
            }
            definition.insert(name.as_str(), json_to_value(value));
        }
        for (name, value) in &self.methods {
            definition.insert(name.as_str(), Function::constant(json_to_value(value)));
        }
        Ok(definition)
    }
}

fn json_members(map: &Map<String, serde_json::Value>) -> Members {
    map.iter()
        .map(|(name, value)| (name.clone(), json_to_value(value)))
        .collect()
}

/// Convert manifest data into a runtime value.
pub fn json_to_value(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => Value::List(items.iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => Value::Map(json_members(map)),
    }
}

/// A command-line argument: JSON when it parses as JSON, a string otherwise.
pub fn parse_arg(text: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(text)
        .map(|value| json_to_value(&value))
        .unwrap_or_else(|_| Value::Str(text.to_string()))
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
