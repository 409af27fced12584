//! Dotted class paths.
//!
//! A path such as `my.awesome.Hero` names both the registration location of a
//! type (`my` -> `awesome` -> leaf `Hero`) and the type itself: the final
//! segment is its introspection name, the full path its textual form.

use smallvec::SmallVec;

use crate::error::ConfigurationError;
use crate::names::TypeKind;

/// A validated, non-empty dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassPath {
    full: String,
    /// Byte offset of the final segment.
    name_start: usize,
}

impl ClassPath {
    /// Validate `path` for a build of the given kind.
    ///
    /// Rejects empty paths, empty segments (`a..b`, `.a`, `a.`) and segments
    /// containing whitespace.
    pub fn parse(path: &str, kind: TypeKind) -> Result<Self, ConfigurationError> {
        if path.trim().is_empty() {
            return Err(ConfigurationError::missing_name(kind));
        }
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(ConfigurationError::invalid_path(
                    kind,
                    path,
                    "segments may not be empty",
                ));
            }
            if segment.chars().any(char::is_whitespace) {
                return Err(ConfigurationError::invalid_path(
                    kind,
                    path,
                    "segments may not contain whitespace",
                ));
            }
        }

        let name_start = path.rfind('.').map_or(0, |dot| dot + 1);
        Ok(Self {
            full: path.to_string(),
            name_start,
        })
    }

    /// Like [`ClassPath::parse`] but for an optional path; `None` is a missing name.
    pub fn parse_optional(path: Option<&str>, kind: TypeKind) -> Result<Self, ConfigurationError> {
        match path {
            Some(path) => Self::parse(path, kind),
            None => Err(ConfigurationError::missing_name(kind)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The final segment.
    pub fn name(&self) -> &str {
        &self.full[self.name_start..]
    }

    /// Every segment before the final one.
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        let prefix = if self.name_start == 0 {
            ""
        } else {
            &self.full[..self.name_start - 1]
        };
        prefix.split('.').filter(|segment| !segment.is_empty())
    }

    pub fn segments(&self) -> SmallVec<[&str; 4]> {
        self.full.split('.').collect()
    }

    /// Number of segments, leaf included.
    pub fn depth(&self) -> usize {
        self.full.split('.').count()
    }
}

impl std::fmt::Display for ClassPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for ClassPath {
    fn as_ref(&self) -> &str {
        &self.full
    }
}

#[cfg(test)]
#[path = "../tests/path_tests.rs"]
mod tests;
