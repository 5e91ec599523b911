//! Breadcrumbs Model
//!
//! An ancestor chain in one of two encodings. The server sends slug paths
//! (`"electronics/laptops"`); the flattener produces display-name paths
//! (`"Electronics > Laptops"`). Both travel as a plain string on the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Separator of a slug path
pub const SLUG_SEPARATOR: &str = "/";
/// Separator of a display-name path
pub const NAME_SEPARATOR: &str = " > ";

/// Ancestor chain, root first, ending with the node itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breadcrumbs {
    /// Canonical server form, e.g. `["electronics", "laptops"]`
    Slugs(Vec<String>),
    /// Display form built locally, e.g. `["Electronics", "Laptops"]`
    Names(Vec<String>),
}

impl Breadcrumbs {
    /// Parse the wire string.
    ///
    /// A string containing `>` is a name path and one containing `/` is a
    /// slug path. A bare segment is what the flattener emits for a root, so
    /// it is kept as a one-name path. Returns `None` when no segment survives
    /// trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let crumbs = if raw.contains('>') {
            Self::Names(split_segments(raw, '>'))
        } else if raw.contains('/') {
            Self::Slugs(split_segments(raw, '/'))
        } else {
            Self::Names(split_segments(raw, '>'))
        };
        (!crumbs.segments().is_empty()).then_some(crumbs)
    }

    pub fn segments(&self) -> &[String] {
        match self {
            Self::Slugs(segments) | Self::Names(segments) => segments,
        }
    }

    pub fn is_slugs(&self) -> bool {
        matches!(self, Self::Slugs(_))
    }

    fn separator(&self) -> &'static str {
        match self {
            Self::Slugs(_) => SLUG_SEPARATOR,
            Self::Names(_) => NAME_SEPARATOR,
        }
    }
}

fn split_segments(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

impl fmt::Display for Breadcrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join(self.separator()))
    }
}

impl Serialize for Breadcrumbs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Serde adapter for `Option<Breadcrumbs>` carried as an optional string.
///
/// `null`, a missing field and `""` all map to `None`.
pub mod wire {
    use super::Breadcrumbs;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Breadcrumbs>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(crumbs) => serializer.collect_str(crumbs),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Breadcrumbs>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Breadcrumbs::parse))
    }
}

impl<'de> Deserialize<'de> for Breadcrumbs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Breadcrumbs::parse(&raw).ok_or_else(|| serde::de::Error::custom("empty breadcrumbs"))
    }
}
