//! Locations inside nested values.
//!
//! [`PathSegment`] is the key carried by an `invalid_element_value` failure and
//! [`JsonPath`] is the flattened location of the deepest rejection.

use std::fmt::{self, Display};

use serde::Serialize;

/// A single step into a container.
///
/// Object fields and record entries are keyed by name, array and tuple
/// elements by index. Serializes as a bare string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A property name (e.g. `user`, `email`)
    Field(String),
    /// An element position (e.g. `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

/// A location in a nested value, such as `users[0].email`.
///
/// # Example
///
/// ```rust
/// use shapecheck::JsonPath;
///
/// let path = JsonPath::root().push_field("rows").push_index(2).push_field("id");
///
/// assert_eq!(path.to_string(), "rows[2].id");
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The location of the parsed value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        self.segments.iter().cloned().chain([segment]).collect()
    }

    /// True for the parsed value itself.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`JsonPath::is_root`].
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from the root outwards.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// The innermost segment; `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments
            .iter()
            .enumerate()
            .try_for_each(|(i, segment)| match segment {
                PathSegment::Field(_) if i > 0 => write!(f, ".{}", segment),
                _ => write!(f, "{}", segment),
            })
    }
}

impl FromIterator<PathSegment> for JsonPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
