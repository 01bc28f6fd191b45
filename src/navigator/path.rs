//! Location of a navigator inside the structure it was created from.

use std::fmt;

use crate::value::Key;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The root marker, displayed as `#` followed by the root's name.
    Root(String),
    Key(Key),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root(name) => write!(f, "#{name}"),
            Segment::Key(key) => write!(f, "{key}"),
        }
    }
}

/// The sequence of keys leading from the root to the current position.
///
/// The first segment is always [`Segment::Root`]. Paths only grow through
/// [`Path::join`], which leaves the original untouched, so every navigator
/// keeps the path it was created with.
///
/// Displays as its segments joined by `.`, e.g. `#config.servers.0.port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates a path holding only the root marker.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Root(name.into())],
        }
    }

    /// Returns a new path with `key` appended.
    pub fn join(&self, key: impl Into<Key>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if the path consists of the root marker alone.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
