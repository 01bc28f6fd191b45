//! Typed, path-tracked access into decoded values.

mod backed;
mod error;
mod path;

use std::any::type_name;

use crate::converter::ConverterRegistry;
use crate::value::{Key, Map, Value};
use crate::Error;

pub use backed::{BackedEnum, Backing};
pub use error::AccessError;
pub use path::{Path, Segment};

const DOES_NOT_EXIST: &str = "Value does not exist";
const EXPECTED_ARRAY: &str = "Value expected to be an array";
const EXPECTED_MAP: &str = "Value expected to be a map";
const EXPECTED_CONTAINER: &str = "Value expected to be an array or map";
const EXPECTED_BOOLEAN: &str = "Value expected to be a boolean";
const EXPECTED_FLOAT: &str = "Value expected to be a float";
const EXPECTED_INTEGER: &str = "Value expected to be an integer";
const EXPECTED_STRING: &str = "Value expected to be a string";
const EXPECTED_ENUM_BACKING: &str = "Value expected to be a string or integer backed enum";
const EXPECTED_ENUM: &str = "Value expected to be an enum";

/// A position inside a decoded [`Value`], with typed getters for its entries.
///
/// Navigators borrow the value they were created from and never modify it.
/// Descending creates a new navigator whose path is extended by the key that
/// was followed, so every error names the exact field that failed:
///
/// ```
/// use value_accessor::{Navigator, Value};
///
/// let root: Value = serde_json::json!({
///     "server": { "host": "localhost", "port": "8080" }
/// })
/// .into();
///
/// let server = Navigator::from_root(&root).descend(["server"])?;
/// assert_eq!(server.string("host")?, "localhost");
///
/// let err = server.int("port").unwrap_err();
/// assert_eq!(err.to_string(), "Value expected to be an integer: [#.server.port]");
/// # Ok::<(), value_accessor::AccessError>(())
/// ```
///
/// A present `null` is treated the same as a missing key: required getters
/// fail with "Value does not exist" and `_opt` getters return `None`. The
/// `_opt` getters still fail when a value is present but of the wrong kind.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    root: &'a Value,
    path: Path,
    converters: Option<&'a ConverterRegistry>,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator at the root of `root`, with path `#<name>`.
    ///
    /// No converters are attached; see [`with_converters`](Self::with_converters).
    pub fn from(root: &'a Value, name: impl Into<String>) -> Self {
        Self {
            root,
            path: Path::root(name),
            converters: None,
        }
    }

    /// Creates an unnamed root navigator, with path `#`.
    pub fn from_root(root: &'a Value) -> Self {
        Self::from(root, "")
    }

    /// Attaches the registry used by [`object`](Self::object) and
    /// [`object_opt`](Self::object_opt). Navigators created from this one
    /// inherit it.
    pub fn with_converters(mut self, converters: &'a ConverterRegistry) -> Self {
        self.converters = Some(converters);
        self
    }

    /// The container this navigator is positioned on.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn converters(&self) -> Option<&'a ConverterRegistry> {
        self.converters
    }

    /// Builds a data error for `key` relative to the current position.
    pub fn error(&self, message: impl Into<String>, key: impl Into<Key>) -> AccessError {
        AccessError::new(message, self.path.join(key))
    }

    /// Returns the value at `key`, or `None` if it is missing or null.
    pub fn raw_opt(&self, key: impl Into<Key>) -> Option<&'a Value> {
        self.lookup(&key.into())
    }

    /// Returns the value at `key`, failing if it is missing or null.
    pub fn raw(&self, key: impl Into<Key>) -> Result<&'a Value, AccessError> {
        let key = key.into();
        self.lookup(&key).ok_or_else(|| self.error(DOES_NOT_EXIST, key))
    }

    pub fn array(&self, key: impl Into<Key>) -> Result<&'a [Value], AccessError> {
        self.expect(key.into(), EXPECTED_ARRAY, Value::as_array)
    }

    pub fn array_opt(&self, key: impl Into<Key>) -> Result<Option<&'a [Value]>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_ARRAY, Value::as_array)
    }

    pub fn map(&self, key: impl Into<Key>) -> Result<&'a Map, AccessError> {
        self.expect(key.into(), EXPECTED_MAP, Value::as_map)
    }

    pub fn map_opt(&self, key: impl Into<Key>) -> Result<Option<&'a Map>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_MAP, Value::as_map)
    }

    /// Returns the array or map at `key`.
    ///
    /// This is the container [`descend`](Self::descend) follows; [`array`](Self::array)
    /// and [`map`](Self::map) accept only one of the two.
    pub fn container(&self, key: impl Into<Key>) -> Result<&'a Value, AccessError> {
        self.expect(key.into(), EXPECTED_CONTAINER, as_container)
    }

    pub fn container_opt(&self, key: impl Into<Key>) -> Result<Option<&'a Value>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_CONTAINER, as_container)
    }

    pub fn boolean(&self, key: impl Into<Key>) -> Result<bool, AccessError> {
        self.expect(key.into(), EXPECTED_BOOLEAN, Value::as_bool)
    }

    pub fn boolean_opt(&self, key: impl Into<Key>) -> Result<Option<bool>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_BOOLEAN, Value::as_bool)
    }

    /// Integers are not accepted as floats.
    pub fn float(&self, key: impl Into<Key>) -> Result<f64, AccessError> {
        self.expect(key.into(), EXPECTED_FLOAT, Value::as_float)
    }

    pub fn float_opt(&self, key: impl Into<Key>) -> Result<Option<f64>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_FLOAT, Value::as_float)
    }

    pub fn int(&self, key: impl Into<Key>) -> Result<i64, AccessError> {
        self.expect(key.into(), EXPECTED_INTEGER, Value::as_integer)
    }

    pub fn int_opt(&self, key: impl Into<Key>) -> Result<Option<i64>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_INTEGER, Value::as_integer)
    }

    pub fn string(&self, key: impl Into<Key>) -> Result<&'a str, AccessError> {
        self.expect(key.into(), EXPECTED_STRING, Value::as_str)
    }

    pub fn string_opt(&self, key: impl Into<Key>) -> Result<Option<&'a str>, AccessError> {
        self.expect_opt(key.into(), EXPECTED_STRING, Value::as_str)
    }

    /// Resolves the string or integer at `key` to a member of `T`.
    pub fn enum_value<T: BackedEnum>(&self, key: impl Into<Key>) -> Result<T, AccessError> {
        let key = key.into();
        let value = self.raw(&key)?;
        self.resolve_enum(value, key)
    }

    pub fn enum_value_opt<T: BackedEnum>(
        &self,
        key: impl Into<Key>,
    ) -> Result<Option<T>, AccessError> {
        let key = key.into();
        match self.lookup(&key) {
            Some(value) => self.resolve_enum(value, key).map(Some),
            None => Ok(None),
        }
    }

    /// Builds a `T` from the entry at `key` with the converter registered for `T`.
    ///
    /// Fails with a data error if the converter reports no object.
    pub fn object<T: 'static>(&self, key: impl Into<Key>) -> Result<T, Error> {
        let key = key.into();
        match self.object_opt::<T>(&key)? {
            Some(object) => Ok(object),
            None => {
                let message = format!(
                    "Value expected to be an object convertible to {}",
                    type_name::<T>()
                );
                Err(self.error(message, key).into())
            }
        }
    }

    /// Like [`object`](Self::object), but passes through a converter's `None`.
    ///
    /// Fails with [`Error::UnknownConverter`] if no registry is attached or it
    /// has no converter for `T`.
    pub fn object_opt<T: 'static>(&self, key: impl Into<Key>) -> Result<Option<T>, Error> {
        let key = key.into();
        let converter = self
            .converters
            .and_then(ConverterRegistry::get::<T>)
            .ok_or_else(|| Error::UnknownConverter {
                type_name: type_name::<T>(),
            })?;

        tracing::trace!(
            target_type = converter.type_identifier(),
            path = %self.path,
            key = %key,
            "converting object"
        );
        converter.convert(self, &key)
    }

    /// Follows `keys` one container at a time.
    ///
    /// Every key must name an array or map. On failure the error names the
    /// first key that could not be followed. With no keys, returns a copy of
    /// this navigator.
    pub fn descend<I>(&self, keys: I) -> Result<Navigator<'a>, AccessError>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut current = self.clone();
        for key in keys {
            let key = key.into();
            let root = current.container(&key)?;
            current = current.child(root, key);
        }
        Ok(current)
    }

    /// Like [`descend`](Self::descend), but returns `None` as soon as a key is
    /// missing or does not name an array or map.
    pub fn descend_opt<I>(&self, keys: I) -> Option<Navigator<'a>>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut current = self.clone();
        for key in keys {
            let key = key.into();
            let root = current.lookup(&key).filter(|value| value.is_container())?;
            current = current.child(root, key);
        }
        Some(current)
    }

    /// Starts a new root at the current position, dropping the path so far.
    ///
    /// A navigator that is already at a root is returned unchanged, keeping
    /// its original name.
    pub fn detach(&self, name: impl Into<String>) -> Navigator<'a> {
        if self.path.is_root() {
            return self.clone();
        }
        Self {
            root: self.root,
            path: Path::root(name),
            converters: self.converters,
        }
    }

    /// Keys of the current container: indices for an array, names for a map.
    pub fn keys(&self) -> Vec<Key> {
        match self.root {
            Value::Array(items) => (0..items.len()).map(Key::Index).collect(),
            Value::Map(map) => map.keys().map(Key::from).collect(),
            _ => Vec::new(),
        }
    }

    fn lookup(&self, key: &Key) -> Option<&'a Value> {
        self.root.get(key).filter(|value| !value.is_null())
    }

    fn child(&self, root: &'a Value, key: Key) -> Navigator<'a> {
        Self {
            root,
            path: self.path.join(key),
            converters: self.converters,
        }
    }

    fn expect<T>(
        &self,
        key: Key,
        message: &str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, AccessError> {
        let value = self.raw(&key)?;
        extract(value).ok_or_else(|| self.error(message, key))
    }

    fn expect_opt<T>(
        &self,
        key: Key,
        message: &str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, AccessError> {
        match self.lookup(&key) {
            Some(value) => extract(value)
                .map(Some)
                .ok_or_else(|| self.error(message, key)),
            None => Ok(None),
        }
    }

    fn resolve_enum<T: BackedEnum>(&self, value: &Value, key: Key) -> Result<T, AccessError> {
        let backing = match value {
            Value::Integer(i) => Backing::Int(*i),
            Value::String(s) => Backing::Str(s),
            _ => return Err(self.error(EXPECTED_ENUM_BACKING, key)),
        };
        T::try_from_backing(backing).ok_or_else(|| self.error(EXPECTED_ENUM, key))
    }
}

fn as_container(value: &Value) -> Option<&Value> {
    value.is_container().then_some(value)
}

/// Navigators are equal when they point at equal values along equal paths.
impl PartialEq for Navigator<'_> {
    fn eq(&self, other: &Self) -> bool {
        let same_root = std::ptr::eq(self.root, other.root) || self.root == other.root;
        let same_converters = match (self.converters, other.converters) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_root && same_converters && self.path == other.path
    }
}
