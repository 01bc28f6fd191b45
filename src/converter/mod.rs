//! Conversion of decoded fragments into domain objects.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::navigator::Navigator;
use crate::value::{Key, Value};
use crate::Error;

/// Builds an [`Output`](Converter::Output) from the entry at `key`.
///
/// Implementations usually descend into `key` with
/// [`Navigator::descend_opt`] and read fields with the typed getters, so that
/// errors carry the full path of the offending field. Returning `Ok(None)`
/// reports that the entry denotes no object; whether that is acceptable is up
/// to the caller ([`Navigator::object`] rejects it, [`Navigator::object_opt`]
/// passes it through).
///
/// ```
/// use value_accessor::{Converter, ConverterRegistry, Error, Key, Navigator, Value};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// struct PointConverter;
///
/// impl Converter for PointConverter {
///     type Output = Point;
///
///     fn convert(&self, navigator: &Navigator<'_>, key: &Key) -> Result<Option<Point>, Error> {
///         let Some(point) = navigator.descend_opt([key]) else {
///             return Ok(None);
///         };
///         Ok(Some(Point {
///             x: point.int("x")?,
///             y: point.int("y")?,
///         }))
///     }
/// }
///
/// let registry = ConverterRegistry::new().with(PointConverter);
/// let root: Value = serde_json::json!({ "origin": { "x": 0, "y": 4 } }).into();
///
/// let origin: Point = registry.navigate(&root, "").object("origin")?;
/// assert_eq!(origin.y, 4);
/// # Ok::<(), Error>(())
/// ```
pub trait Converter: Send + Sync {
    type Output: 'static;

    fn convert(
        &self,
        navigator: &Navigator<'_>,
        key: &Key,
    ) -> Result<Option<Self::Output>, Error>;

    /// Human-readable name of the produced type, used in diagnostics.
    fn type_identifier(&self) -> &'static str {
        type_name::<Self::Output>()
    }
}

struct Entry {
    type_name: &'static str,
    /// Holds a `Box<dyn Converter<Output = T>>` for the `T` this entry is keyed by.
    converter: Box<dyn Any + Send + Sync>,
}

/// Converters indexed by the type they produce.
///
/// Build the registry once at startup, then share it by reference with every
/// navigator that needs it ([`Navigator::with_converters`] or
/// [`ConverterRegistry::navigate`]). Registering a second converter for the
/// same output type replaces the first.
#[derive(Default)]
#[must_use]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, Entry>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `converter`, replacing any converter for the same output type.
    pub fn register<C>(&mut self, converter: C) -> &mut Self
    where
        C: Converter + 'static,
    {
        let type_name = converter.type_identifier();
        let boxed: Box<dyn Converter<Output = C::Output>> = Box::new(converter);
        let entry = Entry {
            type_name,
            converter: Box::new(boxed),
        };

        if self
            .converters
            .insert(TypeId::of::<C::Output>(), entry)
            .is_some()
        {
            debug!(target_type = type_name, "replaced converter");
        } else {
            debug!(target_type = type_name, "registered converter");
        }
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<C>(mut self, converter: C) -> Self
    where
        C: Converter + 'static,
    {
        self.register(converter);
        self
    }

    /// Returns the converter producing `T`, if one is registered.
    pub fn get<T: 'static>(&self) -> Option<&dyn Converter<Output = T>> {
        self.converters
            .get(&TypeId::of::<T>())?
            .converter
            .downcast_ref::<Box<dyn Converter<Output = T>>>()
            .map(|converter| converter.as_ref())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Creates a root navigator over `root` with this registry attached.
    pub fn navigate<'a>(&'a self, root: &'a Value, name: impl Into<String>) -> Navigator<'a> {
        Navigator::from(root, name).with_converters(self)
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.converters.values().map(|e| e.type_name).collect();
        types.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("types", &types)
            .finish()
    }
}
