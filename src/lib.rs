//! Typed, path-tracked access into decoded configuration and data documents.
//!
//! Wrap a decoded [`Value`] in a [`Navigator`] and read its entries with typed
//! getters. Failures carry the dotted path of the field that caused them.
//! Domain objects are built by [`Converter`]s collected in a
//! [`ConverterRegistry`].

pub mod converter;
mod error;
pub mod navigator;
pub mod value;

pub use converter::{Converter, ConverterRegistry};
pub use error::Error;
pub use navigator::{AccessError, BackedEnum, Backing, Navigator, Path, Segment};
pub use value::{Key, Map, Value};
