/// The scalar an enum member is identified by in decoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing<'a> {
    Int(i64),
    Str(&'a str),
}

/// A closed set of members, each identified by a string or integer.
///
/// Implement this for enums read with
/// [`Navigator::enum_value`](crate::Navigator::enum_value). Return `None` for
/// any backing that names no member, including one of the wrong scalar kind.
///
/// ```
/// use value_accessor::{BackedEnum, Backing};
///
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl BackedEnum for Level {
///     fn try_from_backing(value: Backing<'_>) -> Option<Self> {
///         match value {
///             Backing::Str("low") => Some(Level::Low),
///             Backing::Str("high") => Some(Level::High),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait BackedEnum: Sized {
    fn try_from_backing(value: Backing<'_>) -> Option<Self>;
}
