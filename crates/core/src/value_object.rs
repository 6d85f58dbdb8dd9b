//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two performances
/// of the same play to the same audience are the same performance as far as
/// billing is concerned. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Performance {
///     play_id: PlayId,
///     audience: u32,
/// }
///
/// impl ValueObject for Performance {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
