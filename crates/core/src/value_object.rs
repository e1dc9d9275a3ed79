//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// the same value. Product conditions, visibilities and shop constraints are
/// value objects.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum ProductCondition { New, Used, Refurbished }
///
/// impl ValueObject for ProductCondition {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
