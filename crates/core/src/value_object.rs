//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attributes. To "modify"
/// one, build a new value. In this workspace quantities (`Stock`), stock
/// policies (`StockType`) and persisted meta records (`StockMeta`) are value
/// objects; the `StockAccount` that holds them is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// enum Stock { Unlimited, Quantity(i64) }
///
/// impl ValueObject for Stock {}
///
/// assert_eq!(Stock::Quantity(3), Stock::Quantity(3));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
