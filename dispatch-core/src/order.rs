//! Customer orders awaiting dispatch.

use std::fmt;

use crate::Location;

/// Caller-supplied order identifier.
///
/// Identifiers are not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderId(String);

impl OrderId {
    /// Create an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An order placed by a customer at a location.
///
/// Arrival order is tracked by the [`OrderQueue`](crate::OrderQueue), not by
/// the order itself.
///
/// # Examples
/// ```
/// use dispatch_core::Order;
///
/// let order = Order::new("o-1", "Harbour");
/// assert_eq!(order.order_id.as_str(), "o-1");
/// assert_eq!(order.customer_location.as_str(), "Harbour");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Order {
    /// Identifier supplied by the caller.
    pub order_id: OrderId,
    /// Where the order must be delivered.
    pub customer_location: Location,
}

impl Order {
    /// Construct an order.
    pub fn new(order_id: impl Into<OrderId>, customer_location: impl Into<Location>) -> Self {
        Self {
            order_id: order_id.into(),
            customer_location: customer_location.into(),
        }
    }
}
