//! Display ordering for collections of content records.

use crate::record::Record;

/// Position given to anything without a usable numeric `order`.
pub const DEFAULT_ORDER: f64 = 999.0;

/// Something that can be placed in display order.
pub trait Ordered {
    fn order(&self) -> f64;
}

impl Ordered for Record {
    fn order(&self) -> f64 {
        parse_order(self.scalar("order"))
    }
}

/// Interpret a raw `order` value.
///
/// Missing, empty, non-numeric and non-finite values all map to
/// [`DEFAULT_ORDER`].
#[must_use]
pub fn parse_order(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(DEFAULT_ORDER)
}

/// Stable sort by ascending order. Ties keep their load order.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by(|a, b| a.order().total_cmp(&b.order()));
}
