use crate::derived::SortKey;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIntent {
    /// User picked a column. Picking the active column again flips direction.
    Select(SortKey),
    /// Back to fetch order.
    Reset,
}

impl Intent for SortIntent {}
