//! Sorting comparison logic
//!
//! Pure functions for comparing leads across the sortable columns.

use crate::api::Lead;
use crate::{SortKey, SortOrder};
use std::cmp::Ordering;

/// Compare two leads by the given column and direction
///
/// Name and company compare case-insensitively; created compares timestamps.
/// Equal keys return `Ordering::Equal` so a stable sort keeps input order.
pub fn compare_leads(a: &Lead, b: &Lead, key: SortKey, order: SortOrder) -> Ordering {
    let result = match key {
        SortKey::Score => a.score.cmp(&b.score),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Company => a.company.to_lowercase().cmp(&b.company.to_lowercase()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    };

    match order {
        SortOrder::Asc => result,
        SortOrder::Desc => result.reverse(),
    }
}

/// Column header activation: same key flips direction, a new key starts descending
///
/// # Examples
/// ```
/// use sellertui::{SortKey, SortOrder};
/// use sellertui::logic::sorting::toggle_sort;
///
/// assert_eq!(
///     toggle_sort(SortKey::Score, SortOrder::Desc, SortKey::Score),
///     (SortKey::Score, SortOrder::Asc)
/// );
/// assert_eq!(
///     toggle_sort(SortKey::Score, SortOrder::Asc, SortKey::Name),
///     (SortKey::Name, SortOrder::Desc)
/// );
/// ```
pub fn toggle_sort(current: SortKey, order: SortOrder, selected: SortKey) -> (SortKey, SortOrder) {
    if current == selected {
        (current, order.flipped())
    } else {
        (selected, SortOrder::Desc)
    }
}
