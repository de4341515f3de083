//! Lead list filtering
//!
//! Pure functions deriving the visible lead sequence from the full collection
//! and the current filter preferences.

use crate::api::Lead;
use crate::model::{FilterState, StatusFilter};

/// Case-insensitive substring match against name or company
///
/// An empty query matches every lead.
///
/// # Examples
/// ```
/// use sellertui::logic::filter::matches_search_lower;
///
/// assert!(matches_search_lower("Acme Corp", "Jane Roe", "acme"));
/// assert!(matches_search_lower("Acme Corp", "Jane Roe", "roe"));
/// assert!(!matches_search_lower("Acme Corp", "Jane Roe", "globex"));
/// ```
pub fn matches_search_lower(company: &str, name: &str, query_lower: &str) -> bool {
    query_lower.is_empty()
        || name.to_lowercase().contains(query_lower)
        || company.to_lowercase().contains(query_lower)
}

pub fn matches_status(lead: &Lead, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => lead.status == status,
    }
}

/// Whether anything narrows the list (sorting alone does not)
pub fn has_active_filters(filters: &FilterState) -> bool {
    !filters.search.is_empty() || filters.status != StatusFilter::All
}

/// Indices into `leads` of the filtered-then-sorted view
///
/// Sorting is stable: leads comparing equal keep their relative order.
pub fn visible_indices(leads: &[Lead], filters: &FilterState) -> Vec<usize> {
    let query = filters.search.to_lowercase();

    let mut indices: Vec<usize> = leads
        .iter()
        .enumerate()
        .filter(|(_, lead)| matches_search_lower(&lead.company, &lead.name, &query))
        .filter(|(_, lead)| matches_status(lead, filters.status))
        .map(|(idx, _)| idx)
        .collect();

    indices.sort_by(|&a, &b| {
        crate::logic::sorting::compare_leads(
            &leads[a],
            &leads[b],
            filters.sort_by,
            filters.sort_order,
        )
    });

    indices
}
