//! Pure presentation pipeline: group, search, paginate, render.
//!
//! Every step is a total, side-effect-free function over in-memory records,
//! so the whole view is simply re-derived whenever the search term, page
//! index or query result changes.

use indexmap::IndexMap;

use crate::types::dto::catalog::{CatalogView, CategorySection, ItemCard, StatLine};
use crate::types::dto::items::ItemRecord;
use crate::types::internal::Attribute;

/// Cards shown per page within each category
pub const PAGE_SIZE: usize = 10;

/// Grouping key used for records with a missing or empty category
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Records partitioned by category, preserving arrival order within each
/// group and first-appearance order of the categories themselves
pub type GroupedItems = IndexMap<String, Vec<ItemRecord>>;

/// Partition records by category.
///
/// Every record lands in exactly one group; records without a usable
/// category land under [`FALLBACK_CATEGORY`].
pub fn group_by_category(items: Vec<ItemRecord>) -> GroupedItems {
    let mut groups = GroupedItems::new();
    for item in items {
        let category = match item.category.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => FALLBACK_CATEGORY.to_string(),
        };
        groups.entry(category).or_default().push(item);
    }
    groups
}

/// Keep only records whose name contains the term, case-insensitively.
///
/// The empty term keeps everything. Categories left with no matching record
/// are dropped from the map entirely rather than rendered as empty sections.
pub fn filter_by_search(groups: &GroupedItems, term: &str) -> GroupedItems {
    let needle = term.to_lowercase();
    groups
        .iter()
        .filter_map(|(category, items)| {
            let kept: Vec<ItemRecord> = items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some((category.clone(), kept))
            }
        })
        .collect()
}

/// Slice each category independently to the window
/// `[page * page_size, page * page_size + page_size)`.
///
/// A page index past a category's end yields an empty slice for that
/// category; the category key itself is kept.
pub fn paginate(groups: &GroupedItems, page: usize, page_size: usize) -> GroupedItems {
    let start = page.saturating_mul(page_size);
    groups
        .iter()
        .map(|(category, items)| {
            let window: Vec<ItemRecord> =
                items.iter().skip(start).take(page_size).cloned().collect();
            (category.clone(), window)
        })
        .collect()
}

/// Total page count for the pagination control, computed from the
/// search-filtered (not yet paginated) groups.
///
/// Pages count surviving categories, not items: `ceil(categories / size)`.
/// This mirrors the deployed behavior the frontend was built against, where
/// the pager advances through category groups as a whole.
pub fn page_count(filtered: &GroupedItems, page_size: usize) -> usize {
    filtered.len().div_ceil(page_size)
}

/// Emit the rendering-ready card structure for already grouped and
/// paginated records
pub fn render(groups: &GroupedItems) -> Vec<CategorySection> {
    groups
        .iter()
        .map(|(category, items)| CategorySection {
            category: category.clone(),
            items: items.iter().map(card_for).collect(),
        })
        .collect()
}

/// Derive the full view for one set of inputs in a single call
pub fn build_view(items: Vec<ItemRecord>, term: &str, page: usize) -> CatalogView {
    let groups = group_by_category(items);
    let filtered = filter_by_search(&groups, term);
    let page_count = page_count(&filtered, PAGE_SIZE);
    let paged = paginate(&filtered, page, PAGE_SIZE);
    CatalogView {
        sections: render(&paged),
        page_count,
    }
}

fn card_for(item: &ItemRecord) -> ItemCard {
    let requirements = Attribute::ALL
        .iter()
        .map(|attribute| StatLine {
            label: attribute.short_name().to_string(),
            value: f64::from(item.required_attributes.get(*attribute)),
        })
        .collect();

    let scaling = item.scales_with.as_ref().map(|map| {
        map.iter()
            .map(|(stat, value)| StatLine {
                label: stat.clone(),
                value: *value,
            })
            .collect()
    });

    ItemCard {
        name: item.name.clone(),
        image: item.image.clone(),
        description: item.description.clone(),
        requirements,
        scaling,
    }
}
