// Services layer - Pure catalog presentation logic
pub mod presentation;

pub use presentation::{
    build_view, filter_by_search, group_by_category, page_count, paginate, render, GroupedItems,
    FALLBACK_CATEGORY, PAGE_SIZE,
};
