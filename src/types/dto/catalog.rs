use serde::Serialize;

/// One rendered stat row (attribute requirement or scaling entry)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub label: String,
    pub value: f64,
}

/// Everything a card for one item displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCard {
    pub name: String,
    pub image: String,
    pub description: String,

    /// The five attribute requirements, in fixed attribute order
    pub requirements: Vec<StatLine>,

    /// Scaling rows; `None` renders no scaling section at all
    pub scaling: Option<Vec<StatLine>>,
}

/// One category heading with the cards visible on the current page.
/// A section can be empty when the page index lies past the category's items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    pub category: String,
    pub items: Vec<ItemCard>,
}

/// The fully derived, rendering-ready result of one browse interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub sections: Vec<CategorySection>,
    pub page_count: usize,
}

impl CatalogView {
    /// True when no item survived filtering and pagination
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|section| section.items.is_empty())
    }
}
