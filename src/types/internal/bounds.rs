use std::fmt;

use thiserror::Error;

/// The five attributes an item can require a minimum score in.
///
/// The short names double as the query parameter names and the wire keys of
/// `requiredAttributes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Faith,
        Attribute::Arcane,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Dexterity => "Dex",
            Attribute::Intelligence => "Int",
            Attribute::Faith => "Fai",
            Attribute::Arcane => "Arc",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A provided bound value that is not a non-negative integer
#[derive(Debug, Error)]
#[error("invalid bound for {attribute}: {raw:?} is not a non-negative integer")]
pub struct BoundParseError {
    pub attribute: Attribute,
    pub raw: String,
}

/// Partial mapping from attribute to an optional upper threshold.
///
/// Each attribute is independently omittable. An absent attribute imposes no
/// restriction at all; a present bound of 0 restricts to items requiring
/// nothing in that attribute. Represented as one slot per attribute so filter
/// construction can iterate declaratively instead of branching per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBounds {
    bounds: [Option<u32>; 5],
}

impl AttributeBounds {
    pub fn get(&self, attribute: Attribute) -> Option<u32> {
        self.bounds[attribute as usize]
    }

    pub fn set(&mut self, attribute: Attribute, bound: Option<u32>) {
        self.bounds[attribute as usize] = bound;
    }

    /// Builder-style setter, mainly for tests and client code
    pub fn with(mut self, attribute: Attribute, bound: u32) -> Self {
        self.set(attribute, Some(bound));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.iter().all(Option::is_none)
    }

    /// Iterate over the bounds that are actually present, in attribute order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL
            .iter()
            .filter_map(move |attribute| self.get(*attribute).map(|bound| (*attribute, bound)))
    }

    /// Parse raw query-string values into bounds.
    ///
    /// A missing or blank value means the attribute is unbounded. Anything
    /// else must parse as a non-negative integer; malformed input is rejected
    /// here rather than forwarded to the store.
    pub fn parse(raw: [(Attribute, Option<&str>); 5]) -> Result<Self, BoundParseError> {
        let mut bounds = Self::default();
        for (attribute, value) in raw {
            let Some(value) = value else { continue };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let bound = trimmed.parse::<u32>().map_err(|_| BoundParseError {
                attribute,
                raw: value.to_string(),
            })?;
            bounds.set(attribute, Some(bound));
        }
        Ok(bounds)
    }
}
