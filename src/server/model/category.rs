//! Vehicle category vocabulary and validated tag sets.
//!
//! Catalog entities (brands, models, body types) are tagged with one or more of the
//! three vehicle categories. A `CategorySet` can only be built through validation, so
//! repositories taking one never have to re-check emptiness or unknown labels.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Closed category vocabulary shared by every taggable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleCategory {
    Auto,
    Moto,
    Truck,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [Self::Auto, Self::Moto, Self::Truck];

    /// Storage and wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Moto => "moto",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = CategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "auto" => Ok(Self::Auto),
            "moto" => Ok(Self::Moto),
            "truck" => Ok(Self::Truck),
            other => Err(CategoryError::Unknown(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("At least one category is required")]
    Empty,

    #[error("Unknown category '{0}', expected one of: auto, moto, truck")]
    Unknown(String),
}

/// Non-empty, duplicate-free list of categories in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet(Vec<VehicleCategory>);

impl CategorySet {
    /// Parses raw labels into a category set.
    ///
    /// Repeated labels collapse into one entry. Fails on an empty input or on the
    /// first label outside the vocabulary.
    pub fn parse<I, S>(labels: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories = labels
            .into_iter()
            .map(|label| label.as_ref().parse::<VehicleCategory>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_categories(categories)
    }

    /// Builds a set from already-typed categories.
    pub fn from_categories(
        categories: impl IntoIterator<Item = VehicleCategory>,
    ) -> Result<Self, CategoryError> {
        let mut unique = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }

        if unique.is_empty() {
            return Err(CategoryError::Empty);
        }

        Ok(Self(unique))
    }

    pub fn iter(&self) -> impl Iterator<Item = VehicleCategory> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, category: VehicleCategory) -> bool {
        self.0.contains(&category)
    }

    pub fn to_vec(&self) -> Vec<VehicleCategory> {
        self.0.clone()
    }

    /// Categories in vocabulary order, matching what is read back from storage.
    pub fn sorted(&self) -> Vec<VehicleCategory> {
        let mut categories = self.0.clone();
        categories.sort();
        categories
    }
}

/// Kind of catalog entity a tag row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggableKind {
    Brand,
    Model,
    BodyType,
}

impl TaggableKind {
    /// Value stored in `category_tag.entity_kind`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Model => "model",
            Self::BodyType => "body_type",
        }
    }
}

impl fmt::Display for TaggableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
