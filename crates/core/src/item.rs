//! The catalog item model and its partial-update patch.

use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::ItemId;

/// Upper bound on `additional_images` per item.
pub const MAX_ADDITIONAL_IMAGES: usize = 5;

/// Closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Shirt,
    Pant,
    Shoes,
    #[serde(rename = "Sports Gear")]
    SportsGear,
    Accessories,
    Other,
}

impl ItemType {
    /// All categories, in display order.
    pub const ALL: [ItemType; 6] = [
        ItemType::Shirt,
        ItemType::Pant,
        ItemType::Shoes,
        ItemType::SportsGear,
        ItemType::Accessories,
        ItemType::Other,
    ];

    /// The exact wire/display string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Shirt => "Shirt",
            ItemType::Pant => "Pant",
            ItemType::Shoes => "Shoes",
            ItemType::SportsGear => "Sports Gear",
            ItemType::Accessories => "Accessories",
            ItemType::Other => "Other",
        }
    }
}

impl core::fmt::Display for ItemType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Shirt" => Ok(ItemType::Shirt),
            "Pant" => Ok(ItemType::Pant),
            "Shoes" => Ok(ItemType::Shoes),
            "Sports Gear" => Ok(ItemType::SportsGear),
            "Accessories" => Ok(ItemType::Accessories),
            "Other" => Ok(ItemType::Other),
            other => Err(DomainError::validation(format!(
                "unknown item type: {other}"
            ))),
        }
    }
}

/// A catalog item.
///
/// Image references are either server-relative storage paths
/// (`/uploads/<file>`), absolute URLs, or `data:` URIs when an item exists
/// only client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub description: String,
    pub cover_image: String,
    pub additional_images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update of an [`Item`]: each field independently present-or-absent.
///
/// Omitted fields retain their prior values. `additional_images`, when
/// present, replaces the stored set wholesale (never merged).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub additional_images: Option<Vec<String>>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.item_type.is_none()
            && self.description.is_none()
            && self.cover_image.is_none()
            && self.additional_images.is_none()
    }

    /// Shallow-merge this patch over `item`, field by field.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(item_type) = self.item_type {
            item.item_type = item_type;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(cover_image) = self.cover_image {
            item.cover_image = cover_image;
        }
        if let Some(additional_images) = self.additional_images {
            item.additional_images = additional_images;
        }
    }
}
