//! The built-in demo dataset shown when no real data is reachable.

use chrono::Utc;
use trove_core::{Item, ItemId, ItemType};

/// Build the three sample items.
///
/// Ids are generated per call; the dataset is rebuilt on each session start
/// and never persisted, so stability within one state value is all that is
/// required.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId::new(),
            name: "Classic White Shirt".to_string(),
            item_type: ItemType::Shirt,
            description: "A comfortable cotton white shirt perfect for office wear.".to_string(),
            cover_image:
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            additional_images: vec![
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=600&h=600&fit=crop&crop=center"
                    .to_string(),
                "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=600&h=600&fit=crop&crop=center"
                    .to_string(),
            ],
            created_at: Utc::now(),
        },
        Item {
            id: ItemId::new(),
            name: "Running Sneakers".to_string(),
            item_type: ItemType::Shoes,
            description: "Lightweight running shoes with excellent cushioning.".to_string(),
            cover_image:
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            additional_images: vec![
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=600&h=600&fit=crop&crop=center"
                    .to_string(),
                "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=600&h=600&fit=crop&crop=center"
                    .to_string(),
            ],
            created_at: Utc::now(),
        },
        Item {
            id: ItemId::new(),
            name: "Denim Jeans".to_string(),
            item_type: ItemType::Pant,
            description: "Classic blue denim jeans with a perfect fit.".to_string(),
            cover_image:
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=400&h=400&fit=crop&crop=center"
                    .to_string(),
            additional_images: vec![
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=600&h=600&fit=crop&crop=center"
                    .to_string(),
                "https://images.unsplash.com/photo-1506629905639-b8f5c88b3d3c?w=600&h=600&fit=crop&crop=center"
                    .to_string(),
            ],
            created_at: Utc::now(),
        },
    ]
}
