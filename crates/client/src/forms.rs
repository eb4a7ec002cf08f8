//! Form payloads for item create/update, and the local fallback record
//! synthesized when the server cannot be reached.

use base64::Engine as _;
use chrono::Utc;
use trove_core::{Item, ItemId, ItemType};

/// One file picked by the user, held in memory until submission.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Encode as a `data:` URI for items that exist only client-side.
    pub fn to_data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.content_type)
    }
}

/// Create-form payload: everything required.
#[derive(Debug, Clone)]
pub struct ItemFormData {
    pub name: String,
    pub item_type: ItemType,
    pub description: String,
    pub cover_image: UploadFile,
    pub additional_images: Vec<UploadFile>,
}

impl ItemFormData {
    /// Build the record applied locally when the create call failed:
    /// fresh id, `data:`-embedded images, creation time "now".
    pub fn synthesize_local_item(&self) -> Item {
        Item {
            id: ItemId::new(),
            name: self.name.trim().to_string(),
            item_type: self.item_type,
            description: self.description.trim().to_string(),
            cover_image: self.cover_image.to_data_uri(),
            additional_images: self
                .additional_images
                .iter()
                .map(UploadFile::to_data_uri)
                .collect(),
            created_at: Utc::now(),
        }
    }
}

/// Update-form payload: every field optional; absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdateData {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub description: Option<String>,
    pub cover_image: Option<UploadFile>,
    pub additional_images: Option<Vec<UploadFile>>,
}
