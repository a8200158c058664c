use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::board_type::BoardType;
use crate::serialization::null_as_default;

pub type BoardId = String;

/// String-keyed bag of arbitrary JSON values.
pub type PropertyMap = Map<String, Value>;

/// One entry of `card_properties`; identified by its own `id` key.
pub type PropertyBag = Map<String, Value>;

/// Key naming a card-property bag's identifier.
pub const CARD_PROPERTY_ID_KEY: &str = "id";

/// A board groups a set of content blocks and their layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Board {
    #[serde(deserialize_with = "null_as_default")]
    pub id: BoardId,
    #[serde(deserialize_with = "null_as_default")]
    pub team_id: String,
    /// Channel the board was created from; empty when there is none.
    #[serde(deserialize_with = "null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified_by: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub board_type: BoardType,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_description: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_template: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub template_version: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: PropertyMap,
    /// Order is not meaningful once a patch has touched it.
    #[serde(deserialize_with = "null_as_default")]
    pub card_properties: Vec<PropertyBag>,
    #[serde(deserialize_with = "null_as_default")]
    pub column_calculations: PropertyMap,
    /// Epoch milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub create_at: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub update_at: i64,
    /// Non-zero marks the board as soft-deleted.
    #[serde(deserialize_with = "null_as_default")]
    pub delete_at: i64,
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl Board {
    pub fn new(team_id: String, board_type: BoardType, created_by: String) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            team_id,
            board_type,
            modified_by: created_by.clone(),
            created_by,
            create_at: now,
            update_at: now,
            ..Default::default()
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.delete_at != 0
    }

    pub fn channel(&self) -> Option<&str> {
        if self.channel_id.is_empty() {
            None
        } else {
            Some(&self.channel_id)
        }
    }

    /// Records who changed the board last and when.
    pub fn touch(&mut self, modified_by: String) {
        self.modified_by = modified_by;
        self.update_at = now_millis();
    }

    pub fn card_property(&self, id: &str) -> Option<&PropertyBag> {
        self.card_properties
            .iter()
            .find(|bag| card_property_id(bag) == Some(id))
    }
}

/// The bag's own identifier, if it carries a string `id`.
pub fn card_property_id(bag: &PropertyBag) -> Option<&str> {
    bag.get(CARD_PROPERTY_ID_KEY).and_then(Value::as_str)
}
