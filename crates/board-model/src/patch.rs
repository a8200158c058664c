use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::board::{card_property_id, Board, PropertyBag, PropertyMap};
use crate::board_type::BoardType;
use crate::field_update::FieldUpdate;
use crate::serialization::null_as_default;

/// A sparse changeset over a board.
///
/// Scalars are replaced only when `Set`. Each property collection is changed
/// through an updated/deleted pair: updated entries are upserted, deleted keys
/// are removed. A patch has no identity and is meant to be applied once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardPatch {
    #[serde(rename = "type")]
    pub board_type: FieldUpdate<BoardType>,
    pub title: FieldUpdate<String>,
    pub description: FieldUpdate<String>,
    pub icon: FieldUpdate<String>,
    pub show_description: FieldUpdate<bool>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_properties: PropertyMap,
    #[serde(deserialize_with = "null_as_default")]
    pub deleted_properties: Vec<String>,

    /// Upserted by each bag's own `id`.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_card_properties: Vec<PropertyBag>,
    #[serde(deserialize_with = "null_as_default")]
    pub deleted_card_properties: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_column_calculations: PropertyMap,
    #[serde(deserialize_with = "null_as_default")]
    pub deleted_column_calculations: Vec<String>,
}

impl BoardPatch {
    /// True when applying this patch would leave any board untouched.
    pub fn is_empty(&self) -> bool {
        self.board_type.is_no_change()
            && self.title.is_no_change()
            && self.description.is_no_change()
            && self.icon.is_no_change()
            && self.show_description.is_no_change()
            && self.updated_properties.is_empty()
            && self.deleted_properties.is_empty()
            && !self.touches_card_properties()
            && self.updated_column_calculations.is_empty()
            && self.deleted_column_calculations.is_empty()
    }

    fn touches_card_properties(&self) -> bool {
        !self.updated_card_properties.is_empty() || !self.deleted_card_properties.is_empty()
    }

    /// Merges this patch into `board` in place and hands the board back.
    ///
    /// Never fails: card-property bags without a string `id`, whether already
    /// on the board or in the patch, are dropped. A key both updated and
    /// deleted in `properties` or `column_calculations` ends up deleted; a
    /// card-property id both updated and deleted ends up with the updated
    /// bag, since deletes run before upserts there. Card properties come back
    /// in no particular order once they have been touched.
    pub fn apply(self, board: &mut Board) -> &mut Board {
        let touches_card_properties = self.touches_card_properties();

        self.board_type.apply_to(&mut board.board_type);
        self.title.apply_to(&mut board.title);
        self.description.apply_to(&mut board.description);
        self.icon.apply_to(&mut board.icon);
        self.show_description.apply_to(&mut board.show_description);

        merge_map(
            &mut board.properties,
            self.updated_properties,
            &self.deleted_properties,
        );

        if touches_card_properties {
            board.card_properties = merge_card_properties(
                std::mem::take(&mut board.card_properties),
                self.updated_card_properties,
                &self.deleted_card_properties,
            );
        }

        merge_map(
            &mut board.column_calculations,
            self.updated_column_calculations,
            &self.deleted_column_calculations,
        );

        tracing::trace!(
            board_id = %board.id,
            properties = board.properties.len(),
            card_properties = board.card_properties.len(),
            column_calculations = board.column_calculations.len(),
            "Applied board patch"
        );
        board
    }

    /// Like [`BoardPatch::apply`], leaving the patch usable afterwards.
    pub fn apply_ref<'b>(&self, board: &'b mut Board) -> &'b mut Board {
        self.clone().apply(board)
    }
}

/// Upsert pass, then delete pass.
fn merge_map(target: &mut PropertyMap, updated: PropertyMap, deleted: &[String]) {
    for (key, value) in updated {
        target.insert(key, value);
    }

    for key in deleted {
        target.remove(key);
    }
}

fn merge_card_properties(
    existing: Vec<PropertyBag>,
    updated: Vec<PropertyBag>,
    deleted: &[String],
) -> Vec<PropertyBag> {
    let mut by_id: HashMap<String, PropertyBag> = HashMap::with_capacity(existing.len());
    for bag in existing {
        match card_property_id(&bag).map(str::to_string) {
            Some(id) => {
                by_id.insert(id, bag);
            }
            None => tracing::debug!("Dropping card property without an id: {:?}", bag),
        }
    }

    for id in deleted {
        by_id.remove(id);
    }

    for bag in updated {
        match card_property_id(&bag).map(str::to_string) {
            Some(id) => {
                by_id.insert(id, bag);
            }
            None => {
                tracing::debug!("Skipping updated card property without an id: {:?}", bag)
            }
        }
    }

    by_id.into_values().collect()
}
