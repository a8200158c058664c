pub mod board;
pub mod board_member;
pub mod board_type;
pub mod field_update;
pub mod patch;
pub mod serialization;
pub mod validation;

pub use board::{Board, BoardId, PropertyBag, PropertyMap};
pub use board_member::BoardMember;
pub use board_type::BoardType;
pub use field_update::FieldUpdate;
pub use patch::BoardPatch;
pub use serialization::{
    board_from_json, board_member_from_json, board_members_from_json, board_patch_from_json,
    boards_from_json, to_json, to_json_pretty, try_from_json,
};
pub use validation::{is_board_type_valid, InvalidBoardError};
