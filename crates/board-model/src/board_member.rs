use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::serialization::null_as_default;

/// Membership of a user on a board.
///
/// The scheme flags are plain data; deciding what they permit is up to the
/// access-control layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardMember {
    #[serde(deserialize_with = "null_as_default")]
    pub board_id: BoardId,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Free-form, whitespace separated.
    #[serde(deserialize_with = "null_as_default")]
    pub roles: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scheme_admin: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub scheme_editor: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub scheme_commenter: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub scheme_viewer: bool,
}

impl BoardMember {
    pub fn new(board_id: BoardId, user_id: String) -> Self {
        Self {
            board_id,
            user_id,
            ..Default::default()
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_has_no_flags() {
        let member = BoardMember::new("board-1".to_string(), "user-1".to_string());
        assert_eq!(member.board_id, "board-1");
        assert_eq!(member.user_id, "user-1");
        assert!(member.roles.is_empty());
        assert!(!member.scheme_admin);
        assert!(!member.scheme_editor);
        assert!(!member.scheme_commenter);
        assert!(!member.scheme_viewer);
    }

    #[test]
    fn test_roles_split() {
        let mut member = BoardMember::new("b".to_string(), "u".to_string());
        member.roles = " system_admin  custom_role ".to_string();
        assert_eq!(
            member.roles().collect::<Vec<_>>(),
            vec!["system_admin", "custom_role"]
        );
    }
}
