use board_core::BoardError;
use thiserror::Error;

use crate::{Board, BoardPatch, BoardType};

/// Why a board or a patch is structurally invalid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("empty-team-id")]
    EmptyTeamId,

    #[error("invalid-board-type")]
    InvalidBoardType,
}

impl From<InvalidBoardError> for BoardError {
    fn from(err: InvalidBoardError) -> Self {
        BoardError::Validation(err.to_string())
    }
}

pub fn is_board_type_valid(board_type: &BoardType) -> bool {
    matches!(board_type, BoardType::Open | BoardType::Private)
}

impl Board {
    /// Checks the team id, then the type. Nothing else is constrained.
    pub fn is_valid(&self) -> Result<(), InvalidBoardError> {
        if self.team_id.is_empty() {
            return Err(InvalidBoardError::EmptyTeamId);
        }

        if !is_board_type_valid(&self.board_type) {
            return Err(InvalidBoardError::InvalidBoardType);
        }
        Ok(())
    }
}

impl BoardPatch {
    pub fn is_valid(&self) -> Result<(), InvalidBoardError> {
        match self.board_type.as_set() {
            Some(board_type) if !is_board_type_valid(board_type) => {
                Err(InvalidBoardError::InvalidBoardType)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldUpdate;

    fn board(team_id: &str, board_type: BoardType) -> Board {
        Board {
            team_id: team_id.to_string(),
            board_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_board_type_validity() {
        assert!(is_board_type_valid(&BoardType::Open));
        assert!(is_board_type_valid(&BoardType::Private));
        assert!(!is_board_type_valid(&BoardType::Unknown("X".to_string())));
        assert!(!is_board_type_valid(&BoardType::default()));
    }

    #[test]
    fn test_valid_boards() {
        assert_eq!(board("team", BoardType::Open).is_valid(), Ok(()));
        assert_eq!(board("team", BoardType::Private).is_valid(), Ok(()));
    }

    #[test]
    fn test_empty_team_id_is_checked_first() {
        assert_eq!(
            board("", BoardType::Open).is_valid(),
            Err(InvalidBoardError::EmptyTeamId)
        );
        assert_eq!(
            board("", BoardType::Unknown("X".to_string())).is_valid(),
            Err(InvalidBoardError::EmptyTeamId)
        );
    }

    #[test]
    fn test_invalid_board_type() {
        assert_eq!(
            board("team", BoardType::Unknown("X".to_string())).is_valid(),
            Err(InvalidBoardError::InvalidBoardType)
        );
        assert_eq!(
            board("team", BoardType::default()).is_valid(),
            Err(InvalidBoardError::InvalidBoardType)
        );
    }

    #[test]
    fn test_other_fields_are_unconstrained() {
        let mut b = board("team", BoardType::Open);
        b.title = String::new();
        b.template_version = -1;
        b.delete_at = 1;
        assert_eq!(b.is_valid(), Ok(()));
    }

    #[test]
    fn test_patch_validity() {
        assert_eq!(BoardPatch::default().is_valid(), Ok(()));

        let patch = BoardPatch {
            board_type: FieldUpdate::Set(BoardType::Private),
            ..Default::default()
        };
        assert_eq!(patch.is_valid(), Ok(()));

        let patch = BoardPatch {
            board_type: FieldUpdate::Set(BoardType::Unknown("team".to_string())),
            title: FieldUpdate::Set(String::new()),
            ..Default::default()
        };
        assert_eq!(patch.is_valid(), Err(InvalidBoardError::InvalidBoardType));
    }

    #[test]
    fn test_error_messages_and_conversion() {
        assert_eq!(InvalidBoardError::EmptyTeamId.to_string(), "empty-team-id");
        assert_eq!(
            InvalidBoardError::InvalidBoardType.to_string(),
            "invalid-board-type"
        );

        let err: BoardError = InvalidBoardError::EmptyTeamId.into();
        assert!(matches!(err, BoardError::Validation(msg) if msg == "empty-team-id"));
    }
}
