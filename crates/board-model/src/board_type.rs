use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility of a board. Serialized as the single-letter wire tag.
///
/// Tags outside the two known values are kept in `Unknown` so a decoded board
/// round-trips unchanged and validation can reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoardType {
    Open,
    Private,
    Unknown(String),
}

impl BoardType {
    pub const OPEN_TAG: &'static str = "O";
    pub const PRIVATE_TAG: &'static str = "P";

    pub fn as_str(&self) -> &str {
        match self {
            BoardType::Open => Self::OPEN_TAG,
            BoardType::Private => Self::PRIVATE_TAG,
            BoardType::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BoardType::Unknown(_))
    }
}

/// The empty tag, which is what a board decoded without a `type` carries.
impl Default for BoardType {
    fn default() -> Self {
        BoardType::Unknown(String::new())
    }
}

impl From<String> for BoardType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::OPEN_TAG => BoardType::Open,
            Self::PRIVATE_TAG => BoardType::Private,
            _ => BoardType::Unknown(tag),
        }
    }
}

impl From<BoardType> for String {
    fn from(board_type: BoardType) -> Self {
        match board_type {
            BoardType::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board type: {0}")]
pub struct ParseBoardTypeError(pub String);

impl FromStr for BoardType {
    type Err = ParseBoardTypeError;

    // Accepts the wire tags and the spelled-out names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "o" | "open" => Ok(BoardType::Open),
            "p" | "private" => Ok(BoardType::Private),
            _ => Err(ParseBoardTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags() {
        assert_eq!(serde_json::to_string(&BoardType::Open).unwrap(), "\"O\"");
        assert_eq!(serde_json::to_string(&BoardType::Private).unwrap(), "\"P\"");

        let parsed: BoardType = serde_json::from_str("\"P\"").unwrap();
        assert_eq!(parsed, BoardType::Private);
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let parsed: BoardType = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(parsed, BoardType::Unknown("X".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"X\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("O".parse::<BoardType>().unwrap(), BoardType::Open);
        assert_eq!("private".parse::<BoardType>().unwrap(), BoardType::Private);
        assert_eq!("Open".parse::<BoardType>().unwrap(), BoardType::Open);
        assert!("team".parse::<BoardType>().is_err());
    }

    #[test]
    fn test_default_is_empty_unknown() {
        assert_eq!(BoardType::default().as_str(), "");
        assert!(!BoardType::default().is_known());
    }
}
