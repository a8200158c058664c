use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BoardError::Validation("empty-team-id".to_string());
        assert_eq!(err.to_string(), "Validation error: empty-team-id");

        let err = BoardError::NotFound("board.json".to_string());
        assert_eq!(err.to_string(), "Not found: board.json");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: BoardError = io.into();
        assert!(matches!(err, BoardError::Io(_)));
    }
}
