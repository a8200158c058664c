use board_core::{AppConfig, BoardError, BoardResult};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Marker for reading from standard input instead of a file.
pub const STDIN: &str = "-";

pub struct CliContext {
    pub config: AppConfig,
    pub pretty: bool,
}

impl CliContext {
    pub fn load(config_path: Option<&str>, pretty: bool) -> BoardResult<Self> {
        let config = match config_path {
            Some(path) => AppConfig::load_from(Path::new(path))?,
            None => AppConfig::load(),
        };
        tracing::debug!("Loaded config: {:?}", config);

        Ok(Self {
            pretty: pretty || config.pretty_output,
            config,
        })
    }

    pub async fn read_input(&self, source: &str) -> BoardResult<Vec<u8>> {
        if source == STDIN {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            return Ok(buf);
        }

        match tokio::fs::read(source).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BoardError::NotFound(source.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn validate_before_apply(&self, skip: bool) -> bool {
        !skip && self.config.validate_before_apply
    }

    pub fn validate_after_apply(&self, skip: bool) -> bool {
        !skip && self.config.validate_after_apply
    }
}
