use std::path::PathBuf;

/// Errors raised when a piece cannot be dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search invoked on a board with no legal column")]
    NoLegalMove,
}

/// Errors that can occur while two agents play a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("agent {agent} selected illegal column {column}: {source}")]
    IllegalAction {
        agent: String,
        column: usize,
        source: MoveError,
    },

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::NoLegalMove.to_string(),
            "search invoked on a board with no legal column"
        );
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalAction {
            agent: "Random".to_string(),
            column: 3,
            source: MoveError::ColumnFull(3),
        };
        assert_eq!(
            err.to_string(),
            "agent Random selected illegal column 3: column 3 is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.depth must be >= 1"
        );
    }
}
