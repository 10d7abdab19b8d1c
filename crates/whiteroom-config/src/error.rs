use std::path::PathBuf;

/// Why a settings file could not be loaded or stored.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid RON for its type.
    #[error("malformed {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot encode settings as RON: {0}")]
    Encode(#[from] ron::Error),

    /// The scene table parsed but describes an impossible layout.
    #[error("invalid scene: {0}")]
    InvalidScene(String),
}
