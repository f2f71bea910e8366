use thiserror::Error;

/// Errors raised at the engine's edges: the score store, the config file and
/// terminal setup. The simulation itself never fails.
#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("could not parse high score {value:?} stored for {key}")]
    Parse { key: String, value: String },
    #[error("invalid config: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
    #[error("could not determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, ArcadeError>;
