use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}
