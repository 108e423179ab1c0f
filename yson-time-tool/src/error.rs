use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] yson_time::ParseError),

    #[error("Invalid input {0:?}: expected RFC 3339, @<unix seconds>, now or absent")]
    InvalidInput(String),
}
