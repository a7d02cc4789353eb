use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
    #[error("invalid value `{value}` for parameter `{key}`")]
    InvalidParam { key: String, value: String },
    #[error("snowflake variant {0} out of range")]
    SpriteVariant(usize),
}

pub type Result<T> = std::result::Result<T, CoreError>;
