/// Core error type for the homework status bot.
///
/// Adapter crates map their transport-specific failures into these variants so
/// the poll loop can log and swallow them uniformly. Only the startup variants
/// (`ConfigMissing`, `Config`, `Io`) are allowed to end the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required environment variables: {}", .0.join(", "))]
    ConfigMissing(Vec<String>),

    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("homework API is unavailable: {0}")]
    ApiUnavailable(String),

    #[error("homework API answered with HTTP {0}")]
    InvalidHttpStatus(u16),

    #[error("homework API returned a malformed payload: {0}")]
    MalformedPayload(String),

    #[error("unexpected API response: {0}")]
    Schema(SchemaViolation),

    #[error("message delivery failed: {0}")]
    Delivery(String),
}

/// Ways an API payload can break the documented contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("response is not a mapping")]
    NotAMapping,

    #[error("response has no `homeworks` key")]
    MissingHomeworks,

    #[error("`homeworks` is not a sequence")]
    NotASequence,

    #[error("homework has no `homework_name`")]
    MissingName,

    #[error("homework has an unknown `status`")]
    UnknownStatus,
}

impl From<SchemaViolation> for Error {
    fn from(v: SchemaViolation) -> Self {
        Error::Schema(v)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
