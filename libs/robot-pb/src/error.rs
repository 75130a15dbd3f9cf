/// Errors produced while decoding, checking or converting payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bytes do not follow the schema framing, or the discriminant
    /// disagrees with the member that is actually set.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The discriminant names a kind this build does not know.
    #[error("unknown variant discriminant {0}")]
    UnknownVariant(i32),

    #[error("dictionary nesting exceeds the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },

    /// Only reported when range validation is enabled.
    #[error("{field} out of range: {detail}")]
    FieldOutOfRange { field: &'static str, detail: String },

    /// A foreign value (JSON) has no variant counterpart.
    #[error("cannot represent as variant: {0}")]
    Unrepresentable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// The codec maps `prost`'s nesting guard to `RecursionLimitExceeded`
// before falling back to this.
impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        Self::MalformedEncoding(e.to_string())
    }
}
