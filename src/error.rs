use thiserror::Error;

/// Top-level error type for zone geometry queries.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to the shape of geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`ZoneError`].
pub type Result<T> = std::result::Result<T, ZoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_is_transparent() {
        let err: ZoneError = GeometryError::InvalidArgument("polygon needs 3 vertices".into()).into();
        assert_eq!(err.to_string(), "invalid argument: polygon needs 3 vertices");
    }
}
