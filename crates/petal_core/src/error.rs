use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The underlying failure reason, without the error-kind prefix.
    pub fn reason(&self) -> String {
        match self {
            Error::ModelLoad(msg)
            | Error::Classification(msg)
            | Error::Generation(msg)
            | Error::InvalidImage(msg) => msg.clone(),
            Error::Serialization(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_message() {
        let err = Error::Classification("connection refused".to_string());
        assert_eq!(err.to_string(), "Classification error: connection refused");
        assert_eq!(err.reason(), "connection refused");
    }

    #[test]
    fn test_generation_error_reason() {
        let err = Error::Generation("quota exceeded".to_string());
        assert_eq!(err.reason(), "quota exceeded");
    }
}
