use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(status) => Some(*status),
            _ => None,
        }
    }

    /// Short reason shown next to a failed note.
    pub fn label(&self) -> String {
        match self {
            ApiError::Status(status) => status.to_string(),
            ApiError::Transport(_) => "network".to_string(),
            ApiError::Decode(_) => "bad response".to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("storage write failed: {0}")]
pub struct StorageError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ApiError::Status(500).label(), "500");
        assert_eq!(ApiError::Transport("refused".to_string()).label(), "network");
        assert_eq!(ApiError::Decode("eof".to_string()).label(), "bad response");
    }

    #[test]
    fn test_status() {
        assert_eq!(ApiError::Status(403).status(), Some(403));
        assert_eq!(ApiError::Transport("x".to_string()).status(), None);
    }
}
