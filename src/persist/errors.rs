/// Errors from the local key-value backend.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "storage I/O error: {}", err),
            StorageError::Serialization(err) => write!(f, "storage serialization error: {}", err),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            StorageError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// Errors from the remote history mirror.
#[derive(Debug, Clone)]
pub enum MirrorError {
    Unavailable(String),
    OperationFailed(String),
}

impl std::fmt::Display for MirrorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MirrorError::Unavailable(msg) => write!(f, "mirror unavailable: {}", msg),
            MirrorError::OperationFailed(msg) => write!(f, "mirror operation failed: {}", msg),
        }
    }
}

impl std::error::Error for MirrorError {}
