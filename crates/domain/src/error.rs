#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("conflict")]
    Conflict,
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ReadError> for UpdateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => UpdateError::NotFound,
            ReadError::Storage(storage) => UpdateError::Storage(storage),
            ReadError::Other(other) => UpdateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_error_from_read_error() {
        assert!(matches!(
            UpdateError::from(ReadError::NotFound),
            UpdateError::NotFound
        ));
        assert!(matches!(
            UpdateError::from(ReadError::Storage(StorageError::NoConnection)),
            UpdateError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            UpdateError::from(ReadError::Other("foo".into())),
            UpdateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(UpdateError::Conflict.to_string(), "conflict");
        assert_eq!(
            ReadError::Storage(StorageError::NoConnection).to_string(),
            "no connection"
        );
    }
}
