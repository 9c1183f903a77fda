use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Program #{index} has an empty '{field}' field")]
    EmptyFieldError { index: usize, field: String },

    #[error("Duplicate program title: {title}")]
    DuplicateTitleError { title: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogueError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogueError::EmptyFieldError { .. }
            | CatalogueError::DuplicateTitleError { .. }
            | CatalogueError::InvalidConfigValueError { .. } => 1,
            CatalogueError::ZipError(_)
            | CatalogueError::CsvError(_)
            | CatalogueError::IoError(_)
            | CatalogueError::SerializationError(_)
            | CatalogueError::Utf8Error(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = CatalogueError::DuplicateTitleError {
            title: "Physics".to_string(),
        };
        assert_eq!(err.exit_code(), 1);

        let err = CatalogueError::from(std::io::Error::other("disk full"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogueError::EmptyFieldError {
            index: 3,
            field: "faculty".to_string(),
        };
        assert_eq!(err.to_string(), "Program #3 has an empty 'faculty' field");
    }
}
