#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("at least one equipment option must be selected")]
    NoEquipment,
}

#[derive(thiserror::Error, Debug)]
pub enum ProgressError {
    #[error("at least one set must be logged")]
    NoSets,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_error_from_storage_error() {
        assert!(matches!(
            ProgressError::from(StorageError::InvalidData("foo".to_string())),
            ProgressError::Storage(StorageError::InvalidData(message)) if message == "foo"
        ));
        assert!(matches!(
            ProgressError::from(StorageError::Other("foo".into())),
            ProgressError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_plan_error_display() {
        assert_eq!(
            PlanError::NoEquipment.to_string(),
            "at least one equipment option must be selected"
        );
    }
}
