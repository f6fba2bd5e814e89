use thiserror::Error;

/// Shape violations found while decoding loose JSON records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record collection must be an array or null, found {found}")]
    NotACollection { found: &'static str },
    #[error("record {index} must be an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },
    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index} field `{field}` must be {expected}, found {found}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
