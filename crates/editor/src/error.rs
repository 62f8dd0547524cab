//! Error types for editor commands.

use thiserror::Error;

/// Result type for editor commands.
pub type EditResult<T = ()> = std::result::Result<T, EditorError>;

/// Reasons a command was rejected or had nothing to do.
///
/// No variant is fatal: every command that returns an error leaves the scene,
/// selection and history exactly as they were.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Referenced entity is not in the scene.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// Operation needs more selected entities.
    #[error("{operation} needs at least {required} selected entities, got {actual}")]
    ThresholdNotMet {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// Command needs a selection and nothing is selected.
    #[error("nothing selected")]
    NothingSelected,

    /// Payload patch does not match the entity kind.
    #[error("payload kind {patch} does not match entity kind {entity}")]
    KindMismatch {
        entity: &'static str,
        patch: &'static str,
    },

    /// Ungroup target is not a group.
    #[error("entity {0} is not a group")]
    InvalidGroupTarget(String),

    /// Attempt to delete the only remaining category.
    #[error("category {0} is the last remaining category")]
    LastCategory(String),

    /// Referenced category does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A category with this id already exists.
    #[error("category {0} already exists")]
    DuplicateCategory(String),

    /// Snapshot could not be decoded.
    #[error("malformed snapshot: {0}")]
    Deserialization(String),
}

impl EditorError {
    /// True for "nothing to do" conditions the UI should ignore silently.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            EditorError::UnknownEntity(_)
                | EditorError::ThresholdNotMet { .. }
                | EditorError::NothingSelected
                | EditorError::KindMismatch { .. }
                | EditorError::InvalidGroupTarget(_)
        )
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_classification() {
        assert!(EditorError::UnknownEntity("x".into()).is_silent());
        assert!(EditorError::ThresholdNotMet {
            operation: "align",
            required: 2,
            actual: 1
        }
        .is_silent());
        assert!(!EditorError::LastCategory("vip".into()).is_silent());
        assert!(!EditorError::Deserialization("eof".into()).is_silent());
    }

    #[test]
    fn test_threshold_message() {
        let err = EditorError::ThresholdNotMet {
            operation: "distribute",
            required: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "distribute needs at least 3 selected entities, got 2"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: EditorError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EditorError::Deserialization(_)));
    }
}
