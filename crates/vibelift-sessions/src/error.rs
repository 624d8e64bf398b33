use thiserror::Error;

/// Errors raised while persisting history.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session {0} already exists")]
    DuplicateId(String),

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Session {id} has a weight that is not a finite number")]
    NonFiniteWeight { id: String },

    #[error("Failed to read history from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("History file {path} is not valid: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write history to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while filling in an active workout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkoutError {
    #[error("No exercises selected")]
    NoExercises,

    #[error("Exercise index {0} out of range")]
    ExerciseOutOfRange(usize),

    #[error("Set index {set} out of range for exercise {exercise}")]
    SetOutOfRange { exercise: usize, set: usize },

    #[error("Exercise '{0}' selected more than once")]
    DuplicateExercise(String),

    #[error("Weight must be a finite number")]
    NonFiniteWeight,
}
