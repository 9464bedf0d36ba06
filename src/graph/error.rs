//! Machine description errors.

use thiserror::Error;

/// A structural problem in a machine description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("State key '{key}' is empty or contains '.' or '#'")]
    InvalidKey { key: String },

    #[error("Duplicate child key '{key}' under '{parent}'")]
    DuplicateKey { parent: String, key: String },

    #[error("Compound state '{id}' has no initial state. Set .initial(key)")]
    MissingInitial { id: String },

    #[error("Initial state '{initial}' of '{id}' is not a child of it")]
    UnknownInitial { id: String, initial: String },

    #[error("Leaf state '{id}' cannot have child states")]
    UnexpectedChildren { id: String },

    #[error("Transition on '{event}' from '{source_id}' targets unknown state '{target}'")]
    UnknownTarget {
        source_id: String,
        event: String,
        target: String,
    },
}

/// Every problem found while validating a machine description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid machine description: {}", join_problems(.problems))]
pub struct InvalidDescription {
    pub problems: Vec<DescriptionError>,
}

fn join_problems(problems: &[DescriptionError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
