use crate::model::Identity;

pub type DrawResult<T> = Result<T, DrawError>;

/// Failures local to a single draw call.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("node {node} has no labels")]
    MissingLabel { node: Identity },

    #[error("relationship {relationship} has no type")]
    MissingType { relationship: Identity },

    /// An edge was extracted before one of its endpoints was registered.
    #[error("relationship {relationship} references node {node} before it was registered")]
    UnregisteredEndpoint {
        relationship: Identity,
        node: Identity,
    },

    #[error("failed to serialize network data")]
    Json(#[from] serde_json::Error),
}
