use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Model or label file missing, unreadable, or malformed. The files
    /// are static configuration, so this is never retried.
    #[error("failed to load {what} from `{path}`: {message}")]
    Load {
        what: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("input could not be decoded as an image: {0}")]
    InvalidImage(#[from] image::ImageError),

    /// Label count and model output width disagree. Indicates a
    /// misconfigured deployment, not a bad request.
    #[error("model produced {got} class scores but {expected} labels are configured")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("model execution failed: {message}")]
    Inference { message: String },
}
