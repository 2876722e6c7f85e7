use ndarray::{Array4, ArrayD};

use crate::errors::ClassifierError;

#[cfg(feature = "ort-backend")]
pub mod ort;

#[cfg(any(test, feature = "mock-backend"))]
pub mod mock;

/// A loaded classification model.
///
/// The pipeline only needs a forward pass from a normalized image batch
/// to per-class scores; everything runtime-specific lives behind this
/// trait so tests can swap in a fixture backend.
pub trait ClassifierBackend {
    fn load_model(path: &str) -> Result<Self, ClassifierError>
    where
        Self: Sized;

    /// Run inference on a `[1, H, W, 3]` image batch and return the raw
    /// score tensor, expected shape `[1, num_classes]`.
    fn infer(&mut self, batch: &Array4<f32>) -> Result<ArrayD<f32>, ClassifierError>;

    /// Number of classes in the model output, when the graph declares a
    /// static width. `None` defers the label-count check to the first
    /// forward pass.
    fn output_width(&self) -> Option<usize> {
        None
    }
}
