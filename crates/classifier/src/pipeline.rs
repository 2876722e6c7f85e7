use crate::backend::ClassifierBackend;
use crate::errors::ClassifierError;
use crate::labels::load_labels;
use crate::postprocessing::{Prediction, interpret_scores};
use crate::preprocessing::preprocess;

/// A loaded model plus its ordered label list.
///
/// Both halves are immutable after load and shared read-only across
/// requests. The backend's forward pass takes `&mut self`, so callers
/// serving concurrently must put the classifier behind a lock.
pub struct Classifier<B: ClassifierBackend> {
    backend: B,
    labels: Vec<String>,
}

impl<B: ClassifierBackend> Classifier<B> {
    /// Load the model artifact and label file.
    ///
    /// When the graph declares a static output width, a label-count
    /// mismatch is rejected here, before any inference runs.
    pub fn load(model_path: &str, labels_path: &str) -> Result<Self, ClassifierError> {
        let backend = B::load_model(model_path)?;
        let labels = load_labels(labels_path)?;

        let classifier = Self::from_parts(backend, labels)?;
        tracing::info!(
            model_path,
            labels_path,
            classes = classifier.labels.len(),
            "Classifier ready"
        );

        Ok(classifier)
    }

    /// Assemble a classifier from an already-loaded backend and label
    /// list. This is the injection seam tests use to swap in fixtures.
    pub fn from_parts(backend: B, labels: Vec<String>) -> Result<Self, ClassifierError> {
        if let Some(width) = backend.output_width() {
            if width != labels.len() {
                return Err(ClassifierError::ShapeMismatch {
                    expected: labels.len(),
                    got: width,
                });
            }
        }

        Ok(Self { backend, labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Classify one uploaded image: decode, fit to the model input,
    /// normalize, forward pass, argmax. Pure with respect to the loaded
    /// model and labels; identical bytes produce identical predictions.
    pub fn classify(&mut self, bytes: &[u8]) -> Result<Prediction, ClassifierError> {
        let batch = preprocess(bytes)?;
        let scores = self.backend.infer(&batch)?;
        interpret_scores(&scores, &self.labels)
    }
}
