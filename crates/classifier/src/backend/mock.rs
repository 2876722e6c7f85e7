use super::ClassifierBackend;
use crate::errors::ClassifierError;
use ndarray::{Array4, ArrayD, IxDyn};

/// Backend returning a fixed score vector regardless of input.
///
/// Stands in for the model artifact in tests and local runs without the
/// real artifact on disk.
pub struct MockBackend {
    scores: Vec<f32>,
}

impl MockBackend {
    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self { scores }
    }
}

impl ClassifierBackend for MockBackend {
    fn load_model(_path: &str) -> Result<Self, ClassifierError> {
        Ok(Self::with_scores(vec![0.9, 0.1]))
    }

    fn infer(&mut self, _batch: &Array4<f32>) -> Result<ArrayD<f32>, ClassifierError> {
        ArrayD::from_shape_vec(IxDyn(&[1, self.scores.len()]), self.scores.clone()).map_err(|e| {
            ClassifierError::Inference {
                message: e.to_string(),
            }
        })
    }

    fn output_width(&self) -> Option<usize> {
        Some(self.scores.len())
    }
}
