use classifier::{Classifier, ClassifierBackend};
use std::sync::{Arc, Mutex};

/// Shared application state.
///
/// The model and labels are never mutated after load; the lock exists
/// because the backend's forward pass takes `&mut self`, so concurrent
/// requests serialize on it.
pub struct AppState<B: ClassifierBackend> {
    pub classifier: Arc<Mutex<Classifier<B>>>,
}

impl<B: ClassifierBackend> AppState<B> {
    pub fn new(classifier: Classifier<B>) -> Self {
        Self {
            classifier: Arc::new(Mutex::new(classifier)),
        }
    }
}

// Manual impl: deriving Clone would require B: Clone
impl<B: ClassifierBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
        }
    }
}
