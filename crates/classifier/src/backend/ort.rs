use super::ClassifierBackend;
use crate::errors::ClassifierError;
use ndarray::{Array4, ArrayD};
use ort::{
    session::{Session, builder::GraphOptimizationLevel},
    value::TensorRef,
};
use std::path::Path;

pub struct OrtBackend {
    session: Session,
    input_name: String,
    output_name: String,
}

fn load_err(path: &str, message: String) -> ClassifierError {
    ClassifierError::Load {
        what: "model",
        path: Path::new(path).to_path_buf(),
        message,
    }
}

fn infer_err(e: ort::Error) -> ClassifierError {
    ClassifierError::Inference {
        message: e.to_string(),
    }
}

fn build_session(path: &str) -> Result<Session, ort::Error> {
    // Initialize ORT environment (idempotent)
    let _ = ort::init().commit();

    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(4)?
        .commit_from_file(path)
}

impl ClassifierBackend for OrtBackend {
    fn load_model(path: &str) -> Result<Self, ClassifierError> {
        tracing::info!("Initializing ONNX Runtime with CPU execution provider");

        let session = build_session(path).map_err(|e| load_err(path, e.to_string()))?;

        // Exported graphs carry their own tensor names; take the first
        // input and output rather than hardcoding them.
        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .ok_or_else(|| load_err(path, "model declares no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| load_err(path, "model declares no outputs".to_string()))?;

        tracing::info!(
            input = %input_name,
            output = %output_name,
            "Model loaded from {}",
            path
        );

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }

    fn infer(&mut self, batch: &Array4<f32>) -> Result<ArrayD<f32>, ClassifierError> {
        let input = TensorRef::from_array_view(batch.view()).map_err(infer_err)?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(infer_err)?;

        let scores = outputs[self.output_name.as_str()]
            .try_extract_array::<f32>()
            .map_err(infer_err)?;

        Ok(scores.into_owned())
    }
}
