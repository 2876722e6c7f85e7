use crate::errors::ClassifierError;
use std::fs;
use std::path::Path;

/// Read the class list: one label per line, order matching the model's
/// output index order, leading/trailing whitespace stripped per line.
pub fn load_labels(path: &str) -> Result<Vec<String>, ClassifierError> {
    let raw = fs::read_to_string(path).map_err(|e| ClassifierError::Load {
        what: "labels",
        path: Path::new(path).to_path_buf(),
        message: e.to_string(),
    })?;

    let labels: Vec<String> = raw.lines().map(|line| line.trim().to_string()).collect();

    if labels.is_empty() {
        return Err(ClassifierError::Load {
            what: "labels",
            path: Path::new(path).to_path_buf(),
            message: "label file is empty".to_string(),
        });
    }

    Ok(labels)
}
