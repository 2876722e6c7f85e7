use crate::errors::ClassifierError;
use ndarray::{ArrayD, ArrayViewD, Axis};
use serde::Serialize;

/// How the result is framed for display.
///
/// The deployed label set is binary; any label other than "recyclable"
/// (case-insensitive) counts as non-recyclable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Recyclable,
    NonRecyclable,
}

impl Disposition {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("recyclable") {
            Disposition::Recyclable
        } else {
            Disposition::NonRecyclable
        }
    }
}

/// Result of classifying one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    /// Score of the winning class as a percentage in `[0, 100]`.
    pub confidence: f32,
    pub disposition: Disposition,
}

/// Map a raw score tensor to a prediction.
///
/// Accepts the model's `[1, num_classes]` output (the single batch row is
/// taken) or an already-squeezed `[num_classes]` vector. A vector whose
/// length differs from the label count is rejected before indexing.
pub fn interpret_scores(
    scores: &ArrayD<f32>,
    labels: &[String],
) -> Result<Prediction, ClassifierError> {
    let row = score_row(scores)?;

    if row.len() != labels.len() {
        return Err(ClassifierError::ShapeMismatch {
            expected: labels.len(),
            got: row.len(),
        });
    }

    let (index, score) = argmax(&row);
    let label = labels[index].clone();

    Ok(Prediction {
        disposition: Disposition::from_label(&label),
        confidence: score * 100.0,
        label,
    })
}

fn score_row<'a>(scores: &'a ArrayD<f32>) -> Result<ArrayViewD<'a, f32>, ClassifierError> {
    match scores.ndim() {
        1 => Ok(scores.view()),
        2 if scores.shape()[0] == 1 => Ok(scores.index_axis(Axis(0), 0)),
        _ => Err(ClassifierError::Inference {
            message: format!("unexpected score tensor shape {:?}", scores.shape()),
        }),
    }
}

/// Index of the maximum score; ties resolve to the lowest index.
fn argmax(row: &ArrayViewD<f32>) -> (usize, f32) {
    let mut best_index = 0;
    let mut best_score = f32::NEG_INFINITY;

    for (i, &score) in row.iter().enumerate() {
        if score > best_score {
            best_index = i;
            best_score = score;
        }
    }

    (best_index, best_score)
}
