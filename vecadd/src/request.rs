use crate::backend::VectorAdd;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

pub const LENGTH_MISMATCH: &str = "Arrays must be of the same length";
pub const OUT_OF_RANGE: &str = "Out of range float values are not JSON compliant";

/// `{"array1": [...], "array2": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRequest {
    pub array1: Vec<f32>,
    pub array2: Vec<f32>,
}

/// Either `{"result": [...], "computation_mode": "CPU"}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddResponse {
    Computed { result: Vec<f32>, computation_mode: String },
    Failed { error: String },
}

impl AddResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, AddResponse::Failed { .. })
    }
}

/// Sums two equal-length arrays into a freshly zeroed output.
pub fn add_arrays(backend: &dyn VectorAdd, a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    if a.len() != b.len() {
        return Err(Error::invalid_input(LENGTH_MISMATCH));
    }

    let size = a.len();
    let mut c = vec![0.0f32; size];
    backend.add_vectors(a, b, &mut c, size)?;
    Ok(c)
}

pub fn handle_add(backend: &dyn VectorAdd, request: &AddRequest) -> AddResponse {
    debug!(
        "add request: {} + {} elements on {}",
        request.array1.len(),
        request.array2.len(),
        backend.mode()
    );

    match add_arrays(backend, &request.array1, &request.array2) {
        // JSON has no encoding for inf or NaN
        Ok(result) if result.iter().any(|x| !x.is_finite()) => AddResponse::Failed { error: OUT_OF_RANGE.to_string() },
        Ok(result) => AddResponse::Computed {
            result,
            computation_mode: backend.mode().to_string(),
        },
        Err(e) => AddResponse::Failed { error: e.message().to_string() },
    }
}
