use std::sync::Mutex;

use ndarray::{Array4, ArrayD};

use crate::inference::domain::inference_network::InferenceNetwork;
use crate::shared::error::InferenceError;

/// Answers every forward pass with the same pre-computed output tensor.
///
/// Stands in for a real network when replaying recorded detector output or
/// exercising the pipeline without model files. Keeps the last input blob
/// so callers can inspect what was fed in.
pub struct ReplayNetwork {
    name: String,
    output: ArrayD<f32>,
    last_input: Mutex<Option<Array4<f32>>>,
    calls: Mutex<usize>,
}

impl ReplayNetwork {
    pub fn new(name: &str, output: ArrayD<f32>) -> Self {
        Self {
            name: name.to_string(),
            output,
            last_input: Mutex::new(None),
            calls: Mutex::new(0),
        }
    }

    /// Number of forward passes run so far.
    pub fn calls(&self) -> usize {
        self.calls.lock().map(|c| *c).unwrap_or(0)
    }

    /// The blob passed to the most recent forward pass.
    pub fn last_input(&self) -> Option<Array4<f32>> {
        self.last_input.lock().ok().and_then(|input| input.clone())
    }
}

impl InferenceNetwork for ReplayNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, input: Array4<f32>) -> Result<ArrayD<f32>, InferenceError> {
        let poisoned = || InferenceError::Poisoned {
            network: self.name.clone(),
        };
        *self.calls.lock().map_err(|_| poisoned())? += 1;
        *self.last_input.lock().map_err(|_| poisoned())? = Some(input);
        Ok(self.output.clone())
    }
}
