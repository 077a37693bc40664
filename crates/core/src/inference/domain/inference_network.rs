use ndarray::{Array4, ArrayD};

use crate::shared::error::InferenceError;

/// Domain interface for a loaded neural network.
///
/// Handles are shared read-only after loading, hence `&self` and `Sync`.
/// Implementations whose engine cannot run concurrent passes must serialize
/// internally.
pub trait InferenceNetwork: Send + Sync {
    /// Short name used in logs and errors (e.g. `"detector"`).
    fn name(&self) -> &str;

    /// Runs one blocking forward pass on an NCHW blob.
    fn forward(&self, input: Array4<f32>) -> Result<ArrayD<f32>, InferenceError>;
}
