//! Neural network backed by an ONNX Runtime session via `ort`.
//!
//! The detector is the res10 300×300 SSD and the embedder the OpenFace
//! nn4.small2 network, both exported to ONNX.

use std::path::Path;
use std::sync::Mutex;

use ndarray::{Array4, ArrayD};
use ort::session::builder::GraphOptimizationLevel;

use crate::inference::domain::inference_network::InferenceNetwork;
use crate::shared::error::{InferenceError, ModelLoadError};

/// An ort session behind a mutex.
///
/// `Session::run` needs exclusive access, so forward passes on one network
/// are serialized; separate networks run independently.
pub struct OnnxNetwork {
    name: String,
    session: Mutex<ort::session::Session>,
}

impl OnnxNetwork {
    /// Builds a session from in-memory ONNX model bytes.
    pub fn from_memory(name: &str, model: &[u8]) -> Result<Self, ModelLoadError> {
        let intra_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let session = ort::session::Session::builder()
            .map_err(|e| runtime_error(name, e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| runtime_error(name, e))?
            .with_intra_threads(intra_threads)
            .map_err(|e| runtime_error(name, e))?
            .with_execution_providers(platform_execution_providers())
            .map_err(|e| runtime_error(name, e))?
            .commit_from_memory(model)
            .map_err(|e| runtime_error(name, e))?;

        log::info!(
            "Loaded {name} network ({} bytes, {intra_threads} intra-op threads)",
            model.len()
        );
        Ok(Self {
            name: name.to_string(),
            session: Mutex::new(session),
        })
    }

    /// Reads an ONNX model file and builds a session from it.
    pub fn from_file(name: &str, path: &Path) -> Result<Self, ModelLoadError> {
        let model = std::fs::read(path).map_err(|source| ModelLoadError::Io {
            network: name.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_memory(name, &model)
    }
}

impl InferenceNetwork for OnnxNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, input: Array4<f32>) -> Result<ArrayD<f32>, InferenceError> {
        let input_value = ort::value::Tensor::from_array(input)?;
        let mut session = self.session.lock().map_err(|_| InferenceError::Poisoned {
            network: self.name.clone(),
        })?;
        let outputs = session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err(InferenceError::NoOutput {
                network: self.name.clone(),
            });
        }
        let output = outputs[0].try_extract_array::<f32>()?;
        Ok(output.to_owned())
    }
}

fn runtime_error(network: &str, err: impl std::fmt::Display) -> ModelLoadError {
    ModelLoadError::Runtime {
        network: network.to_string(),
        message: err.to_string(),
    }
}

#[cfg(target_os = "macos")]
fn platform_execution_providers() -> Vec<ort::execution_providers::ExecutionProviderDispatch> {
    vec![ort::execution_providers::CoreMLExecutionProvider::default().build()]
}

#[cfg(target_os = "windows")]
fn platform_execution_providers() -> Vec<ort::execution_providers::ExecutionProviderDispatch> {
    vec![ort::execution_providers::DirectMLExecutionProvider::default().build()]
}

/// CPU only; ort falls back to it when no provider is registered.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_execution_providers() -> Vec<ort::execution_providers::ExecutionProviderDispatch> {
    Vec::new()
}
