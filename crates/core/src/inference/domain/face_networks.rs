use std::path::Path;
use std::sync::Arc;

use crate::inference::domain::inference_network::InferenceNetwork;
use crate::inference::infrastructure::onnx_network::OnnxNetwork;
use crate::shared::error::ModelLoadError;

pub const DETECTOR_NETWORK: &str = "detector";
pub const EMBEDDER_NETWORK: &str = "embedder";

/// The two networks the pipeline needs, loaded once and shared by handle.
///
/// Cloning is cheap; every clone refers to the same loaded networks.
#[derive(Clone)]
pub struct FaceNetworks {
    pub detector: Arc<dyn InferenceNetwork>,
    pub embedder: Arc<dyn InferenceNetwork>,
}

impl FaceNetworks {
    pub fn new(detector: Arc<dyn InferenceNetwork>, embedder: Arc<dyn InferenceNetwork>) -> Self {
        Self { detector, embedder }
    }

    /// Loads both networks from in-memory ONNX model bytes.
    pub fn load(detector_model: &[u8], embedder_model: &[u8]) -> Result<Self, ModelLoadError> {
        let detector = OnnxNetwork::from_memory(DETECTOR_NETWORK, detector_model)?;
        let embedder = OnnxNetwork::from_memory(EMBEDDER_NETWORK, embedder_model)?;
        Ok(Self::new(Arc::new(detector), Arc::new(embedder)))
    }

    /// Loads both networks from ONNX model files.
    pub fn load_files(detector_path: &Path, embedder_path: &Path) -> Result<Self, ModelLoadError> {
        let detector = OnnxNetwork::from_file(DETECTOR_NETWORK, detector_path)?;
        let embedder = OnnxNetwork::from_file(EMBEDDER_NETWORK, embedder_path)?;
        Ok(Self::new(Arc::new(detector), Arc::new(embedder)))
    }
}
