use std::path::PathBuf;

use thiserror::Error;

/// Failure to bring up a network. Callers should treat this as fatal at startup.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("failed to read {network} model from {path}: {source}")]
    Io {
        network: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("inference runtime rejected {network} model: {message}")]
    Runtime { network: String, message: String },
}

/// A forward pass that could not complete. Fatal for the current frame only.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("inference runtime error: {0}")]
    Runtime(#[from] ort::Error),
    #[error("{network} network produced no outputs")]
    NoOutput { network: String },
    #[error("{network} network produced shape {shape:?}, expected {expected}")]
    UnexpectedShape {
        network: String,
        shape: Vec<usize>,
        expected: &'static str,
    },
    #[error("{network} network lock poisoned")]
    Poisoned { network: String },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to decode frame: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode frame: {0}")]
    Encode(#[source] image::ImageError),
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGB")]
    Layout { len: usize, width: u32, height: u32 },
}

/// Everything that can drop a frame in [`crate::pipeline::frame_anonymizer::FrameAnonymizer::process_frame`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
