pub mod onnx_network;
pub mod replay_network;
