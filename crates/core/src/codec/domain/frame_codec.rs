use crate::shared::error::CodecError;
use crate::shared::frame::Frame;

/// Converts between caller byte buffers and pixel frames.
pub trait FrameCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Frame, CodecError>;

    fn encode(&self, frame: &Frame) -> Result<Vec<u8>, CodecError>;
}
