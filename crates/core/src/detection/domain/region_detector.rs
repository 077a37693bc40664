use crate::shared::error::InferenceError;
use crate::shared::frame::Frame;
use crate::shared::region::DetectionRegion;

/// Domain interface for face localization.
///
/// Returned regions are in the coordinate space of the frame passed in.
/// Zero detections is a valid result, not an error.
pub trait RegionDetector: Send + Sync {
    fn detect(&self, frame: &Frame) -> Result<Vec<DetectionRegion>, InferenceError>;
}
