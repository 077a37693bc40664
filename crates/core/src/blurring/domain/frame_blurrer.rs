use crate::shared::frame::Frame;
use crate::shared::region::ImageRegion;

/// Domain interface for anonymizing regions of a frame.
///
/// Implementations modify the frame in place, region by region in slice
/// order, and leave every pixel outside the regions untouched.
pub trait FrameBlurrer: Send + Sync {
    fn blur(&self, frame: &mut Frame, regions: &[ImageRegion]);
}
